use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// A point in the 2D tangent plane.
///
/// Also used as a plane displacement: the fractal subdivision code treats
/// edge differences and perpendicular offsets as `Point2` values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    pub fn norm_squared(&self) -> f64 {
        self.dot(self)
    }

    pub fn distance_to(&self, other: &Self) -> f64 {
        (*self - *other).norm()
    }

    pub fn midpoint(&self, other: &Self) -> Self {
        Self {
            x: (self.x + other.x) * 0.5,
            y: (self.y + other.y) * 0.5,
        }
    }

    /// Rotate 90 degrees clockwise. For a counter-clockwise wound curve
    /// this turns an edge direction into the outward normal.
    pub fn rotated_cw(&self) -> Self {
        Self::new(self.y, -self.x)
    }

    /// Rotate 90 degrees counter-clockwise.
    pub fn rotated_ccw(&self) -> Self {
        Self::new(-self.y, self.x)
    }
}

impl Add for Point2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point2 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Point2> for f64 {
    type Output = Point2;
    fn mul(self, rhs: Point2) -> Self::Output {
        Point2::new(self * rhs.x, self * rhs.y)
    }
}

impl Neg for Point2 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Point2::new(1.0, 2.0);
        let b = Point2::new(4.0, 6.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_midpoint() {
        let m = Point2::new(0.0, 0.0).midpoint(&Point2::new(2.0, 4.0));
        assert!((m.x - 1.0).abs() < 1e-12);
        assert!((m.y - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_rotations_are_inverse() {
        let p = Point2::new(3.0, -2.0);
        let back = p.rotated_cw().rotated_ccw();
        assert!((back.x - p.x).abs() < 1e-12);
        assert!((back.y - p.y).abs() < 1e-12);
    }

    #[test]
    fn test_rotated_cw_is_perpendicular() {
        let p = Point2::new(3.0, 4.0);
        assert!(p.dot(&p.rotated_cw()).abs() < 1e-12);
        // (1, 0) rotated clockwise points along -y.
        let r = Point2::new(1.0, 0.0).rotated_cw();
        assert!((r.x).abs() < 1e-12);
        assert!((r.y + 1.0).abs() < 1e-12);
    }
}
