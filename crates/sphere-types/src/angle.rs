use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A one-dimensional angle, stored in radians.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Angle {
    radians: f64,
}

impl Angle {
    pub const ZERO: Self = Self { radians: 0.0 };

    pub fn from_radians(radians: f64) -> Self {
        Self { radians }
    }

    pub fn from_degrees(degrees: f64) -> Self {
        Self {
            radians: degrees.to_radians(),
        }
    }

    pub fn radians(&self) -> f64 {
        self.radians
    }

    pub fn degrees(&self) -> f64 {
        self.radians.to_degrees()
    }

    pub fn abs(&self) -> Self {
        Self {
            radians: self.radians.abs(),
        }
    }

    pub fn sin(&self) -> f64 {
        self.radians.sin()
    }

    pub fn cos(&self) -> f64 {
        self.radians.cos()
    }

    pub fn tan(&self) -> f64 {
        self.radians.tan()
    }
}

impl Add for Angle {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self::from_radians(self.radians + rhs.radians)
    }
}

impl Sub for Angle {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_radians(self.radians - rhs.radians)
    }
}

impl Mul<f64> for Angle {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        Self::from_radians(self.radians * rhs)
    }
}

impl Mul<Angle> for f64 {
    type Output = Angle;
    fn mul(self, rhs: Angle) -> Self::Output {
        Angle::from_radians(self * rhs.radians)
    }
}

impl Neg for Angle {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self::from_radians(-self.radians)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.7}d", self.degrees())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_degree_radian_roundtrip() {
        let a = Angle::from_degrees(180.0);
        assert!((a.radians() - PI).abs() < 1e-15);
        assert!((a.degrees() - 180.0).abs() < 1e-12);
    }

    #[test]
    fn test_ordering() {
        assert!(Angle::from_degrees(1.0) < Angle::from_degrees(2.0));
        assert!(Angle::from_radians(-0.1) < Angle::ZERO);
    }

    #[test]
    fn test_arithmetic() {
        let a = Angle::from_radians(0.25) + Angle::from_radians(0.5);
        assert!((a.radians() - 0.75).abs() < 1e-15);
        let b = a - Angle::from_radians(0.75);
        assert!(b.radians().abs() < 1e-15);
        let c = Angle::from_radians(0.5) * 3.0;
        assert!((c.radians() - 1.5).abs() < 1e-15);
    }
}
