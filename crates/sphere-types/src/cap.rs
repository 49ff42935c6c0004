use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::angle::Angle;
use crate::vector::Vec3;

/// A spherical cap: the region within a given angular radius of a center
/// point on the unit sphere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cap {
    center: Vec3,
    radius: Angle,
}

impl Cap {
    /// Cap from a unit-length center and an angular radius.
    pub fn new(center: Vec3, radius: Angle) -> Self {
        Self { center, radius }
    }

    /// Cap with the given area in steradians (at most `4π`).
    pub fn from_center_area(center: Vec3, area: f64) -> Self {
        // area = 2π(1 − cos r)
        let cos_r = (1.0 - area / (2.0 * PI)).clamp(-1.0, 1.0);
        Self {
            center,
            radius: Angle::from_radians(cos_r.acos()),
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> Angle {
        self.radius
    }

    /// Cap height: distance from the cap's flat base to its apex, in
    /// [0, 2].
    pub fn height(&self) -> f64 {
        1.0 - self.radius.cos()
    }

    pub fn area(&self) -> f64 {
        2.0 * PI * self.height()
    }

    pub fn contains(&self, p: &Vec3) -> bool {
        self.center.angle_to(p) <= self.radius.radians()
    }
}
