use serde::{Deserialize, Serialize};

use crate::vector::Vec3;

/// A right-handed orthonormal coordinate frame: three mutually
/// perpendicular unit vectors with `x × y = z`.
///
/// Used as the local coordinate system for drawing shapes in the tangent
/// plane at `z` and projecting them onto the sphere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub x: Vec3,
    pub y: Vec3,
    pub z: Vec3,
}

impl Frame {
    /// Assemble a frame from three axes. The caller guarantees the axes
    /// are orthonormal and right-handed; this is checked in debug builds.
    pub fn new(x: Vec3, y: Vec3, z: Vec3) -> Self {
        let frame = Self { x, y, z };
        debug_assert!(frame.is_orthonormal(1e-12));
        frame
    }

    /// The canonical frame aligned with the world axes.
    pub fn identity() -> Self {
        Self {
            x: Vec3::X,
            y: Vec3::Y,
            z: Vec3::Z,
        }
    }

    /// Derive a right-handed frame whose z-axis is the given unit vector.
    ///
    /// The x/y axes are chosen deterministically by crossing `z` with the
    /// world axis least aligned with it, so the cross product can never
    /// vanish.
    pub fn from_z_axis(z: Vec3) -> Self {
        let ax = z.x.abs();
        let ay = z.y.abs();
        let az = z.z.abs();
        let other = if ax <= ay && ax <= az {
            Vec3::X
        } else if ay <= az {
            Vec3::Y
        } else {
            Vec3::Z
        };
        let c = other.cross(&z);
        // |c| >= sqrt(2/3) for any unit z, so the division is safe.
        let x = c / c.norm();
        let y = z.cross(&x);
        Self::new(x, y, z)
    }

    /// Map frame-local coordinates to world coordinates.
    pub fn from_local(&self, local: Vec3) -> Vec3 {
        self.x * local.x + self.y * local.y + self.z * local.z
    }

    /// Map world coordinates to frame-local coordinates.
    pub fn to_local(&self, world: Vec3) -> Vec3 {
        Vec3::new(
            self.x.dot(&world),
            self.y.dot(&world),
            self.z.dot(&world),
        )
    }

    pub fn is_orthonormal(&self, tol: f64) -> bool {
        self.x.is_unit(tol)
            && self.y.is_unit(tol)
            && self.z.is_unit(tol)
            && self.x.dot(&self.y).abs() < tol
            && self.y.dot(&self.z).abs() < tol
            && self.z.dot(&self.x).abs() < tol
            && (self.x.cross(&self.y) - self.z).norm() < tol
    }
}
