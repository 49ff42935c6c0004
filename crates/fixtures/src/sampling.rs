//! Random geometric fixtures: points, frames, caps, and area-uniform
//! samplers.
//!
//! Every function draws from a caller-owned [`DeterministicRng`], so a
//! fixed seed reproduces the same fixtures.

use std::f64::consts::PI;

use sphere_types::{Angle, Cap, Frame, LatLng, LatLngRect, Vec3};

use crate::rng::DeterministicRng;

/// A unit vector chosen uniformly over the sphere.
pub fn random_point(rng: &mut DeterministicRng) -> Vec3 {
    // Uniform height plus uniform longitude is area-uniform (Archimedes'
    // hat-box theorem).
    let z = rng.uniform_f64(-1.0, 1.0);
    let theta = rng.uniform_f64(0.0, 2.0 * PI);
    let r = (1.0 - z * z).max(0.0).sqrt();
    Vec3::new(r * theta.cos(), r * theta.sin(), z)
}

/// A right-handed orthonormal frame with a uniformly random z-axis and a
/// random rotation about it.
pub fn random_frame(rng: &mut DeterministicRng) -> Frame {
    let z = random_point(rng);
    random_frame_at(rng, z)
}

/// A right-handed orthonormal frame with the given unit z-axis and a
/// random rotation about it.
pub fn random_frame_at(rng: &mut DeterministicRng, z: Vec3) -> Frame {
    loop {
        // Rejects only the measure-zero draws (anti)parallel to z.
        if let Some(x) = z.cross(&random_point(rng)).normalized() {
            let y = z.cross(&x);
            return Frame::new(x, y, z);
        }
    }
}

/// A cap with a uniformly random axis whose area's logarithm is uniform
/// between the logarithms of the two given areas (in steradians).
///
/// The logarithm of the cap angle is then also approximately uniform.
pub fn random_cap(rng: &mut DeterministicRng, min_area: f64, max_area: f64) -> Cap {
    let area = min_area * (max_area / min_area).powf(rng.rand_f64());
    Cap::from_center_area(random_point(rng), area)
}

/// A point chosen uniformly with respect to area from the given cap.
pub fn sample_point_in_cap(rng: &mut DeterministicRng, cap: &Cap) -> Vec3 {
    // Uniform in cap height, uniform in the angle about the axis.
    let frame = Frame::from_z_axis(cap.center());
    let h = cap.height() * rng.rand_f64();
    let theta = rng.uniform_f64(0.0, 2.0 * PI);
    // Colatitude sine for a point at height 1 - h.
    let r = (h * (2.0 - h)).max(0.0).sqrt();
    frame.from_local(Vec3::new(r * theta.cos(), r * theta.sin(), 1.0 - h))
}

/// A point chosen uniformly with respect to area from the given
/// latitude/longitude rectangle.
pub fn sample_point_in_rect(rng: &mut DeterministicRng, rect: &LatLngRect) -> Vec3 {
    // Latitude must be sampled through its sine to be area-uniform.
    let sin_lo = rect.lat_lo.sin();
    let sin_hi = rect.lat_hi.sin();
    let lat = rng.uniform_f64(sin_lo, sin_hi).asin();
    let lng = rect.lng_lo.radians() + rng.rand_f64() * rect.lng_span();
    LatLng::new(Angle::from_radians(lat), Angle::from_radians(lng)).to_point()
}

/// Vertices of a regular polygon with `num_vertices` corners, all at
/// angular distance `radius` from `center`, wound counter-clockwise as
/// seen from outside the sphere.
pub fn regular_points(center: Vec3, radius: Angle, num_vertices: usize) -> Vec<Vec3> {
    let frame = Frame::from_z_axis(center);
    let r = radius.sin();
    let h = radius.cos();
    (0..num_vertices)
        .map(|i| {
            let theta = 2.0 * PI * i as f64 / num_vertices as f64;
            frame.from_local(Vec3::new(r * theta.cos(), r * theta.sin(), h))
        })
        .collect()
}
