//! Earth-scale unit conversions for test inputs.
//!
//! Convenience only: lets tests phrase radii and areas in meters or
//! kilometers instead of radians and steradians.

use sphere_types::Angle;

/// The Earth's mean radius in kilometers (according to NASA).
pub const EARTH_RADIUS_KM: f64 = 6371.01;

/// Convert a distance on the Earth's surface to an angle.
pub fn km_to_angle(km: f64) -> Angle {
    Angle::from_radians(km / EARTH_RADIUS_KM)
}

/// Convert a distance on the Earth's surface to an angle.
pub fn meters_to_angle(meters: f64) -> Angle {
    km_to_angle(0.001 * meters)
}

/// Convert an area in steradians to square kilometers.
pub fn area_to_km2(steradians: f64) -> f64 {
    steradians * EARTH_RADIUS_KM * EARTH_RADIUS_KM
}

/// Convert an area in steradians to square meters.
pub fn area_to_meters2(steradians: f64) -> f64 {
    area_to_km2(steradians) * 1e6
}
