use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::angle::Angle;
use crate::vector::Vec3;

/// A latitude/longitude pair. Latitude is in [-π/2, π/2], longitude in
/// [-π, π].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: Angle,
    pub lng: Angle,
}

impl LatLng {
    pub fn new(lat: Angle, lng: Angle) -> Self {
        Self { lat, lng }
    }

    pub fn from_degrees(lat: f64, lng: f64) -> Self {
        Self::new(Angle::from_degrees(lat), Angle::from_degrees(lng))
    }

    pub fn from_point(p: &Vec3) -> Self {
        Self {
            lat: Angle::from_radians(p.z.atan2((p.x * p.x + p.y * p.y).sqrt())),
            lng: Angle::from_radians(p.y.atan2(p.x)),
        }
    }

    pub fn to_point(&self) -> Vec3 {
        let (sin_lat, cos_lat) = (self.lat.sin(), self.lat.cos());
        let (sin_lng, cos_lng) = (self.lng.sin(), self.lng.cos());
        Vec3::new(cos_lat * cos_lng, cos_lat * sin_lng, sin_lat)
    }
}

/// A latitude/longitude rectangle: a latitude interval crossed with a
/// longitude interval. The longitude interval may wrap across the
/// antimeridian (when `lng_lo > lng_hi`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLngRect {
    pub lat_lo: Angle,
    pub lat_hi: Angle,
    pub lng_lo: Angle,
    pub lng_hi: Angle,
}

impl LatLngRect {
    pub fn new(lat_lo: Angle, lat_hi: Angle, lng_lo: Angle, lng_hi: Angle) -> Self {
        Self {
            lat_lo,
            lat_hi,
            lng_lo,
            lng_hi,
        }
    }

    pub fn from_degrees(lat_lo: f64, lat_hi: f64, lng_lo: f64, lng_hi: f64) -> Self {
        Self::new(
            Angle::from_degrees(lat_lo),
            Angle::from_degrees(lat_hi),
            Angle::from_degrees(lng_lo),
            Angle::from_degrees(lng_hi),
        )
    }

    /// Width of the longitude interval in radians, accounting for wrap.
    pub fn lng_span(&self) -> f64 {
        let span = self.lng_hi.radians() - self.lng_lo.radians();
        if span < 0.0 {
            span + 2.0 * PI
        } else {
            span
        }
    }

    pub fn contains(&self, ll: &LatLng) -> bool {
        if ll.lat < self.lat_lo || ll.lat > self.lat_hi {
            return false;
        }
        let rel = ll.lng.radians() - self.lng_lo.radians();
        let rel = rel.rem_euclid(2.0 * PI);
        rel <= self.lng_span() + 1e-15
    }
}
