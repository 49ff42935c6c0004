//! Geometry primitives for the spherical test-fixture toolkit.
//!
//! This crate supplies the value types the fixture generators consume:
//! a 2D tangent-plane point, a 3D vector, an angle, a right-handed
//! orthonormal frame, a closed polygonal loop on the unit sphere, a
//! spherical cap, and a latitude/longitude rectangle.
//!
//! All types are plain data with `serde` derives so fixtures can be
//! captured in golden files by downstream test suites.

pub mod angle;
pub mod cap;
pub mod frame;
pub mod latlng;
pub mod loop_;
pub mod point;
pub mod vector;

pub use angle::Angle;
pub use cap::Cap;
pub use frame::Frame;
pub use latlng::{LatLng, LatLngRect};
pub use loop_::{LoopError, SphereLoop};
pub use point::Point2;
pub use vector::Vec3;
