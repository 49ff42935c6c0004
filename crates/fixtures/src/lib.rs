//! Test-support toolkit for spherical geometry.
//!
//! Supplies synthetic geometric fixtures — random points, frames, caps,
//! and stochastic Koch-style fractal boundaries — plus a verifier for
//! closest-distance query results.
//!
//! # Key components
//!
//! - [`FractalBuilder`] / [`fractal::Fractal`] — configurable fractal
//!   loop generator, the heart of the crate
//! - [`DeterministicRng`] — explicit, seeded randomness handle
//! - [`sampling`] — uniform random points, frames, caps, and samplers
//! - [`verify`] — two-way containment check for closest-distance results
//! - [`earth`] — Earth-radius unit conversions for test inputs
//!
//! All randomness flows through a caller-owned [`DeterministicRng`], so
//! results are reproducible from a seed and test-parallel use is safe by
//! construction.

pub mod earth;
pub mod error;
pub mod fractal;
pub mod rng;
pub mod sampling;
pub mod verify;

pub use error::FractalError;
pub use fractal::{Fractal, FractalBuilder};
pub use rng::DeterministicRng;
