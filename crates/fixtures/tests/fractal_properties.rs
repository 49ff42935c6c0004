//! Property-based tests for the fractal generator using the `proptest`
//! crate.

use proptest::prelude::*;

use sphere_fixtures::rng::DeterministicRng;
use sphere_fixtures::FractalBuilder;
use sphere_types::{Angle, Frame, Vec3};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

/// Arbitrary valid fractal dimension, away from the open upper bound.
fn arb_dimension() -> impl Strategy<Value = f64> {
    1.0f64..1.95
}

/// Arbitrary nominal radius small enough for the tangent-plane
/// construction to stay well-conditioned.
fn arb_radius_degrees() -> impl Strategy<Value = f64> {
    1.0f64..40.0
}

fn arb_seed() -> impl Strategy<Value = u64> {
    any::<u64>()
}

fn build_fractal(dimension: f64, min_level: u32, max_level: u32) -> sphere_fixtures::Fractal {
    let mut b = FractalBuilder::new();
    b.set_max_level(max_level).unwrap();
    b.set_min_level(min_level).unwrap();
    b.set_fractal_dimension(dimension).unwrap();
    b.build().unwrap()
}

// ---------------------------------------------------------------------------
// 1. Derived constants: edge_fraction = 4^(-1/d) and the closure identity
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn derived_constants_satisfy_closure(d in arb_dimension()) {
        let f = build_fractal(d, 0, 0);
        let ef = f.edge_fraction();
        let of = f.offset_fraction();

        prop_assert!((ef - 4f64.powf(-1.0 / d)).abs() < 1e-15);
        prop_assert!(ef > 0.0 && ef < 1.0);

        // Four segments of length ef must connect the edge endpoints:
        // the middle segments span (1/2 - ef) horizontally and of
        // vertically, and must themselves have length ef.
        let half_span = 0.5 - ef;
        let closure = of * of + half_span * half_span - ef * ef;
        prop_assert!(closure.abs() < 1e-15, "closure residual {closure}");
    }
}

// ---------------------------------------------------------------------------
// 2. Vertex count: min_level == max_level == L gives exactly 3·4^L vertices
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn single_level_vertex_count(
        d in arb_dimension(),
        level in 0u32..4,
        seed in arb_seed(),
    ) {
        let f = build_fractal(d, level, level);
        let mut rng = DeterministicRng::new(seed);
        let l = f
            .make_loop(&mut rng, &Frame::identity(), Angle::from_degrees(10.0))
            .unwrap();
        prop_assert_eq!(l.num_vertices(), 3 * 4usize.pow(level));
    }
}

// ---------------------------------------------------------------------------
// 3. Determinism: equal seeds and configuration give bit-identical loops
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn loops_reproducible_from_seed(seed in arb_seed(), d in arb_dimension()) {
        let f = build_fractal(d, 1, 3);
        let frame = Frame::from_z_axis(Vec3::new(0.48, -0.6, 0.64));
        let radius = Angle::from_degrees(8.0);

        let mut rng_a = DeterministicRng::new(seed);
        let mut rng_b = DeterministicRng::new(seed);
        let a = f.make_loop(&mut rng_a, &frame, radius).unwrap();
        let b = f.make_loop(&mut rng_b, &frame, radius).unwrap();

        prop_assert_eq!(a.num_vertices(), b.num_vertices());
        for (va, vb) in a.vertices().iter().zip(b.vertices()) {
            prop_assert_eq!(va.x.to_bits(), vb.x.to_bits());
            prop_assert_eq!(va.y.to_bits(), vb.y.to_bits());
            prop_assert_eq!(va.z.to_bits(), vb.z.to_bits());
        }
    }
}

// ---------------------------------------------------------------------------
// 4. Radius bounds: every vertex stays within the advertised envelope
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn vertices_within_radius_bounds(
        d in 1.02f64..1.9,
        seed in arb_seed(),
        radius_deg in arb_radius_degrees(),
    ) {
        let f = build_fractal(d, 1, 3);
        let radius = Angle::from_degrees(radius_deg);
        let frame = Frame::identity();
        let mut rng = DeterministicRng::new(seed);
        let l = f.make_loop(&mut rng, &frame, radius).unwrap();

        // The tangent-plane factors transfer to angular distance because
        // atan(k·tan R) ≥ k·R for k ≤ 1 and ≤ k·R for k ≥ 1.
        let lo = f.min_radius_factor() * radius.radians() - 1e-12;
        let hi = f.max_radius_factor() * radius.radians() + 1e-12;
        for v in l.vertices() {
            let dist = v.angle_to(&frame.z);
            prop_assert!(dist >= lo, "vertex at {dist} below {lo}");
            prop_assert!(dist <= hi, "vertex at {dist} above {hi}");
        }
    }
}

// ---------------------------------------------------------------------------
// 5. Approximate edge counts: exact powers round exactly
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn approx_edge_count_roundtrip(n in 0u32..10) {
        let mut b = FractalBuilder::new();
        b.set_level_for_approx_max_edges(3 * 4u32.pow(n)).unwrap();
        let f = b.build().unwrap();
        prop_assert_eq!(f.max_level(), n);
        prop_assert_eq!(f.min_level(), n);
    }
}

// ---------------------------------------------------------------------------
// 6. Loop vertices are unit length regardless of configuration
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn loop_vertices_are_unit(
        d in arb_dimension(),
        seed in arb_seed(),
        radius_deg in arb_radius_degrees(),
    ) {
        let f = build_fractal(d, 0, 2);
        let mut rng = DeterministicRng::new(seed);
        let l = f
            .make_loop(&mut rng, &Frame::identity(), Angle::from_degrees(radius_deg))
            .unwrap();
        for v in l.vertices() {
            prop_assert!(v.is_unit(1e-12));
        }
    }
}
