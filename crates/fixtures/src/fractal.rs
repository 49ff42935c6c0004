//! Stochastic Koch-style fractal loops on the unit sphere.
//!
//! The generator starts from an equilateral triangle in a 2D tangent
//! plane and recursively replaces each edge with four shorter segments
//! forming an outward bump, then projects the finished boundary onto the
//! sphere through a caller-supplied frame. A continuous fractal dimension
//! in [1.0, 2.0) controls how much boundary length each subdivision step
//! adds; values between 1.02 and 1.50 are reasonable coastline
//! simulations, and the default (log 4 / log 3 ≈ 1.26) is the classic
//! Koch snowflake.
//!
//! Multi-level fractals: when `min_level < max_level`, each edge lineage
//! independently stops subdividing at a level drawn uniformly from
//! `{min_level, …, max_level}`, so with k distinct levels the expected
//! number of final edges at level i is about `3·4^i / k`.

use std::f64::consts::PI;

use tracing::{debug, instrument};

use sphere_types::{Angle, Frame, Point2, SphereLoop, Vec3};

use crate::error::FractalError;
use crate::rng::DeterministicRng;

/// Default fractal dimension: the classic Koch snowflake.
pub fn default_dimension() -> f64 {
    4f64.ln() / 3f64.ln()
}

/// Draft fractal configuration.
///
/// Mutators validate their arguments immediately; [`FractalBuilder::build`]
/// finalizes the draft into an immutable [`Fractal`] and derives the two
/// geometric constants that drive subdivision. A max level must be
/// configured (directly or via approximate edge count) before building.
#[derive(Debug, Clone)]
pub struct FractalBuilder {
    max_level: Option<u32>,
    min_level: Option<u32>,
    dimension: f64,
}

impl Default for FractalBuilder {
    fn default() -> Self {
        Self {
            max_level: None,
            min_level: None,
            dimension: default_dimension(),
        }
    }
}

impl FractalBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum subdivision level.
    ///
    /// Fails if a previously configured min level would exceed it.
    pub fn set_max_level(&mut self, level: u32) -> Result<&mut Self, FractalError> {
        if let Some(min) = self.min_level {
            if min > level {
                return Err(FractalError::MinAboveMax {
                    min_level: min,
                    max_level: level,
                });
            }
        }
        self.max_level = Some(level);
        Ok(self)
    }

    /// Set the minimum subdivision level. Left unset, the min level
    /// tracks the max level (no multi-level blending).
    ///
    /// A min level of 0 is accepted but risky: there is a real chance
    /// that none of the three initial edges subdivides at all.
    ///
    /// Fails if the level exceeds a previously configured max level.
    pub fn set_min_level(&mut self, level: u32) -> Result<&mut Self, FractalError> {
        if let Some(max) = self.max_level {
            if level > max {
                return Err(FractalError::MinAboveMax {
                    min_level: level,
                    max_level: max,
                });
            }
        }
        self.min_level = Some(level);
        Ok(self)
    }

    /// Set the min level to produce approximately the given number of
    /// final edges (rounded to the nearest `3·4^n`).
    pub fn set_level_for_approx_min_edges(&mut self, edges: u32) -> Result<&mut Self, FractalError> {
        self.set_min_level(level_for_approx_edges(edges))
    }

    /// Set the max level to produce approximately the given number of
    /// final edges (rounded to the nearest `3·4^n`).
    pub fn set_level_for_approx_max_edges(&mut self, edges: u32) -> Result<&mut Self, FractalError> {
        self.set_max_level(level_for_approx_edges(edges))
    }

    /// Set the fractal dimension. Must lie in `[1.0, 2.0)`.
    pub fn set_fractal_dimension(&mut self, dimension: f64) -> Result<&mut Self, FractalError> {
        if !(1.0..2.0).contains(&dimension) {
            return Err(FractalError::InvalidDimension { dimension });
        }
        self.dimension = dimension;
        Ok(self)
    }

    /// Finalize into an immutable, validated fractal description.
    ///
    /// Fails if no max level was ever configured.
    pub fn build(&self) -> Result<Fractal, FractalError> {
        let max_level = self.max_level.ok_or(FractalError::MaxLevelUnset)?;
        let min_level = self.min_level.unwrap_or(max_level);
        if min_level > max_level {
            return Err(FractalError::MinAboveMax {
                min_level,
                max_level,
            });
        }
        // Length of each of the four sub-segments relative to the parent
        // edge.
        let edge_fraction = 4f64.powf(-1.0 / self.dimension);
        // Perpendicular displacement of the bump apex, solved from the
        // closure constraint: with the parent edge normalized to length 1,
        // each middle segment spans a horizontal distance of
        // (1/2 - edge_fraction) and must itself have length edge_fraction.
        let half_span = 0.5 - edge_fraction;
        let offset_fraction = (edge_fraction * edge_fraction - half_span * half_span).sqrt();
        debug!(
            min_level,
            max_level,
            dimension = self.dimension,
            edge_fraction,
            offset_fraction,
            "fractal configuration finalized"
        );
        Ok(Fractal {
            min_level,
            max_level,
            dimension: self.dimension,
            edge_fraction,
            offset_fraction,
        })
    }
}

/// Solve `edges = 3·4^level` for the level, rounding ties half-up and
/// clamping to zero.
fn level_for_approx_edges(edges: u32) -> u32 {
    let level = ((edges as f64 / 3.0).ln() / 4f64.ln()).round();
    level.max(0.0) as u32
}

/// An immutable, validated fractal description.
///
/// Reusable: each [`Fractal::make_loop`] call draws fresh randomness from
/// the supplied generator and produces an independent loop.
#[derive(Debug, Clone)]
pub struct Fractal {
    min_level: u32,
    max_level: u32,
    dimension: f64,
    edge_fraction: f64,
    offset_fraction: f64,
}

/// One pending edge of the subdivision work stack.
type Edge = (Point2, Point2, u32);

impl Fractal {
    pub fn min_level(&self) -> u32 {
        self.min_level
    }

    pub fn max_level(&self) -> u32 {
        self.max_level
    }

    pub fn fractal_dimension(&self) -> f64 {
        self.dimension
    }

    /// Length of each sub-segment relative to its parent edge; equal to
    /// `4^(-1/dimension)`, in (0, 1).
    pub fn edge_fraction(&self) -> f64 {
        self.edge_fraction
    }

    /// Perpendicular displacement of the bump apex as a fraction of the
    /// parent edge length.
    pub fn offset_fraction(&self) -> f64 {
        self.offset_fraction
    }

    /// A conservative lower bound on `Rmin / R`, where `R` is the nominal
    /// radius passed to [`Fractal::make_loop`] and `Rmin` is the minimum
    /// distance from the boundary to the fractal's center, measured in the
    /// tangent plane. Useful for inscribing another figure inside the
    /// fractal without intersection.
    pub fn min_radius_factor(&self) -> f64 {
        // Below this dimension the curve hugs the initial edges closely
        // enough that the incircle of the initial triangle is the best
        // simple bound; above it the minimum is attained at the first
        // on-edge subdivision vertex.
        const LEVEL1_MIN_DIMENSION: f64 = 1.0852230903040407;
        if self.min_level >= 1 && self.dimension >= LEVEL1_MIN_DIMENSION {
            // Distance from the center to the point at parameter
            // edge_fraction along a chord between two circumradius-1
            // vertices: |P(t)|² = 1 - 3t + 3t².
            let f = self.edge_fraction;
            return (1.0 - 3.0 * f * (1.0 - f)).sqrt();
        }
        // Every bump points outward, so the boundary never enters the
        // open incircle of the initial triangle (inradius 1/2 for
        // circumradius 1).
        0.5
    }

    /// The ratio `Rmax / R`: an upper bound on the maximum distance from
    /// the boundary to the fractal's center, measured in the tangent
    /// plane. Useful for inscribing the fractal inside another figure.
    pub fn max_radius_factor(&self) -> f64 {
        // The maximum is attained either at an initial triangle vertex
        // (circumradius 1) or at the apex of a first-level bump: the
        // initial edge has length √3 and sits at distance 1/2 from the
        // center.
        (0.5 + 3f64.sqrt() * self.offset_fraction).max(1.0)
    }

    /// Build one fractal loop centered on the z-axis of `frame`, with the
    /// first vertex at angular distance `nominal_radius` along the
    /// positive x-axis.
    ///
    /// The boundary is drawn in the 2D tangent plane touching the sphere
    /// at the frame's center and then projected outward, which avoids
    /// self-intersections. `nominal_radius` must be less than 90°.
    #[instrument(skip_all, fields(min_level = self.min_level, max_level = self.max_level))]
    pub fn make_loop(
        &self,
        rng: &mut DeterministicRng,
        frame: &Frame,
        nominal_radius: Angle,
    ) -> Result<SphereLoop, FractalError> {
        let plane = self.plane_curve(rng);
        // The initial triangle has circumradius 1, so this scale lands the
        // first vertex at angular distance exactly `nominal_radius`.
        let scale = nominal_radius.tan();
        let mut vertices = Vec::with_capacity(plane.len());
        for (p, _) in &plane {
            let dir = frame.from_local(Vec3::new(p.x * scale, p.y * scale, 1.0));
            let v = dir.normalized().ok_or(FractalError::DegenerateVertex)?;
            vertices.push(v);
        }
        debug!(vertices = vertices.len(), "fractal loop built");
        Ok(SphereLoop::new(vertices)?)
    }

    /// Generate the planar boundary as an ordered vertex sequence, paired
    /// with the subdivision level at which each vertex's edge lineage
    /// stopped.
    ///
    /// Uses an explicit work stack popped in depth-first left-to-right
    /// order, so the traversal — and hence the order in which random
    /// draws are consumed — is a fixed contract.
    fn plane_curve(&self, rng: &mut DeterministicRng) -> Vec<(Point2, u32)> {
        // Initial equilateral triangle with circumradius 1, wound
        // counter-clockwise, first vertex on the positive x-axis.
        let corner = |i: usize| {
            let theta = 2.0 * PI * i as f64 / 3.0;
            Point2::new(theta.cos(), theta.sin())
        };
        let mut vertices = Vec::new();
        let mut stack: Vec<Edge> = vec![
            (corner(2), corner(0), 0),
            (corner(1), corner(2), 0),
            (corner(0), corner(1), 0),
        ];
        while let Some((v0, v4, level)) = stack.pop() {
            // Reservoir-style single draw: at each candidate level, stop
            // with probability 1/(number of candidates left). Always stops
            // at max_level.
            if level >= self.min_level && rng.one_in(self.max_level - level + 1) {
                // Emit only the leading vertex; the trailing one is
                // supplied by the next edge along the curve.
                vertices.push((v0, level));
                continue;
            }
            let [v1, v2, v3] = subdivide(v0, v4, self.edge_fraction, self.offset_fraction);
            stack.push((v3, v4, level + 1));
            stack.push((v2, v3, level + 1));
            stack.push((v1, v2, level + 1));
            stack.push((v0, v1, level + 1));
        }
        vertices
    }
}

/// Split the edge `(v0, v4)` into four segments of equal length
/// `edge_fraction·|v4 - v0|`: two collinear end segments and a symmetric
/// bump whose apex is displaced outward (clockwise normal for a
/// counter-clockwise wound curve) by `offset_fraction·|v4 - v0|`.
fn subdivide(v0: Point2, v4: Point2, edge_fraction: f64, offset_fraction: f64) -> [Point2; 3] {
    let dir = v4 - v0;
    let v1 = v0 + dir * edge_fraction;
    let v3 = v4 - dir * edge_fraction;
    let v2 = v0.midpoint(&v4) + dir.rotated_cw() * offset_fraction;
    [v1, v2, v3]
}
