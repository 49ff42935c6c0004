use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::vector::Vec3;

/// Failure constructing a closed loop.
#[derive(Debug, Error)]
pub enum LoopError {
    #[error("a closed loop requires at least 3 vertices, got {0}")]
    TooFewVertices(usize),
}

/// A closed polygonal loop on the unit sphere.
///
/// The loop is closed implicitly: the last vertex connects back to the
/// first. Vertices are never mutated after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SphereLoop {
    vertices: Vec<Vec3>,
}

impl SphereLoop {
    /// Build a loop from an ordered vertex sequence.
    pub fn new(vertices: Vec<Vec3>) -> Result<Self, LoopError> {
        if vertices.len() < 3 {
            return Err(LoopError::TooFewVertices(vertices.len()));
        }
        Ok(Self { vertices })
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Vertex `i`, with indices taken modulo the vertex count.
    pub fn vertex(&self, i: usize) -> Vec3 {
        self.vertices[i % self.vertices.len()]
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Iterate over the loop's edges, including the closing edge from the
    /// last vertex back to the first.
    pub fn edges(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }
}
