use crate::error::{GeometryError, Result};
use crate::math::{Point2, Vector2};

use super::Segment2;

/// A vertex/edge container with a per-step displacement.
///
/// Vertices are positions; each edge indexes a pair of vertices. `movement`
/// is the displacement the owning simulation intends to apply this step.
/// The collision queries read it; nothing here integrates motion.
#[derive(Debug, Clone)]
pub struct Shape {
    pub vertices: Vec<Point2>,
    pub edges: Vec<(usize, usize)>,
    pub movement: Vector2,
}

impl Shape {
    /// Creates a shape with zero movement.
    #[must_use]
    pub fn new(vertices: Vec<Point2>, edges: Vec<(usize, usize)>) -> Self {
        Self {
            vertices,
            edges,
            movement: Vector2::zeros(),
        }
    }

    /// Materialises edge `index` as a [`Segment2`].
    ///
    /// # Errors
    ///
    /// Returns an error for an out-of-range edge index, an edge referencing
    /// a missing vertex, or an edge whose endpoints coincide.
    pub fn edge_segment(&self, index: usize) -> Result<Segment2> {
        let &(s, e) = self
            .edges
            .get(index)
            .ok_or(GeometryError::EdgeNotFound(index))?;
        let start = *self.vertices.get(s).ok_or(GeometryError::VertexNotFound(s))?;
        let end = *self.vertices.get(e).ok_or(GeometryError::VertexNotFound(e))?;
        Segment2::new(start, end)
    }
}
