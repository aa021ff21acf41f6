use crate::error::Result;
use crate::geometry::{Segment2, Shape};
use crate::math::{Point2, Vector2};

/// Where a moving point crosses a moving segment within one time step.
///
/// Both displacements are per-step and both bodies move at constant
/// velocity over the step. The test works in the segment's rest frame: the
/// point's path becomes the segment from `point` to
/// `point + (point_movement - segment_movement)`, and a single bounded
/// intersection against the unmoved segment replaces a parametric
/// continuous-collision solve.
///
/// Returns `Ok(None)` when the displacements are exactly equal (zero
/// relative motion cannot produce a new crossing) or the swept path misses
/// the segment.
///
/// # Errors
///
/// Returns an error if the relative displacement is too small to move the
/// point at floating precision, so no swept segment exists.
pub fn point_segment_crossing(
    point: &Point2,
    point_movement: &Vector2,
    segment: &Segment2,
    segment_movement: &Vector2,
) -> Result<Option<Point2>> {
    let relative = point_movement - segment_movement;
    if relative == Vector2::zeros() {
        return Ok(None);
    }
    let swept = Segment2::new(*point, point + relative)?;
    Ok(swept.intersection(segment))
}

/// Whether a moving point crosses a moving segment within one time step.
///
/// # Errors
///
/// See [`point_segment_crossing`].
pub fn point_segment_collision(
    point: &Point2,
    point_movement: &Vector2,
    segment: &Segment2,
    segment_movement: &Vector2,
) -> Result<bool> {
    Ok(point_segment_crossing(point, point_movement, segment, segment_movement)?.is_some())
}

/// Whether a moving point crosses any edge of a moving shape within one
/// time step. Every edge shares the shape's `movement`.
///
/// # Errors
///
/// Returns an error if an edge cannot be materialised or a swept segment
/// degenerates.
pub fn point_shape_collision(
    point: &Point2,
    point_movement: &Vector2,
    shape: &Shape,
) -> Result<bool> {
    for index in 0..shape.edges.len() {
        let segment = shape.edge_segment(index)?;
        if point_segment_collision(point, point_movement, &segment, &shape.movement)? {
            return Ok(true);
        }
    }
    Ok(false)
}
