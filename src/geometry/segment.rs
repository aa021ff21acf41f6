use crate::error::Result;
use crate::math::scalar::is_close;
use crate::math::{Point2, SPAN_REL_TOLERANCE};

use super::Line2;

/// A line segment bounded by two distinct endpoints.
///
/// The segment owns the infinite [`Line2`] its endpoints span; the line
/// coefficients are derived once at construction and never change.
#[derive(Debug, Clone, Copy)]
pub struct Segment2 {
    line: Line2,
    start: Point2,
    end: Point2,
}

impl Segment2 {
    /// Creates a segment between two distinct endpoints.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoints coincide.
    pub fn new(start: Point2, end: Point2) -> Result<Self> {
        let line = Line2::from_points(&start, &end)?;
        Ok(Self { line, start, end })
    }

    /// Returns the infinite line the segment lies on.
    #[must_use]
    pub fn line(&self) -> &Line2 {
        &self.line
    }

    /// Returns the first endpoint.
    #[must_use]
    pub fn start(&self) -> &Point2 {
        &self.start
    }

    /// Returns the second endpoint.
    #[must_use]
    pub fn end(&self) -> &Point2 {
        &self.end
    }

    /// Computes the intersection point of two bounded segments.
    ///
    /// The infinite carrier lines are intersected first; the candidate point
    /// must then fall within the axis-aligned span of this segment's
    /// endpoints, and then the other's, with [`SPAN_REL_TOLERANCE`] slack at
    /// each bound. Returns `None` for parallel carriers or an out-of-span
    /// candidate.
    #[must_use]
    pub fn intersection(&self, other: &Segment2) -> Option<Point2> {
        let point = self.line.intersection(&other.line)?;
        if self.spans(&point) && other.spans(&point) {
            Some(point)
        } else {
            None
        }
    }

    /// Whether `point` falls within the segment's axis-aligned endpoint
    /// span. The point must already lie on the carrier line; the span check
    /// alone then bounds it to the segment.
    fn spans(&self, point: &Point2) -> bool {
        within(point.x, self.start.x, self.end.x) && within(point.y, self.start.y, self.end.y)
    }
}

/// Whether `v` lies between `e1` and `e2` (in either order), with relative
/// slack at both bounds.
fn within(v: f64, e1: f64, e2: f64) -> bool {
    let lo = e1.min(e2);
    let hi = e1.max(e2);
    (v <= hi || is_close(v, hi, SPAN_REL_TOLERANCE))
        && (v >= lo || is_close(v, lo, SPAN_REL_TOLERANCE))
}
