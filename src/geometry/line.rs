use crate::error::{GeometryError, Result};
use crate::math::scalar::is_close;
use crate::math::{Point2, NEAR_ZERO_REL_TOLERANCE};

/// An infinite line in general form: `a*x + b*y + c = 0`.
///
/// The coefficient triple is defined up to a nonzero scalar factor and is
/// kept exactly as supplied, never normalised. `(a, b)` is never `(0, 0)`.
#[derive(Debug, Clone, Copy)]
pub struct Line2 {
    a: f64,
    b: f64,
    c: f64,
}

impl Line2 {
    /// Creates a line directly from its coefficients.
    ///
    /// # Errors
    ///
    /// Returns an error if `a` and `b` are both zero.
    #[allow(clippy::float_cmp)]
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self> {
        if a == 0.0 && b == 0.0 {
            return Err(GeometryError::DegenerateLine { a, b });
        }
        Ok(Self { a, b, c })
    }

    /// Creates the line through two distinct points.
    ///
    /// A vertical line (`x1 == x2`) gets the coefficients `(1, 0, -x1)`;
    /// otherwise the two-point form is used, unnormalised.
    ///
    /// # Errors
    ///
    /// Returns an error if the points are identical, since no unique line
    /// passes through them.
    #[allow(clippy::float_cmp)]
    pub fn from_points(p1: &Point2, p2: &Point2) -> Result<Self> {
        if p1 == p2 {
            return Err(GeometryError::CoincidentPoints { x: p1.x, y: p1.y });
        }
        if p1.x == p2.x {
            return Ok(Self {
                a: 1.0,
                b: 0.0,
                c: -p1.x,
            });
        }
        let a = p2.y - p1.y;
        let b = -(p2.x - p1.x);
        let c = (p2.x - p1.x) * p1.y - (p2.y - p1.y) * p1.x;
        Ok(Self { a, b, c })
    }

    /// Returns the `a` coefficient.
    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Returns the `b` coefficient.
    #[must_use]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Returns the `c` coefficient.
    #[must_use]
    pub fn c(&self) -> f64 {
        self.c
    }

    /// Returns whether the two lines have equal slope.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_parallel(&self, other: &Line2) -> bool {
        if self.a != 0.0 && other.a != 0.0 {
            self.b / self.a == other.b / other.a
        } else {
            self.a == 0.0 && other.a == 0.0
        }
    }

    /// Returns whether the two lines are perpendicular.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_perpendicular(&self, other: &Line2) -> bool {
        if self.a != 0.0 && self.b != 0.0 {
            other.b / self.a == -other.a / self.b
        } else if self.a == 0.0 {
            // Horizontal: perpendicular iff the other is vertical.
            other.b == 0.0
        } else {
            // Vertical: perpendicular iff the other is horizontal.
            other.a == 0.0
        }
    }

    /// Returns the line through `point` perpendicular to this one.
    #[must_use]
    pub fn perpendicular_through(&self, point: &Point2) -> Line2 {
        let a = -self.b;
        let b = self.a;
        let c = -(a * point.x + b * point.y);
        Line2 { a, b, c }
    }

    /// Returns the distance from `point` to the line.
    #[must_use]
    pub fn distance_to(&self, point: &Point2) -> f64 {
        (self.a * point.x + self.b * point.y + self.c).abs()
            / (self.a.powi(2) + self.b.powi(2)).sqrt()
    }

    /// Computes the intersection point of two infinite lines.
    ///
    /// Returns `None` for parallel lines. When both `b` coefficients are
    /// usable, the solver scales the two equations to a common `b`
    /// coefficient and eliminates `y`; otherwise it reads `x` off the
    /// (near-)vertical line and substitutes into the other.
    #[must_use]
    pub fn intersection(&self, other: &Line2) -> Option<Point2> {
        if self.is_parallel(other) {
            return None;
        }
        let (x, y) = if !near_zero(self.b) && !near_zero(other.b) {
            let x = (self.b * other.c - other.b * self.c)
                / (other.b * self.a - self.b * other.a);
            let y = (self.a * x + self.c) / -self.b;
            (x, y)
        } else if near_zero(self.b) {
            let x = -self.c / self.a;
            let y = -(other.a * x + other.c) / other.b;
            (x, y)
        } else {
            let x = -other.c / other.a;
            let y = -(self.a * x + self.c) / self.b;
            (x, y)
        };
        Some(Point2::new(x, y))
    }
}

impl PartialEq for Line2 {
    /// Lines compare equal when they are coincident: parallel, with offsets
    /// matching under cross-multiplication. Coefficient triples that differ
    /// only by a scalar factor therefore compare equal.
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        self.is_parallel(other) && self.c * other.b == other.c * self.b
    }
}

/// Treats a `b` coefficient as zero when it is exactly zero or relatively
/// close to it.
#[allow(clippy::float_cmp)]
fn near_zero(b: f64) -> bool {
    b == 0.0 || is_close(b, 0.0, NEAR_ZERO_REL_TOLERANCE)
}
