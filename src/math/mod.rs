pub mod rotate_2d;
pub mod scalar;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Relative tolerance admitted at segment endpoints during containment checks.
pub const SPAN_REL_TOLERANCE: f64 = 1e-4;

/// Relative tolerance for classifying a line's `b` coefficient as zero
/// (near-vertical line) when solving intersections.
pub const NEAR_ZERO_REL_TOLERANCE: f64 = 1e-4;

#[cfg(test)]
mod tests {
    use super::{Point2, Vector2};

    #[test]
    fn sub_then_add_round_trips() {
        let p = Point2::new(3.25, -7.5);
        let q = Point2::new(-1.5, 2.0);
        assert_eq!(q + (p - q), p);
    }

    #[test]
    fn equality_is_exact_componentwise() {
        assert_eq!(Point2::new(10.0, 5.0), Point2::new(10.0, 5.0));
        assert_ne!(Point2::new(10.0, 5.0), Point2::new(10.0, 5.0 + 1e-12));
    }

    #[test]
    fn scale_and_negate() {
        assert_eq!(Vector2::new(10.0, 100.0) * 4.0, Vector2::new(40.0, 400.0));
        assert_eq!(-Vector2::new(10.0, 100.0), Vector2::new(-10.0, -100.0));
    }

    #[test]
    fn distance_and_norm() {
        let d = nalgebra::distance(&Point2::new(10.0, 5.0), &Point2::new(5.0, 0.0));
        assert!((d - 50.0_f64.sqrt()).abs() < 1e-12, "d={d}");
        let n = Vector2::new(3.0, 4.0).norm();
        assert!((n - 5.0).abs() < 1e-12, "n={n}");
    }
}
