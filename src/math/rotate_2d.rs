use nalgebra::Rotation2;

use super::Point2;

/// Rotates `point` counter-clockwise by `theta` radians about the origin.
#[must_use]
pub fn rotate(point: &Point2, theta: f64) -> Point2 {
    rotate_about(point, theta, &Point2::origin())
}

/// Rotates `point` counter-clockwise by `theta` radians about `center`.
///
/// The rotation matrix is applied in the center's frame:
/// `center + R(theta) * (point - center)`.
#[must_use]
pub fn rotate_about(point: &Point2, theta: f64, center: &Point2) -> Point2 {
    *center + Rotation2::new(theta) * (point - center)
}
