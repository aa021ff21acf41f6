use thiserror::Error;

/// Errors raised by geometric constructions in the linecast kernel.
///
/// Expected geometric outcomes (parallel lines, out-of-span intersection
/// candidates, missed sweeps) are reported as `Option::None` or `false` by
/// the queries themselves, never as an error.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("cannot define a line through two coincident points ({x}, {y})")]
    CoincidentPoints { x: f64, y: f64 },

    #[error("line coefficients a = {a}, b = {b} must not both be zero")]
    DegenerateLine { a: f64, b: f64 },

    #[error("vertex index {0} is out of range")]
    VertexNotFound(usize),

    #[error("edge index {0} is out of range")]
    EdgeNotFound(usize),
}

/// Convenience type alias for results using [`GeometryError`].
pub type Result<T> = std::result::Result<T, GeometryError>;
