mod sweep;

pub use sweep::{point_segment_collision, point_segment_crossing, point_shape_collision};
