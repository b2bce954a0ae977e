mod intersect2;
pub mod offset;
mod outline2;

pub type Point2 = parry2d_f64::na::Point2<f64>;
pub type Vector2 = parry2d_f64::na::Vector2<f64>;
pub type Aabb2 = parry2d_f64::bounding_volume::Aabb;
pub type Segment2 = parry2d_f64::shape::Segment;

pub use self::intersect2::{find_self_intersection, segments_intersect};
pub use self::offset::{OffsetOutline, offset, offset_with_report};
pub use self::outline2::Outline;

/// The 2D cross product (the z component of the 3D cross product) of two vectors
pub fn cross2(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Rotates a vector 90 degrees clockwise, which for a counter-clockwise contour turns an edge
/// direction into the outward normal.
pub fn rot_cw(v: &Vector2) -> Vector2 {
    Vector2::new(v.y, -v.x)
}
