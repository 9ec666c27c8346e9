//! 2D vector math and geometric primitives.

mod aabb;
mod geometry;
mod vec2;

pub use aabb::Aabb;
pub use geometry::{
    closest_point_on_segment, polygon_area, polygon_centroid, regular_ring, segment_intersection,
};
pub use vec2::{Vec2, EPSILON};
