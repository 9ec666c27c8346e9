use crate::core::math::Vec2;
use crate::domain::{Body, BodyHandle, Transform};

use super::WorldCore;

pub(super) fn body(world: &WorldCore, handle: BodyHandle) -> Option<&Body> {
    world.bodies.iter().find(|b| b.handle == handle)
}

pub(super) fn point_positions(world: &WorldCore, handle: BodyHandle) -> Option<Vec<Vec2>> {
    body(world, handle).map(|b| b.points().iter().map(|p| p.position).collect())
}

pub(super) fn spring_segments(world: &WorldCore, handle: BodyHandle) -> Option<Vec<(Vec2, Vec2)>> {
    body(world, handle).map(|b| b.springs().iter().map(|s| s.segment(b.points())).collect())
}

pub(super) fn centroid(world: &WorldCore, handle: BodyHandle) -> Option<Vec2> {
    body(world, handle).map(Body::centroid)
}

pub(super) fn rotation(world: &WorldCore, handle: BodyHandle) -> Option<f32> {
    body(world, handle).map(Body::rotation)
}

pub(super) fn transform(world: &WorldCore, handle: BodyHandle) -> Option<Transform> {
    body(world, handle).map(|b| b.transform)
}

pub(super) fn outline(world: &WorldCore, handle: BodyHandle) -> Option<Vec<Vec2>> {
    body(world, handle).map(|b| match b.as_rigid() {
        Some(rigid) => rigid.world_outline(),
        None => Vec::new(),
    })
}

/// Interleave `[x0, y0, x1, y1, ...]` for typed-array transfer.
pub(crate) fn flatten(points: impl IntoIterator<Item = Vec2>) -> Vec<f32> {
    points.into_iter().flat_map(|p| [p.x, p.y]).collect()
}
