use log::{debug, warn};

use crate::core::math::Vec2;
use crate::domain::{
    Body, BodyDesc, BodyHandle, BodyType, BodyVariant, PhysicsError, Result, RigidBody, ShapeKind, SoftBody,
    SoftPointParams, Transform,
};
use crate::systems::forces;

use super::random;
use super::WorldCore;

pub(super) fn create_soft_body(world: &mut WorldCore, shape: ShapeKind, position: Vec2, scale: f32) -> Result<BodyHandle> {
    spawn(world, &BodyDesc::soft(shape, Transform::new(position, scale)))
}

pub(super) fn create_rigid_body(world: &mut WorldCore, shape: ShapeKind, position: Vec2, scale: f32) -> Result<BodyHandle> {
    spawn(world, &BodyDesc::rigid(shape, Transform::new(position, scale)))
}

pub(super) fn spawn(world: &mut WorldCore, desc: &BodyDesc) -> Result<BodyHandle> {
    match build_body(world, desc) {
        Ok(body) => {
            let handle = body.handle;
            debug!(
                "spawned {:?} {:?} body {:?} at {:?}",
                desc.body_type, desc.shape, handle, body.transform.position
            );
            world.bodies.push(body);
            Ok(handle)
        }
        Err(err) => {
            warn!("rejected {:?} {:?} spawn: {err}", desc.body_type, desc.shape);
            Err(err)
        }
    }
}

fn build_body(world: &mut WorldCore, desc: &BodyDesc) -> Result<Body> {
    let mut transform = desc.transform.ok_or(PhysicsError::MissingTransform)?;
    if !transform.scale.is_finite() || transform.scale <= 0.0 {
        return Err(PhysicsError::InvalidScale(transform.scale));
    }
    if !transform.position.is_finite() {
        return Err(PhysicsError::InvalidConfig(format!(
            "body position must be finite, got {:?}",
            transform.position
        )));
    }
    desc.shape.validate()?;

    let variant = match desc.body_type {
        BodyType::Soft => {
            let params = SoftPointParams {
                mass: world.config.soft_point_mass,
                collider_radius: world.config.soft_point_radius,
            };
            BodyVariant::Soft(SoftBody::build(desc.shape, transform.position, transform.scale, params)?)
        }
        BodyType::Rigid => {
            let factor = if desc.randomize_scale {
                let [lo, hi] = world.config.rigid_scale_range;
                random::range_f32(&mut world.rng_state, lo, hi)
            } else {
                1.0
            };
            let size = transform.scale * factor;
            // The host draws rigid bodies at the size they collide with
            transform.scale = size;
            BodyVariant::Rigid(RigidBody::build(desc.shape, transform.position, size, world.config.rigid_mass)?)
        }
    };

    let handle = BodyHandle(world.next_id);
    world.next_id = world.next_id.wrapping_add(1).max(1);

    let mut body = Body {
        handle,
        transform,
        variant,
    };
    body.sync_transform();
    Ok(body)
}

pub(super) fn destroy_body(world: &mut WorldCore, handle: BodyHandle) -> Result<()> {
    let Some(idx) = world.index_of(handle) else {
        return Err(PhysicsError::BodyNotFound(handle));
    };
    world.bodies.swap_remove(idx);
    // Pair indices from the last step no longer line up
    world.candidate_pairs.clear();
    debug!("destroyed body {handle:?}");
    Ok(())
}

pub(super) fn apply_explosion(world: &mut WorldCore, center: Vec2, strength: f32, radius: f32) -> usize {
    let hit = forces::apply_explosion(&mut world.bodies, center, strength, radius);
    debug!("explosion at {center:?} (strength {strength}, radius {radius}) hit {hit} points");
    hit
}

pub(super) fn clear(world: &mut WorldCore) {
    world.bodies.clear();
    world.broad_phase.clear();
    world.candidate_pairs.clear();
    world.accumulator = 0.0;
}
