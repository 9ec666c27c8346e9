//! Force accumulation: gravity, springs and explosions.
//!
//! Bodies never share points, so the per-body passes run in parallel.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::core::math::{Vec2, EPSILON};
use crate::domain::{Body, BodyVariant};

/// Add `gravity` as a force to every point (static points ignore it).
pub fn apply_gravity(bodies: &mut [Body], gravity: Vec2) {
    if gravity == Vec2::ZERO {
        return;
    }

    #[cfg(feature = "parallel")]
    bodies.par_iter_mut().for_each(|body| gravity_body(body, gravity));

    #[cfg(not(feature = "parallel"))]
    bodies.iter_mut().for_each(|body| gravity_body(body, gravity));
}

#[inline]
fn gravity_body(body: &mut Body, gravity: Vec2) {
    for point in body.points_mut() {
        point.apply_force(gravity);
    }
}

/// Accumulate spring forces into every soft body. Returns the number of
/// springs that produced a force this step.
pub fn apply_spring_forces(bodies: &mut [Body]) -> usize {
    #[cfg(feature = "parallel")]
    let active: usize = bodies.par_iter_mut().map(springs_body).sum();

    #[cfg(not(feature = "parallel"))]
    let active: usize = bodies.iter_mut().map(springs_body).sum();

    active
}

#[inline]
fn springs_body(body: &mut Body) -> usize {
    match &mut body.variant {
        BodyVariant::Soft(soft) => soft.apply_spring_forces(),
        BodyVariant::Rigid(_) => 0,
    }
}

/// Radial impulse: every point within `radius` of `center` gains
/// `dir * strength * (1 - d / radius) / mass`. Returns points affected.
pub fn apply_explosion(bodies: &mut [Body], center: Vec2, strength: f32, radius: f32) -> usize {
    if !(radius > 0.0) || !strength.is_finite() {
        return 0;
    }

    let mut affected = 0;
    for body in bodies.iter_mut() {
        for point in body.points_mut() {
            if !point.affected_by_forces {
                continue;
            }
            let offset = point.position - center;
            let distance = offset.length();
            if distance >= radius {
                continue;
            }
            let dir = if distance < EPSILON {
                Vec2::UP
            } else {
                offset / distance
            };
            let falloff = 1.0 - distance / radius;
            point.apply_impulse(dir * (strength * falloff));
            affected += 1;
        }
    }
    affected
}
