//! Rigid body contacts with angular impulse.

use crate::core::math::{Vec2, EPSILON};
use crate::domain::{RigidBody, ShapeKind, RESTITUTION};

use super::{response_inv_mass, separate};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RigidContact {
    /// Unit normal from `a` toward `b`
    pub normal: Vec2,
    pub overlap: f32,
    /// World-space contact point
    pub point: Vec2,
}

/// Circles overlap when `epsilon < d < rA + rB`; contact sits on the
/// normal at the surface of `a`.
pub fn circle_contact(a: &RigidBody, b: &RigidBody) -> Option<RigidContact> {
    let pa = a.point.position;
    let pb = b.point.position;
    let ra = a.point.collider_radius;
    let rb = b.point.collider_radius;

    let delta = pb - pa;
    let distance = delta.length();
    let min_distance = ra + rb;
    if distance >= min_distance || distance <= EPSILON {
        return None;
    }
    let normal = delta / distance;
    Some(RigidContact {
        normal,
        overlap: min_distance - distance,
        point: pa + normal * ra,
    })
}

/// Unrotated boxes; the normal is the axis of least penetration and the
/// contact point is the middle of the overlap region.
pub fn square_contact(a: &RigidBody, b: &RigidBody) -> Option<RigidContact> {
    let box_a = a.local_box();
    let box_b = b.local_box();
    if !box_a.overlaps(&box_b) {
        return None;
    }

    let extent = box_a.overlap_extent(&box_b);
    let delta = b.point.position - a.point.position;
    let side = |d: f32| if d < 0.0 { -1.0 } else { 1.0 };

    let (normal, overlap) = if extent.x < extent.y {
        (Vec2::new(side(delta.x), 0.0), extent.x)
    } else {
        (Vec2::new(0.0, side(delta.y)), extent.y)
    };

    Some(RigidContact {
        normal,
        overlap,
        point: box_a.intersection(&box_b).center(),
    })
}

/// Detect and resolve one same-kind rigid pair. Returns whether they touched.
pub fn collide_rigid(a: &mut RigidBody, b: &mut RigidBody) -> bool {
    let contact = match (a.shape.kind, b.shape.kind) {
        (ShapeKind::Circle, ShapeKind::Circle) => circle_contact(a, b),
        (ShapeKind::Square, ShapeKind::Square) => square_contact(a, b),
        _ => None,
    };
    let Some(contact) = contact else {
        return false;
    };

    // Lever arms are taken before the positional correction
    let ra = contact.point - a.point.position;
    let rb = contact.point - b.point.position;

    separate(&mut a.point, &mut b.point, contact.normal, contact.overlap);
    apply_impulse(a, b, contact.normal, ra, rb);
    true
}

fn apply_impulse(a: &mut RigidBody, b: &mut RigidBody, n: Vec2, ra: Vec2, rb: Vec2) {
    let pa = &a.point;
    let pb = &b.point;

    let va = pa.velocity + Vec2::scalar_cross(pa.angular_velocity, ra);
    let vb = pb.velocity + Vec2::scalar_cross(pb.angular_velocity, rb);
    let vn = (vb - va).dot(n);
    if vn > 0.0 {
        return;
    }

    let inv_ma = response_inv_mass(pa);
    let inv_mb = response_inv_mass(pb);
    let inv_ia = if pa.affected_by_forces { pa.inv_inertia() } else { 0.0 };
    let inv_ib = if pb.affected_by_forces { pb.inv_inertia() } else { 0.0 };

    let ra_n = ra.cross(n);
    let rb_n = rb.cross(n);
    let denom = inv_ma + inv_mb + ra_n * ra_n * inv_ia + rb_n * rb_n * inv_ib;
    if denom <= EPSILON {
        return;
    }

    let j = -(1.0 + RESTITUTION) * vn / denom;

    a.point.velocity -= n * (j * inv_ma);
    b.point.velocity += n * (j * inv_mb);
    a.point.angular_velocity -= ra_n * j * inv_ia;
    b.point.angular_velocity += rb_n * j * inv_ib;
}
