//! Narrow phase and contact resolution.
//!
//! Candidate pairs are resolved serially in sorted order, so a run is
//! reproducible regardless of how the broad phase was built.

mod rigid;
mod soft;

pub use rigid::{circle_contact, collide_rigid, square_contact, RigidContact};
pub use soft::{collide_soft, collide_soft_rigid};

use crate::core::math::Vec2;
use crate::domain::{Body, BodyVariant, PointMass, ShapeKind, RESTITUTION};

/// Static points take no part in the response.
#[inline]
pub(crate) fn response_inv_mass(point: &PointMass) -> f32 {
    if point.affected_by_forces {
        point.inv_mass()
    } else {
        0.0
    }
}

/// Split `overlap` along `normal` between two points: half each when both
/// move, all of it to the movable one otherwise. `a` moves against `normal`.
pub(crate) fn separate(a: &mut PointMass, b: &mut PointMass, normal: Vec2, overlap: f32) {
    let wa = if a.affected_by_forces { 1.0 } else { 0.0 };
    let wb = if b.affected_by_forces { 1.0 } else { 0.0 };
    let total = wa + wb;
    if total == 0.0 {
        return;
    }
    a.position -= normal * (overlap * wa / total);
    b.position += normal * (overlap * wb / total);
}

/// Linear impulse along `normal` (pointing from `a` to `b`).
///
/// `j = -(1 + e) * vn / (1/mA + 1/mB)`; nothing happens when separating.
pub(crate) fn bounce(a: &mut PointMass, b: &mut PointMass, normal: Vec2) -> bool {
    let vn = (b.velocity - a.velocity).dot(normal);
    if vn > 0.0 {
        return false;
    }
    let ia = response_inv_mass(a);
    let ib = response_inv_mass(b);
    let denom = ia + ib;
    if denom <= 0.0 {
        return false;
    }
    let impulse = normal * (-(1.0 + RESTITUTION) * vn / denom);
    a.velocity -= impulse * ia;
    b.velocity += impulse * ib;
    true
}

/// Two distinct mutable elements of one slice.
pub(crate) fn pair_mut<T>(items: &mut [T], i: usize, j: usize) -> Option<(&mut T, &mut T)> {
    if i == j || i >= items.len() || j >= items.len() {
        return None;
    }
    if i < j {
        let (head, tail) = items.split_at_mut(j);
        Some((&mut head[i], &mut tail[0]))
    } else {
        let (head, tail) = items.split_at_mut(i);
        Some((&mut tail[0], &mut head[j]))
    }
}

/// Narrow phase for one candidate pair. Returns the number of contacts resolved.
pub fn collide_pair(bodies: &mut [Body], i: usize, j: usize) -> usize {
    let Some((a, b)) = pair_mut(bodies, i, j) else {
        return 0;
    };

    match (&mut a.variant, &mut b.variant) {
        (BodyVariant::Soft(sa), BodyVariant::Soft(sb)) => collide_soft(sa, sb),
        (BodyVariant::Rigid(ra), BodyVariant::Rigid(rb)) => match (ra.shape.kind, rb.shape.kind) {
            (ShapeKind::Circle, ShapeKind::Circle) | (ShapeKind::Square, ShapeKind::Square) => {
                usize::from(collide_rigid(ra, rb))
            }
            // Mixed and polygonal rigid pairs have no contact test
            _ => 0,
        },
        (BodyVariant::Soft(s), BodyVariant::Rigid(r)) | (BodyVariant::Rigid(r), BodyVariant::Soft(s)) => {
            collide_soft_rigid(s, r)
        }
    }
}

/// Resolve every candidate pair in order. Returns total contacts.
pub fn resolve_pairs(bodies: &mut [Body], pairs: &[(usize, usize)]) -> usize {
    pairs.iter().map(|&(i, j)| collide_pair(bodies, i, j)).sum()
}
