//! Spring - damped linear constraint between two points of the same body.
//!
//! Endpoints are indices into the owning body's point array; a spring never
//! owns or copies its points.

use crate::core::math::{Vec2, EPSILON};

use super::error::{PhysicsError, Result};
use super::point_mass::PointMass;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    pub point_a: usize,
    pub point_b: usize,
    pub rest_length: f32,
    pub stiffness: f32,
    pub damping: f32,
}

/// Force contribution of one spring, logged before being flushed into points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringForce {
    pub point_a: usize,
    pub point_b: usize,
    /// Force on `point_a`; `point_b` receives the negation.
    pub force: Vec2,
}

impl Spring {
    /// Connect two points; rest length is their current distance.
    pub fn new(points: &[PointMass], a: usize, b: usize, stiffness: f32, damping: f32) -> Result<Self> {
        if a == b || a >= points.len() || b >= points.len() {
            return Err(PhysicsError::InvalidShape(format!(
                "spring endpoints ({a}, {b}) invalid for {} points",
                points.len()
            )));
        }
        Ok(Self {
            point_a: a,
            point_b: b,
            rest_length: points[a].position.distance(points[b].position),
            stiffness,
            damping,
        })
    }

    /// Hooke + damping force on `point_a`.
    ///
    /// `None` when the endpoints coincide (length below [`EPSILON`]).
    pub fn force(&self, points: &[PointMass]) -> Option<SpringForce> {
        let a = fast!(points, [self.point_a]);
        let b = fast!(points, [self.point_b]);

        let (dir, length) = (b.position - a.position).try_normalize()?;

        // Positive when stretched: A is pulled toward B.
        let stretch = self.stiffness * (length - self.rest_length);
        let relative_velocity = b.velocity - a.velocity;
        let damping = self.damping * relative_velocity.dot(dir);

        Some(SpringForce {
            point_a: self.point_a,
            point_b: self.point_b,
            force: dir * (stretch + damping),
        })
    }

    /// Segment endpoints, for edge contacts and renderers.
    #[inline]
    pub fn segment(&self, points: &[PointMass]) -> (Vec2, Vec2) {
        (points[self.point_a].position, points[self.point_b].position)
    }
}

impl SpringForce {
    /// Flush into the endpoint accelerations.
    #[inline]
    pub fn apply(&self, points: &mut [PointMass]) {
        fast!(mut points, [self.point_a]).apply_force(self.force);
        fast!(mut points, [self.point_b]).apply_force(-self.force);
    }
}
