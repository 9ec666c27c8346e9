//! PointMass - the atomic dynamical unit.
//!
//! `acceleration` is a per-step accumulator: forces add into it, and
//! [`PointMass::integrate`] consumes and clears it.

use crate::core::math::Vec2;

use super::error::{PhysicsError, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct PointMass {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    mass: f32,
    inv_mass: f32,
    /// Contact radius around `position` (0 for a pure point)
    pub collider_radius: f32,
    /// Radians per second (rigid bodies only)
    pub angular_velocity: f32,
    /// Rotational inertia (rigid bodies only, 0 = cannot rotate)
    pub moment_of_inertia: f32,
    /// Static points ignore forces and are never integrated
    pub affected_by_forces: bool,
}

impl PointMass {
    /// Create a point. Mass must be finite and > 0.
    pub fn new(mass: f32, position: Vec2, affected_by_forces: bool) -> Result<Self> {
        if !mass.is_finite() || mass <= 0.0 {
            return Err(PhysicsError::InvalidMass(mass));
        }
        Ok(Self {
            position,
            velocity: Vec2::zero(),
            acceleration: Vec2::zero(),
            mass,
            inv_mass: 1.0 / mass,
            collider_radius: 0.0,
            angular_velocity: 0.0,
            moment_of_inertia: 0.0,
            affected_by_forces,
        })
    }

    pub fn with_collider_radius(mut self, radius: f32) -> Self {
        self.collider_radius = radius.max(0.0);
        self
    }

    pub fn with_inertia(mut self, moment_of_inertia: f32) -> Self {
        self.moment_of_inertia = moment_of_inertia.max(0.0);
        self
    }

    #[inline]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    #[inline]
    pub fn inv_mass(&self) -> f32 {
        self.inv_mass
    }

    /// Inverse inertia, 0 when the point has no rotational state.
    #[inline]
    pub fn inv_inertia(&self) -> f32 {
        if self.moment_of_inertia > 0.0 {
            1.0 / self.moment_of_inertia
        } else {
            0.0
        }
    }

    /// Accumulate `force / mass` into acceleration (no-op for static points).
    #[inline]
    pub fn apply_force(&mut self, force: Vec2) {
        if !self.affected_by_forces {
            return;
        }
        self.acceleration += force * self.inv_mass;
    }

    /// Instant velocity change of `impulse / mass` (no-op for static points).
    #[inline]
    pub fn apply_impulse(&mut self, impulse: Vec2) {
        if !self.affected_by_forces {
            return;
        }
        self.velocity += impulse * self.inv_mass;
    }

    /// Semi-implicit Euler: velocity first, then position with the new velocity.
    #[inline]
    pub fn integrate(&mut self, dt: f32) {
        if self.affected_by_forces {
            self.velocity += self.acceleration * dt;
            self.position += self.velocity * dt;
        }
        self.acceleration = Vec2::zero();
    }

    /// Keep the point inside `[r, width - r] × [r, height - r]`.
    ///
    /// Contact with a wall is inelastic: the clamped velocity component is zeroed.
    pub fn clamp_to_bounds(&mut self, width: f32, height: f32) {
        let r = self.collider_radius;

        if self.position.x - r < 0.0 {
            self.position.x = r;
            self.velocity.x = 0.0;
        } else if self.position.x + r > width {
            self.position.x = width - r;
            self.velocity.x = 0.0;
        }

        if self.position.y - r < 0.0 {
            self.position.y = r;
            self.velocity.y = 0.0;
        } else if self.position.y + r > height {
            self.position.y = height - r;
            self.velocity.y = 0.0;
        }
    }
}
