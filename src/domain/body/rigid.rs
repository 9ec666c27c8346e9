//! RigidBody - a single point mass carrying a convex shape.

use crate::core::math::{Aabb, Vec2};
use crate::domain::error::Result;
use crate::domain::point_mass::PointMass;
use crate::domain::shape::{RigidShape, ShapeKind};

#[derive(Clone, Debug)]
pub struct RigidBody {
    pub shape: RigidShape,
    pub point: PointMass,
    /// Integrated angle in radians
    pub rotation: f32,
}

impl RigidBody {
    pub fn build(kind: ShapeKind, position: Vec2, size: f32, mass: f32) -> Result<Self> {
        let shape = RigidShape::new(kind, size)?;
        let inertia = shape.moment_of_inertia(mass);
        let point = PointMass::new(mass, position, true)?
            .with_collider_radius(shape.wall_extent())
            .with_inertia(inertia);

        Ok(Self {
            shape,
            point,
            rotation: 0.0,
        })
    }

    pub fn points(&self) -> &[PointMass] {
        std::slice::from_ref(&self.point)
    }

    pub fn points_mut(&mut self) -> &mut [PointMass] {
        std::slice::from_mut(&mut self.point)
    }

    pub fn bounds(&self) -> Aabb {
        let extent = match self.shape.kind {
            ShapeKind::Circle | ShapeKind::Square => self.point.collider_radius,
            ShapeKind::Triangle | ShapeKind::Polygon { .. } => self.shape.bounding_radius(),
        };
        Aabb::from_center(self.point.position, Vec2::splat(extent))
    }

    /// Axis-aligned box of the unrotated shape, as used by square contacts.
    pub fn local_box(&self) -> Aabb {
        Aabb::from_center(self.point.position, Vec2::splat(self.shape.half_size))
    }

    pub fn world_outline(&self) -> Vec<Vec2> {
        self.shape.world_outline(self.point.position, self.rotation)
    }

    pub fn integrate_rotation(&mut self, dt: f32) {
        if self.point.affected_by_forces {
            self.rotation += self.point.angular_velocity * dt;
        }
    }
}
