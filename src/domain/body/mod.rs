//! Body aggregate: a tagged `{Soft, Rigid}` variant plus its transform.

mod rigid;
mod soft;

pub use rigid::RigidBody;
pub use soft::{SoftBody, SoftPointParams};

use serde::{Deserialize, Serialize};

use crate::core::math::{Aabb, Vec2};

use super::point_mass::PointMass;
use super::shape::ShapeKind;
use super::spring::Spring;

/// Stable id of a body inside one world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BodyHandle(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transform {
    pub position: Vec2,
    pub scale: f32,
    #[serde(default)]
    pub rotation: f32,
}

impl Transform {
    pub fn new(position: Vec2, scale: f32) -> Self {
        Self {
            position,
            scale,
            rotation: 0.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BodyType {
    Soft,
    Rigid,
}

/// Spawn request. The transform is optional on the wire so that a missing
/// one surfaces as an error instead of a silent default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyDesc {
    pub body_type: BodyType,
    pub shape: ShapeKind,
    #[serde(default)]
    pub transform: Option<Transform>,
    /// Rigid only: multiply the scale by a random factor from the configured range
    #[serde(default = "default_randomize")]
    pub randomize_scale: bool,
}

fn default_randomize() -> bool {
    true
}

impl BodyDesc {
    pub fn soft(shape: ShapeKind, transform: Transform) -> Self {
        Self {
            body_type: BodyType::Soft,
            shape,
            transform: Some(transform),
            randomize_scale: false,
        }
    }

    pub fn rigid(shape: ShapeKind, transform: Transform) -> Self {
        Self {
            body_type: BodyType::Rigid,
            shape,
            transform: Some(transform),
            randomize_scale: true,
        }
    }
}

#[derive(Clone, Debug)]
pub enum BodyVariant {
    Soft(SoftBody),
    Rigid(RigidBody),
}

#[derive(Clone, Debug)]
pub struct Body {
    pub handle: BodyHandle,
    pub transform: Transform,
    pub variant: BodyVariant,
}

impl Body {
    pub fn body_type(&self) -> BodyType {
        match self.variant {
            BodyVariant::Soft(_) => BodyType::Soft,
            BodyVariant::Rigid(_) => BodyType::Rigid,
        }
    }

    pub fn shape(&self) -> ShapeKind {
        match &self.variant {
            BodyVariant::Soft(s) => s.shape,
            BodyVariant::Rigid(r) => r.shape.kind,
        }
    }

    #[inline]
    pub fn points(&self) -> &[PointMass] {
        match &self.variant {
            BodyVariant::Soft(s) => &s.points,
            BodyVariant::Rigid(r) => r.points(),
        }
    }

    #[inline]
    pub fn points_mut(&mut self) -> &mut [PointMass] {
        match &mut self.variant {
            BodyVariant::Soft(s) => &mut s.points,
            BodyVariant::Rigid(r) => r.points_mut(),
        }
    }

    /// Springs of a soft body; rigid bodies have none.
    #[inline]
    pub fn springs(&self) -> &[Spring] {
        match &self.variant {
            BodyVariant::Soft(s) => &s.springs,
            BodyVariant::Rigid(_) => &[],
        }
    }

    pub fn bounds(&self) -> Aabb {
        match &self.variant {
            BodyVariant::Soft(s) => s
                .bounds()
                .unwrap_or_else(|| Aabb::from_center(self.transform.position, Vec2::zero())),
            BodyVariant::Rigid(r) => r.bounds(),
        }
    }

    /// Soft: average point position. Rigid: the body point.
    pub fn centroid(&self) -> Vec2 {
        match &self.variant {
            BodyVariant::Soft(s) => s.centroid(),
            BodyVariant::Rigid(r) => r.point.position,
        }
    }

    /// Soft: estimated from the frame. Rigid: integrated angle.
    pub fn rotation(&self) -> f32 {
        match &self.variant {
            BodyVariant::Soft(s) => s.rotation(),
            BodyVariant::Rigid(r) => r.rotation,
        }
    }

    /// Write simulated position and rotation back into the transform.
    pub fn sync_transform(&mut self) {
        self.transform.position = self.centroid();
        self.transform.rotation = self.rotation();
    }

    pub fn as_soft(&self) -> Option<&SoftBody> {
        match &self.variant {
            BodyVariant::Soft(s) => Some(s),
            BodyVariant::Rigid(_) => None,
        }
    }

    pub fn as_rigid(&self) -> Option<&RigidBody> {
        match &self.variant {
            BodyVariant::Rigid(r) => Some(r),
            BodyVariant::Soft(_) => None,
        }
    }

    pub fn as_rigid_mut(&mut self) -> Option<&mut RigidBody> {
        match &mut self.variant {
            BodyVariant::Rigid(r) => Some(r),
            BodyVariant::Soft(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn soft_square() -> Body {
        let params = SoftPointParams {
            mass: 1.0,
            collider_radius: 10.0,
        };
        Body {
            handle: BodyHandle(1),
            transform: Transform::new(Vec2::new(100.0, 100.0), 40.0),
            variant: BodyVariant::Soft(
                SoftBody::build(ShapeKind::Square, Vec2::new(100.0, 100.0), 40.0, params).unwrap(),
            ),
        }
    }

    #[test]
    fn rigid_has_no_springs() {
        let body = Body {
            handle: BodyHandle(2),
            transform: Transform::new(Vec2::zero(), 5.0),
            variant: BodyVariant::Rigid(RigidBody::build(ShapeKind::Circle, Vec2::zero(), 5.0, 1.0).unwrap()),
        };
        assert!(body.springs().is_empty());
        assert_eq!(body.points().len(), 1);
        assert_eq!(body.body_type(), BodyType::Rigid);
    }

    #[test]
    fn sync_transform_tracks_centroid() {
        let mut body = soft_square();
        for p in body.points_mut() {
            p.position += Vec2::new(10.0, -5.0);
        }
        body.sync_transform();
        assert!(body.transform.position.approx_eq(Vec2::new(110.0, 95.0), 1e-4));
        assert!(body.transform.rotation.is_finite());
    }

    #[test]
    fn desc_parses_without_transform() {
        let desc: BodyDesc = serde_json::from_str(r#"{"bodyType":"rigid","shape":{"type":"square"}}"#).unwrap();
        assert!(desc.transform.is_none());
        assert!(desc.randomize_scale);
        assert_eq!(desc.shape, ShapeKind::Square);
    }
}
