//! Shape kinds shared by soft and rigid bodies, and the rigid shape descriptor.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

use crate::core::math::{polygon_area, polygon_centroid, regular_ring, Vec2};

use super::error::{PhysicsError, Result};

pub const SHAPE_CIRCLE: u8 = 0;
pub const SHAPE_SQUARE: u8 = 1;
pub const SHAPE_TRIANGLE: u8 = 2;
pub const SHAPE_POLYGON: u8 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum ShapeKind {
    Circle,
    Square,
    Triangle,
    Polygon { sides: u32 },
}

impl ShapeKind {
    /// Decode a host-side shape code. `Polygon` takes its side count from config.
    pub fn from_code(code: u8, polygon_sides: u32) -> Result<Self> {
        let kind = match code {
            SHAPE_CIRCLE => ShapeKind::Circle,
            SHAPE_SQUARE => ShapeKind::Square,
            SHAPE_TRIANGLE => ShapeKind::Triangle,
            SHAPE_POLYGON => ShapeKind::Polygon { sides: polygon_sides },
            other => return Err(PhysicsError::InvalidShape(format!("unknown shape code {other}"))),
        };
        kind.validate()?;
        Ok(kind)
    }

    pub fn code(&self) -> u8 {
        match self {
            ShapeKind::Circle => SHAPE_CIRCLE,
            ShapeKind::Square => SHAPE_SQUARE,
            ShapeKind::Triangle => SHAPE_TRIANGLE,
            ShapeKind::Polygon { .. } => SHAPE_POLYGON,
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            ShapeKind::Polygon { sides } if *sides < 3 => Err(PhysicsError::InvalidShape(format!(
                "polygon needs at least 3 sides, got {sides}"
            ))),
            _ => Ok(()),
        }
    }
}

/// Geometry of a rigid body, in body-local space (origin at the body point).
#[derive(Clone, Debug, PartialEq)]
pub struct RigidShape {
    pub kind: ShapeKind,
    /// Side length (square/triangle) or radius (circle/polygon)
    pub size: f32,
    pub half_size: f32,
    pub radius: f32,
    /// Explicit outline for triangles and polygons, empty otherwise
    pub outline: Vec<Vec2>,
    pub centroid: Vec2,
    pub area: f32,
}

impl RigidShape {
    pub fn new(kind: ShapeKind, size: f32) -> Result<Self> {
        kind.validate()?;
        if !size.is_finite() || size <= 0.0 {
            return Err(PhysicsError::InvalidScale(size));
        }

        let half_size = size / 2.0;
        let radius = size;

        let outline = match kind {
            ShapeKind::Circle | ShapeKind::Square => Vec::new(),
            ShapeKind::Triangle => vec![
                Vec2::new(0.0, -half_size),
                Vec2::new(-half_size, half_size),
                Vec2::new(half_size, half_size),
            ],
            ShapeKind::Polygon { sides } => regular_ring(Vec2::zero(), radius, sides as usize),
        };

        let (area, centroid) = match kind {
            ShapeKind::Circle => (PI * radius * radius, Vec2::zero()),
            ShapeKind::Square => (size * size, Vec2::zero()),
            ShapeKind::Triangle | ShapeKind::Polygon { .. } => {
                (polygon_area(&outline), polygon_centroid(&outline))
            }
        };

        Ok(Self {
            kind,
            size,
            half_size,
            radius,
            outline,
            centroid,
            area,
        })
    }

    /// Moment of inertia about the body point for a given mass.
    pub fn moment_of_inertia(&self, mass: f32) -> f32 {
        let s = self.size;
        match self.kind {
            // Effective radius is half the collider extent.
            ShapeKind::Circle => 0.5 * mass * (s / 2.0) * (s / 2.0),
            ShapeKind::Square => (1.0 / 12.0) * mass * (s * s + s * s),
            ShapeKind::Triangle => (1.0 / 18.0) * mass * (s * s + s * s),
            ShapeKind::Polygon { sides } => {
                let n = sides as f32;
                let r = self.radius;
                (1.0 / 6.0) * mass * r * r * (1.0 / (1.0 - 1.0 / (n * (PI / n).cos())))
            }
        }
    }

    /// Distance kept from the simulation walls.
    pub fn wall_extent(&self) -> f32 {
        match self.kind {
            ShapeKind::Circle | ShapeKind::Polygon { .. } => self.radius,
            ShapeKind::Square | ShapeKind::Triangle => self.half_size,
        }
    }

    /// Radius of a circle around the body point that encloses the shape.
    pub fn bounding_radius(&self) -> f32 {
        match self.kind {
            ShapeKind::Circle => self.radius,
            ShapeKind::Square => self.half_size * std::f32::consts::SQRT_2,
            ShapeKind::Triangle | ShapeKind::Polygon { .. } => self
                .outline
                .iter()
                .map(|v| v.length())
                .fold(0.0, f32::max),
        }
    }

    /// World-space outline at `position` rotated by `rotation`.
    ///
    /// Squares get their corners generated; circles have no outline.
    pub fn world_outline(&self, position: Vec2, rotation: f32) -> Vec<Vec2> {
        let h = self.half_size;
        let square;
        let local: &[Vec2] = match self.kind {
            ShapeKind::Circle => &[],
            ShapeKind::Square => {
                square = [
                    Vec2::new(-h, -h),
                    Vec2::new(h, -h),
                    Vec2::new(h, h),
                    Vec2::new(-h, h),
                ];
                &square
            }
            ShapeKind::Triangle | ShapeKind::Polygon { .. } => &self.outline,
        };
        local.iter().map(|v| position + v.rotate(rotation)).collect()
    }
}
