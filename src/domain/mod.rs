//! Domain model: points, springs, shapes, bodies and world configuration.

pub mod body;
pub mod config;
pub mod error;
pub mod point_mass;
pub mod shape;
pub mod spring;

pub use body::{Body, BodyDesc, BodyHandle, BodyType, BodyVariant, RigidBody, SoftBody, SoftPointParams, Transform};
pub use config::{BroadPhaseConfig, BroadPhaseKind, PhysicsConfig};
pub use error::{PhysicsError, Result};
pub use point_mass::PointMass;
pub use shape::{RigidShape, ShapeKind};
pub use spring::{Spring, SpringForce};

/// Coefficient of restitution for every contact
pub const RESTITUTION: f32 = 0.5;
