//! Error types for the physics core

use thiserror::Error;

use super::body::BodyHandle;

/// Configuration errors. Numeric degeneracies inside a step are never
/// surfaced here; they are skipped locally.
#[derive(Debug, Error)]
pub enum PhysicsError {
    /// Body creation requested without a spatial transform
    #[error("body has no transform to place it with")]
    MissingTransform,

    /// Mass must be finite and strictly positive
    #[error("invalid point mass: {0}")]
    InvalidMass(f32),

    /// Scale must be finite and strictly positive
    #[error("invalid body scale: {0}")]
    InvalidScale(f32),

    /// Shape kind or shape parameters cannot produce a body
    #[error("invalid shape: {0}")]
    InvalidShape(String),

    /// Handle does not refer to a live body
    #[error("body not found: {0:?}")]
    BodyNotFound(BodyHandle),

    /// Invalid configuration values
    #[error("invalid physics configuration: {0}")]
    InvalidConfig(String),

    /// Configuration JSON could not be parsed
    #[error("failed to parse physics configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

/// Result type for physics operations
pub type Result<T> = std::result::Result<T, PhysicsError>;
