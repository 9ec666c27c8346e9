use serde::{Deserialize, Serialize};

use crate::core::math::Vec2;

use super::error::{PhysicsError, Result};

pub const DEFAULT_WIDTH: f32 = 1280.0;
pub const DEFAULT_HEIGHT: f32 = 720.0;
pub const DEFAULT_GRAVITY: Vec2 = Vec2::new(0.0, 200.0);
pub const DEFAULT_FIXED_TIMESTEP: f32 = 1.0 / 60.0;
pub const DEFAULT_MAX_SUBSTEPS: u32 = 8;
pub const DEFAULT_SOFT_POINT_RADIUS: f32 = 10.0;
pub const DEFAULT_POLYGON_SIDES: u32 = 5;
pub const DEFAULT_RNG_SEED: u32 = 0x9E37_79B9;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BroadPhaseKind {
    QuadTree,
    HashGrid,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BroadPhaseConfig {
    pub kind: BroadPhaseKind,
    /// Quadtree: objects a node holds before it splits
    pub max_objects: usize,
    /// Quadtree: maximum split depth
    pub max_levels: u32,
    /// Hash grid: cell edge length
    pub cell_size: f32,
}

impl Default for BroadPhaseConfig {
    fn default() -> Self {
        Self {
            kind: BroadPhaseKind::QuadTree,
            max_objects: 10,
            max_levels: 5,
            cell_size: 100.0,
        }
    }
}

/// World configuration; any missing JSON field takes its default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhysicsConfig {
    pub width: f32,
    pub height: f32,
    pub gravity: Vec2,
    pub fixed_timestep: f32,
    pub max_substeps: u32,
    pub soft_point_radius: f32,
    pub soft_point_mass: f32,
    pub rigid_mass: f32,
    /// `[min, max]` factor applied to rigid scale; `min == max` disables randomization
    pub rigid_scale_range: [f32; 2],
    pub polygon_sides: u32,
    pub broad_phase: BroadPhaseConfig,
    pub rng_seed: u32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            gravity: DEFAULT_GRAVITY,
            fixed_timestep: DEFAULT_FIXED_TIMESTEP,
            max_substeps: DEFAULT_MAX_SUBSTEPS,
            soft_point_radius: DEFAULT_SOFT_POINT_RADIUS,
            soft_point_mass: 1.0,
            rigid_mass: 1.0,
            rigid_scale_range: [1.05, 4.5],
            polygon_sides: DEFAULT_POLYGON_SIDES,
            broad_phase: BroadPhaseConfig::default(),
            rng_seed: DEFAULT_RNG_SEED,
        }
    }
}

impl PhysicsConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: PhysicsConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn with_bounds(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_gravity(mut self, gravity: Vec2) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_rigid_scale_range(mut self, min: f32, max: f32) -> Self {
        self.rigid_scale_range = [min, max];
        self
    }

    pub fn with_broad_phase(mut self, kind: BroadPhaseKind) -> Self {
        self.broad_phase.kind = kind;
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.rng_seed = seed;
        self
    }

    pub fn validate(&self) -> Result<()> {
        fn positive(name: &str, v: f32) -> Result<()> {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(PhysicsError::InvalidConfig(format!("{name} must be finite and > 0, got {v}")))
            }
        }

        positive("width", self.width)?;
        positive("height", self.height)?;
        positive("fixedTimestep", self.fixed_timestep)?;
        positive("softPointMass", self.soft_point_mass)?;
        positive("rigidMass", self.rigid_mass)?;
        positive("broadPhase.cellSize", self.broad_phase.cell_size)?;

        if !self.gravity.is_finite() {
            return Err(PhysicsError::InvalidConfig("gravity must be finite".into()));
        }
        if !self.soft_point_radius.is_finite() || self.soft_point_radius < 0.0 {
            return Err(PhysicsError::InvalidConfig(format!(
                "softPointRadius must be finite and >= 0, got {}",
                self.soft_point_radius
            )));
        }
        if self.max_substeps == 0 {
            return Err(PhysicsError::InvalidConfig("maxSubsteps must be >= 1".into()));
        }
        let [lo, hi] = self.rigid_scale_range;
        positive("rigidScaleRange[0]", lo)?;
        positive("rigidScaleRange[1]", hi)?;
        if lo > hi {
            return Err(PhysicsError::InvalidConfig(format!("rigidScaleRange min {lo} exceeds max {hi}")));
        }
        if self.polygon_sides < 3 {
            return Err(PhysicsError::InvalidConfig(format!(
                "polygonSides must be >= 3, got {}",
                self.polygon_sides
            )));
        }
        if self.broad_phase.max_objects == 0 {
            return Err(PhysicsError::InvalidConfig("broadPhase.maxObjects must be >= 1".into()));
        }
        Ok(())
    }
}
