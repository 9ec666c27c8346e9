//! World - soft and rigid body simulation
//!
//! `WorldCore` owns every body and only orchestrates: the per-step work
//! lives in `systems/`, spatial queries in `spatial/`.
//!
//! Fixed step order:
//! 1. gravity + spring forces
//! 2. integration + boundary clamp
//! 3. broad-phase rebuild and candidate pairs
//! 4. narrow phase and resolution
//! 5. transform write-back

use crate::core::math::Vec2;
use crate::domain::{Body, BodyDesc, BodyHandle, PhysicsConfig, Result, ShapeKind, Transform};
use crate::spatial::BroadPhase;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/random.rs"]
mod random;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::World;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// The simulation world
pub struct WorldCore {
    config: PhysicsConfig,
    bodies: Vec<Body>,
    broad_phase: BroadPhase,
    candidate_pairs: Vec<(usize, usize)>,

    // State
    next_id: u32,
    frame: u64,
    accumulator: f32,
    rng_state: u32,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl WorldCore {
    /// Create a new world with given dimensions and default settings
    pub fn new(width: f32, height: f32) -> Self {
        init::create_world_core(width, height)
    }

    /// Create a world from an explicit (validated) configuration
    pub fn with_config(config: PhysicsConfig) -> Result<Self> {
        init::create_world_core_with_config(config)
    }

    pub fn from_config_json(json: &str) -> Result<Self> {
        Self::with_config(PhysicsConfig::from_json(json)?)
    }

    pub fn config(&self) -> &PhysicsConfig { &self.config }

    pub fn width(&self) -> f32 { self.config.width }

    pub fn height(&self) -> f32 { self.config.height }

    pub fn gravity(&self) -> Vec2 { self.config.gravity }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn body_count(&self) -> usize { self.bodies.len() }

    pub fn point_count(&self) -> usize {
        self.bodies.iter().map(|b| b.points().len()).sum()
    }

    pub fn spring_count(&self) -> usize {
        self.bodies.iter().map(|b| b.springs().len()).sum()
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Non-finite components are rejected and the old gravity is kept.
    pub fn set_gravity(&mut self, x: f32, y: f32) -> Result<()> {
        settings::set_gravity(self, x, y)
    }

    /// Resize the simulation area; points are clamped on the next step.
    pub fn set_bounds(&mut self, width: f32, height: f32) -> Result<()> {
        settings::set_bounds(self, width, height)
    }

    // === BODY API ===

    pub fn create_soft_body(&mut self, shape: ShapeKind, position: Vec2, scale: f32) -> Result<BodyHandle> {
        commands::create_soft_body(self, shape, position, scale)
    }

    /// Rigid size is `scale` times a random factor from the configured range.
    pub fn create_rigid_body(&mut self, shape: ShapeKind, position: Vec2, scale: f32) -> Result<BodyHandle> {
        commands::create_rigid_body(self, shape, position, scale)
    }

    pub fn spawn(&mut self, desc: &BodyDesc) -> Result<BodyHandle> {
        commands::spawn(self, desc)
    }

    pub fn destroy_body(&mut self, handle: BodyHandle) -> Result<()> {
        commands::destroy_body(self, handle)
    }

    /// Radial velocity kick around `center`. Returns the number of points hit.
    pub fn apply_explosion(&mut self, center: Vec2, strength: f32, radius: f32) -> usize {
        commands::apply_explosion(self, center, strength, radius)
    }

    /// Remove every body
    pub fn clear(&mut self) {
        commands::clear(self);
    }

    // === STEPPING ===

    /// Run exactly one fixed step of `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        step::step(self, dt);
    }

    /// Feed frame time into the fixed-step accumulator. Returns steps run.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        step::advance(self, frame_dt)
    }

    // === QUERIES ===

    pub fn bodies(&self) -> &[Body] { &self.bodies }

    pub fn body(&self, handle: BodyHandle) -> Option<&Body> {
        render_extract::body(self, handle)
    }

    pub fn body_handles(&self) -> Vec<BodyHandle> {
        self.bodies.iter().map(|b| b.handle).collect()
    }

    pub fn point_positions(&self, handle: BodyHandle) -> Option<Vec<Vec2>> {
        render_extract::point_positions(self, handle)
    }

    pub fn spring_segments(&self, handle: BodyHandle) -> Option<Vec<(Vec2, Vec2)>> {
        render_extract::spring_segments(self, handle)
    }

    pub fn centroid(&self, handle: BodyHandle) -> Option<Vec2> {
        render_extract::centroid(self, handle)
    }

    pub fn rotation(&self, handle: BodyHandle) -> Option<f32> {
        render_extract::rotation(self, handle)
    }

    pub fn transform(&self, handle: BodyHandle) -> Option<Transform> {
        render_extract::transform(self, handle)
    }

    /// World-space outline of a rigid body (empty for circles)
    pub fn outline(&self, handle: BodyHandle) -> Option<Vec<Vec2>> {
        render_extract::outline(self, handle)
    }

    /// Candidate pairs (body indices) found by the last step's broad phase
    pub fn last_candidate_pairs(&self) -> &[(usize, usize)] { &self.candidate_pairs }

    fn index_of(&self, handle: BodyHandle) -> Option<usize> {
        self.bodies.iter().position(|b| b.handle == handle)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
