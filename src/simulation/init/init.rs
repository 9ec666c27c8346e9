use log::{debug, info};

use crate::domain::{PhysicsConfig, Result};
use crate::spatial::BroadPhase;

use super::perf_stats::PerfStats;
use super::random;
use super::WorldCore;

pub(super) fn create_world_core(width: f32, height: f32) -> WorldCore {
    let config = PhysicsConfig::default().with_bounds(width.max(1.0), height.max(1.0));
    build(config)
}

pub(super) fn create_world_core_with_config(config: PhysicsConfig) -> Result<WorldCore> {
    config.validate()?;
    Ok(build(config))
}

fn build(config: PhysicsConfig) -> WorldCore {
    info!(
        "creating world {}x{} (gravity {:?}, broad phase {:?})",
        config.width, config.height, config.gravity, config.broad_phase.kind
    );
    debug!("physics config: {config:?}");

    WorldCore {
        broad_phase: BroadPhase::new(&config.broad_phase, config.width, config.height),
        bodies: Vec::new(),
        candidate_pairs: Vec::new(),
        next_id: 1,
        frame: 0,
        accumulator: 0.0,
        rng_state: random::seed_state(config.rng_seed),
        perf_enabled: false,
        perf_stats: PerfStats::default(),
        config,
    }
}
