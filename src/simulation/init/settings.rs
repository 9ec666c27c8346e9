use log::debug;

use crate::core::math::Vec2;
use crate::domain::{PhysicsError, Result};

use super::perf_stats::PerfStats;
use super::WorldCore;

pub(super) fn enable_perf_metrics(world: &mut WorldCore, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(world: &WorldCore) -> PerfStats {
    world.perf_stats.clone()
}

pub(super) fn set_gravity(world: &mut WorldCore, x: f32, y: f32) -> Result<()> {
    if !(x.is_finite() && y.is_finite()) {
        return Err(PhysicsError::InvalidConfig(format!("gravity must be finite, got ({x}, {y})")));
    }
    world.config.gravity = Vec2::new(x, y);
    Ok(())
}

pub(super) fn set_bounds(world: &mut WorldCore, width: f32, height: f32) -> Result<()> {
    if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
        return Err(PhysicsError::InvalidConfig(format!("bounds must be positive, got {width}x{height}")));
    }
    debug!("bounds {}x{} -> {width}x{height}", world.config.width, world.config.height);
    world.config.width = width;
    world.config.height = height;
    world.broad_phase.resize(width, height);
    Ok(())
}
