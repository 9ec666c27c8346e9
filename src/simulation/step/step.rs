use log::{trace, warn};

use crate::systems::{collision, forces, integrate};

use super::{PerfTimer, WorldCore};

pub(super) fn step(world: &mut WorldCore, dt: f32) {
    if !(dt.is_finite() && dt > 0.0) {
        warn!("ignoring step with invalid dt {dt}");
        return;
    }

    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    let gravity = world.config.gravity;
    let (width, height) = (world.config.width, world.config.height);

    // === FORCES ===
    let (active_springs, forces_ms) = PerfTimer::stage(perf_on, || {
        forces::apply_gravity(&mut world.bodies, gravity);
        forces::apply_spring_forces(&mut world.bodies)
    });

    // === INTEGRATION + BOUNDARY CLAMP ===
    let ((), integrate_ms) = PerfTimer::stage(perf_on, || {
        integrate::integrate_bodies(&mut world.bodies, dt, width, height)
    });

    // === BROAD PHASE ===
    let ((), broad_phase_ms) = PerfTimer::stage(perf_on, || rebuild_broad_phase(world));

    // === NARROW PHASE ===
    let (contacts, narrow_phase_ms) = PerfTimer::stage(perf_on, || {
        collision::resolve_pairs(&mut world.bodies, &world.candidate_pairs)
    });

    for body in world.bodies.iter_mut() {
        body.sync_transform();
    }

    world.frame += 1;
    trace!(
        "frame {}: {} candidate pairs, {} contacts",
        world.frame,
        world.candidate_pairs.len(),
        contacts
    );

    if let Some(t0) = step_start {
        let stats = &mut world.perf_stats;
        stats.step_ms = t0.elapsed_ms();
        stats.forces_ms = forces_ms;
        stats.integrate_ms = integrate_ms;
        stats.broad_phase_ms = broad_phase_ms;
        stats.narrow_phase_ms = narrow_phase_ms;
        stats.candidate_pairs = world.candidate_pairs.len() as u32;
        stats.contacts = contacts as u32;
        stats.active_springs = active_springs as u32;
        stats.body_count = world.bodies.len() as u32;
        stats.point_count = world.bodies.iter().map(|b| b.points().len() as u32).sum();
        stats.spring_count = world.bodies.iter().map(|b| b.springs().len() as u32).sum();
    }
}

fn rebuild_broad_phase(world: &mut WorldCore) {
    world.broad_phase.clear();
    for (index, body) in world.bodies.iter().enumerate() {
        world.broad_phase.insert(index, body.bounds());
    }
    world.candidate_pairs = world.broad_phase.candidate_pairs();
}

/// Fixed-step accumulator. Runs at most `max_substeps` steps per call and
/// drops whatever backlog remains after that.
pub(super) fn advance(world: &mut WorldCore, frame_dt: f32) -> u32 {
    if !(frame_dt.is_finite() && frame_dt > 0.0) {
        return 0;
    }

    let fixed_dt = world.config.fixed_timestep;
    let max_substeps = world.config.max_substeps;
    world.accumulator += frame_dt;

    let mut steps = 0;
    while world.accumulator >= fixed_dt {
        if steps >= max_substeps {
            warn!(
                "fixed-step backlog of {:.4}s dropped after {steps} substeps",
                world.accumulator
            );
            world.accumulator = 0.0;
            break;
        }
        step(world, fixed_dt);
        world.accumulator -= fixed_dt;
        steps += 1;
    }
    steps
}
