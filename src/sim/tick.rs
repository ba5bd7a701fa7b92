//! Per-frame simulation update
//!
//! The host scheduler calls `tick` once per rendering frame with the current
//! monotonic timestamp. Order within a tick: spawn decision, fruit physics,
//! trail decay, collision pass, cleanup. Input fed between ticks is always
//! visible to the next collision pass, never retroactively.

use glam::Vec2;
use rand::Rng;

use super::fruit::Fruit;
use super::player::{PlayerSlot, resolve_slot};
use super::state::GameState;
use crate::config::SimConfig;
use crate::consts::SPAWN_MAX_BATCH;

/// Advance the simulation by one frame
///
/// No-op unless the state is running; `stop` therefore takes effect at the
/// top of the next tick.
pub fn tick(state: &mut GameState, now_ms: f64) {
    if !state.running {
        return;
    }

    spawn_batch(state, now_ms);

    for fruit in &mut state.fruits {
        fruit.update();
    }

    for trail in state.trails.values_mut() {
        trail.update(now_ms);
    }
    state.trails.retain(|_, trail| !trail.is_stale(now_ms));

    // Collect segments first so the pass over fruits can mutate them
    let segments: Vec<(PlayerSlot, Vec2, Vec2)> = state
        .trails
        .iter()
        .filter_map(|(id, trail)| {
            trail
                .latest_segment()
                .map(|(start, end)| (resolve_slot(id), start, end))
        })
        .collect();

    let mut sliced_points = [0u64; 4];
    for (slot, start, end) in segments {
        for fruit in &mut state.fruits {
            if fruit.check_slice(start, end) {
                sliced_points[slot.index()] += state.config.slice_reward;
            }
        }
    }
    for slot in PlayerSlot::ALL {
        if sliced_points[slot.index()] > 0 {
            state.award(slot, sliced_points[slot.index()]);
        }
    }

    let (height, margin) = (state.config.field_height, state.config.cull_margin);
    state.fruits.retain(|fruit| !fruit.is_below(height, margin));
}

/// Spawn 1-3 fruits once the interval has elapsed, then ramp difficulty
fn spawn_batch(state: &mut GameState, now_ms: f64) {
    if now_ms - state.last_spawn_ms <= state.spawn_interval_ms {
        return;
    }
    let count = state.rng.random_range(1..=SPAWN_MAX_BATCH);
    for _ in 0..count {
        let fruit = Fruit::spawn(
            &mut state.rng,
            state.config.field_width,
            state.config.field_height,
        );
        state.fruits.push(fruit);
    }
    state.last_spawn_ms = now_ms;
    state.spawn_interval_ms = next_spawn_interval(state.total_score(), &state.config);
    log::debug!(
        "spawned {count} fruits, next batch in {:.0}ms",
        state.spawn_interval_ms
    );
}

/// Spawn interval for a given total score: baseline minus the score ramp,
/// never below the floor
pub fn next_spawn_interval(total_score: u64, config: &SimConfig) -> f64 {
    (config.spawn_base_interval_ms - total_score as f64 * config.spawn_score_factor)
        .max(config.spawn_min_interval_ms)
}
