//! Fruit Slash entry point
//!
//! Headless demo driver. Real hosts (hand tracking, pointer capture,
//! rendering) integrate by calling `GameState::update_input` from their
//! input callbacks and `sim::tick` once per frame; this binary stands in
//! with two scripted sources so the simulation can be exercised end to end.

use glam::Vec2;

use fruit_slash::SimConfig;
use fruit_slash::sim::{GameState, PlayerSlot, tick};

/// Demo cadence: 60 frames per simulated second
const FRAME_MS: f64 = 1000.0 / 60.0;

fn main() {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => SimConfig::load(std::path::Path::new(&path)),
        None => SimConfig::default(),
    };
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    log::info!("fruit-slash demo starting (seed {seed})");

    let (w, h) = (config.field_width, config.field_height);
    let mut state = GameState::new(config, seed);
    state.start(0.0);

    // One "hand" weaving across the field, one pointer drag oscillating
    // over the lower half
    for frame in 0..600u32 {
        let now = frame as f64 * FRAME_MS;
        let t = now / 1000.0;

        let hand = Vec2::new(
            w * (0.5 + 0.45 * (t * 2.1).sin() as f32),
            h * (0.5 + 0.35 * (t * 3.3).cos() as f32),
        );
        state.update_input("hand-0", hand, "#ff4757", now);

        let drag = Vec2::new(w * (0.5 - 0.4 * (t * 1.7).cos() as f32), h * 0.75);
        state.update_input("touch-1", drag, "#2e86de", now);

        tick(&mut state, now);
    }

    state.stop();

    for slot in PlayerSlot::ALL {
        log::info!("player {:?}: {} points", slot, state.score(slot));
    }
    let summary = serde_json::to_string(&state.scores()).expect("score table serializes");
    println!("{summary}");
}
