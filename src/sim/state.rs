//! Game state and lifecycle
//!
//! All simulation state is owned by `GameState` and mutated only through its
//! own methods plus the per-frame `tick`. The trail map is session state: it
//! is reset by `start` and never shared with collaborators mutably.

use std::collections::BTreeMap;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::fruit::Fruit;
use super::player::PlayerSlot;
use super::trail::Trail;
use crate::config::SimConfig;

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Whether ticks advance the simulation
    pub running: bool,
    /// Active fruits, in spawn order
    pub fruits: Vec<Fruit>,
    /// Active trails keyed by source id (ordered map for deterministic
    /// collision-pass iteration)
    pub trails: BTreeMap<String, Trail>,
    /// Tuning and field bounds
    pub config: SimConfig,
    /// Timestamp of the last spawn batch
    pub last_spawn_ms: f64,
    /// Current interval between spawn batches, clamped to the floor
    pub spawn_interval_ms: f64,
    scores: [u64; 4],
    pub(super) rng: Pcg32,
}

impl GameState {
    /// Create an idle state with the given tuning and seed
    pub fn new(config: SimConfig, seed: u64) -> Self {
        Self {
            seed,
            running: false,
            fruits: Vec::new(),
            trails: BTreeMap::new(),
            last_spawn_ms: 0.0,
            spawn_interval_ms: config.spawn_base_interval_ms,
            config,
            scores: [0; 4],
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Begin a session: scores, fruits and trails reset, ticking enabled
    pub fn start(&mut self, now_ms: f64) {
        self.scores = [0; 4];
        self.fruits.clear();
        self.trails.clear();
        self.last_spawn_ms = now_ms;
        self.spawn_interval_ms = self.config.spawn_base_interval_ms;
        self.running = true;
        log::info!("session started (seed {})", self.seed);
    }

    /// Halt ticking; state stays inspectable for a final score readout
    pub fn stop(&mut self) {
        self.running = false;
        log::info!("session stopped, scores {:?}", self.scores);
    }

    /// Feed one input point from a source
    ///
    /// The sole mutator of the trail map: creates a trail lazily for an
    /// unseen source id (keeping its color hint) and appends the position.
    /// Non-finite coordinates are rejected here rather than propagated into
    /// physics. The point is visible to the next tick's collision pass.
    pub fn update_input(&mut self, source_id: &str, pos: Vec2, color: &str, now_ms: f64) {
        if !pos.is_finite() {
            log::warn!("dropping non-finite input from {source_id}: {pos:?}");
            return;
        }
        let trail = self
            .trails
            .entry(source_id.to_owned())
            .or_insert_with(|| Trail::new(color, now_ms));
        trail.add_point(pos, now_ms);
    }

    /// Score for one player slot
    pub fn score(&self, slot: PlayerSlot) -> u64 {
        self.scores[slot.index()]
    }

    /// All four scores, indexed by slot
    pub fn scores(&self) -> [u64; 4] {
        self.scores
    }

    /// Sum across all slots (drives the difficulty ramp)
    pub fn total_score(&self) -> u64 {
        self.scores.iter().sum()
    }

    pub(super) fn award(&mut self, slot: PlayerSlot, points: u64) {
        self.scores[slot.index()] += points;
    }
}
