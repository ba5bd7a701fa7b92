//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Host-supplied timestamps only (no internal clock reads)
//! - Seeded RNG only
//! - Stable iteration order (trails keyed by source id, fruits in spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod fruit;
pub mod player;
pub mod state;
pub mod tick;
pub mod trail;

pub use collision::{segment_closest_point, segment_distance};
pub use fruit::{Fruit, FruitKind};
pub use player::{PlayerSlot, resolve_slot};
pub use state::GameState;
pub use tick::tick;
pub use trail::{Trail, TrailPoint};
