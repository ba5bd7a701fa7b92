//! Player slots and source identity
//!
//! Every input source carries a stable string id (`hand-0`, `touch-17`, ...).
//! Slices are credited to one of four fixed score buckets resolved from that
//! id. Ids outside the recognized families still score: they credit slot one
//! rather than dropping the event.

use serde::{Deserialize, Serialize};

/// One of the four fixed score buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerSlot {
    One,
    Two,
    Three,
    Four,
}

impl PlayerSlot {
    pub const ALL: [PlayerSlot; 4] = [
        PlayerSlot::One,
        PlayerSlot::Two,
        PlayerSlot::Three,
        PlayerSlot::Four,
    ];

    /// Zero-based index into the score table
    #[inline]
    pub fn index(self) -> usize {
        match self {
            PlayerSlot::One => 0,
            PlayerSlot::Two => 1,
            PlayerSlot::Three => 2,
            PlayerSlot::Four => 3,
        }
    }

    fn from_index(i: u32) -> Option<Self> {
        match i {
            0 => Some(PlayerSlot::One),
            1 => Some(PlayerSlot::Two),
            2 => Some(PlayerSlot::Three),
            3 => Some(PlayerSlot::Four),
            _ => None,
        }
    }
}

/// Resolve a source id to its owning player slot
///
/// Recognized families are `hand-N` (tracked hands) and `touch-N` (pointer
/// events), with N in 0..=3 mapping to slots one through four. Anything
/// else, including family indices past four, falls back to slot one.
pub fn resolve_slot(source_id: &str) -> PlayerSlot {
    for family in ["hand-", "touch-"] {
        if let Some(suffix) = source_id.strip_prefix(family) {
            if let Some(slot) = suffix.parse().ok().and_then(PlayerSlot::from_index) {
                return slot;
            }
        }
    }
    PlayerSlot::One
}
