//! Falling fruit entities
//!
//! Fruits launch from below the bottom edge, arc toward the horizontal
//! center, fall back under gravity and are removed once they leave the
//! field. Slicing is a one-shot transition: once sliced, a fruit never
//! reverts and never scores again.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::segment_distance;
use crate::consts::{FRUIT_GRAVITY, FRUIT_RADIUS, FRUIT_SPAWN_DEPTH, MIN_SLICE_SEGMENT};

/// Fruit varieties (rendering hint only, no behavioral difference)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FruitKind {
    Apple,
    Orange,
    Watermelon,
    Banana,
}

impl FruitKind {
    /// Display color for renderers
    pub fn color(&self) -> &'static str {
        match self {
            FruitKind::Apple => "#ff4757",
            FruitKind::Orange => "#ffa502",
            FruitKind::Watermelon => "#2ed573",
            FruitKind::Banana => "#eccc68",
        }
    }

    fn from_index(i: u32) -> Self {
        match i {
            0 => FruitKind::Apple,
            1 => FruitKind::Orange,
            2 => FruitKind::Watermelon,
            _ => FruitKind::Banana,
        }
    }
}

/// A spawned fruit
#[derive(Debug, Clone)]
pub struct Fruit {
    pub pos: Vec2,
    /// Pixels per tick
    pub vel: Vec2,
    pub radius: f32,
    pub kind: FruitKind,
    /// Radians, advanced by `rotation_speed` each tick
    pub rotation: f32,
    pub rotation_speed: f32,
    /// Per-tick² downward acceleration, fixed at construction
    pub gravity: f32,
    pub sliced: bool,
}

impl Fruit {
    /// Spawn a fruit just below the bottom edge of a (width, height) field
    ///
    /// The launch velocity aims at a jittered point near the horizontal
    /// center with an upward bias, so fruits feel thrown rather than
    /// dropped.
    pub fn spawn<R: Rng>(rng: &mut R, width: f32, height: f32) -> Self {
        let kind = FruitKind::from_index(rng.random_range(0..4));
        let pos = Vec2::new(rng.random_range(0.0..width), height + FRUIT_SPAWN_DEPTH);

        let target_x = width / 2.0 + (rng.random::<f32>() - 0.5) * width * 0.5;
        let launch_power = height * 0.015 + rng.random::<f32>() * 5.0;
        let angle = (-launch_power).atan2(target_x - pos.x);

        let vel = Vec2::new(
            angle.cos() * (5.0 + rng.random::<f32>() * 5.0),
            -launch_power - rng.random::<f32>() * 5.0,
        );

        Self {
            pos,
            vel,
            radius: FRUIT_RADIUS,
            kind,
            rotation: 0.0,
            rotation_speed: (rng.random::<f32>() - 0.5) * 0.1,
            gravity: FRUIT_GRAVITY,
            sliced: false,
        }
    }

    /// Advance one tick: explicit Euler step plus rotation
    pub fn update(&mut self) {
        self.pos += self.vel;
        self.vel.y += self.gravity;
        self.rotation += self.rotation_speed;
    }

    /// Test the swept segment against this fruit, slicing on a hit
    ///
    /// Returns true only on the first successful hit. Near-coincident
    /// endpoints (a stationary trail) never slice.
    pub fn check_slice(&mut self, start: Vec2, end: Vec2) -> bool {
        if self.sliced {
            return false;
        }
        if start.distance(end) < MIN_SLICE_SEGMENT {
            return false;
        }
        if segment_distance(self.pos, start, end) < self.radius {
            self.sliced = true;
            return true;
        }
        false
    }

    /// True once the fruit has fallen past the bottom boundary plus margin
    pub fn is_below(&self, height: f32, margin: f32) -> bool {
        self.pos.y >= height + margin
    }
}
