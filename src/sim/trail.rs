//! Input trails
//!
//! A trail models motion, not position: a single point can't slice anything.
//! Collision is tested against the segment between the last two points, so
//! each trail keeps a short timestamped history that decays with age.

use glam::Vec2;

use crate::consts::{TRAIL_EVICT_GRACE_MS, TRAIL_MAX_AGE_MS};

/// A single timestamped trail sample
#[derive(Debug, Clone, Copy)]
pub struct TrailPoint {
    pub pos: Vec2,
    /// Host-supplied monotonic milliseconds
    pub t_ms: f64,
}

/// Decaying position history for one input source
#[derive(Debug, Clone)]
pub struct Trail {
    /// Rendering hint supplied by the input provider, stored verbatim
    pub color: String,
    points: Vec<TrailPoint>,
    max_age_ms: f64,
    /// Timestamp of the most recent input, for eviction of stale sources
    last_input_ms: f64,
}

impl Trail {
    pub fn new(color: impl Into<String>, now_ms: f64) -> Self {
        Self {
            color: color.into(),
            points: Vec::new(),
            max_age_ms: TRAIL_MAX_AGE_MS,
            last_input_ms: now_ms,
        }
    }

    /// Append a point stamped with the supplied time
    ///
    /// Timestamps must be non-decreasing; the host's monotonic clock
    /// guarantees this.
    pub fn add_point(&mut self, pos: Vec2, now_ms: f64) {
        self.points.push(TrailPoint { pos, t_ms: now_ms });
        self.last_input_ms = now_ms;
    }

    /// Drop leading points older than the max age, preserving order
    pub fn update(&mut self, now_ms: f64) {
        let cutoff = now_ms - self.max_age_ms;
        let expired = self.points.iter().take_while(|p| p.t_ms <= cutoff).count();
        self.points.drain(..expired);
    }

    /// The last two points as an ordered segment, if the trail is in motion
    pub fn latest_segment(&self) -> Option<(Vec2, Vec2)> {
        match self.points.as_slice() {
            [.., a, b] => Some((a.pos, b.pos)),
            _ => None,
        }
    }

    /// Ordered recent points, oldest first
    pub fn points(&self) -> &[TrailPoint] {
        &self.points
    }

    /// Age-based fade for rendering: 1.0 = fresh, 0.0 = fully decayed
    pub fn life_ratio(&self, point: &TrailPoint, now_ms: f64) -> f32 {
        (1.0 - (now_ms - point.t_ms) / self.max_age_ms).clamp(0.0, 1.0) as f32
    }

    /// True once the trail has been empty past the grace period
    pub fn is_stale(&self, now_ms: f64) -> bool {
        self.points.is_empty() && now_ms - self.last_input_ms > TRAIL_EVICT_GRACE_MS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decay_keeps_only_fresh_points() {
        let mut trail = Trail::new("#ffffff", 0.0);
        for i in 0..6 {
            trail.add_point(Vec2::new(i as f32, 0.0), i as f64 * 100.0);
        }
        // At t=500 only points younger than 200ms survive (t=400, t=500)
        trail.update(500.0);
        assert_eq!(trail.points().len(), 2);
        for p in trail.points() {
            assert!(500.0 - p.t_ms < TRAIL_MAX_AGE_MS);
        }
        // Order preserved
        assert!(trail.points()[0].t_ms < trail.points()[1].t_ms);
    }

    #[test]
    fn test_decay_removes_nothing_fresh() {
        let mut trail = Trail::new("#ffffff", 0.0);
        trail.add_point(Vec2::ZERO, 0.0);
        trail.add_point(Vec2::ONE, 50.0);
        trail.update(100.0);
        assert_eq!(trail.points().len(), 2);
    }

    #[test]
    fn test_latest_segment_requires_two_points() {
        let mut trail = Trail::new("#ffffff", 0.0);
        assert!(trail.latest_segment().is_none());
        trail.add_point(Vec2::new(1.0, 2.0), 0.0);
        assert!(trail.latest_segment().is_none());
        trail.add_point(Vec2::new(3.0, 4.0), 16.0);
        let (a, b) = trail.latest_segment().unwrap();
        assert_eq!(a, Vec2::new(1.0, 2.0));
        assert_eq!(b, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_life_ratio_fades_with_age() {
        let mut trail = Trail::new("#ffffff", 0.0);
        trail.add_point(Vec2::ZERO, 0.0);
        let p = trail.points()[0];
        assert_eq!(trail.life_ratio(&p, 0.0), 1.0);
        assert!((trail.life_ratio(&p, 100.0) - 0.5).abs() < 0.001);
        assert_eq!(trail.life_ratio(&p, 300.0), 0.0);
    }

    #[test]
    fn test_staleness() {
        let mut trail = Trail::new("#ffffff", 0.0);
        trail.add_point(Vec2::ZERO, 0.0);
        trail.update(1000.0);
        assert!(trail.points().is_empty());
        // Empty but still within the grace period
        assert!(!trail.is_stale(1000.0));
        assert!(trail.is_stale(6000.0));
    }
}
