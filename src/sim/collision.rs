//! Segment-vs-circle geometry
//!
//! Slicing is tested against the swept path between two consecutive trail
//! points, not a static point, so fast strikes can't tunnel through a fruit
//! between frames.

use glam::Vec2;

/// Closest point on segment [a, b] to point p (clamped projection)
///
/// Projects p onto the segment's supporting line and clamps the parameter to
/// [0, 1]. A degenerate segment (coincident endpoints) collapses to `a`.
pub fn segment_closest_point(p: Vec2, a: Vec2, b: Vec2) -> Vec2 {
    let seg = b - a;
    let len_sq = seg.length_squared();
    if len_sq < 0.0001 {
        return a;
    }
    let t = ((p - a).dot(seg) / len_sq).clamp(0.0, 1.0);
    a + seg * t
}

/// Minimum distance from point p to segment [a, b]
pub fn segment_distance(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    p.distance(segment_closest_point(p, a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_distance_within_segment() {
        // Center of the span projects onto the interior
        let d = segment_distance(Vec2::ZERO, Vec2::new(-10.0, 0.0), Vec2::new(10.0, 0.0));
        assert!(d.abs() < 0.001);

        let d = segment_distance(Vec2::ZERO, Vec2::new(-10.0, 10.0), Vec2::new(10.0, 10.0));
        assert!((d - 10.0).abs() < 0.001);
    }

    #[test]
    fn test_distance_clamps_to_endpoints() {
        // Point beyond the end of the segment measures to the endpoint
        let d = segment_distance(Vec2::new(20.0, 0.0), Vec2::new(-10.0, 0.0), Vec2::new(10.0, 0.0));
        assert!((d - 10.0).abs() < 0.001);
    }

    #[test]
    fn test_degenerate_segment() {
        let a = Vec2::new(3.0, 4.0);
        let d = segment_distance(Vec2::ZERO, a, a);
        assert!((d - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_vector_sentinels() {
        // Zero-length normalization yields the zero vector, not NaN
        assert_eq!(Vec2::ZERO.normalize_or_zero(), Vec2::ZERO);
        let v = Vec2::new(7.5, -2.25);
        assert_eq!(v.distance(v), 0.0);
    }

    proptest! {
        #[test]
        fn prop_distance_never_exceeds_endpoint_distance(
            px in -1e3f32..1e3, py in -1e3f32..1e3,
            ax in -1e3f32..1e3, ay in -1e3f32..1e3,
            bx in -1e3f32..1e3, by in -1e3f32..1e3,
        ) {
            let p = Vec2::new(px, py);
            let a = Vec2::new(ax, ay);
            let b = Vec2::new(bx, by);
            let d = segment_distance(p, a, b);
            prop_assert!(d <= p.distance(a) + 0.001);
            prop_assert!(d <= p.distance(b) + 0.001);
        }

        #[test]
        fn prop_closest_point_lies_between_endpoints(
            px in -1e3f32..1e3, py in -1e3f32..1e3,
            ax in -1e3f32..1e3, ay in -1e3f32..1e3,
            bx in -1e3f32..1e3, by in -1e3f32..1e3,
        ) {
            let a = Vec2::new(ax, ay);
            let b = Vec2::new(bx, by);
            let c = segment_closest_point(Vec2::new(px, py), a, b);
            let max_leg = a.distance(b) + 0.001;
            prop_assert!(c.distance(a) <= max_leg);
            prop_assert!(c.distance(b) <= max_leg);
        }
    }
}
