//! Boundary reflection
//!
//! The one bounce algorithm every sketch shares: advance a coordinate by
//! its velocity; crossing either bound negates the velocity and clamps the
//! coordinate back into range. Axes are independent, and polygon vertices
//! each reflect on their own schedule.

use glam::Vec2;

/// Advance `c` by `v` against `[lo, hi]`.
///
/// Returns the new coordinate and the (possibly negated) velocity. A span
/// with `hi < lo` (surface shrunk below an entity's inset) collapses to
/// `lo`.
#[inline]
pub fn reflect_axis(c: f32, v: f32, lo: f32, hi: f32) -> (f32, f32) {
    let hi = hi.max(lo);
    let next = c + v;
    if next < lo || next > hi {
        (next.clamp(lo, hi), -v)
    } else {
        (next, v)
    }
}

/// [`reflect_axis`] applied per axis for a point in a rectangle
#[inline]
pub fn reflect_point(pos: Vec2, vel: Vec2, min: Vec2, max: Vec2) -> (Vec2, Vec2) {
    let (x, vx) = reflect_axis(pos.x, vel.x, min.x, max.x);
    let (y, vy) = reflect_axis(pos.y, vel.y, min.y, max.y);
    (Vec2::new(x, y), Vec2::new(vx, vy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_reflect_at_low_bound() {
        let (c, v) = reflect_axis(0.0, -2.0, 0.0, 100.0);
        assert_eq!(c, 0.0);
        assert_eq!(v, 2.0);
    }

    #[test]
    fn test_reflect_at_high_bound() {
        let (c, v) = reflect_axis(99.0, 5.0, 0.0, 100.0);
        assert_eq!(c, 100.0);
        assert_eq!(v, -5.0);
    }

    #[test]
    fn test_interior_motion_unchanged() {
        let (c, v) = reflect_axis(50.0, 3.0, 0.0, 100.0);
        assert_eq!(c, 53.0);
        assert_eq!(v, 3.0);
    }

    #[test]
    fn test_degenerate_span_collapses_to_lo() {
        // A shrink resize can leave hi below lo; the position pins to lo
        let (c, v) = reflect_axis(80.0, 1.0, 25.0, 20.0);
        assert_eq!(c, 25.0);
        assert_eq!(v, -1.0);
    }

    #[test]
    fn test_point_axes_are_independent() {
        let (pos, vel) = reflect_point(
            Vec2::new(99.0, 50.0),
            Vec2::new(5.0, 1.0),
            Vec2::ZERO,
            Vec2::new(100.0, 100.0),
        );
        assert_eq!(pos, Vec2::new(100.0, 51.0));
        assert_eq!(vel, Vec2::new(-5.0, 1.0));
    }

    proptest! {
        #[test]
        fn prop_position_stays_in_bounds(
            c in 0.0f32..=500.0,
            v in -50.0f32..=50.0,
            hi in 1.0f32..=500.0,
        ) {
            let c = c.min(hi);
            let (next, _) = reflect_axis(c, v, 0.0, hi);
            prop_assert!((0.0..=hi).contains(&next));
        }

        #[test]
        fn prop_speed_is_preserved(
            c in 0.0f32..=500.0,
            v in -50.0f32..=50.0,
            hi in 1.0f32..=500.0,
        ) {
            let c = c.min(hi);
            let (_, next_v) = reflect_axis(c, v, 0.0, hi);
            prop_assert_eq!(next_v.abs(), v.abs());
        }
    }
}
