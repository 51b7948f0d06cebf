//! Rotation targeting and easing for the spin animation.
//!
//! Angles are canvas radians: 0 points right and positive values turn
//! clockwise on screen. The wheel is drawn rotated by the current rotation,
//! so slice `i` sits at `center(i) + rotation`.

pub use std::f64::consts::TAU;

/// Wraps an angle into `[0, TAU)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid may round up to TAU for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

pub fn slice_angle(segment_count: usize) -> f64 {
    TAU / segment_count.max(1) as f64
}

/// Unrotated angle of the middle of slice `index`.
pub fn slice_center(index: usize, segment_count: usize) -> f64 {
    let slice = slice_angle(segment_count);
    index as f64 * slice + slice / 2.0
}

/// Smallest forward turn that brings slice `index` under the pointer.
pub fn alignment_delta(index: usize, segment_count: usize, current: f64, pointer_angle: f64) -> f64 {
    let center = slice_center(index, segment_count);
    normalize_angle(pointer_angle - (center + current % TAU))
}

/// Absolute rotation at which the spin ends: the alignment delta plus
/// `extra_turns` full revolutions, always ahead of `current`.
pub fn target_rotation(
    index: usize,
    segment_count: usize,
    current: f64,
    pointer_angle: f64,
    extra_turns: u32,
) -> f64 {
    current + TAU * f64::from(extra_turns) + alignment_delta(index, segment_count, current, pointer_angle)
}

/// Cubic ease-out; `t` is clamped to `[0, 1]`.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Time-based interpolation from a start rotation to a target.
///
/// The clock starts on the first sample, so the first frame always renders
/// the start position.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinAnimation {
    pub start_rotation: f64,
    pub target_rotation: f64,
    pub duration_ms: f64,
    started_at: Option<f64>,
}

impl SpinAnimation {
    pub fn new(start_rotation: f64, target_rotation: f64, duration_ms: f64) -> Self {
        Self {
            start_rotation,
            target_rotation,
            duration_ms,
            started_at: None,
        }
    }

    /// Progress in `[0, 1]` at `now` (milliseconds).
    pub fn progress(&mut self, now: f64) -> f64 {
        let started_at = *self.started_at.get_or_insert(now);
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now - started_at) / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Rotation at `now` and whether the animation has finished.
    pub fn sample(&mut self, now: f64) -> (f64, bool) {
        let t = self.progress(now);
        let delta = self.target_rotation - self.start_rotation;
        (self.start_rotation + delta * ease_out_cubic(t), t >= 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPS: f64 = 1e-9;

    fn angular_distance(a: f64, b: f64) -> f64 {
        let d = normalize_angle(a - b);
        d.min(TAU - d)
    }

    #[test]
    fn test_normalize_angle() {
        assert!((normalize_angle(-FRAC_PI_2) - 3.0 * FRAC_PI_2).abs() < EPS);
        assert!((normalize_angle(5.0 * TAU + 1.0) - 1.0).abs() < 1e-6);
        assert_eq!(normalize_angle(0.0), 0.0);
        let tiny = normalize_angle(-1e-18);
        assert!((0.0..TAU).contains(&tiny));
    }

    #[test]
    fn test_target_aligns_every_slice() {
        let pointer = -FRAC_PI_2;
        for n in [1usize, 2, 5, 8, 13] {
            for index in 0..n {
                for current in [0.0, 0.3, PI, 4.0 * TAU + 1.234, 123.456, -2.5] {
                    let target = target_rotation(index, n, current, pointer, 6);
                    let landed = slice_center(index, n) + target;
                    assert!(
                        angular_distance(landed, pointer) < 1e-6,
                        "n={n} index={index} current={current}"
                    );
                    assert!(target - current >= 6.0 * TAU - EPS);
                    assert!(target - current < 7.0 * TAU);
                }
            }
        }
    }

    #[test]
    fn test_ease_out_cubic_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < EPS);
        // Decelerating: first half covers more than half the distance.
        assert!(ease_out_cubic(0.25) > 0.25);
    }

    #[test]
    fn test_animation_starts_on_first_sample() {
        let mut anim = SpinAnimation::new(1.0, 11.0, 1000.0);
        assert_eq!(anim.sample(500.0), (1.0, false));
        let (mid, done) = anim.sample(1000.0);
        assert!(!done);
        assert!((mid - (1.0 + 10.0 * 0.875)).abs() < EPS);
        assert_eq!(anim.sample(1500.0), (11.0, true));
        assert_eq!(anim.sample(9000.0), (11.0, true));
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let mut anim = SpinAnimation::new(0.0, 3.0, 0.0);
        assert_eq!(anim.sample(42.0), (3.0, true));
    }
}
