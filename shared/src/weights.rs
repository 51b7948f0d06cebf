use crate::config::WheelConfig;
use crate::segment::{Segment, SegmentKind};

/// Percentage currently granted to the subscription segment.
pub fn subscription_pct(spin_count: u64, config: &WheelConfig) -> f64 {
    if spin_count >= config.subscription_threshold {
        config.subscription_pct
    } else {
        0.0
    }
}

/// Computes the probability vector for the given spin counter.
///
/// Fixed segments keep their percentage, the subscription segment gets 0 or
/// the unlocked percentage, and task segments split what remains in
/// proportion to their base weights. The result has one entry per segment, in
/// declaration order, and never contains negative values.
pub fn effective_weights(segments: &[Segment], spin_count: u64, config: &WheelConfig) -> Vec<f64> {
    let sub = subscription_pct(spin_count, config);

    let fixed_total: f64 = segments
        .iter()
        .filter_map(|s| match s.kind {
            SegmentKind::Fixed { pct } => Some(pct.max(0.0)),
            _ => None,
        })
        .sum();

    let remaining = (config.total_pct - fixed_total - sub).max(0.0);

    let base_sum: f64 = segments
        .iter()
        .filter_map(|s| match s.kind {
            SegmentKind::Task { base_weight } => Some(base_weight.max(0.0)),
            _ => None,
        })
        .sum();
    let scale = if base_sum > 0.0 { remaining / base_sum } else { 0.0 };

    segments
        .iter()
        .map(|s| match s.kind {
            SegmentKind::Fixed { pct } => pct.max(0.0),
            SegmentKind::Subscription => sub,
            SegmentKind::Task { base_weight } => base_weight.max(0.0) * scale,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::default_segments;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_vector_sums_to_total() {
        let config = WheelConfig::default();
        let segments = default_segments();
        for count in [0, 1, 19, 20, 21, 500] {
            let weights = effective_weights(&segments, count, &config);
            assert_eq!(weights.len(), segments.len());
            let total: f64 = weights.iter().sum();
            assert!((total - 100.0).abs() < EPS, "count {count}: {total}");
            assert!(weights.iter().all(|w| *w >= 0.0));
        }
    }

    #[test]
    fn test_subscription_gate() {
        let config = WheelConfig::default();
        let segments = default_segments();
        assert_eq!(effective_weights(&segments, 0, &config)[3], 0.0);
        assert_eq!(effective_weights(&segments, 19, &config)[3], 0.0);
        assert_eq!(effective_weights(&segments, 20, &config)[3], 6.0);
        assert_eq!(effective_weights(&segments, 99, &config)[3], 6.0);
    }

    #[test]
    fn test_fixed_pct_is_stable() {
        let config = WheelConfig::default();
        let segments = default_segments();
        for count in [0, 20, 1000] {
            assert_eq!(effective_weights(&segments, count, &config)[4], 25.0);
        }
    }

    #[test]
    fn test_tasks_scale_proportionally() {
        let config = WheelConfig::default();
        let segments = default_segments();

        // 75 left before unlock, 69 after; split 25:35:25.
        let before = effective_weights(&segments, 0, &config);
        assert!((before[0] - 75.0 * 25.0 / 85.0).abs() < EPS);
        assert!((before[1] - 75.0 * 35.0 / 85.0).abs() < EPS);
        assert!((before[0] - before[2]).abs() < EPS);

        let after = effective_weights(&segments, 20, &config);
        assert!((after[1] - 69.0 * 35.0 / 85.0).abs() < EPS);
        assert!((after[1] / after[0] - 35.0 / 25.0).abs() < EPS);
    }

    #[test]
    fn test_degenerate_inputs() {
        let config = WheelConfig::default();
        let segments = vec![
            Segment::task("a", "#000", 0.0),
            Segment::task("b", "#000", 0.0),
        ];
        assert_eq!(effective_weights(&segments, 0, &config), vec![0.0, 0.0]);

        // Fixed percentages beyond the total leave nothing for tasks.
        let crowded = vec![
            Segment::fixed("f", "#000", 120.0),
            Segment::task("t", "#000", 10.0),
        ];
        assert_eq!(effective_weights(&crowded, 0, &config), vec![120.0, 0.0]);
    }
}
