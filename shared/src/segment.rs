use serde::{Deserialize, Serialize};

/// How a segment contributes to the probability vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SegmentKind {
    /// Shares whatever percentage is left, proportionally to `base_weight`.
    Task { base_weight: f64 },
    /// Locked at zero until the spin counter reaches the threshold.
    Subscription,
    /// Always exactly `pct` percent.
    Fixed { pct: f64 },
}

/// One labeled sector of the wheel. Every segment takes the same visual angle
/// regardless of its probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub label: String,
    pub color: String,
    #[serde(flatten)]
    pub kind: SegmentKind,
}

impl Segment {
    pub fn task(label: &str, color: &str, base_weight: f64) -> Self {
        Self {
            label: label.to_string(),
            color: color.to_string(),
            kind: SegmentKind::Task { base_weight },
        }
    }

    pub fn subscription(label: &str, color: &str) -> Self {
        Self {
            label: label.to_string(),
            color: color.to_string(),
            kind: SegmentKind::Subscription,
        }
    }

    pub fn fixed(label: &str, color: &str, pct: f64) -> Self {
        Self {
            label: label.to_string(),
            color: color.to_string(),
            kind: SegmentKind::Fixed { pct },
        }
    }
}

/// The wheel as shipped, in visual (clockwise from 3 o'clock) order.
pub fn default_segments() -> Vec<Segment> {
    vec![
        Segment::task("Pushups 30, girls 15", "#ff8a3d", 25.0),
        Segment::task("Plank 2 min", "#ffcf33", 35.0),
        Segment::task("Squats 50, girls 60", "#38f9d7", 25.0),
        Segment::subscription("YouTube + Music Subscription", "#ff2d55"),
        Segment::fixed("Pushups 60, girls 30", "#7a8597", 25.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_shape() {
        let segments = default_segments();
        assert_eq!(segments.len(), 5);
        let subscriptions = segments
            .iter()
            .filter(|s| s.kind == SegmentKind::Subscription)
            .count();
        assert_eq!(subscriptions, 1);
        assert_eq!(segments[4].kind, SegmentKind::Fixed { pct: 25.0 });
    }

    #[test]
    fn test_segment_json_shape() {
        let json = serde_json::to_value(Segment::fixed("Pushups 60, girls 30", "#7a8597", 25.0)).unwrap();
        assert_eq!(json["kind"], "fixed");
        assert_eq!(json["pct"], 25.0);

        let parsed: Segment = serde_json::from_str(
            r##"{"label":"Plank 2 min","color":"#ffcf33","kind":"task","base_weight":35.0}"##,
        )
        .unwrap();
        assert_eq!(parsed, Segment::task("Plank 2 min", "#ffcf33", 35.0));
    }
}
