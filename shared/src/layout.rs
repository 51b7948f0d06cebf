//! Geometry for drawing the wheel. Slices are equal-angle regardless of
//! probability; only the canvas calls live in the frontend.

use crate::rotation::slice_angle;
use std::f64::consts::{FRAC_PI_2, PI};

pub const LABEL_RADIUS_RATIO: f64 = 0.55;
pub const SHADE_INNER_RATIO: f64 = 0.2;
pub const LABEL_FONT: &str = "600 18px system-ui";
pub const LABEL_LINE_HEIGHT: f64 = 20.0;
/// Horizontal breathing room subtracted from the chord.
pub const LABEL_CHORD_PADDING: f64 = 20.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SliceGeometry {
    pub start_angle: f64,
    pub end_angle: f64,
    pub mid_angle: f64,
    /// Label anchor relative to the wheel center.
    pub label_x: f64,
    pub label_y: f64,
    /// Label is turned half a revolution so it does not read upside down.
    pub flip_label: bool,
    /// Maximum label line width at the label radius.
    pub max_label_width: f64,
}

/// Lays out `segment_count` equal slices on a wheel of `radius`.
pub fn wheel_layout(segment_count: usize, radius: f64) -> Vec<SliceGeometry> {
    let slice = slice_angle(segment_count);
    let label_radius = radius * LABEL_RADIUS_RATIO;
    let chord = 2.0 * label_radius * (slice / 2.0).sin() - LABEL_CHORD_PADDING;

    (0..segment_count)
        .map(|i| {
            let start_angle = i as f64 * slice;
            let mid_angle = start_angle + slice / 2.0;
            SliceGeometry {
                start_angle,
                end_angle: start_angle + slice,
                mid_angle,
                label_x: mid_angle.cos() * label_radius,
                label_y: mid_angle.sin() * label_radius,
                flip_label: mid_angle > FRAC_PI_2 && mid_angle < PI * 1.5,
                max_label_width: chord.max(0.0),
            }
        })
        .collect()
}

/// Greedy word wrap. `measure` returns the rendered width of a string.
///
/// A single word wider than `max_width` still gets its own line.
pub fn break_into_lines<F>(text: &str, max_width: f64, measure: F) -> Vec<String>
where
    F: Fn(&str) -> f64,
{
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split(' ') {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if measure(&candidate) > max_width && !current.is_empty() {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        } else {
            current = candidate;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Vertical offsets that center a block of `line_count` lines on zero.
pub fn line_offsets(line_count: usize, line_height: f64) -> Vec<f64> {
    let block = line_count.saturating_sub(1) as f64 * line_height;
    (0..line_count)
        .map(|i| i as f64 * line_height - block / 2.0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // 10px per character keeps the arithmetic obvious.
    fn mono(s: &str) -> f64 {
        s.chars().count() as f64 * 10.0
    }

    #[test]
    fn test_wraps_on_word_boundaries() {
        let lines = break_into_lines("Pushups 30, girls 15", 110.0, mono);
        assert_eq!(lines, vec!["Pushups 30,", "girls 15"]);
    }

    #[test]
    fn test_short_label_stays_on_one_line() {
        assert_eq!(break_into_lines("Plank 2 min", 500.0, mono), vec!["Plank 2 min"]);
    }

    #[test]
    fn test_overlong_word_keeps_own_line() {
        let lines = break_into_lines("Subscription now", 50.0, mono);
        assert_eq!(lines, vec!["Subscription", "now"]);
    }

    #[test]
    fn test_line_offsets_centered() {
        assert_eq!(line_offsets(1, 20.0), vec![0.0]);
        assert_eq!(line_offsets(2, 20.0), vec![-10.0, 10.0]);
        assert_eq!(line_offsets(3, 20.0), vec![-20.0, 0.0, 20.0]);
        assert!(line_offsets(0, 20.0).is_empty());
    }

    #[test]
    fn test_layout_flips_lower_half_labels() {
        let layout = wheel_layout(5, 200.0);
        assert_eq!(layout.len(), 5);
        // Mid angles: 36, 108, 180, 252, 324 degrees.
        let flips: Vec<bool> = layout.iter().map(|s| s.flip_label).collect();
        assert_eq!(flips, vec![false, true, true, true, false]);
        assert!((layout[4].end_angle - std::f64::consts::TAU).abs() < 1e-9);
    }

    #[test]
    fn test_label_anchor_on_label_radius() {
        let layout = wheel_layout(4, 100.0);
        for slice in layout {
            let r = slice.label_x.hypot(slice.label_y);
            assert!((r - 55.0).abs() < 1e-9);
            assert!(slice.max_label_width > 0.0);
        }
    }
}
