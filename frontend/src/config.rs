use wheel_shared::{default_segments, Segment, WheelConfig};

/// Canvas backing-store size in pixels (the element is scaled by CSS).
pub const CANVAS_SIZE: u32 = 500;

/// Gap between the wheel rim and the canvas edge, leaving room for the pointer.
pub const WHEEL_MARGIN: f64 = 28.0;

pub fn wheel_config() -> WheelConfig {
    WheelConfig::default()
}

pub fn wheel_segments() -> Vec<Segment> {
    default_segments()
}

