use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

/// Tunables for the weight model and the spin animation.
///
/// The defaults are the product values; nothing reads them from outside the
/// binary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WheelConfig {
    /// Completed spins required before the subscription slice can win.
    pub subscription_threshold: u64,
    /// Percentage given to the subscription slice once unlocked.
    pub subscription_pct: f64,
    /// Sum of every probability vector.
    pub total_pct: f64,
    /// Full turns added on top of the alignment delta.
    pub extra_turns: u32,
    pub spin_duration_ms: f64,
    /// Pause between landing and showing the result.
    pub settle_delay_ms: f64,
    /// Screen angle of the pointer, in canvas radians (negative y is up).
    pub pointer_angle: f64,
    pub effects: EffectsConfig,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            subscription_threshold: 20,
            subscription_pct: 6.0,
            total_pct: 100.0,
            extra_turns: 6,
            spin_duration_ms: 5000.0,
            settle_delay_ms: 650.0,
            pointer_angle: -FRAC_PI_2,
            effects: EffectsConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectsConfig {
    pub confetti_count: usize,
    pub confetti_lifetime_ms: u32,
    pub flash_ring_lifetime_ms: u32,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            confetti_count: 40,
            confetti_lifetime_ms: 5000,
            flash_ring_lifetime_ms: 1100,
        }
    }
}
