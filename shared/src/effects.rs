use rand::seq::SliceRandom;
use rand::Rng;

pub const CONFETTI_COLORS: [&str; 5] = ["#ffcf33", "#ff8a3d", "#ff2d55", "#38f9d7", "#ffffff"];

/// One falling confetti particle, positioned in percent of the wheel width.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiPiece {
    pub color: &'static str,
    pub left_pct: f64,
    pub delay_s: f64,
    pub duration_s: f64,
}

impl ConfettiPiece {
    /// Inline CSS for the piece; the keyframes read the color from `--c`.
    pub fn style(&self) -> String {
        format!(
            "--c: {}; left: {:.2}%; animation-delay: {:.3}s; animation-duration: {:.3}s;",
            self.color, self.left_pct, self.delay_s, self.duration_s
        )
    }
}

pub fn spawn_confetti<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<ConfettiPiece> {
    (0..count)
        .map(|_| ConfettiPiece {
            color: CONFETTI_COLORS.choose(rng).copied().unwrap_or("#ffffff"),
            left_pct: rng.gen_range(0.0..100.0),
            delay_s: rng.gen_range(0.0..0.2),
            duration_s: rng.gen_range(3.0..4.5),
        })
        .collect()
}
