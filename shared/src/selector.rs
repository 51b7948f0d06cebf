use rand::Rng;

/// Maps a uniform draw in `[0, 1)` onto an index of `weights`.
///
/// The draw is scaled to `[0, total)` and the first index whose running sum
/// exceeds it wins, so ties go to the earlier segment. When the total is zero,
/// or rounding leaves the draw past the last boundary, the last index is
/// returned. Returns `None` only for an empty vector.
pub fn pick_index(weights: &[f64], unit_draw: f64) -> Option<usize> {
    let last = weights.len().checked_sub(1)?;
    let total: f64 = weights.iter().sum();
    let r = unit_draw * total;

    let mut acc = 0.0;
    for (i, w) in weights.iter().enumerate() {
        acc += w;
        if r < acc {
            return Some(i);
        }
    }
    Some(last)
}

/// Draws a weighted random index using `rng`.
pub fn pick_weighted<R: Rng + ?Sized>(weights: &[f64], rng: &mut R) -> Option<usize> {
    let draw: f64 = rng.gen();
    pick_index(weights, draw)
}
