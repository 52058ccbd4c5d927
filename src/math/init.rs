use rand::Rng;

/// Draws `count` weights from the uniform distribution over [0, 1).
pub fn uniform_weights<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<f64> {
    (0..count).map(|_| rng.gen::<f64>()).collect()
}

/// Evenly spaces `count` points strictly inside `0..extent`, the way neurons
/// are laid out along a column: the i-th point sits at `(i + 1) * extent / (count + 1)`.
pub fn even_spacing(count: usize, extent: f64) -> Vec<f64> {
    (0..count)
        .map(|i| (i + 1) as f64 * extent / (count + 1) as f64)
        .collect()
}
