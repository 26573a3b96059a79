/// Online smoother for a stream of `(x, y)` samples where `y ≈ a * x + b`.
///
/// Implementations take one sample at a time via [`estimate`] and answer with
/// a de-noised value for that `x`.
///
/// [`estimate`]: Interpolator::estimate
pub trait Interpolator {
    /// Records a new sample and returns the smoothed value at `x`.
    fn estimate(&mut self, x: f64, y: f64) -> f64;

    /// Forgets all samples.
    fn reset(&mut self);
}
