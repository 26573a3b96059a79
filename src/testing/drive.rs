use crate::interpolators::Interpolator;

/// Feeds every `(x, y)` pair through `interpolator` and collects the estimates.
pub fn drive<I, S>(interpolator: &mut I, samples: S) -> Vec<f64>
where
    I: Interpolator + ?Sized,
    S: IntoIterator<Item = (f64, f64)>,
{
    samples
        .into_iter()
        .map(|(x, y)| interpolator.estimate(x, y))
        .collect()
}
