mod interpolator;
mod windowed_linear_interpolator;

pub use interpolator::Interpolator;
pub use windowed_linear_interpolator::{WindowWeights, WindowedLinearInterpolator};
