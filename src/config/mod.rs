mod error;
mod interpolator_config;
mod params;
mod toggles;

pub use error::ConfigError;
pub use interpolator_config::InterpolatorConfig;
pub use params::WindowedLinearParams;
pub use toggles::{InterpolatorToggles, ToggleKey, parse_toggle};
