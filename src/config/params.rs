use crate::config::ConfigError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

fn default_head_length() -> usize {
    5
}
fn default_head_factor() -> f64 {
    0.5
}
fn default_main_length() -> usize {
    0
}
fn default_tail_factor() -> f64 {
    0.99
}

/// Shape of the tapering window used by
/// [`WindowedLinearInterpolator`](crate::interpolators::WindowedLinearInterpolator).
///
/// ```text
///     ____________
///    /|          |\
///   / |          | \
///  /  |          |  \   <--- new data
/// /   |   main   |   \
/// <--><----------><-->
/// tail            head
/// ```
///
/// Weight is 1 under the main window and tapers geometrically by
/// `head_factor` per sample in the head and by `tail_factor` per step in the
/// tail.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct WindowedLinearParams {
    #[serde(default = "default_head_length")]
    #[schemars(
        title = "Head length",
        description = "Newest samples that ramp up in weight before joining the main window."
    )]
    pub head_length: usize,

    #[serde(default = "default_head_factor")]
    #[schemars(
        title = "Head factor",
        description = "Weight ratio between neighbouring head samples, in (0, 1].",
        range(min = 0.0, max = 1.0)
    )]
    pub head_factor: f64,

    #[serde(default = "default_main_length")]
    #[schemars(
        title = "Main length",
        description = "Samples held at full weight between head and tail."
    )]
    pub main_length: usize,

    #[serde(default = "default_tail_factor")]
    #[schemars(
        title = "Tail factor",
        description = "Decay applied to the tail each time a sample leaves the main window, in (0, 1].",
        range(min = 0.0, max = 1.0)
    )]
    pub tail_factor: f64,
}

impl Default for WindowedLinearParams {
    fn default() -> Self {
        Self {
            head_length: default_head_length(),
            head_factor: default_head_factor(),
            main_length: default_main_length(),
            tail_factor: default_tail_factor(),
        }
    }
}

impl WindowedLinearParams {
    pub fn new(head_length: usize, head_factor: f64, main_length: usize, tail_factor: f64) -> Self {
        Self {
            head_length,
            head_factor,
            main_length,
            tail_factor,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_factor("head_factor", self.head_factor)?;
        check_factor("tail_factor", self.tail_factor)?;
        match self.head_length.checked_add(self.main_length) {
            None => Err(ConfigError::InvalidParameter(format!(
                "head_length + main_length overflows: {} + {}",
                self.head_length, self.main_length
            ))),
            Some(0) => Err(ConfigError::EmptyHistory),
            Some(_) => Ok(()),
        }
    }

    /// Ring capacity: head plus main.
    #[inline]
    pub fn history_length(&self) -> usize {
        self.head_length + self.main_length
    }

    /// Weight of the newest sample, `head_factor ^ head_length`.
    #[inline]
    pub fn first_weight(&self) -> f64 {
        let exp = i32::try_from(self.head_length).unwrap_or(i32::MAX);
        self.head_factor.powi(exp)
    }

    #[inline]
    pub fn head_factor_inv(&self) -> f64 {
        1.0 / self.head_factor
    }
}

fn check_factor(name: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidParameter(format!(
            "{name} must be in (0, 1], got {value}"
        )))
    }
}
