use crate::config::{ConfigError, InterpolatorToggles, WindowedLinearParams};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Window shape plus run-time switches, as read from a JSON document:
///
/// ```json
/// { "window": { "head_length": 5, "main_length": 20 }, "toggles": { "stabilize": false } }
/// ```
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct InterpolatorConfig {
    #[serde(default)]
    #[schemars(title = "Window", description = "Head, main and tail shape.")]
    pub window: WindowedLinearParams,

    #[serde(default)]
    #[schemars(title = "Toggles", description = "Switches applied on every reset.")]
    pub toggles: InterpolatorToggles,
}

impl InterpolatorConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.window.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn empty_document_is_all_defaults() {
        let c = InterpolatorConfig::from_json_str("{}").unwrap();
        assert_eq!(c, InterpolatorConfig::default());
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let c = InterpolatorConfig::from_json_str(
            r#"{"window": {"main_length": 20}, "toggles": {"enabled": false}}"#,
        )
        .unwrap();
        assert_eq!(c.window, WindowedLinearParams::new(5, 0.5, 20, 0.99));
        assert_eq!(c.toggles, InterpolatorToggles::new(false, false));
    }

    #[test]
    fn invalid_window_is_rejected_on_load() {
        let err = InterpolatorConfig::from_json_str(r#"{"window": {"tail_factor": 1.5}}"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidParameter(_)));
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        let err = InterpolatorConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = InterpolatorConfig::from_json_file(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn loads_from_file() -> anyhow::Result<()> {
        let mut tf = NamedTempFile::new()?;
        write!(
            tf,
            r#"{{"window": {{"head_length": 3, "head_factor": 0.25}}, "toggles": {{"stabilize": true}}}}"#
        )?;
        tf.flush()?;

        let c = InterpolatorConfig::from_json_file(tf.path())?;
        assert_eq!(c.window, WindowedLinearParams::new(3, 0.25, 0, 0.99));
        assert!(c.toggles.enabled);
        assert!(c.toggles.stabilize);
        Ok(())
    }

    #[test]
    fn written_json_reads_back() -> anyhow::Result<()> {
        let c = InterpolatorConfig {
            window: WindowedLinearParams::new(4, 0.5, 8, 0.95),
            toggles: InterpolatorToggles::new(true, true),
        };
        let text = c.to_json_string()?;
        assert_eq!(InterpolatorConfig::from_json_str(&text)?, c);
        Ok(())
    }
}
