use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, IntoStaticStr};

fn default_enabled() -> bool {
    true
}

/// Property keys for the run-time switches, as found in a media property bag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, IntoStaticStr)]
pub enum ToggleKey {
    /// When off, estimates pass the raw value through.
    #[strum(to_string = "media.interpolator.enable")]
    Enable,
    /// Freeze the estimate to a fixed offset once the window is full.
    #[strum(to_string = "media.interpolator.stabilize")]
    Stabilize,
}

impl ToggleKey {
    /// Value assumed when the key is absent.
    pub fn default_value(self) -> bool {
        match self {
            ToggleKey::Enable => default_enabled(),
            ToggleKey::Stabilize => false,
        }
    }

    pub fn key(self) -> &'static str {
        self.into()
    }
}

/// Returns true for `"1"` or a case-insensitive `"true"`, false for anything else.
pub fn parse_toggle(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

/// Run-time switches read by an interpolator each time it resets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct InterpolatorToggles {
    #[serde(default = "default_enabled")]
    #[schemars(
        title = "Enabled",
        description = "Master switch; when off the raw value is returned unchanged."
    )]
    pub enabled: bool,

    #[serde(default)]
    #[schemars(
        title = "Stabilize",
        description = "Freeze the estimate to a fixed offset from x once the window fills."
    )]
    pub stabilize: bool,
}

impl Default for InterpolatorToggles {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            stabilize: false,
        }
    }
}

impl InterpolatorToggles {
    pub fn new(enabled: bool, stabilize: bool) -> Self {
        Self { enabled, stabilize }
    }

    /// Reads every [`ToggleKey`] through `lookup`. Absent keys keep their
    /// default; present values go through [`parse_toggle`].
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut toggles = Self::default();
        for key in ToggleKey::iter() {
            let value = lookup(key.key())
                .map(|v| parse_toggle(&v))
                .unwrap_or_else(|| key.default_value());
            match key {
                ToggleKey::Enable => toggles.enabled = value,
                ToggleKey::Stabilize => toggles.stabilize = value,
            }
        }
        toggles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn bag(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn parse_toggle_accepts_one_and_true() {
        assert!(parse_toggle("1"));
        assert!(parse_toggle("true"));
        assert!(parse_toggle("TRUE"));
        assert!(parse_toggle("TrUe"));
    }

    #[test]
    fn parse_toggle_rejects_everything_else() {
        for v in ["0", "false", "yes", "on", "", "11", "true!"] {
            assert!(!parse_toggle(v), "{v:?} should be false");
        }
    }

    #[test]
    fn key_names_match_properties() {
        assert_eq!(ToggleKey::Enable.key(), "media.interpolator.enable");
        assert_eq!(ToggleKey::Stabilize.key(), "media.interpolator.stabilize");
        assert_eq!(ToggleKey::Enable.to_string(), "media.interpolator.enable");
    }

    #[test]
    fn empty_lookup_gives_defaults() {
        let t = InterpolatorToggles::from_lookup(|_| None);
        assert_eq!(t, InterpolatorToggles::default());
        assert!(t.enabled);
        assert!(!t.stabilize);
    }

    #[test]
    fn lookup_reads_both_keys() {
        let props = bag(&[
            ("media.interpolator.enable", "0"),
            ("media.interpolator.stabilize", "True"),
        ]);
        let t = InterpolatorToggles::from_lookup(|k| props.get(k).cloned());
        assert_eq!(t, InterpolatorToggles::new(false, true));
    }

    #[test]
    fn malformed_present_value_is_false() {
        let props = bag(&[("media.interpolator.enable", "yes")]);
        let t = InterpolatorToggles::from_lookup(|k| props.get(k).cloned());
        assert!(!t.enabled);
        assert!(!t.stabilize);
    }

    #[test]
    fn serde_defaults() {
        let t: InterpolatorToggles = serde_json::from_str("{}").unwrap();
        assert_eq!(t, InterpolatorToggles::default());
        let t: InterpolatorToggles = serde_json::from_str(r#"{"stabilize": true}"#).unwrap();
        assert_eq!(t, InterpolatorToggles::new(true, true));
    }

    #[test]
    fn every_key_has_a_default() {
        let defaults: Vec<(&str, bool)> = ToggleKey::iter()
            .map(|k| (k.key(), k.default_value()))
            .collect();
        assert_eq!(
            defaults,
            vec![
                ("media.interpolator.enable", true),
                ("media.interpolator.stabilize", false),
            ]
        );
    }
}
