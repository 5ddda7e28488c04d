use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_RANGE_SEPARATOR;

/// Picker behaviour knobs.
///
/// Every field has a default, so `{}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct PickerConfig {
    /// Confirm a one-day range when the second click lands on the anchor.
    /// Off by default: such a click produces no range.
    pub allow_single_day: bool,
    /// Text between check-in and check-out in the input box.
    pub range_separator: String,
}

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid picker configuration: {0}")]
    Json(#[from] serde_json::Error),
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            allow_single_day: false,
            range_separator:  DEFAULT_RANGE_SEPARATOR.to_owned(),
        }
    }
}

impl PickerConfig {
    /// Parses a JSON configuration object.
    ///
    /// # Errors
    /// Returns `ConfigError::Json` on malformed JSON or unknown keys.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = PickerConfig::from_json("{}").unwrap();
        assert_eq!(config, PickerConfig::default());
        assert!(!config.allow_single_day);
        assert_eq!(config.range_separator, " | ");
    }

    #[test]
    fn test_partial_override() {
        let config = PickerConfig::from_json(r#"{"allowSingleDay": true}"#).unwrap();
        assert!(config.allow_single_day);
        assert_eq!(config.range_separator, DEFAULT_RANGE_SEPARATOR);

        let config = PickerConfig::from_json(r#"{"rangeSeparator": " - "}"#).unwrap();
        assert_eq!(config.range_separator, " - ");
    }

    #[test]
    fn test_rejects_unknown_keys_and_bad_json() {
        assert!(PickerConfig::from_json(r#"{"months": 3}"#).is_err());
        let err = PickerConfig::from_json("{").unwrap_err();
        assert!(err.to_string().starts_with("Invalid picker configuration"));
    }
}
