//! Configuration types for phlint.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Top-level configuration for a check run.
///
/// Immutable for the lifetime of a run; the checker reads it, rules
/// receive only their own [`RuleConfig`] slice.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Preset to use (e.g., "recommended", "minimal").
    #[serde(default)]
    pub preset: Option<String>,

    /// Severity threshold for reporting a run as failed (default: "error").
    /// Resolve it with [`Config::fail_on_severity`] before passing it to
    /// [`crate::CheckResult::format_test_report`] or
    /// [`crate::CheckResult::has_diagnostics_at`].
    #[serde(default)]
    pub fail_on: Option<String>,

    /// Per-rule configurations, keyed by rule name.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Checks if a rule is enabled.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        self.rules
            .get(rule_name)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }

    /// Gets the severity override for a rule.
    #[must_use]
    pub fn rule_severity(&self, rule_name: &str) -> Option<crate::Severity> {
        self.rules.get(rule_name).and_then(|c| c.severity)
    }

    /// Resolves the `fail_on` threshold to a severity.
    ///
    /// Defaults to [`crate::Severity::Error`] when unset.
    ///
    /// # Errors
    ///
    /// Returns an error for a value other than "error", "warning" or "info".
    pub fn fail_on_severity(&self) -> Result<crate::Severity, ConfigError> {
        match self.fail_on.as_deref() {
            None | Some("error") => Ok(crate::Severity::Error),
            Some("warning") => Ok(crate::Severity::Warning),
            Some("info") => Ok(crate::Severity::Info),
            Some(other) => Err(ConfigError::UnknownSeverity {
                name: other.to_string(),
            }),
        }
    }

    /// Gets the configuration slice for a rule, or a default when absent.
    #[must_use]
    pub fn rule_config(&self, rule_name: &str) -> RuleConfig {
        self.rules.get(rule_name).cloned().unwrap_or_default()
    }
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Severity override for this rule.
    #[serde(default)]
    pub severity: Option<crate::Severity>,

    /// Rule-specific options as key-value pairs.
    #[serde(flatten)]
    pub options: HashMap<String, toml::Value>,
}

impl RuleConfig {
    /// Gets a boolean option with a default value.
    #[must_use]
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.options
            .get(key)
            .and_then(toml::Value::as_bool)
            .unwrap_or(default)
    }

    /// Gets a string option with a default value.
    #[must_use]
    pub fn get_str<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.options
            .get(key)
            .and_then(|v| v.as_str())
            .unwrap_or(default)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// Unknown severity name in `fail_on`.
    #[error("unknown fail_on severity `{name}`, valid values: error, warning, info")]
    UnknownSeverity {
        /// The rejected value.
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_enables_everything() {
        let config = Config::default();
        assert!(config.rules.is_empty());
        assert!(config.is_rule_enabled("exception-declaration"));
        assert!(config.rule_severity("exception-declaration").is_none());
    }

    #[test]
    fn parse_rule_options() {
        let toml = r#"
fail_on = "warning"

[rules.exception-declaration]
enabled = true
severity = "warning"
exceptions_directory_name = "errors"

[rules.variable-naming]
enabled = false
"#;

        let config = Config::parse(toml).expect("config should parse");
        assert_eq!(config.fail_on.as_deref(), Some("warning"));
        assert!(config.is_rule_enabled("exception-declaration"));
        assert!(!config.is_rule_enabled("variable-naming"));
        assert_eq!(
            config.rule_severity("exception-declaration"),
            Some(crate::Severity::Warning)
        );

        let rule_config = config.rule_config("exception-declaration");
        assert_eq!(
            rule_config.get_str("exceptions_directory_name", "exceptions"),
            "errors"
        );
    }

    #[test]
    fn missing_rule_yields_default_config() {
        let config = Config::default();
        let rule_config = config.rule_config("variable-naming");
        assert_eq!(
            rule_config.get_str("exceptions_directory_name", "exceptions"),
            "exceptions"
        );
        assert!(rule_config.get_bool("anything", true));
    }

    #[test]
    fn fail_on_defaults_to_error() {
        let config = Config::default();
        assert_eq!(
            config.fail_on_severity().expect("default should resolve"),
            crate::Severity::Error
        );
    }

    #[test]
    fn fail_on_resolves_configured_threshold() {
        let config = Config::parse("fail_on = \"warning\"").expect("config should parse");
        assert_eq!(
            config.fail_on_severity().expect("warning should resolve"),
            crate::Severity::Warning
        );

        let config = Config::parse("fail_on = \"info\"").expect("config should parse");
        assert_eq!(
            config.fail_on_severity().expect("info should resolve"),
            crate::Severity::Info
        );
    }

    #[test]
    fn unknown_fail_on_value_is_rejected() {
        let config = Config::parse("fail_on = \"critical\"").expect("config should parse");
        let err = config.fail_on_severity().expect_err("should be rejected");
        assert!(matches!(err, ConfigError::UnknownSeverity { .. }));
        assert!(err.to_string().contains("critical"));
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let err = Config::parse("rules = [broken").expect_err("should fail");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
