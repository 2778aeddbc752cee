//! Per-rule configuration values.

use crate::linter::error::ConfigError;

/// How a rule was configured.
///
/// `false` turns a rule off, `true` (or no entry at all) selects its
/// defaults, and anything else is handed to the rule as its option.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Setting {
    Off,
    #[default]
    Default,
    Value(toml::Value),
}

impl Setting {
    pub fn is_off(&self) -> bool {
        matches!(self, Setting::Off)
    }

    pub fn value(&self) -> Option<&toml::Value> {
        match self {
            Setting::Value(value) => Some(value),
            _ => None,
        }
    }

    /// For rules without options: reject anything but on/off.
    pub fn expect_none(&self, rule: &str) -> Result<(), ConfigError> {
        match self.value() {
            None => Ok(()),
            Some(value) => Err(ConfigError::invalid(
                rule,
                format!(
                    "Unexpected value `{}`, this rule only accepts `true` or `false`",
                    display_value(value)
                ),
            )),
        }
    }
}

impl From<&toml::Value> for Setting {
    fn from(value: &toml::Value) -> Self {
        match value {
            toml::Value::Boolean(false) => Setting::Off,
            toml::Value::Boolean(true) => Setting::Default,
            other => Setting::Value(other.clone()),
        }
    }
}

impl From<Option<&toml::Value>> for Setting {
    fn from(value: Option<&toml::Value>) -> Self {
        value.map_or(Setting::Default, Setting::from)
    }
}

impl From<&str> for Setting {
    fn from(value: &str) -> Self {
        Setting::Value(toml::Value::String(value.to_string()))
    }
}

impl From<i64> for Setting {
    fn from(value: i64) -> Self {
        Setting::Value(toml::Value::Integer(value))
    }
}

/// Render a value for messages: strings bare, everything else as TOML.
pub fn display_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
