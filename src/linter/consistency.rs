//! "First one wins" style inference.
//!
//! A rule either has a concrete preferred value configured, or is set to
//! `"consistent"`, in which case the first value seen in the document
//! becomes the preference for the rest of the run.

use crate::linter::error::ConfigError;
use crate::linter::options::{Setting, display_value};

pub const CONSISTENT: &str = "consistent";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preference<T> {
    Fixed(T),
    /// Unset until the first observation.
    Consistent(Option<T>),
}

impl<T> Default for Preference<T> {
    fn default() -> Self {
        Preference::Consistent(None)
    }
}

impl<T: Clone + PartialEq> Preference<T> {
    /// Read a preference from a rule setting.
    ///
    /// `parse` turns a concrete option into a value; when it returns `None`
    /// the setting is rejected with a message naming the value and the
    /// `expected` alternatives.
    pub fn from_setting(
        rule: &str,
        setting: &Setting,
        expected: &str,
        parse: impl FnOnce(&toml::Value) -> Option<T>,
    ) -> Result<Self, ConfigError> {
        let Some(value) = setting.value() else {
            return Ok(Preference::default());
        };

        if value.as_str() == Some(CONSISTENT) {
            return Ok(Preference::default());
        }

        match parse(value) {
            Some(preferred) => Ok(Preference::Fixed(preferred)),
            None => Err(ConfigError::invalid(
                rule,
                format!(
                    "Unexpected value `{}`, expected `{CONSISTENT}`, {expected}",
                    display_value(value)
                ),
            )),
        }
    }

    /// Record an observation.
    ///
    /// Returns the expected value when `observed` disagrees with it. The
    /// first observation in consistent mode is adopted and never reported.
    pub fn check(&mut self, observed: T) -> Option<T> {
        if let Preference::Consistent(None) = self {
            *self = Preference::Consistent(Some(observed));
            return None;
        }

        self.preferred()
            .filter(|expected| **expected != observed)
            .cloned()
    }

    pub fn preferred(&self) -> Option<&T> {
        match self {
            Preference::Fixed(value) => Some(value),
            Preference::Consistent(value) => value.as_ref(),
        }
    }
}
