use thiserror::Error;

use crate::linter::diagnostics::{Diagnostic, Place};

/// A rule could not be set up from its configuration.
///
/// Raised before any traversal happens, so a failed rule never produces a
/// partial list of diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid configuration for `{rule}`: {reason}")]
    InvalidOption { rule: String, reason: String },
    #[error("unknown rule `{0}`")]
    UnknownRule(String),
}

impl ConfigError {
    pub fn invalid(rule: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::InvalidOption {
            rule: rule.into(),
            reason: reason.into(),
        }
    }

    pub fn rule(&self) -> &str {
        match self {
            ConfigError::InvalidOption { rule, .. } => rule,
            ConfigError::UnknownRule(rule) => rule,
        }
    }

    /// Position-less error diagnostic for reporters.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(Place::File, self.rule(), self.to_string())
    }
}
