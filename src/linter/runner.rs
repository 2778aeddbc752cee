#[cfg(not(target_arch = "wasm32"))]
use rayon::prelude::*;
use stylemark_tree::Node;

use crate::config::Config;
use crate::linter::diagnostics::Diagnostic;
use crate::linter::error::ConfigError;
use crate::linter::rules::{Rule, RuleRegistry, run_rule};

/// Outcome of linting one document.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LintReport {
    /// Style violations, grouped by rule in registry order.
    pub diagnostics: Vec<Diagnostic>,
    /// Rules that could not be configured and therefore did not run.
    pub failures: Vec<ConfigError>,
}

impl LintReport {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty() && self.failures.is_empty()
    }

    /// Diagnostics ordered by where they start; file-level ones first.
    pub fn sorted(&self) -> Vec<&Diagnostic> {
        let mut diagnostics: Vec<_> = self.diagnostics.iter().collect();
        diagnostics.sort_by_key(|d| d.place.start().map(|p| (p.line, p.column)));
        diagnostics
    }
}

pub struct LintRunner {
    registry: RuleRegistry,
}

impl LintRunner {
    pub fn new(registry: RuleRegistry) -> Self {
        Self { registry }
    }

    /// Configure every enabled rule. A rule with a bad option is reported and
    /// left out; the others still run.
    fn configure(&self, config: &Config) -> (Vec<Box<dyn Rule>>, Vec<ConfigError>) {
        let mut rules = Vec::new();
        let mut failures = Vec::new();

        for name in config.rules.keys() {
            if self.registry.get(name).is_none() {
                log::warn!("Unknown rule in configuration: {name}");
                failures.push(ConfigError::UnknownRule(name.clone()));
            }
        }

        for spec in self.registry.rules() {
            let setting = config.setting(spec.name);
            if setting.is_off() {
                log::debug!("Rule {} is disabled", spec.name);
                continue;
            }
            match (spec.configure)(&setting) {
                Ok(rule) => rules.push(rule),
                Err(e) => {
                    log::warn!("{e}");
                    failures.push(e);
                }
            }
        }

        (rules, failures)
    }

    pub fn run(&self, tree: &Node, input: &str, config: &Config) -> LintReport {
        let (rules, failures) = self.configure(config);
        log::debug!("Running {} lint rule(s)", rules.len());

        #[cfg(not(target_arch = "wasm32"))]
        let results: Vec<Vec<Diagnostic>> = rules
            .par_iter()
            .map(|rule| run_rule(rule.as_ref(), tree, input))
            .collect();

        #[cfg(target_arch = "wasm32")]
        let results: Vec<Vec<Diagnostic>> = rules
            .iter()
            .map(|rule| run_rule(rule.as_ref(), tree, input))
            .collect();

        LintReport {
            diagnostics: results.into_iter().flatten().collect(),
            failures,
        }
    }
}
