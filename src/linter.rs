pub mod consistency;
pub mod diagnostics;
pub mod error;
pub mod options;
pub mod rules;
pub mod runner;
pub mod sink;

pub use diagnostics::{Diagnostic, Place, Report, Severity};
pub use error::ConfigError;
pub use options::Setting;
pub use rules::{Rule, RuleRegistry, RuleSpec};
pub use runner::{LintReport, LintRunner};
pub use sink::Sink;

use stylemark_tree::Node;

use crate::config::Config;

/// Lint a document with every built-in rule.
pub fn lint(tree: &Node, input: &str, config: &Config) -> LintReport {
    LintRunner::new(RuleRegistry::builtin()).run(tree, input, config)
}

/// Run a single built-in rule by name.
///
/// The setting is validated before the tree is walked; an invalid option
/// yields no diagnostics at all.
pub fn check_rule(
    name: &str,
    tree: &Node,
    input: &str,
    setting: &Setting,
) -> Result<Vec<Diagnostic>, ConfigError> {
    let registry = RuleRegistry::builtin();
    let spec = registry
        .get(name)
        .ok_or_else(|| ConfigError::UnknownRule(name.to_string()))?;
    if setting.is_off() {
        return Ok(Vec::new());
    }
    let rule = (spec.configure)(setting)?;
    Ok(rules::run_rule(rule.as_ref(), tree, input))
}
