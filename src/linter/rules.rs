use stylemark_tree::Node;

use crate::linter::diagnostics::Diagnostic;
use crate::linter::error::ConfigError;
use crate::linter::options::Setting;
use crate::linter::sink::Sink;

pub mod blockquote_indentation;
pub mod emphasis_marker;
pub mod final_definition;
pub mod final_newline;
pub mod heading_increment;
pub mod link_title_style;
pub mod no_duplicate_defined_urls;
pub mod no_duplicate_definitions;
pub mod no_duplicate_headings;
pub mod no_duplicate_headings_in_section;
pub mod no_emphasis_as_heading;
pub mod no_heading_punctuation;
pub mod no_missing_blank_lines;
pub mod rule_style;
pub mod strikethrough_marker;
pub mod strong_marker;
pub mod unordered_list_marker_style;

/// A configured style rule.
///
/// Rules are stateless between runs: everything a rule tracks while walking
/// a tree lives inside `check`.
pub trait Rule: Send + Sync {
    fn name(&self) -> &'static str;
    fn check(&self, tree: &Node, input: &str, sink: &mut Sink);
}

/// Builds a [`Rule`] from its setting, validating options up front.
pub type Configure = fn(&Setting) -> Result<Box<dyn Rule>, ConfigError>;

pub struct RuleSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub configure: Configure,
}

pub struct RuleRegistry {
    rules: Vec<RuleSpec>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Registry with every built-in rule, in alphabetical order.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for spec in [
            blockquote_indentation::SPEC,
            emphasis_marker::SPEC,
            final_definition::SPEC,
            final_newline::SPEC,
            heading_increment::SPEC,
            link_title_style::SPEC,
            no_duplicate_defined_urls::SPEC,
            no_duplicate_definitions::SPEC,
            no_duplicate_headings::SPEC,
            no_duplicate_headings_in_section::SPEC,
            no_emphasis_as_heading::SPEC,
            no_heading_punctuation::SPEC,
            no_missing_blank_lines::SPEC,
            rule_style::SPEC,
            strikethrough_marker::SPEC,
            strong_marker::SPEC,
            unordered_list_marker_style::SPEC,
        ] {
            registry.register(spec);
        }
        registry
    }

    pub fn register(&mut self, spec: RuleSpec) {
        self.rules.push(spec);
    }

    pub fn rules(&self) -> &[RuleSpec] {
        &self.rules
    }

    pub fn get(&self, name: &str) -> Option<&RuleSpec> {
        self.rules.iter().find(|spec| spec.name == name)
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Run one configured rule over a tree.
pub fn run_rule(rule: &dyn Rule, tree: &Node, input: &str) -> Vec<Diagnostic> {
    let mut sink = Sink::new(rule.name());
    rule.check(tree, input, &mut sink);
    log::debug!("Rule {} found {} diagnostic(s)", rule.name(), sink.len());
    sink.finish()
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use stylemark_tree::{Locator, Position};

    /// Position of the `nth` occurrence of `needle` in `input`.
    pub fn at(input: &str, needle: &str, nth: usize) -> Position {
        Locator::new(input)
            .find(needle, nth)
            .unwrap_or_else(|| panic!("`{needle}` #{nth} not found in {input:?}"))
    }

    pub fn lint(spec: &RuleSpec, setting: Setting, tree: &Node, input: &str) -> Vec<Diagnostic> {
        let rule = (spec.configure)(&setting).expect("valid configuration");
        run_rule(rule.as_ref(), tree, input)
    }

    pub fn messages(diagnostics: &[Diagnostic]) -> Vec<&str> {
        diagnostics.iter().map(|d| d.message.as_str()).collect()
    }
}
