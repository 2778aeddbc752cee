use stylemark_tree::{Node, NodeKind};

use crate::linter::consistency::Preference;
use crate::linter::error::ConfigError;
use crate::linter::options::Setting;
use crate::linter::rules::{Rule, RuleSpec};
use crate::linter::sink::Sink;
use crate::position::start_offset;
use crate::visit::{Flow, visit_kinds};

const NAME: &str = "emphasis-marker";

pub const SPEC: RuleSpec = RuleSpec {
    name: NAME,
    description: "Emphasis should use the same marker",
    configure,
};

pub struct EmphasisMarkerRule {
    preferred: Preference<char>,
}

fn configure(setting: &Setting) -> Result<Box<dyn Rule>, ConfigError> {
    let preferred = Preference::from_setting(NAME, setting, "`*`, or `_`", parse_marker)?;
    Ok(Box::new(EmphasisMarkerRule { preferred }))
}

/// `*` or `_`, shared with `strong-marker`.
pub(crate) fn parse_marker(value: &toml::Value) -> Option<char> {
    match value.as_str()? {
        "*" => Some('*'),
        "_" => Some('_'),
        _ => None,
    }
}

/// The emphasis character a node opens with.
pub(crate) fn marker_at(node: &Node, input: &str) -> Option<char> {
    let start = start_offset(node)?;
    match input.as_bytes().get(start)? {
        b'*' => Some('*'),
        b'_' => Some('_'),
        _ => None,
    }
}

impl Rule for EmphasisMarkerRule {
    fn name(&self) -> &'static str {
        NAME
    }

    fn check(&self, tree: &Node, input: &str, sink: &mut Sink) {
        let mut preferred = self.preferred.clone();

        visit_kinds(tree, NodeKind::Emphasis, |node, _, _| {
            let (Some(position), Some(observed)) = (node.position, marker_at(node, input)) else {
                return Flow::Continue;
            };

            if let Some(expected) = preferred.check(observed) {
                sink.message(format!("Emphasis should use `{expected}` as a marker"), position);
            }

            Flow::Continue
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linter::rules::testing::{at, lint, messages};
    use stylemark_tree::builder::*;

    fn sample(input: &str) -> Node {
        root(vec![
            paragraph(vec![
                emphasis(vec![text("alpha")]).at(at(input, "*alpha*", 0)),
                text(" and "),
                emphasis(vec![text("bravo")]).at(at(input, "_bravo_", 0)),
                text(" and "),
                strong(vec![text("charlie")]).at(at(input, "__charlie__", 0)),
            ])
            .at(at(input, input.trim_end(), 0)),
        ])
    }

    #[test]
    fn test_consistent_by_default() {
        let input = "*alpha* and _bravo_ and __charlie__\n";
        let diagnostics = lint(&SPEC, Setting::Default, &sample(input), input);
        assert_eq!(messages(&diagnostics), vec!["Emphasis should use `*` as a marker"]);
        assert_eq!(diagnostics[0].column(), 13);
    }

    #[test]
    fn test_fixed_underscore() {
        let input = "*alpha* and _bravo_ and __charlie__\n";
        let diagnostics = lint(&SPEC, Setting::from("_"), &sample(input), input);
        assert_eq!(messages(&diagnostics), vec!["Emphasis should use `_` as a marker"]);
        assert_eq!(diagnostics[0].column(), 1);
    }

    #[test]
    fn test_unrecognised_source_is_skipped() {
        let input = "<em>alpha</em>\n";
        let tree = root(vec![
            paragraph(vec![emphasis(vec![text("alpha")]).at(at(input, "<em>alpha</em>", 0))])
                .at(at(input, "<em>alpha</em>", 0)),
        ]);
        assert!(lint(&SPEC, Setting::from("*"), &tree, input).is_empty());
    }

    #[test]
    fn test_invalid_marker() {
        let err = (SPEC.configure)(&Setting::from("+")).err().unwrap();
        assert!(
            err.to_string()
                .ends_with("Unexpected value `+`, expected `consistent`, `*`, or `_`")
        );
    }
}
