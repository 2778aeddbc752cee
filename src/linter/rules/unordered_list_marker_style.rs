use stylemark_tree::{Node, NodeData, NodeKind};

use crate::linter::consistency::Preference;
use crate::linter::error::ConfigError;
use crate::linter::options::Setting;
use crate::linter::rules::{Rule, RuleSpec};
use crate::linter::sink::Sink;
use crate::position::start_offset;
use crate::visit::{Flow, visit_kinds};

const NAME: &str = "unordered-list-marker-style";

pub const SPEC: RuleSpec = RuleSpec {
    name: NAME,
    description: "Unordered list items should use the same marker",
    configure,
};

pub struct UnorderedListMarkerStyleRule {
    preferred: Preference<char>,
}

fn configure(setting: &Setting) -> Result<Box<dyn Rule>, ConfigError> {
    let preferred =
        Preference::from_setting(NAME, setting, "`-`, `*`, or `+`", |value| match value.as_str()? {
            "-" => Some('-'),
            "*" => Some('*'),
            "+" => Some('+'),
            _ => None,
        })?;
    Ok(Box::new(UnorderedListMarkerStyleRule { preferred }))
}

fn is_ordered(list: &Node) -> bool {
    matches!(list.data, NodeData::List { ordered: Some(true), .. })
}

/// Bullet character of a list item, ignoring leading indentation.
fn bullet(item: &Node, input: &str) -> Option<char> {
    let rest = input.get(start_offset(item)?..)?;
    rest.chars()
        .find(|c| !matches!(c, ' ' | '\t'))
        .filter(|c| matches!(c, '-' | '*' | '+'))
}

impl Rule for UnorderedListMarkerStyleRule {
    fn name(&self) -> &'static str {
        NAME
    }

    fn check(&self, tree: &Node, input: &str, sink: &mut Sink) {
        let mut preferred = self.preferred.clone();

        visit_kinds(tree, NodeKind::ListItem, |node, _, parent| {
            if parent.is_some_and(is_ordered) {
                return Flow::Continue;
            }
            let (Some(position), Some(observed)) = (node.position, bullet(node, input)) else {
                return Flow::Continue;
            };

            if let Some(expected) = preferred.check(observed) {
                sink.message(format!("Marker style should be `{expected}`"), position);
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

    fn item(input: &str, source: &str) -> Node {
        let content = &source[2..];
        list_item(false, vec![paragraph(vec![text(content)]).at(at(input, content, 0))])
            .at(at(input, source, 0))
    }

    #[test]
    fn test_mixed_bullets() {
        let input = "- alpha\n* bravo\n+ charlie\n";
        let tree = root(vec![
            list(
                false,
                false,
                vec![
                    item(input, "- alpha"),
                    item(input, "* bravo"),
                    item(input, "+ charlie"),
                ],
            )
            .at(at(input, input.trim_end(), 0)),
        ]);

        let diagnostics = lint(&SPEC, Setting::Default, &tree, input);
        assert_eq!(
            messages(&diagnostics),
            vec!["Marker style should be `-`", "Marker style should be `-`"]
        );
        assert_eq!(diagnostics[0].line(), 2);
        assert_eq!(diagnostics[1].line(), 3);

        let diagnostics = lint(&SPEC, Setting::from("*"), &tree, input);
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics[0].line(), 1);
    }

    #[test]
    fn test_ordered_lists_are_ignored() {
        let input = "1. alpha\n2. bravo\n";
        let tree = root(vec![
            list(
                true,
                false,
                vec![
                    list_item(false, vec![]).at(at(input, "1. alpha", 0)),
                    list_item(false, vec![]).at(at(input, "2. bravo", 0)),
                ],
            )
            .at(at(input, input.trim_end(), 0)),
        ]);
        assert!(lint(&SPEC, Setting::from("-"), &tree, input).is_empty());
    }

    #[test]
    fn test_nested_lists_share_the_preference() {
        let input = "* alpha\n  - bravo\n";
        let nested = list(false, false, vec![item(input, "- bravo")]).at(at(input, "- bravo", 0));
        let tree = root(vec![
            list(
                false,
                false,
                vec![
                    list_item(false, vec![paragraph(vec![text("alpha")]), nested])
                        .at(at(input, "* alpha\n  - bravo", 0)),
                ],
            )
            .at(at(input, input.trim_end(), 0)),
        ]);
        let diagnostics = lint(&SPEC, Setting::Default, &tree, input);
        assert_eq!(messages(&diagnostics), vec!["Marker style should be `*`"]);
        assert_eq!(diagnostics[0].line(), 2);
    }

    #[test]
    fn test_invalid_marker() {
        let err = (SPEC.configure)(&Setting::from("1.")).err().unwrap();
        assert!(err.to_string().contains("`-`, `*`, or `+`"));
    }
}
