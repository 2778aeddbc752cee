use stylemark_tree::{Node, NodeKind};

use crate::linter::consistency::Preference;
use crate::linter::error::ConfigError;
use crate::linter::options::Setting;
use crate::linter::rules::{Rule, RuleSpec};
use crate::linter::sink::Sink;
use crate::position::slice;
use crate::visit::{Flow, visit_kinds};

const NAME: &str = "rule-style";

pub const SPEC: RuleSpec = RuleSpec {
    name: NAME,
    description: "Thematic breaks should be written the same way",
    configure,
};

pub struct RuleStyleRule {
    preferred: Preference<String>,
}

fn configure(setting: &Setting) -> Result<Box<dyn Rule>, ConfigError> {
    let preferred = Preference::from_setting(
        NAME,
        setting,
        "or a thematic break made of three or more `*`, `-`, or `_` (optionally spaced)",
        |value| value.as_str().filter(|s| is_valid_rule(s)).map(str::to_string),
    )?;
    Ok(Box::new(RuleStyleRule { preferred }))
}

/// A thematic break: one marker character repeated at least three times,
/// with optional spaces or tabs in between.
fn is_valid_rule(rule: &str) -> bool {
    let mut markers = rule.chars().filter(|c| !matches!(c, ' ' | '\t'));
    let Some(marker) = markers.next() else {
        return false;
    };
    matches!(marker, '*' | '-' | '_')
        && markers.clone().all(|c| c == marker)
        && markers.count() >= 2
}

impl Rule for RuleStyleRule {
    fn name(&self) -> &'static str {
        NAME
    }

    fn check(&self, tree: &Node, input: &str, sink: &mut Sink) {
        let mut preferred = self.preferred.clone();

        visit_kinds(tree, NodeKind::ThematicBreak, |node, _, _| {
            let (Some(position), Some(rule)) = (node.position, slice(node, input)) else {
                return Flow::Continue;
            };

            if let Some(expected) = preferred.check(rule.to_string()) {
                sink.message(format!("Rules should use `{expected}`"), position);
            }

            Flow::Continue
        });
    }
}
