use stylemark_tree::{Node, NodeKind};

use crate::linter::consistency::Preference;
use crate::linter::error::ConfigError;
use crate::linter::options::Setting;
use crate::linter::rules::{Rule, RuleSpec};
use crate::linter::sink::Sink;
use crate::position::start_offset;
use crate::visit::{Flow, visit_kinds};

const NAME: &str = "strikethrough-marker";

pub const SPEC: RuleSpec = RuleSpec {
    name: NAME,
    description: "Strikethrough should use the same number of tildes",
    configure,
};

pub struct StrikethroughMarkerRule {
    preferred: Preference<&'static str>,
}

fn configure(setting: &Setting) -> Result<Box<dyn Rule>, ConfigError> {
    let preferred = Preference::from_setting(NAME, setting, "`~`, or `~~`", |value| {
        match value.as_str()? {
            "~" => Some("~"),
            "~~" => Some("~~"),
            _ => None,
        }
    })?;
    Ok(Box::new(StrikethroughMarkerRule { preferred }))
}

/// Opening tilde run of a `delete` node.
fn marker(node: &Node, input: &str) -> Option<&'static str> {
    let rest = input.get(start_offset(node)?..)?;
    match rest.bytes().take_while(|&b| b == b'~').count() {
        0 => None,
        1 => Some("~"),
        _ => Some("~~"),
    }
}

impl Rule for StrikethroughMarkerRule {
    fn name(&self) -> &'static str {
        NAME
    }

    fn check(&self, tree: &Node, input: &str, sink: &mut Sink) {
        let mut preferred = self.preferred.clone();

        visit_kinds(tree, NodeKind::Delete, |node, _, _| {
            let (Some(position), Some(observed)) = (node.position, marker(node, input)) else {
                return Flow::Continue;
            };

            if let Some(expected) = preferred.check(observed) {
                sink.message(
                    format!("Unexpected strikethrough markers `{observed}`, expected `{expected}`"),
                    position,
                );
            }

            Flow::Continue
        });
    }
}
