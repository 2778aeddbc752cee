use stylemark_tree::{Node, NodeKind};

use crate::linter::consistency::Preference;
use crate::linter::error::ConfigError;
use crate::linter::options::Setting;
use crate::linter::rules::emphasis_marker::{marker_at, parse_marker};
use crate::linter::rules::{Rule, RuleSpec};
use crate::linter::sink::Sink;
use crate::visit::{Flow, visit_kinds};

const NAME: &str = "strong-marker";

pub const SPEC: RuleSpec = RuleSpec {
    name: NAME,
    description: "Strong emphasis should use the same marker",
    configure,
};

pub struct StrongMarkerRule {
    preferred: Preference<char>,
}

fn configure(setting: &Setting) -> Result<Box<dyn Rule>, ConfigError> {
    let preferred = Preference::from_setting(NAME, setting, "`*`, or `_`", parse_marker)?;
    Ok(Box::new(StrongMarkerRule { preferred }))
}

impl Rule for StrongMarkerRule {
    fn name(&self) -> &'static str {
        NAME
    }

    fn check(&self, tree: &Node, input: &str, sink: &mut Sink) {
        let mut preferred = self.preferred.clone();

        visit_kinds(tree, NodeKind::Strong, |node, _, _| {
            let (Some(position), Some(observed)) = (node.position, marker_at(node, input)) else {
                return Flow::Continue;
            };

            if let Some(expected) = preferred.check(observed) {
                sink.message(format!("Strong should use `{expected}` as a marker"), position);
            }

            Flow::Continue
        });
    }
}
