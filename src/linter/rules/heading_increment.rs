use stylemark_tree::{Node, NodeKind, Position};

use crate::linter::error::ConfigError;
use crate::linter::options::Setting;
use crate::linter::rules::{Rule, RuleSpec};
use crate::linter::sink::Sink;
use crate::visit::{Flow, visit_kinds};

const NAME: &str = "heading-increment";

pub const SPEC: RuleSpec = RuleSpec {
    name: NAME,
    description: "Heading levels should increase one at a time",
    configure,
};

pub struct HeadingIncrementRule;

fn configure(setting: &Setting) -> Result<Box<dyn Rule>, ConfigError> {
    setting.expect_none(NAME)?;
    Ok(Box::new(HeadingIncrementRule))
}

impl Rule for HeadingIncrementRule {
    fn name(&self) -> &'static str {
        NAME
    }

    fn check(&self, tree: &Node, _input: &str, sink: &mut Sink) {
        let mut prev_level: Option<u8> = None;

        for (position, level) in collect_headings(tree) {
            if let Some(prev) = prev_level
                && level > prev.saturating_add(1)
            {
                sink.message(
                    format!(
                        "Heading levels should increment by one level at a time (expected h{}, found h{})",
                        prev.saturating_add(1),
                        level
                    ),
                    position,
                );
            }

            prev_level = Some(level);
        }
    }
}

/// Positioned headings in document order with their depth.
fn collect_headings(tree: &Node) -> Vec<(Position, u8)> {
    let mut headings = Vec::new();

    visit_kinds(tree, NodeKind::Heading, |node, _, _| {
        if let (Some(position), Some(depth)) = (node.position, node.depth()) {
            headings.push((position, depth));
        }
        Flow::Continue
    });

    headings
}
