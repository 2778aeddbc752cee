use stylemark_tree::{Node, NodeKind};

use crate::linter::consistency::Preference;
use crate::linter::error::ConfigError;
use crate::linter::options::Setting;
use crate::linter::rules::{Rule, RuleSpec};
use crate::linter::sink::Sink;
use crate::position::start_of;
use crate::visit::{Flow, visit_kinds};

const NAME: &str = "blockquote-indentation";

pub const SPEC: RuleSpec = RuleSpec {
    name: NAME,
    description: "Block quote content should be indented the same way",
    configure,
};

pub struct BlockquoteIndentationRule {
    preferred: Preference<usize>,
}

fn configure(setting: &Setting) -> Result<Box<dyn Rule>, ConfigError> {
    let preferred = Preference::from_setting(NAME, setting, "or a positive integer", |value| {
        value
            .as_integer()
            .filter(|size| *size > 0)
            .and_then(|size| usize::try_from(size).ok())
    })?;
    Ok(Box::new(BlockquoteIndentationRule { preferred }))
}

/// Columns from the `>` to the first character of content.
///
/// Leading spaces the parser kept inside the first child's text count too,
/// so `>   foo` measures the same whether or not they were stripped.
fn indentation(blockquote: &Node) -> Option<usize> {
    let head = blockquote.first_child()?;
    let outer = start_of(blockquote)?;
    let inner = start_of(head)?;

    let padding = head.to_text().chars().take_while(|c| *c == ' ').count();
    Some(inner.column.checked_sub(outer.column)? + padding)
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "space" } else { "spaces" }
}

impl Rule for BlockquoteIndentationRule {
    fn name(&self) -> &'static str {
        NAME
    }

    fn check(&self, tree: &Node, _input: &str, sink: &mut Sink) {
        let mut preferred = self.preferred.clone();

        visit_kinds(tree, NodeKind::Blockquote, |node, _, _| {
            if node.is_generated() {
                return Flow::Continue;
            }
            let Some(observed) = indentation(node) else {
                return Flow::Continue;
            };
            let Some(expected) = preferred.check(observed) else {
                return Flow::Continue;
            };

            let reason = if expected > observed {
                let diff = expected - observed;
                format!("Add {diff} {} between block quote and content", plural(diff))
            } else {
                let diff = observed - expected;
                format!("Remove {diff} {} between block quote and content", plural(diff))
            };

            let place = node
                .first_child()
                .and_then(|head| head.position)
                .or(node.position);
            sink.message(reason, place);

            Flow::Continue
        });
    }
}
