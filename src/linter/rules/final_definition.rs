use stylemark_tree::{KindSet, Node, NodeKind};

use crate::linter::error::ConfigError;
use crate::linter::options::Setting;
use crate::linter::rules::{Rule, RuleSpec};
use crate::linter::sink::Sink;
use crate::visit::{Flow, Order, visit};

const NAME: &str = "final-definition";

pub const SPEC: RuleSpec = RuleSpec {
    name: NAME,
    description: "Definitions should be placed at the end of the document",
    configure,
};

pub struct FinalDefinitionRule;

fn configure(setting: &Setting) -> Result<Box<dyn Rule>, ConfigError> {
    setting.expect_none(NAME)?;
    Ok(Box::new(FinalDefinitionRule))
}

fn is_comment(node: &Node) -> bool {
    node.kind() == NodeKind::Html
        && node
            .value()
            .is_some_and(|v| v.trim_start().starts_with("<!--"))
}

impl Rule for FinalDefinitionRule {
    fn name(&self) -> &'static str {
        NAME
    }

    fn check(&self, tree: &Node, _input: &str, sink: &mut Sink) {
        // Start line of the last piece of content in the document.
        let mut last: Option<usize> = None;

        visit(tree, KindSet::ALL, Order::Reverse, |node, _, _| {
            match node.kind() {
                NodeKind::Root => return Flow::Continue,
                NodeKind::FootnoteDefinition => return Flow::Skip,
                _ => {}
            }
            let Some(position) = node.position else {
                return Flow::Continue;
            };
            if is_comment(node) {
                return Flow::Continue;
            }

            let line = position.start.line;
            if node.kind() == NodeKind::Definition {
                if let Some(last) = last
                    && line < last
                {
                    sink.message(
                        format!(
                            "Move definitions to the end of the file (after the node at line `{last}`)"
                        ),
                        position,
                    );
                }
            } else if last.is_none() {
                last = Some(line);
            }

            Flow::Continue
        });
    }
}
