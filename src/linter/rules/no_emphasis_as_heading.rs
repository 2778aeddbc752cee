use stylemark_tree::{KindSet, Node, NodeKind};

use crate::linter::error::ConfigError;
use crate::linter::options::Setting;
use crate::linter::rules::{Rule, RuleSpec};
use crate::linter::sink::Sink;
use crate::visit::{Flow, next_sibling, previous_sibling, visit_kinds};

const NAME: &str = "no-emphasis-as-heading";

pub const SPEC: RuleSpec = RuleSpec {
    name: NAME,
    description: "Emphasis should not be used in place of a heading",
    configure,
};

const EMPHASIS: KindSet = KindSet::of(&[NodeKind::Emphasis, NodeKind::Strong]);

pub struct NoEmphasisAsHeadingRule;

fn configure(setting: &Setting) -> Result<Box<dyn Rule>, ConfigError> {
    setting.expect_none(NAME)?;
    Ok(Box::new(NoEmphasisAsHeadingRule))
}

impl Rule for NoEmphasisAsHeadingRule {
    fn name(&self) -> &'static str {
        NAME
    }

    fn check(&self, tree: &Node, _input: &str, sink: &mut Sink) {
        visit_kinds(tree, NodeKind::Paragraph, |node, index, parent| {
            let Some(position) = node.position else {
                return Flow::Continue;
            };

            let [head] = node.children.as_slice() else {
                return Flow::Continue;
            };
            let after_heading = previous_sibling(parent, index)
                .is_some_and(|prev| prev.kind() == NodeKind::Heading);
            let before_paragraph =
                next_sibling(parent, index).is_some_and(|next| next.kind() == NodeKind::Paragraph);

            if head.is(EMPHASIS) && !after_heading && before_paragraph {
                sink.message(
                    "Don't use emphasis to introduce a section, use a heading",
                    position,
                );
            }

            Flow::Continue
        });
    }
}
