use serde::Deserialize;
use stylemark_tree::{KindSet, Node, NodeKind};

use crate::linter::error::ConfigError;
use crate::linter::options::{Setting, display_value};
use crate::linter::rules::{Rule, RuleSpec};
use crate::linter::sink::Sink;
use crate::position::{end_of, is_generated, start_of};
use crate::visit::{Flow, next_sibling, visit_all};

const NAME: &str = "no-missing-blank-lines";

/// Block nodes that must be separated from their next sibling by a blank line.
const BLOCKS: KindSet = KindSet::of(&[
    NodeKind::Paragraph,
    NodeKind::Blockquote,
    NodeKind::Code,
    NodeKind::Heading,
    NodeKind::Html,
    NodeKind::List,
    NodeKind::Table,
    NodeKind::ThematicBreak,
]);

pub const SPEC: RuleSpec = RuleSpec {
    name: NAME,
    description: "Block nodes should be separated by a blank line",
    configure,
};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Options {
    /// Allow blocks inside tight list items to touch.
    #[serde(alias = "exceptTightLists")]
    pub except_tight_lists: bool,
}

pub struct NoMissingBlankLinesRule {
    options: Options,
}

fn configure(setting: &Setting) -> Result<Box<dyn Rule>, ConfigError> {
    let options = match setting.value() {
        None => Options::default(),
        Some(value) => Options::deserialize(value.clone()).map_err(|e| {
            Sink::fail(
                NAME,
                format!(
                    "Unexpected value `{}`, expected a table such as `{{ except-tight-lists = true }}`: {e}",
                    display_value(value)
                ),
            )
        })?,
    };
    Ok(Box::new(NoMissingBlankLinesRule { options }))
}

impl Rule for NoMissingBlankLinesRule {
    fn name(&self) -> &'static str {
        NAME
    }

    fn check(&self, tree: &Node, _input: &str, sink: &mut Sink) {
        visit_all(tree, |node, index, parent| {
            if is_generated(node) {
                return Flow::Continue;
            }

            if self.options.except_tight_lists
                && parent
                    .is_some_and(|p| p.kind() == NodeKind::ListItem && p.spread() != Some(true))
            {
                return Flow::Continue;
            }

            let Some(next) = next_sibling(parent, index) else {
                return Flow::Continue;
            };

            if !node.is(BLOCKS) || !next.is(BLOCKS) {
                return Flow::Continue;
            }

            if let (Some(end), Some(start)) = (end_of(node), start_of(next))
                && start.line == end.line + 1
                && let Some(position) = next.position
            {
                sink.message("Missing blank line before block node", position);
            }

            Flow::Continue
        });
    }
}
