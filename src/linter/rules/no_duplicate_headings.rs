use std::collections::HashMap;

use stylemark_tree::{Node, NodeKind, Point};

use crate::linter::error::ConfigError;
use crate::linter::options::Setting;
use crate::linter::rules::{Rule, RuleSpec};
use crate::linter::sink::Sink;
use crate::position::stringify;
use crate::visit::{Flow, visit_kinds};

const NAME: &str = "no-duplicate-headings";

pub const SPEC: RuleSpec = RuleSpec {
    name: NAME,
    description: "Headings should not repeat the content of an earlier heading",
    configure,
};

pub struct NoDuplicateHeadingsRule;

fn configure(setting: &Setting) -> Result<Box<dyn Rule>, ConfigError> {
    setting.expect_none(NAME)?;
    Ok(Box::new(NoDuplicateHeadingsRule))
}

impl Rule for NoDuplicateHeadingsRule {
    fn name(&self) -> &'static str {
        NAME
    }

    fn check(&self, tree: &Node, _input: &str, sink: &mut Sink) {
        let mut seen: HashMap<String, Point> = HashMap::new();

        visit_kinds(tree, NodeKind::Heading, |node, _, _| {
            let Some(position) = node.position else {
                return Flow::Continue;
            };

            let key = node.to_text().to_uppercase();
            match seen.get(&key) {
                Some(first) => sink.message(
                    format!(
                        "Do not use headings with similar content ({})",
                        stringify(*first)
                    ),
                    position,
                ),
                None => {
                    seen.insert(key, position.start);
                }
            }

            Flow::Continue
        });
    }
}
