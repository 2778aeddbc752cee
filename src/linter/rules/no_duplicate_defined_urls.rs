use std::collections::HashMap;

use stylemark_tree::{Node, NodeKind, Point};

use crate::linter::error::ConfigError;
use crate::linter::options::Setting;
use crate::linter::rules::{Rule, RuleSpec};
use crate::linter::sink::Sink;
use crate::position::stringify;
use crate::visit::{Flow, visit_kinds};

const NAME: &str = "no-duplicate-defined-urls";

pub const SPEC: RuleSpec = RuleSpec {
    name: NAME,
    description: "Different definitions should not point to the same URL",
    configure,
};

pub struct NoDuplicateDefinedUrlsRule;

fn configure(setting: &Setting) -> Result<Box<dyn Rule>, ConfigError> {
    setting.expect_none(NAME)?;
    Ok(Box::new(NoDuplicateDefinedUrlsRule))
}

impl Rule for NoDuplicateDefinedUrlsRule {
    fn name(&self) -> &'static str {
        NAME
    }

    fn check(&self, tree: &Node, _input: &str, sink: &mut Sink) {
        let mut seen: HashMap<&str, Point> = HashMap::new();

        visit_kinds(tree, NodeKind::Definition, |node, _, _| {
            let (Some(position), Some(url)) = (node.position, node.url()) else {
                return Flow::Continue;
            };
            if url.is_empty() {
                return Flow::Continue;
            }

            match seen.get(url) {
                Some(first) => sink.message(
                    format!(
                        "Do not use different definitions with the same URL ({})",
                        stringify(*first)
                    ),
                    position,
                ),
                None => {
                    seen.insert(url, position.start);
                }
            }

            Flow::Continue
        });
    }
}
