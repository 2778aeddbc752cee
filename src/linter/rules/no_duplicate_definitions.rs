use std::collections::HashMap;

use stylemark_tree::{Node, NodeKind, Point};

use crate::linter::error::ConfigError;
use crate::linter::options::Setting;
use crate::linter::rules::{Rule, RuleSpec};
use crate::linter::sink::Sink;
use crate::position::stringify;
use crate::visit::{Flow, visit_kinds};

const NAME: &str = "no-duplicate-definitions";

pub const SPEC: RuleSpec = RuleSpec {
    name: NAME,
    description: "Definitions should not share an identifier",
    configure,
};

pub struct NoDuplicateDefinitionsRule;

fn configure(setting: &Setting) -> Result<Box<dyn Rule>, ConfigError> {
    setting.expect_none(NAME)?;
    Ok(Box::new(NoDuplicateDefinitionsRule))
}

impl Rule for NoDuplicateDefinitionsRule {
    fn name(&self) -> &'static str {
        NAME
    }

    fn check(&self, tree: &Node, _input: &str, sink: &mut Sink) {
        // Link definitions and footnote definitions live in separate namespaces.
        let mut seen: HashMap<(NodeKind, String), Point> = HashMap::new();

        visit_kinds(
            tree,
            [NodeKind::Definition, NodeKind::FootnoteDefinition],
            |node, _, _| {
                let (Some(position), Some(identifier)) = (node.position, node.identifier()) else {
                    return Flow::Continue;
                };

                let key = (node.kind(), identifier.to_lowercase());
                match seen.get(&key) {
                    Some(first) => sink.message(
                        format!(
                            "Do not use definitions with the same identifier ({})",
                            stringify(*first)
                        ),
                        position,
                    ),
                    None => {
                        seen.insert(key, position.start);
                    }
                }

                Flow::Continue
            },
        );
    }
}
