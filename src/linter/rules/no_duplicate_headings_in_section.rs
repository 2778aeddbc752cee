use std::collections::HashMap;

use stylemark_tree::{Node, NodeKind, Point};

use crate::linter::error::ConfigError;
use crate::linter::options::Setting;
use crate::linter::rules::{Rule, RuleSpec};
use crate::linter::sink::Sink;
use crate::position::stringify;
use crate::visit::{Flow, visit_kinds};

const NAME: &str = "no-duplicate-headings-in-section";

pub const SPEC: RuleSpec = RuleSpec {
    name: NAME,
    description: "Sibling headings within one section should not share content",
    configure,
};

pub struct NoDuplicateHeadingsInSectionRule;

fn configure(setting: &Setting) -> Result<Box<dyn Rule>, ConfigError> {
    setting.expect_none(NAME)?;
    Ok(Box::new(NoDuplicateHeadingsInSectionRule))
}

/// Open sections, one scope of seen headings per depth.
///
/// `scopes[d - 1]` holds the headings of depth `d` seen since the enclosing
/// section of depth `d - 1` started. Visiting a heading of depth `d` drops
/// every scope deeper than `d`.
#[derive(Default)]
struct Sections {
    scopes: Vec<HashMap<String, Point>>,
}

impl Sections {
    /// Record a heading and return the start of an earlier sibling with the
    /// same content, if any.
    fn enter(&mut self, depth: usize, key: String, start: Point) -> Option<Point> {
        self.close_below(depth);

        let scope = &mut self.scopes[depth - 1];
        let duplicate = scope.get(&key).copied();
        if duplicate.is_none() {
            scope.insert(key, start);
        }
        duplicate
    }

    /// Open scopes up to `depth` and drop every deeper one.
    fn close_below(&mut self, depth: usize) {
        if self.scopes.len() < depth {
            self.scopes.resize_with(depth, HashMap::new);
        }
        self.scopes.truncate(depth);
    }
}

impl Rule for NoDuplicateHeadingsInSectionRule {
    fn name(&self) -> &'static str {
        NAME
    }

    fn check(&self, tree: &Node, _input: &str, sink: &mut Sink) {
        let mut sections = Sections::default();

        visit_kinds(tree, NodeKind::Heading, |node, _, _| {
            let Some(depth) = node.depth() else {
                return Flow::Continue;
            };
            let depth = usize::from(depth.max(1));

            // Generated headings still close the sections below them.
            let Some(position) = node.position else {
                sections.close_below(depth);
                return Flow::Continue;
            };

            let key = node.to_text().to_uppercase();
            if let Some(first) = sections.enter(depth, key, position.start) {
                sink.message(
                    format!(
                        "Do not use headings with similar content per section ({})",
                        stringify(first)
                    ),
                    position,
                );
            }

            Flow::Continue
        });
    }
}
