use regex::Regex;
use stylemark_tree::{Node, NodeKind};

use crate::linter::error::ConfigError;
use crate::linter::options::{Setting, display_value};
use crate::linter::rules::{Rule, RuleSpec};
use crate::linter::sink::Sink;
use crate::visit::{Flow, visit_kinds};

const NAME: &str = "no-heading-punctuation";
const DEFAULT_CHARACTERS: &str = "!,.:;?";

pub const SPEC: RuleSpec = RuleSpec {
    name: NAME,
    description: "Headings should not end in punctuation",
    configure,
};

/// Flags headings whose text ends in one of a class of characters.
///
/// The option is the body of a regex character class, so ranges and escapes
/// work (`"\\.?!"`, `"a-z"`). Brackets, `&`, `~` and a doubled `-` are taken
/// literally rather than as nested classes or set operators.
pub struct NoHeadingPunctuationRule {
    terminal: Regex,
}

fn configure(setting: &Setting) -> Result<Box<dyn Rule>, ConfigError> {
    let characters = match setting.value() {
        None => DEFAULT_CHARACTERS.to_string(),
        Some(toml::Value::String(s)) => s.clone(),
        Some(other) => {
            return Err(Sink::fail(
                NAME,
                format!(
                    "Unexpected value `{}`, expected a string of characters such as `{DEFAULT_CHARACTERS}`",
                    display_value(other)
                ),
            ));
        }
    };

    Ok(Box::new(NoHeadingPunctuationRule::new(&characters)?))
}

impl NoHeadingPunctuationRule {
    pub fn new(characters: &str) -> Result<Self, ConfigError> {
        if characters.is_empty() {
            return Err(Sink::fail(
                NAME,
                "Unexpected empty character class, expected characters such as `!,.:;?`",
            ));
        }

        let class = escape_class(characters);
        let terminal = Regex::new(&format!("^[{class}]$")).map_err(|e| {
            Sink::fail(
                NAME,
                format!("Invalid character class `{characters}`: {e}"),
            )
        })?;

        Ok(Self { terminal })
    }
}

/// Escape the class syntax regex supports beyond plain ranges: nested
/// brackets and the `&&`, `--` and `~~` set operators. Existing escapes are
/// kept as written.
fn escape_class(characters: &str) -> String {
    let mut escaped = String::with_capacity(characters.len());
    let mut chars = characters.chars();
    let mut prev = None;

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                escaped.push(c);
                escaped.extend(chars.next());
                prev = None;
                continue;
            }
            '[' | ']' | '&' | '~' => {
                escaped.push('\\');
                escaped.push(c);
            }
            '-' if prev == Some('-') => {
                escaped.push_str("\\-");
                prev = None;
                continue;
            }
            _ => escaped.push(c),
        }
        prev = Some(c);
    }

    escaped
}

impl Rule for NoHeadingPunctuationRule {
    fn name(&self) -> &'static str {
        NAME
    }

    fn check(&self, tree: &Node, _input: &str, sink: &mut Sink) {
        visit_kinds(tree, NodeKind::Heading, |node, _, _| {
            let Some(position) = node.position else {
                return Flow::Continue;
            };

            let text = node.to_text();
            if let Some(last) = text.chars().last() {
                let mut buf = [0; 4];
                if self.terminal.is_match(last.encode_utf8(&mut buf)) {
                    sink.message(
                        format!("Unexpected character `{last}` at end of heading, remove it"),
                        position,
                    );
                }
            }

            Flow::Continue
        });
    }
}
