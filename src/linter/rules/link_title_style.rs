use stylemark_tree::{Locator, Node, NodeKind};

use crate::linter::consistency::Preference;
use crate::linter::error::ConfigError;
use crate::linter::options::Setting;
use crate::linter::rules::{Rule, RuleSpec};
use crate::linter::sink::Sink;
use crate::position::{end_offset, start_offset};
use crate::visit::{Flow, visit_kinds};

const NAME: &str = "link-title-style";

pub const SPEC: RuleSpec = RuleSpec {
    name: NAME,
    description: "Link, image, and definition titles should use the same quotes",
    configure,
};

/// Closing delimiter of a title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleQuote {
    Double,
    Single,
    Paren,
}

impl TitleQuote {
    fn from_closing(byte: u8) -> Option<Self> {
        match byte {
            b'"' => Some(TitleQuote::Double),
            b'\'' => Some(TitleQuote::Single),
            b')' => Some(TitleQuote::Paren),
            _ => None,
        }
    }

    fn opening(self) -> u8 {
        match self {
            TitleQuote::Double => b'"',
            TitleQuote::Single => b'\'',
            TitleQuote::Paren => b'(',
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            TitleQuote::Double => "\"",
            TitleQuote::Single => "'",
            TitleQuote::Paren => "()",
        }
    }
}

pub struct LinkTitleStyleRule {
    preferred: Preference<TitleQuote>,
}

fn configure(setting: &Setting) -> Result<Box<dyn Rule>, ConfigError> {
    let preferred = Preference::from_setting(
        NAME,
        setting,
        "`\"`, `'`, or `()`",
        |value| match value.as_str()? {
            "\"" => Some(TitleQuote::Double),
            "'" => Some(TitleQuote::Single),
            "()" | "(" | ")" => Some(TitleQuote::Paren),
            _ => None,
        },
    )?;
    Ok(Box::new(LinkTitleStyleRule { preferred }))
}

/// Byte range of the title (delimiters included) and its quote style.
///
/// Scans backwards from the end of the node: past the closing `)` of links
/// and images, past trailing whitespace, to a closing delimiter; then to the
/// nearest matching opening delimiter, which must come after the node's
/// content and be preceded by whitespace.
fn find_title(node: &Node, input: &str) -> Option<(usize, usize, TitleQuote)> {
    node.title()?;

    let bytes = input.as_bytes();
    let start = start_offset(node)?;
    let end = end_offset(node)?;
    if end > bytes.len() || start >= end {
        return None;
    }

    let begin = node
        .last_child()
        .and_then(end_offset)
        .unwrap_or(start)
        .max(start);

    let skip_whitespace = |mut at: usize| {
        while at > begin && bytes[at - 1].is_ascii_whitespace() {
            at -= 1;
        }
        at
    };

    let mut last = end;
    if node.kind() != NodeKind::Definition {
        last = skip_whitespace(last);
        if last <= begin || bytes[last - 1] != b')' {
            return None;
        }
        last -= 1;
    }
    last = skip_whitespace(last);
    if last <= begin + 1 {
        return None;
    }

    let quote = TitleQuote::from_closing(bytes[last - 1])?;
    let first = (begin + 1..last - 1)
        .rev()
        .find(|&i| bytes[i] == quote.opening())?;

    if !bytes[first - 1].is_ascii_whitespace() {
        return None;
    }

    Some((first, last, quote))
}

impl Rule for LinkTitleStyleRule {
    fn name(&self) -> &'static str {
        NAME
    }

    fn check(&self, tree: &Node, input: &str, sink: &mut Sink) {
        let locator = Locator::new(input);
        let mut preferred = self.preferred.clone();

        visit_kinds(
            tree,
            [NodeKind::Link, NodeKind::Image, NodeKind::Definition],
            |node, _, _| {
                if node.is_generated() {
                    return Flow::Continue;
                }
                let Some((first, last, quote)) = find_title(node, input) else {
                    return Flow::Continue;
                };

                if let Some(expected) = preferred.check(quote)
                    && let Some(position) = locator.position(first, last)
                {
                    sink.message(
                        format!("Titles should use `{}` as a quote", expected.as_str()),
                        position,
                    );
                }

                Flow::Continue
            },
        );
    }
}
