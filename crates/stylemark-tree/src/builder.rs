//! Small constructors for assembling trees by hand.
//!
//! Nodes come out generated (without position); attach one with
//! [`Node::at`].

use crate::location::Position;
use crate::node::{Node, NodeData, ReferenceType};

impl Node {
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    pub fn at(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }
}

fn parent(data: NodeData, children: Vec<Node>) -> Node {
    Node::new(data).with_children(children)
}

pub fn root(children: Vec<Node>) -> Node {
    parent(NodeData::Root, children)
}

pub fn paragraph(children: Vec<Node>) -> Node {
    parent(NodeData::Paragraph, children)
}

pub fn heading(depth: u8, children: Vec<Node>) -> Node {
    parent(NodeData::Heading { depth }, children)
}

pub fn thematic_break() -> Node {
    Node::new(NodeData::ThematicBreak)
}

pub fn blockquote(children: Vec<Node>) -> Node {
    parent(NodeData::Blockquote, children)
}

pub fn list(ordered: bool, spread: bool, children: Vec<Node>) -> Node {
    parent(
        NodeData::List {
            ordered: Some(ordered),
            start: ordered.then_some(1),
            spread: Some(spread),
        },
        children,
    )
}

pub fn list_item(spread: bool, children: Vec<Node>) -> Node {
    parent(
        NodeData::ListItem {
            spread: Some(spread),
            checked: None,
        },
        children,
    )
}

pub fn html(value: &str) -> Node {
    Node::new(NodeData::Html {
        value: value.to_string(),
    })
}

pub fn code(lang: Option<&str>, value: &str) -> Node {
    Node::new(NodeData::Code {
        lang: lang.map(str::to_string),
        meta: None,
        value: value.to_string(),
    })
}

pub fn definition(identifier: &str, url: &str, title: Option<&str>) -> Node {
    Node::new(NodeData::Definition {
        identifier: identifier.to_lowercase(),
        label: Some(identifier.to_string()),
        url: url.to_string(),
        title: title.map(str::to_string),
    })
}

pub fn footnote_definition(identifier: &str, children: Vec<Node>) -> Node {
    parent(
        NodeData::FootnoteDefinition {
            identifier: identifier.to_lowercase(),
            label: Some(identifier.to_string()),
        },
        children,
    )
}

pub fn text(value: &str) -> Node {
    Node::new(NodeData::Text {
        value: value.to_string(),
    })
}

pub fn emphasis(children: Vec<Node>) -> Node {
    parent(NodeData::Emphasis, children)
}

pub fn strong(children: Vec<Node>) -> Node {
    parent(NodeData::Strong, children)
}

pub fn delete(children: Vec<Node>) -> Node {
    parent(NodeData::Delete, children)
}

pub fn inline_code(value: &str) -> Node {
    Node::new(NodeData::InlineCode {
        value: value.to_string(),
    })
}

pub fn link(url: &str, title: Option<&str>, children: Vec<Node>) -> Node {
    parent(
        NodeData::Link {
            url: url.to_string(),
            title: title.map(str::to_string),
        },
        children,
    )
}

pub fn image(url: &str, title: Option<&str>, alt: Option<&str>) -> Node {
    Node::new(NodeData::Image {
        url: url.to_string(),
        title: title.map(str::to_string),
        alt: alt.map(str::to_string),
    })
}

pub fn link_reference(
    identifier: &str,
    reference_type: ReferenceType,
    children: Vec<Node>,
) -> Node {
    parent(
        NodeData::LinkReference {
            identifier: identifier.to_lowercase(),
            label: Some(identifier.to_string()),
            reference_type,
        },
        children,
    )
}
