use serde::{Deserialize, Serialize};

use crate::location::Position;

/// A single element of the document tree.
///
/// Nodes are produced by an external markdown parser (in the unist/mdast JSON
/// shape) and are never mutated while rules run. A node without a
/// [`Position`] is *generated*: it was synthesised rather than parsed and has
/// no place in the source text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(flatten)]
    pub data: NodeData,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// Type-specific payload of a node, tagged by `type` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum NodeData {
    Root,
    Paragraph,
    Heading {
        depth: u8,
    },
    ThematicBreak,
    Blockquote,
    List {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        ordered: Option<bool>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        start: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        spread: Option<bool>,
    },
    ListItem {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        spread: Option<bool>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        checked: Option<bool>,
    },
    Html {
        #[serde(default)]
        value: String,
    },
    Code {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        lang: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        meta: Option<String>,
        #[serde(default)]
        value: String,
    },
    Definition {
        identifier: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        #[serde(default)]
        url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },
    FootnoteDefinition {
        identifier: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },
    Text {
        #[serde(default)]
        value: String,
    },
    Emphasis,
    Strong,
    Delete,
    InlineCode {
        #[serde(default)]
        value: String,
    },
    Break,
    Link {
        #[serde(default)]
        url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },
    Image {
        #[serde(default)]
        url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        alt: Option<String>,
    },
    LinkReference {
        identifier: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        reference_type: ReferenceType,
    },
    ImageReference {
        identifier: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        reference_type: ReferenceType,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        alt: Option<String>,
    },
    FootnoteReference {
        identifier: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },
    Table {
        #[serde(default)]
        align: Vec<Option<Align>>,
    },
    TableRow,
    TableCell,
    Yaml {
        #[serde(default)]
        value: String,
    },
    Toml {
        #[serde(default)]
        value: String,
    },
    Math {
        #[serde(default)]
        value: String,
    },
    InlineMath {
        #[serde(default)]
        value: String,
    },
    /// Any node type this model does not know about (extension syntax).
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceType {
    Shortcut,
    Collapsed,
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Right,
    Center,
}

/// Fieldless tag for every [`NodeData`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum NodeKind {
    Root = 0,
    Paragraph,
    Heading,
    ThematicBreak,
    Blockquote,
    List,
    ListItem,
    Html,
    Code,
    Definition,
    FootnoteDefinition,
    Text,
    Emphasis,
    Strong,
    Delete,
    InlineCode,
    Break,
    Link,
    Image,
    LinkReference,
    ImageReference,
    FootnoteReference,
    Table,
    TableRow,
    TableCell,
    Yaml,
    Toml,
    Math,
    InlineMath,
    Other,
}

impl NodeKind {
    /// The `type` tag used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Root => "root",
            NodeKind::Paragraph => "paragraph",
            NodeKind::Heading => "heading",
            NodeKind::ThematicBreak => "thematicBreak",
            NodeKind::Blockquote => "blockquote",
            NodeKind::List => "list",
            NodeKind::ListItem => "listItem",
            NodeKind::Html => "html",
            NodeKind::Code => "code",
            NodeKind::Definition => "definition",
            NodeKind::FootnoteDefinition => "footnoteDefinition",
            NodeKind::Text => "text",
            NodeKind::Emphasis => "emphasis",
            NodeKind::Strong => "strong",
            NodeKind::Delete => "delete",
            NodeKind::InlineCode => "inlineCode",
            NodeKind::Break => "break",
            NodeKind::Link => "link",
            NodeKind::Image => "image",
            NodeKind::LinkReference => "linkReference",
            NodeKind::ImageReference => "imageReference",
            NodeKind::FootnoteReference => "footnoteReference",
            NodeKind::Table => "table",
            NodeKind::TableRow => "tableRow",
            NodeKind::TableCell => "tableCell",
            NodeKind::Yaml => "yaml",
            NodeKind::Toml => "toml",
            NodeKind::Math => "math",
            NodeKind::InlineMath => "inlineMath",
            NodeKind::Other => "other",
        }
    }
}

/// A set of [`NodeKind`]s, used to filter visitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KindSet(u64);

impl KindSet {
    pub const EMPTY: KindSet = KindSet(0);
    pub const ALL: KindSet = KindSet(u64::MAX);

    pub const fn of(kinds: &[NodeKind]) -> Self {
        let mut bits = 0u64;
        let mut i = 0;
        while i < kinds.len() {
            bits |= 1 << kinds[i] as u8;
            i += 1;
        }
        KindSet(bits)
    }

    pub const fn contains(self, kind: NodeKind) -> bool {
        self.0 & (1 << kind as u8) != 0
    }

    pub const fn with(self, kind: NodeKind) -> Self {
        KindSet(self.0 | (1 << kind as u8))
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl From<NodeKind> for KindSet {
    fn from(kind: NodeKind) -> Self {
        KindSet::EMPTY.with(kind)
    }
}

impl<const N: usize> From<[NodeKind; N]> for KindSet {
    fn from(kinds: [NodeKind; N]) -> Self {
        KindSet::of(&kinds)
    }
}

impl FromIterator<NodeKind> for KindSet {
    fn from_iter<I: IntoIterator<Item = NodeKind>>(iter: I) -> Self {
        iter.into_iter().fold(KindSet::EMPTY, KindSet::with)
    }
}

impl NodeData {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeData::Root => NodeKind::Root,
            NodeData::Paragraph => NodeKind::Paragraph,
            NodeData::Heading { .. } => NodeKind::Heading,
            NodeData::ThematicBreak => NodeKind::ThematicBreak,
            NodeData::Blockquote => NodeKind::Blockquote,
            NodeData::List { .. } => NodeKind::List,
            NodeData::ListItem { .. } => NodeKind::ListItem,
            NodeData::Html { .. } => NodeKind::Html,
            NodeData::Code { .. } => NodeKind::Code,
            NodeData::Definition { .. } => NodeKind::Definition,
            NodeData::FootnoteDefinition { .. } => NodeKind::FootnoteDefinition,
            NodeData::Text { .. } => NodeKind::Text,
            NodeData::Emphasis => NodeKind::Emphasis,
            NodeData::Strong => NodeKind::Strong,
            NodeData::Delete => NodeKind::Delete,
            NodeData::InlineCode { .. } => NodeKind::InlineCode,
            NodeData::Break => NodeKind::Break,
            NodeData::Link { .. } => NodeKind::Link,
            NodeData::Image { .. } => NodeKind::Image,
            NodeData::LinkReference { .. } => NodeKind::LinkReference,
            NodeData::ImageReference { .. } => NodeKind::ImageReference,
            NodeData::FootnoteReference { .. } => NodeKind::FootnoteReference,
            NodeData::Table { .. } => NodeKind::Table,
            NodeData::TableRow => NodeKind::TableRow,
            NodeData::TableCell => NodeKind::TableCell,
            NodeData::Yaml { .. } => NodeKind::Yaml,
            NodeData::Toml { .. } => NodeKind::Toml,
            NodeData::Math { .. } => NodeKind::Math,
            NodeData::InlineMath { .. } => NodeKind::InlineMath,
            NodeData::Other => NodeKind::Other,
        }
    }
}

impl Node {
    pub fn new(data: NodeData) -> Self {
        Self {
            data,
            children: Vec::new(),
            position: None,
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.data.kind()
    }

    pub fn is(&self, kinds: impl Into<KindSet>) -> bool {
        kinds.into().contains(self.kind())
    }

    /// True when the node has no source position.
    pub fn is_generated(&self) -> bool {
        self.position.is_none()
    }

    /// The literal value of leaf nodes that carry one.
    pub fn value(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text { value }
            | NodeData::InlineCode { value }
            | NodeData::Html { value }
            | NodeData::Code { value, .. }
            | NodeData::Yaml { value }
            | NodeData::Toml { value }
            | NodeData::Math { value }
            | NodeData::InlineMath { value } => Some(value),
            _ => None,
        }
    }

    /// Heading depth (1-6), if this is a heading.
    pub fn depth(&self) -> Option<u8> {
        match self.data {
            NodeData::Heading { depth } => Some(depth),
            _ => None,
        }
    }

    /// Identifier of definitions, footnote definitions and references.
    pub fn identifier(&self) -> Option<&str> {
        match &self.data {
            NodeData::Definition { identifier, .. }
            | NodeData::FootnoteDefinition { identifier, .. }
            | NodeData::LinkReference { identifier, .. }
            | NodeData::ImageReference { identifier, .. }
            | NodeData::FootnoteReference { identifier, .. } => Some(identifier),
            _ => None,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match &self.data {
            NodeData::Definition { url, .. }
            | NodeData::Link { url, .. }
            | NodeData::Image { url, .. } => Some(url),
            _ => None,
        }
    }

    pub fn title(&self) -> Option<&str> {
        match &self.data {
            NodeData::Definition { title, .. }
            | NodeData::Link { title, .. }
            | NodeData::Image { title, .. } => title.as_deref(),
            _ => None,
        }
    }

    /// `spread` of lists and list items; `None` when the parser did not say.
    pub fn spread(&self) -> Option<bool> {
        match self.data {
            NodeData::List { spread, .. } | NodeData::ListItem { spread, .. } => spread,
            _ => None,
        }
    }

    pub fn first_child(&self) -> Option<&Node> {
        self.children.first()
    }

    pub fn last_child(&self) -> Option<&Node> {
        self.children.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_set_membership() {
        let set = KindSet::of(&[NodeKind::Heading, NodeKind::Paragraph]);
        assert!(set.contains(NodeKind::Heading));
        assert!(set.contains(NodeKind::Paragraph));
        assert!(!set.contains(NodeKind::Root));
        assert!(!set.contains(NodeKind::Other));
        assert!(KindSet::ALL.contains(NodeKind::Other));
        assert!(KindSet::EMPTY.is_empty());
    }

    #[test]
    fn test_kind_set_from_iter() {
        let set: KindSet = [NodeKind::Link, NodeKind::Image].into_iter().collect();
        assert_eq!(set, KindSet::from([NodeKind::Image, NodeKind::Link]));
    }

    #[test]
    fn test_kind_tags_match_wire_names() {
        let node = Node::new(NodeData::ThematicBreak);
        assert_eq!(node.kind().as_str(), "thematicBreak");
        let node = Node::new(NodeData::LinkReference {
            identifier: "a".to_string(),
            label: None,
            reference_type: ReferenceType::Full,
        });
        assert_eq!(node.kind().as_str(), "linkReference");
    }

    #[test]
    fn test_accessors() {
        let node = Node::new(NodeData::Definition {
            identifier: "alpha".to_string(),
            label: Some("Alpha".to_string()),
            url: "https://example.com".to_string(),
            title: Some("Title".to_string()),
        });
        assert_eq!(node.identifier(), Some("alpha"));
        assert_eq!(node.url(), Some("https://example.com"));
        assert_eq!(node.title(), Some("Title"));
        assert!(node.is_generated());
        assert!(node.is(NodeKind::Definition));
        assert_eq!(node.depth(), None);
    }
}
