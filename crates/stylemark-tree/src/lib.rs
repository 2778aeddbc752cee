//! The document tree consumed by `stylemark`.
//!
//! Trees follow the unist/mdast shape: every node has a `type`, container
//! nodes have `children`, and parsed nodes have a `position`. Parsing
//! markdown is left to an external parser; this crate only models and
//! (de)serialises its output.

pub mod builder;
pub mod location;
pub mod node;
mod text;

pub use location::{Locator, Point, Position};
pub use node::{Align, KindSet, Node, NodeData, NodeKind, ReferenceType};

/// Read a tree from its JSON representation.
pub fn from_json(json: &str) -> serde_json::Result<Node> {
    let tree: Node = serde_json::from_str(json)?;
    log::debug!("Loaded tree with {} top-level node(s)", tree.children.len());
    Ok(tree)
}

/// Serialise a tree to JSON.
pub fn to_json(tree: &Node) -> serde_json::Result<String> {
    serde_json::to_string_pretty(tree)
}
