//! Resolving nodes to source locations.
//!
//! Every accessor returns `None` for generated nodes. Rules treat that as
//! "skip this node" and never substitute a made-up location.

use stylemark_tree::{Node, Point, Position};

pub fn start_of(node: &Node) -> Option<Point> {
    node.position.map(|p| p.start)
}

pub fn end_of(node: &Node) -> Option<Point> {
    node.position.map(|p| p.end)
}

pub fn range_of(node: &Node) -> Option<Position> {
    node.position
}

pub fn is_generated(node: &Node) -> bool {
    node.position.is_none()
}

/// Byte offset where the node starts, if the parser recorded offsets.
pub fn start_offset(node: &Node) -> Option<usize> {
    start_of(node)?.offset
}

pub fn end_offset(node: &Node) -> Option<usize> {
    end_of(node)?.offset
}

/// Render a point as `line:column` for use inside messages.
pub fn stringify(point: Point) -> String {
    format!("{}:{}", point.line, point.column)
}

/// The source text covered by a node.
pub fn slice<'a>(node: &Node, input: &'a str) -> Option<&'a str> {
    input.get(start_offset(node)?..end_offset(node)?)
}
