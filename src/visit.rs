//! Depth-first traversal of a document tree.
//!
//! The visitor is called in pre-order with `(node, index, parent)`; `index`
//! and `parent` are `None` for the root. A filter restricts which nodes the
//! visitor is *called* for, never which nodes are descended into.

use stylemark_tree::{KindSet, Node};

/// What the walk should do after a visitor returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// Do not descend into the current node.
    Skip,
    /// Stop the whole walk.
    Break,
}

/// Sibling order of a walk. Parents always come before their children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    #[default]
    Forward,
    Reverse,
}

pub fn visit<'a, F>(tree: &'a Node, filter: impl Into<KindSet>, order: Order, mut visitor: F)
where
    F: FnMut(&'a Node, Option<usize>, Option<&'a Node>) -> Flow,
{
    let filter = filter.into();
    walk(tree, None, None, filter, order, &mut visitor);
}

/// Forward walk calling `visitor` for nodes of the given kinds.
pub fn visit_kinds<'a, F>(tree: &'a Node, filter: impl Into<KindSet>, visitor: F)
where
    F: FnMut(&'a Node, Option<usize>, Option<&'a Node>) -> Flow,
{
    visit(tree, filter, Order::Forward, visitor)
}

/// Forward walk over every node, root included.
pub fn visit_all<'a, F>(tree: &'a Node, visitor: F)
where
    F: FnMut(&'a Node, Option<usize>, Option<&'a Node>) -> Flow,
{
    visit(tree, KindSet::ALL, Order::Forward, visitor)
}

/// Returns `false` once the walk has been broken off.
fn walk<'a, F>(
    node: &'a Node,
    index: Option<usize>,
    parent: Option<&'a Node>,
    filter: KindSet,
    order: Order,
    visitor: &mut F,
) -> bool
where
    F: FnMut(&'a Node, Option<usize>, Option<&'a Node>) -> Flow,
{
    let flow = if filter.contains(node.kind()) {
        visitor(node, index, parent)
    } else {
        Flow::Continue
    };

    match flow {
        Flow::Break => return false,
        Flow::Skip => return true,
        Flow::Continue => {}
    }

    let children = node.children.iter().enumerate();
    match order {
        Order::Forward => {
            for (i, child) in children {
                if !walk(child, Some(i), Some(node), filter, order, visitor) {
                    return false;
                }
            }
        }
        Order::Reverse => {
            for (i, child) in children.rev() {
                if !walk(child, Some(i), Some(node), filter, order, visitor) {
                    return false;
                }
            }
        }
    }

    true
}

/// The sibling after `index` in `parent`.
pub fn next_sibling<'a>(parent: Option<&'a Node>, index: Option<usize>) -> Option<&'a Node> {
    parent?.children.get(index? + 1)
}

/// The sibling before `index` in `parent`.
pub fn previous_sibling<'a>(parent: Option<&'a Node>, index: Option<usize>) -> Option<&'a Node> {
    parent?.children.get(index?.checked_sub(1)?)
}
