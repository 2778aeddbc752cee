use crate::node::{Node, NodeData};

impl Node {
    /// Flattened text content of the node, ignoring markup.
    ///
    /// Literal nodes contribute their value, images their alt text, and every
    /// other node the text of its children.
    pub fn to_text(&self) -> String {
        let mut buf = String::new();
        collect_text(self, &mut buf);
        buf
    }
}

fn collect_text(node: &Node, buf: &mut String) {
    if let Some(value) = node.value() {
        buf.push_str(value);
        return;
    }

    match &node.data {
        NodeData::Image { alt: Some(alt), .. }
        | NodeData::ImageReference { alt: Some(alt), .. } => {
            buf.push_str(alt);
        }
        _ => {
            for child in &node.children {
                collect_text(child, buf);
            }
        }
    }
}
