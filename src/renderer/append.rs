//! 子节点挂载 - 展平任意嵌套的子节点并追加到父节点

use super::renderable::{Piece, Renderable, Resolved};
use super::Renderer;
use crate::dom::{Host, Node};

impl<H: Host> Renderer<H> {
    /// 依次解析并追加子节点；文本在此处才变为文本节点。
    /// 无法解析的子节点记录警告后跳过。
    pub fn append_children<I>(&self, parent: &Node, children: I)
    where
        I: IntoIterator,
        I::Item: Into<Renderable>,
    {
        for child in children {
            match child.into() {
                Renderable::Fragment(items) => self.append_children(parent, items),
                child => match self.resolve(&child) {
                    Ok(resolved) => self.attach(parent, resolved),
                    Err(err) => tracing::warn!(error = %err, parent = ?parent, "skipping unresolvable child"),
                },
            }
        }
    }

    /// 单个子节点
    pub fn append_child(&self, parent: &Node, child: impl Into<Renderable>) {
        self.append_children(parent, std::iter::once(child.into()));
    }

    pub(crate) fn attach(&self, parent: &Node, resolved: Resolved) {
        for piece in resolved.into_pieces() {
            let node = match piece {
                Piece::Node(node) => node,
                Piece::Text(text) => self.host.create_text_node(&text),
            };
            parent.append_child(&node);
        }
    }
}
