//! 渲染入口 - 解析并可选地挂载到父节点

use super::renderable::{Piece, Renderable, Resolved};
use super::Renderer;
use crate::dom::{Host, Node};

impl<H: Host> Renderer<H> {
    /// 无父节点时返回解析结果（单元素序列收拢为单个片段，无法解析时为 `None`）；
    /// 有父节点时挂载并返回父节点。
    pub fn render(&self, value: impl Into<Renderable>, parent: Option<&Node>) -> Option<Resolved> {
        match parent {
            Some(parent) => Some(Resolved::Single(Piece::Node(self.mount(value, parent)))),
            None => {
                let value = value.into();
                match self.resolve(&value) {
                    Ok(resolved) => Some(resolved.collapse()),
                    Err(err) => {
                        tracing::warn!(error = %err, "render produced nothing");
                        None
                    }
                }
            }
        }
    }

    /// 挂载到 parent 并返回 parent。
    /// 解析出的单个根元素与 parent 的 id 相同且 parent 有父节点时，用根元素就地替换 parent。
    pub fn mount(&self, value: impl Into<Renderable>, parent: &Node) -> Node {
        let value = value.into();
        let resolved = match self.resolve(&value) {
            Ok(resolved) => resolved.collapse(),
            Err(err) => {
                tracing::warn!(error = %err, parent = ?parent, "nothing to mount");
                return parent.clone();
            }
        };

        if let Resolved::Single(Piece::Node(root)) = &resolved {
            if let (Some(id), Some(ancestor)) = (parent.id(), parent.parent()) {
                if root.id().as_deref() == Some(id.as_str()) {
                    tracing::debug!(id = %id, "replacing mount point in place");
                    ancestor.replace_child(root, parent);
                    return parent.clone();
                }
            }
        }

        self.attach(parent, resolved);
        parent.clone()
    }
}
