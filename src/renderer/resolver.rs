//! 解析器 - 将任意可渲染值转为节点 / 文本
//!
//! 分派顺序：
//! 1. 空值 → 空序列
//! 2. 字符串、数字 → 文本
//! 3. `svg` 元素 → SVG 适配
//! 4. 其他元素、文本节点 → 原样返回
//! 5. 组件描述符 → 调用组件后递归解析
//! 6. 片段 → 逐项解析并展平一层
//! 7. 无参函数 → 调用后递归解析
//! 8. 少见形态（component 字段为节点、数组、描述符或其他值）→ 展开后递归
//! 9. 其余 → `RenderError::Unresolvable`

use super::renderable::{ComponentDescriptor, ComponentRef, Piece, Renderable, Resolved};
use super::Renderer;
use crate::dom::{Host, Node, NodeType};
use crate::error::RenderError;
use crate::value::{format_number, is_truthy, to_display_string};
use serde_json::Value as JsonValue;

fn text(s: String) -> Resolved {
    Resolved::Single(Piece::Text(s))
}

impl<H: Host> Renderer<H> {
    /// 解析单个值；不修改参数，结果中不含嵌套序列或描述符。
    /// 已在 SVG 命名空间中的 `svg` 元素不重建，原样返回。
    pub fn resolve(&self, value: &Renderable) -> Result<Resolved, RenderError> {
        match value {
            Renderable::Empty => Ok(Resolved::empty()),
            Renderable::Text(s) => Ok(text(s.clone())),
            Renderable::Number(n) => Ok(text(format_number(*n))),
            Renderable::Node(node) => self.resolve_node(node),
            Renderable::Component(descriptor) => self.resolve_component(descriptor),
            Renderable::Fragment(items) => Ok(self.resolve_fragment(items)),
            Renderable::Thunk(f) => self.resolve(&f()),
            Renderable::Data(data) => self.resolve_data(data),
        }
    }

    fn resolve_node(&self, node: &Node) -> Result<Resolved, RenderError> {
        match node.node_type() {
            NodeType::Element if node.tag_name().eq_ignore_ascii_case("svg") => {
                Ok(Resolved::Single(Piece::Node(self.adapt_svg(node))))
            }
            NodeType::Element | NodeType::Text => Ok(Resolved::Single(Piece::Node(node.clone()))),
            NodeType::Comment => Err(RenderError::unresolvable(node)),
        }
    }

    fn resolve_component(&self, descriptor: &ComponentDescriptor) -> Result<Resolved, RenderError> {
        match &descriptor.component {
            ComponentRef::Function(component) => {
                let output = component(&descriptor.props);
                self.resolve(&output)
            }
            ComponentRef::Node(node) => self.resolve_node(node),
            ComponentRef::Fragment(items) => Ok(self.resolve_fragment(items)),
            ComponentRef::Descriptor(inner) => self.resolve_component(inner),
            ComponentRef::Opaque(value) if is_truthy(value) => self.resolve_data(value),
            ComponentRef::Opaque(_) => Err(RenderError::unresolvable(descriptor)),
        }
    }

    /// 片段中无法解析的项记录后丢弃，不影响其余项
    fn resolve_fragment(&self, items: &[Renderable]) -> Resolved {
        let mut pieces = Vec::new();
        for item in items {
            match self.resolve(item) {
                Ok(resolved) => pieces.extend(resolved.into_pieces()),
                Err(err) => tracing::warn!(error = %err, "dropping unresolvable fragment entry"),
            }
        }
        Resolved::Many(pieces)
    }

    fn resolve_data(&self, data: &JsonValue) -> Result<Resolved, RenderError> {
        match data {
            JsonValue::Null | JsonValue::Bool(false) => Ok(Resolved::empty()),
            JsonValue::String(s) => Ok(text(s.clone())),
            JsonValue::Number(_) => Ok(text(to_display_string(data))),
            JsonValue::Array(items) => {
                let items: Vec<Renderable> = items.iter().cloned().map(Renderable::Data).collect();
                Ok(self.resolve_fragment(&items))
            }
            JsonValue::Bool(true) | JsonValue::Object(_) => Err(RenderError::unresolvable(data)),
        }
    }
}
