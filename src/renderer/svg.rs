//! SVG 适配 - 修复未带命名空间创建的 `<svg>` 元素

use super::Renderer;
use crate::dom::{Host, Node, SVG_NAMESPACE};

impl<H: Host> Renderer<H> {
    /// 在 SVG 命名空间中重建元素：复制全部属性与内部标记。
    /// 已在 SVG 命名空间中的元素原样返回，保留其监听器。
    pub fn adapt_svg(&self, source: &Node) -> Node {
        if source.is_svg_namespace() {
            return source.clone();
        }

        let svg = self.host.create_element_ns(SVG_NAMESPACE, "svg");
        for (name, value) in source.attributes() {
            svg.set_attribute(&name, &value);
        }
        svg.set_inner_html(&source.inner_html());

        tracing::debug!(attributes = svg.attributes().len(), "svg element moved into the svg namespace");
        svg
    }
}
