//! 服务端渲染 - 将可渲染值序列化为 HTML 字符串

use crate::config::RenderConfig;
use crate::dom::{escape_text, Document, Host};
use crate::renderer::{Piece, Renderable, Renderer};

impl<H: Host> Renderer<H> {
    /// 解析后逐个序列化：节点输出完整标记，文本转义后输出
    pub fn render_to_string(&self, value: impl Into<Renderable>) -> String {
        let resolved = match self.render(value, None) {
            Some(resolved) => resolved,
            None => return String::new(),
        };

        let mut html = String::new();
        for piece in resolved.into_pieces() {
            match piece {
                Piece::Node(node) => html.push_str(&node.outer_html()),
                Piece::Text(text) => html.push_str(&escape_text(&text)),
            }
        }
        html
    }
}

/// 以 SSR 模式渲染为字符串
pub fn render_to_string(value: impl Into<Renderable>) -> String {
    Renderer::with_config(Document, RenderConfig::ssr()).render_to_string(value)
}
