//! 单元测试模块
//! 覆盖元素构建、解析、挂载、标记解析与服务端渲染

pub mod builder_tests;
pub mod resolver_tests;

use crate::config::RenderConfig;
use crate::dom::Document;
use crate::renderer::{Piece, Renderer, Resolved};

/// 辅助函数：不受环境变量影响的渲染器
pub(crate) fn renderer() -> Renderer {
    Renderer::with_config(Document, RenderConfig::default())
}

/// 辅助函数：解析结果转为可比较的标记串
pub(crate) fn markup(resolved: Resolved) -> Vec<String> {
    resolved
        .into_pieces()
        .into_iter()
        .map(|piece| match piece {
            Piece::Node(node) => node.outer_html(),
            Piece::Text(text) => text,
        })
        .collect()
}
