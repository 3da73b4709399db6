//! Nano Render - 极简 UI 渲染辅助库
//! 将 `h` 与组件函数构建的树解析为平台节点并挂载到容器

// 平台树与事件
pub mod dom;
pub mod event;

// 标记 / 样式解析
pub mod parser;

// 核心：构建、解析、挂载
pub mod renderer;

// 服务端渲染
pub mod ssr;

pub mod config;
pub mod error;
pub mod value;

pub use config::{is_ssr, RenderConfig};
pub use dom::{Document, Host, Node, NodeType, SVG_NAMESPACE};
pub use error::RenderError;
pub use event::DomEvent;
pub use renderer::{
    ComponentDescriptor, ComponentRef, Piece, Prop, Props, Renderable, Renderer, Resolved, Tag,
};
pub use ssr::render_to_string;

/// 使用默认渲染器构建元素或组件描述符
pub fn h(tag: impl Into<Tag>, props: Props, children: Vec<Renderable>) -> Renderable {
    Renderer::new().h(tag, props, children)
}

/// 使用默认渲染器解析单个值
pub fn resolve(value: &Renderable) -> Result<Resolved, RenderError> {
    Renderer::new().resolve(value)
}

/// 使用默认渲染器追加子节点
pub fn append_children(parent: &Node, children: Vec<Renderable>) {
    Renderer::new().append_children(parent, children)
}

/// 使用默认渲染器渲染，见 [`Renderer::render`]
pub fn render(value: impl Into<Renderable>, parent: Option<&Node>) -> Option<Resolved> {
    Renderer::new().render(value, parent)
}

// 单元测试
#[cfg(test)]
mod tests;
