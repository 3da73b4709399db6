//! 渲染器 - 将 `h` 构建的树解析为平台节点并挂载
//!
//! 所有操作在调用线程上同步完成，组件函数按深度优先、从左到右的顺序执行。

mod append;
mod builder;
mod mount;
mod renderable;
mod resolver;
mod svg;

pub use builder::Tag;
pub use renderable::{
    ComponentDescriptor, ComponentFn, ComponentRef, Piece, Prop, Props, RefCallback, Renderable,
    Resolved,
};

use crate::config::{self, RenderConfig};
use crate::dom::{Document, Host};

/// 渲染器：持有平台工厂与一份配置快照
#[derive(Debug, Clone)]
pub struct Renderer<H: Host = Document> {
    host: H,
    config: RenderConfig,
}

impl Renderer<Document> {
    /// 无头文档 + 当前全局配置
    pub fn new() -> Self {
        Self::with_host(Document)
    }
}

impl Default for Renderer<Document> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Host> Renderer<H> {
    pub fn with_host(host: H) -> Self {
        Self::with_config(host, config::current())
    }

    pub fn with_config(host: H, config: RenderConfig) -> Self {
        Self { host, config }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn is_ssr(&self) -> bool {
        self.config.is_ssr
    }
}

/// 构建子节点列表：`children!["text", node, 42]`
#[macro_export]
macro_rules! children {
    ($($child:expr),* $(,)?) => {
        vec![$($crate::Renderable::from($child)),*]
    };
}
