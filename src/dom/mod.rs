//! 无头 DOM - 渲染目标平台树

mod document;
mod node;
mod serialize;

pub use document::{Document, Host};
pub use node::{Node, NodeType, SVG_NAMESPACE};
pub use serialize::{escape_attribute, escape_text, is_raw_text, is_void};
