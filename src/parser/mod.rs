//! 标记与样式文本解析

pub mod markup;
pub mod style;

pub use markup::{decode_entities, MarkupParser};
pub use style::{camel_to_kebab, parse_inline_style, style_object_to_css};
