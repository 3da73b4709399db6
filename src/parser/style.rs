//! 内联样式 - 样式对象与 CSS 声明文本互转

use crate::value::to_display_string;
use indexmap::IndexMap;
use serde_json::{Map, Value as JsonValue};

/// camelCase 转 kebab-case（`backgroundColor` → `background-color`）
pub fn camel_to_kebab(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// 样式对象转为 `key:value;` 串，键名转为 kebab-case，值原样输出
pub fn style_object_to_css(style: &Map<String, JsonValue>) -> String {
    let mut css = String::new();
    for (key, value) in style {
        css.push_str(&camel_to_kebab(key));
        css.push(':');
        css.push_str(&to_display_string(value));
        css.push(';');
    }
    css
}

/// 解析 CSS 声明文本，保持声明顺序，后出现的同名声明覆盖前者
pub fn parse_inline_style(css: &str) -> IndexMap<String, String> {
    let mut properties = IndexMap::new();
    let input: Vec<char> = css.chars().collect();
    let mut pos = 0;

    while pos < input.len() {
        // 属性名
        let mut name = String::new();
        while pos < input.len() && input[pos] != ':' && input[pos] != ';' {
            name.push(input[pos]);
            pos += 1;
        }
        if pos >= input.len() || input[pos] == ';' {
            pos += 1;
            continue;
        }
        pos += 1; // skip ':'

        // 属性值，括号内的分号不结束声明
        let mut value = String::new();
        let mut paren_depth: i32 = 0;
        while pos < input.len() {
            let c = input[pos];
            if c == '(' {
                paren_depth += 1;
            } else if c == ')' {
                // 多余的右括号不计入
                paren_depth = (paren_depth - 1).max(0);
            }
            if paren_depth == 0 && c == ';' {
                break;
            }
            value.push(c);
            pos += 1;
        }
        pos += 1; // skip ';'

        let name = name.trim().to_ascii_lowercase();
        if !name.is_empty() {
            properties.insert(name, value.trim().to_string());
        }
    }

    properties
}
