//! 节点序列化为 HTML 标记

use super::node::{Node, NodeType};

/// 无结束标签的 HTML 元素
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// 内容不转义的元素
pub const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

pub fn is_void(tag_name: &str) -> bool {
    VOID_ELEMENTS.contains(&tag_name)
}

pub fn is_raw_text(tag_name: &str) -> bool {
    RAW_TEXT_ELEMENTS.contains(&tag_name)
}

pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// raw 为真时文本原样输出（父元素为 script/style）
pub(crate) fn serialize_node(node: &Node, raw: bool, out: &mut String) {
    match node.node_type() {
        NodeType::Text => {
            let text = node.text_content();
            if raw {
                out.push_str(&text);
            } else {
                out.push_str(&escape_text(&text));
            }
        }
        NodeType::Comment => {
            out.push_str("<!--");
            out.push_str(&node.text_content());
            out.push_str("-->");
        }
        NodeType::Element => {
            let tag = node.tag_name();
            out.push('<');
            out.push_str(&tag);
            for (name, value) in node.attributes() {
                out.push(' ');
                out.push_str(&name);
                out.push_str("=\"");
                out.push_str(&escape_attribute(&value));
                out.push('"');
            }
            out.push('>');

            if !node.is_svg_namespace() && is_void(&tag) {
                return;
            }

            let raw_children = is_raw_text(&tag);
            for child in node.children() {
                serialize_node(&child, raw_children, out);
            }
            out.push_str("</");
            out.push_str(&tag);
            out.push('>');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_escapes() {
        let p = Node::new_element("p");
        p.set_attribute("title", "a \"b\" & c");
        p.append_child(&Node::new_text("1 < 2"));
        assert_eq!(p.outer_html(), r#"<p title="a &quot;b&quot; &amp; c">1 &lt; 2</p>"#);
    }

    #[test]
    fn test_serialize_void_and_raw_text() {
        let div = Node::new_element("div");
        div.append_child(&Node::new_element("br"));
        let style = Node::new_element("style");
        style.append_child(&Node::new_text("a > b {}"));
        div.append_child(&style);
        assert_eq!(div.outer_html(), "<div><br><style>a > b {}</style></div>");
    }
}
