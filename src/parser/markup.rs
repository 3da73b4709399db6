//! HTML 片段解析器 - 供 innerHTML 使用
//!
//! 宽松解析：不匹配或缺失的结束标签会被自动闭合，从不返回错误。

use crate::dom::{is_raw_text, is_void, Node, SVG_NAMESPACE};

/// 标记解析器
pub struct MarkupParser {
    input: Vec<char>,
    pos: usize,
    /// 当前打开的元素标签，用于恢复不匹配的结束标签
    open: Vec<String>,
}

impl MarkupParser {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            pos: 0,
            open: Vec::new(),
        }
    }

    /// 按 HTML 命名空间解析
    pub fn parse(&mut self) -> Vec<Node> {
        self.parse_fragment(None)
    }

    /// 在给定命名空间上下文中解析片段
    pub fn parse_fragment(&mut self, namespace: Option<&str>) -> Vec<Node> {
        let mut nodes = Vec::new();

        while self.pos < self.input.len() {
            if self.current_char() != '<' || !self.at_markup() {
                if let Some(text) = self.parse_text() {
                    nodes.push(text);
                }
                continue;
            }

            if self.starts_with("<!--") {
                nodes.push(self.parse_comment());
            } else if self.starts_with("</") {
                let name = self.peek_end_tag_name();
                if self.open.iter().any(|t| t.eq_ignore_ascii_case(&name)) {
                    break; // 交给对应的父元素闭合
                }
                // 孤立的结束标签直接丢弃
                self.skip_past('>');
            } else if self.starts_with("<!") || self.starts_with("<?") {
                // doctype / 处理指令
                self.skip_past('>');
            } else {
                nodes.push(self.parse_element(namespace));
            }
        }

        nodes
    }

    fn parse_element(&mut self, namespace: Option<&str>) -> Node {
        self.advance(); // skip '<'
        let raw_name = self.parse_name();

        let in_svg = raw_name.eq_ignore_ascii_case("svg") || namespace == Some(SVG_NAMESPACE);
        let tag_name = if in_svg && !raw_name.eq_ignore_ascii_case("svg") {
            raw_name
        } else {
            raw_name.to_ascii_lowercase()
        };
        let node = if in_svg {
            Node::new_element_ns(SVG_NAMESPACE, &tag_name)
        } else {
            Node::new_element(&tag_name)
        };

        // 解析属性，重复属性以第一个为准
        loop {
            self.skip_whitespace();
            if self.pos >= self.input.len() || self.current_char() == '>' || self.starts_with("/>") {
                break;
            }
            let (name, value) = self.parse_attribute();
            if name.is_empty() {
                self.advance();
                continue;
            }
            if !node.has_attribute(&name) {
                node.set_attribute(&name, &decode_entities(&value));
            }
        }

        let self_closing = self.starts_with("/>");
        if self_closing {
            self.advance();
        }
        if self.pos < self.input.len() {
            self.advance(); // skip '>'
        }

        if (in_svg && self_closing) || (!in_svg && is_void(&tag_name)) {
            return node;
        }

        if !in_svg && is_raw_text(&tag_name) {
            let text = self.read_raw_text(&tag_name);
            if !text.is_empty() {
                node.append_child(&Node::new_text(&text));
            }
            return node;
        }

        let child_namespace = if in_svg && tag_name != "foreignObject" {
            Some(SVG_NAMESPACE)
        } else {
            None
        };

        self.open.push(tag_name.clone());
        let children = self.parse_fragment(child_namespace);
        self.open.pop();

        for child in &children {
            node.append_child(child);
        }

        if self.starts_with("</") && self.peek_end_tag_name().eq_ignore_ascii_case(&tag_name) {
            self.skip_past('>');
        }

        node
    }

    fn parse_name(&mut self) -> String {
        let mut name = String::new();
        while self.pos < self.input.len() {
            let c = self.current_char();
            if c.is_alphanumeric() || c == '-' || c == '_' || c == ':' || c == '.' {
                name.push(c);
                self.advance();
            } else {
                break;
            }
        }
        name
    }

    fn peek_end_tag_name(&mut self) -> String {
        let start = self.pos;
        self.pos += 2;
        let name = self.parse_name();
        self.pos = start;
        name
    }

    fn parse_attribute(&mut self) -> (String, String) {
        let mut name = String::new();
        while self.pos < self.input.len() {
            let c = self.current_char();
            if c.is_whitespace() || c == '=' || c == '>' || c == '/' || c == '"' || c == '\'' {
                break;
            }
            name.push(c);
            self.advance();
        }

        self.skip_whitespace();
        if self.current_char() != '=' {
            return (name, String::new());
        }

        self.advance(); // skip '='
        self.skip_whitespace();

        (name, self.parse_attribute_value())
    }

    fn parse_attribute_value(&mut self) -> String {
        let quote = self.current_char();
        if quote != '"' && quote != '\'' {
            // 无引号值
            let mut value = String::new();
            while self.pos < self.input.len() {
                let c = self.current_char();
                if c.is_whitespace() || c == '>' {
                    break;
                }
                value.push(c);
                self.advance();
            }
            return value;
        }

        self.advance(); // skip opening quote

        let mut value = String::new();
        while self.pos < self.input.len() && self.current_char() != quote {
            value.push(self.current_char());
            self.advance();
        }

        if self.pos < self.input.len() {
            self.advance(); // skip closing quote
        }

        value
    }

    fn parse_text(&mut self) -> Option<Node> {
        let mut text = String::new();
        // 首字符总是文本（可能是不构成标签的 '<'）
        text.push(self.current_char());
        self.advance();
        while self.pos < self.input.len() && !(self.current_char() == '<' && self.at_markup()) {
            text.push(self.current_char());
            self.advance();
        }

        if text.is_empty() {
            None
        } else {
            Some(Node::new_text(&decode_entities(&text)))
        }
    }

    fn read_raw_text(&mut self, tag_name: &str) -> String {
        let mut text = String::new();
        while self.pos < self.input.len() {
            if self.starts_with("</") && self.peek_end_tag_name().eq_ignore_ascii_case(tag_name) {
                self.skip_past('>');
                break;
            }
            text.push(self.current_char());
            self.advance();
        }
        text
    }

    fn parse_comment(&mut self) -> Node {
        // Skip <!--
        self.pos += 4;

        let mut content = String::new();
        while self.pos < self.input.len() && !self.starts_with("-->") {
            content.push(self.current_char());
            self.advance();
        }

        // Skip -->
        self.pos = (self.pos + 3).min(self.input.len());
        Node::new_comment(&content)
    }

    /// '<' 后是否构成标签、注释或结束标签
    fn at_markup(&self) -> bool {
        match self.input.get(self.pos + 1) {
            Some(c) => c.is_alphabetic() || *c == '/' || *c == '!' || *c == '?',
            None => false,
        }
    }

    fn skip_past(&mut self, c: char) {
        while self.pos < self.input.len() && self.current_char() != c {
            self.advance();
        }
        if self.pos < self.input.len() {
            self.advance();
        }
    }

    fn current_char(&self) -> char {
        if self.pos < self.input.len() {
            self.input[self.pos]
        } else {
            '\0'
        }
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn skip_whitespace(&mut self) {
        while self.pos < self.input.len() && self.current_char().is_whitespace() {
            self.advance();
        }
    }

    fn starts_with(&self, s: &str) -> bool {
        for (i, c) in s.chars().enumerate() {
            if self.pos + i >= self.input.len() || self.input[self.pos + i] != c {
                return false;
            }
        }
        true
    }
}

/// 解码常见字符实体，未知实体原样保留
pub fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let decoded = tail.find(';').and_then(|end| {
            let entity = &tail[1..end];
            decode_entity(entity).map(|c| (c, end + 1))
        });
        match decoded {
            Some((c, len)) => {
                out.push(c);
                rest = &tail[len..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_entity(entity: &str) -> Option<char> {
    match entity {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => {
            let code = if let Some(hex) = entity.strip_prefix("#x").or_else(|| entity.strip_prefix("#X")) {
                u32::from_str_radix(hex, 16).ok()?
            } else {
                entity.strip_prefix('#')?.parse::<u32>().ok()?
            };
            char::from_u32(code)
        }
    }
}
