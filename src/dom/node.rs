//! DOM 节点 - 可变的共享树节点

use super::serialize;
use crate::event::{is_event_property, DomEvent, EventListeners, Listener};
use crate::parser::markup::MarkupParser;
use crate::parser::style::parse_inline_style;
use indexmap::IndexMap;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// 节点类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    Element,
    Text,
    Comment,
}

struct NodeData {
    node_type: NodeType,
    tag_name: String,
    namespace: Option<String>,
    attributes: IndexMap<String, String>,
    children: Vec<Node>,
    parent: Weak<RefCell<NodeData>>,
    text_content: String,
    listeners: EventListeners,
}

impl NodeData {
    fn new(node_type: NodeType) -> Self {
        Self {
            node_type,
            tag_name: String::new(),
            namespace: None,
            attributes: IndexMap::new(),
            children: Vec::new(),
            parent: Weak::new(),
            text_content: String::new(),
            listeners: EventListeners::new(),
        }
    }
}

/// 平台节点句柄，克隆只复制引用
#[derive(Clone)]
pub struct Node(Rc<RefCell<NodeData>>);

impl Node {
    fn from_data(data: NodeData) -> Self {
        Self(Rc::new(RefCell::new(data)))
    }

    /// 默认命名空间（HTML）元素
    pub fn new_element(tag_name: &str) -> Self {
        let mut data = NodeData::new(NodeType::Element);
        data.tag_name = tag_name.to_string();
        Self::from_data(data)
    }

    pub fn new_element_ns(namespace: &str, tag_name: &str) -> Self {
        let mut data = NodeData::new(NodeType::Element);
        data.tag_name = tag_name.to_string();
        data.namespace = Some(namespace.to_string());
        Self::from_data(data)
    }

    pub fn new_text(content: &str) -> Self {
        let mut data = NodeData::new(NodeType::Text);
        data.text_content = content.to_string();
        Self::from_data(data)
    }

    pub fn new_comment(content: &str) -> Self {
        let mut data = NodeData::new(NodeType::Comment);
        data.text_content = content.to_string();
        Self::from_data(data)
    }

    pub fn node_type(&self) -> NodeType {
        self.0.borrow().node_type
    }

    pub fn is_element(&self) -> bool {
        self.node_type() == NodeType::Element
    }

    pub fn is_text(&self) -> bool {
        self.node_type() == NodeType::Text
    }

    /// 元素标签名，非元素为空串
    pub fn tag_name(&self) -> String {
        self.0.borrow().tag_name.clone()
    }

    pub fn namespace(&self) -> Option<String> {
        self.0.borrow().namespace.clone()
    }

    pub fn is_svg_namespace(&self) -> bool {
        self.0.borrow().namespace.as_deref() == Some(SVG_NAMESPACE)
    }

    // ---- 属性 ----

    pub fn get_attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    pub fn set_attribute(&self, name: &str, value: &str) {
        let mut data = self.0.borrow_mut();
        if data.node_type != NodeType::Element {
            tracing::error!(attribute = name, "set_attribute on a non-element node ignored");
            return;
        }
        data.attributes.insert(name.to_string(), value.to_string());
    }

    pub fn remove_attribute(&self, name: &str) -> Option<String> {
        self.0.borrow_mut().attributes.shift_remove(name)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.0.borrow().attributes.contains_key(name)
    }

    /// 按插入顺序返回全部属性
    pub fn attributes(&self) -> Vec<(String, String)> {
        self.0
            .borrow()
            .attributes
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// 非空的 id 属性
    pub fn id(&self) -> Option<String> {
        self.get_attribute("id").filter(|id| !id.is_empty())
    }

    /// 读取 style 属性中的单条声明
    pub fn style(&self, property: &str) -> Option<String> {
        let style = self.get_attribute("style")?;
        parse_inline_style(&style).get(property).cloned()
    }

    /// 文本节点返回其内容，元素返回后代文本拼接
    pub fn text_content(&self) -> String {
        let data = self.0.borrow();
        match data.node_type {
            NodeType::Text | NodeType::Comment => data.text_content.clone(),
            NodeType::Element => {
                let mut text = String::new();
                for child in &data.children {
                    if child.node_type() != NodeType::Comment {
                        text.push_str(&child.text_content());
                    }
                }
                text
            }
        }
    }

    // ---- 树结构 ----

    pub fn children(&self) -> Vec<Node> {
        self.0.borrow().children.clone()
    }

    pub fn child_count(&self) -> usize {
        self.0.borrow().children.len()
    }

    pub fn first_child(&self) -> Option<Node> {
        self.0.borrow().children.first().cloned()
    }

    pub fn parent(&self) -> Option<Node> {
        self.0.borrow().parent.upgrade().map(Node)
    }

    /// other 是否为自身或后代
    pub fn contains(&self, other: &Node) -> bool {
        let mut current = Some(other.clone());
        while let Some(node) = current {
            if node == *self {
                return true;
            }
            current = node.parent();
        }
        false
    }

    fn detach(&self) {
        if let Some(parent) = self.parent() {
            parent.0.borrow_mut().children.retain(|c| c != self);
        }
        self.0.borrow_mut().parent = Weak::new();
    }

    fn check_insert(&self, child: &Node) -> bool {
        if !self.is_element() {
            tracing::error!(parent = ?self, "cannot insert children into a non-element node");
            return false;
        }
        if child.contains(self) {
            tracing::error!(parent = ?self, child = ?child, "cannot insert an ancestor into its descendant");
            return false;
        }
        true
    }

    /// 追加子节点，子节点会先从原父节点移除
    pub fn append_child(&self, child: &Node) -> bool {
        if !self.check_insert(child) {
            return false;
        }
        child.detach();
        self.0.borrow_mut().children.push(child.clone());
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        true
    }

    pub fn remove_child(&self, child: &Node) -> bool {
        let is_child = child.parent().as_ref() == Some(self);
        if is_child {
            child.detach();
        }
        is_child
    }

    /// 用 new_child 替换 old_child
    pub fn replace_child(&self, new_child: &Node, old_child: &Node) -> bool {
        if old_child.parent().as_ref() != Some(self) {
            tracing::error!(parent = ?self, "replace_child: old child is not a child of this node");
            return false;
        }
        if new_child == old_child {
            return true;
        }
        if !self.check_insert(new_child) {
            return false;
        }
        new_child.detach();

        let mut data = self.0.borrow_mut();
        let index = match data.children.iter().position(|c| c == old_child) {
            Some(index) => index,
            None => return false,
        };
        data.children[index] = new_child.clone();
        drop(data);

        old_child.0.borrow_mut().parent = Weak::new();
        new_child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        true
    }

    fn clear_children(&self) {
        let children = std::mem::take(&mut self.0.borrow_mut().children);
        for child in children {
            child.0.borrow_mut().parent = Weak::new();
        }
    }

    // ---- 标记 ----

    pub fn inner_html(&self) -> String {
        let mut out = String::new();
        let raw = serialize::is_raw_text(&self.tag_name());
        for child in self.children() {
            serialize::serialize_node(&child, raw, &mut out);
        }
        out
    }

    pub fn outer_html(&self) -> String {
        let mut out = String::new();
        serialize::serialize_node(self, false, &mut out);
        out
    }

    /// 解析标记并替换全部子节点，在元素自身的命名空间内解析
    pub fn set_inner_html(&self, markup: &str) {
        if !self.is_element() {
            tracing::error!(node = ?self, "set_inner_html on a non-element node ignored");
            return;
        }
        let context = if self.is_svg_namespace() && self.tag_name() != "foreignObject" {
            Some(SVG_NAMESPACE)
        } else {
            None
        };
        let nodes = MarkupParser::new(markup).parse_fragment(context);
        self.clear_children();
        for node in &nodes {
            self.append_child(node);
        }
    }

    // ---- 事件 ----

    /// 元素是否暴露该事件属性（如 `onclick`）
    pub fn has_event_property(&self, name: &str) -> bool {
        self.is_element() && is_event_property(name)
    }

    pub fn add_event_listener(&self, event_type: &str, listener: Listener) {
        self.0.borrow_mut().listeners.add(event_type, listener);
    }

    pub fn listener_count(&self, event_type: &str) -> usize {
        self.0.borrow().listeners.count(event_type)
    }

    /// 同步派发事件，返回执行的监听器数量
    pub fn dispatch_event(&self, event: &DomEvent) -> usize {
        let listeners = self.0.borrow().listeners.matching(&event.event_type);
        for listener in &listeners {
            listener(event);
        }
        listeners.len()
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Node {}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = match self.0.try_borrow() {
            Ok(data) => data,
            Err(_) => return f.write_str("Node(<borrowed>)"),
        };
        match data.node_type {
            NodeType::Element => {
                write!(f, "Element(<{}", data.tag_name)?;
                for (k, v) in &data.attributes {
                    write!(f, " {}=\"{}\"", k, v)?;
                }
                write!(f, ">, {} children)", data.children.len())
            }
            NodeType::Text => write!(f, "Text({:?})", data.text_content),
            NodeType::Comment => write!(f, "Comment({:?})", data.text_content),
        }
    }
}
