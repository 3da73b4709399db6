//! 平台工厂 - 创建元素、命名空间元素与文本节点

use super::node::Node;

/// 渲染宿主能力，渲染器通过它创建所有节点
pub trait Host {
    fn create_element(&self, tag_name: &str) -> Node;
    fn create_element_ns(&self, namespace: &str, qualified_name: &str) -> Node;
    fn create_text_node(&self, data: &str) -> Node;
}

/// 无头文档，节点只存在于内存中
#[derive(Debug, Clone, Copy, Default)]
pub struct Document;

impl Document {
    pub fn new() -> Self {
        Self
    }
}

impl Host for Document {
    fn create_element(&self, tag_name: &str) -> Node {
        Node::new_element(tag_name)
    }

    fn create_element_ns(&self, namespace: &str, qualified_name: &str) -> Node {
        Node::new_element_ns(namespace, qualified_name)
    }

    fn create_text_node(&self, data: &str) -> Node {
        Node::new_text(data)
    }
}

impl<H: Host + ?Sized> Host for &H {
    fn create_element(&self, tag_name: &str) -> Node {
        (**self).create_element(tag_name)
    }

    fn create_element_ns(&self, namespace: &str, qualified_name: &str) -> Node {
        (**self).create_element_ns(namespace, qualified_name)
    }

    fn create_text_node(&self, data: &str) -> Node {
        (**self).create_text_node(data)
    }
}
