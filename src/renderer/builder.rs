//! 元素构建器 - `h(tag, props, children)`

use super::renderable::{ComponentDescriptor, ComponentRef, Prop, Props, RefCallback, Renderable};
use super::Renderer;
use crate::dom::{Host, Node, SVG_NAMESPACE};
use crate::parser::style_object_to_css;
use crate::value::{is_truthy, to_display_string};
use serde_json::Value as JsonValue;

/// `h` 的第一个参数：标签名或组件引用
#[derive(Clone, Debug)]
pub enum Tag {
    Name(String),
    Component(ComponentRef),
}

impl Tag {
    pub fn component(f: impl Fn(&Props) -> Renderable + 'static) -> Self {
        Self::Component(ComponentRef::function(f))
    }
}

impl From<&str> for Tag {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for Tag {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<ComponentRef> for Tag {
    fn from(component: ComponentRef) -> Self {
        Self::Component(component)
    }
}

impl<H: Host> Renderer<H> {
    /// 标签名立即构建元素；组件引用只生成描述符，调用推迟到解析阶段
    pub fn h(&self, tag: impl Into<Tag>, props: Props, children: Vec<Renderable>) -> Renderable {
        match tag.into() {
            Tag::Name(name) => Renderable::Node(self.create_element(&name, props, children)),
            Tag::Component(component) => {
                let mut props = props;
                props.remove("children");
                props.children = children;
                Renderable::Component(ComponentDescriptor::new(component, props))
            }
        }
    }

    /// 构建元素：应用属性、挂载子节点，最后以完成的元素调用 ref
    pub fn create_element(&self, tag_name: &str, props: Props, children: Vec<Renderable>) -> Node {
        let element = if tag_name == "svg" {
            self.host.create_element_ns(SVG_NAMESPACE, tag_name)
        } else {
            self.host.create_element(tag_name)
        };

        let mut reference: Option<RefCallback> = None;

        for (key, prop) in props.iter() {
            let normalized;
            let prop = match (key.as_str(), prop) {
                ("style", Prop::Value(JsonValue::Object(style))) => {
                    normalized = Prop::Value(JsonValue::String(style_object_to_css(style)));
                    &normalized
                }
                _ => prop,
            };

            if key == "ref" {
                match prop {
                    Prop::Ref(callback) => reference = Some(callback.clone()),
                    other => tracing::warn!(value = ?other, "ref is not a callback, ignored"),
                }
            } else if is_event(&element, key) {
                self.bind_event(&element, key, prop);
            } else if let Some(html) = inner_html(key, prop) {
                let wrapper = self.host.create_element("fragment");
                wrapper.set_inner_html(&html);
                element.append_child(&wrapper);
            } else if key.eq_ignore_ascii_case("className") {
                if let Some(class) = attribute_text(key, prop) {
                    element.set_attribute("class", &class);
                }
            } else if let Some(value) = attribute_text(key, prop) {
                element.set_attribute(key, &value);
            }
        }

        self.append_children(&element, children);

        if let Some(callback) = reference {
            callback(&element);
        }

        element
    }

    fn bind_event(&self, element: &Node, key: &str, prop: &Prop) {
        let name = key.to_ascii_lowercase();
        let event_type = &name[2..];
        match prop {
            Prop::Listener(_) if self.is_ssr() => {
                tracing::trace!(event_type, "ssr mode, listener not installed");
            }
            Prop::Listener(listener) => element.add_event_listener(event_type, listener.clone()),
            other => tracing::warn!(key, value = ?other, "event property is not a listener, ignored"),
        }
    }
}

/// `on` 前缀且元素暴露同名（小写）事件属性
fn is_event(element: &Node, key: &str) -> bool {
    let name = key.to_ascii_lowercase();
    name.starts_with("on") && element.has_event_property(&name)
}

/// `dangerouslySetInnerHTML` 的 `__html`，为假值时按普通属性处理
fn inner_html(key: &str, prop: &Prop) -> Option<String> {
    if key != "dangerouslySetInnerHTML" {
        return None;
    }
    prop.as_value()
        .and_then(|v| v.get("__html"))
        .filter(|html| is_truthy(html))
        .map(to_display_string)
}

/// 普通属性的文本值，undefined 与回调不写入
fn attribute_text(key: &str, prop: &Prop) -> Option<String> {
    match prop {
        Prop::Value(value) => Some(to_display_string(value)),
        Prop::Undefined => None,
        other => {
            tracing::warn!(key, value = ?other, "callback used as an attribute value, ignored");
            None
        }
    }
}
