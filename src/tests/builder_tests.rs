//! 元素构建器测试

use super::renderer;
use crate::children;
use crate::config::RenderConfig;
use crate::dom::{Document, Node};
use crate::event::DomEvent;
use crate::renderer::{Piece, Prop, Props, Renderable, Renderer, Resolved, Tag};
use serde_json::json;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

fn node(value: Renderable) -> Node {
    match value {
        Renderable::Node(node) => node,
        other => panic!("expected an element, got {:?}", other),
    }
}

/// 测试样式对象转为 CSS 串
#[test]
fn test_style_object_becomes_css_string() {
    let r = renderer();
    let div = node(r.h(
        "div",
        Props::new().with("style", json!({ "backgroundColor": "red", "fontSize": "12px" })),
        vec![],
    ));

    assert_eq!(
        div.get_attribute("style").as_deref(),
        Some("background-color:red;font-size:12px;")
    );
    assert_eq!(div.style("font-size").as_deref(), Some("12px"));
}

/// 测试字符串样式原样写入
#[test]
fn test_style_string_passthrough() {
    let r = renderer();
    let div = node(r.h("div", Props::new().with("style", "color: blue"), vec![]));
    assert_eq!(div.get_attribute("style").as_deref(), Some("color: blue"));
}

/// 测试 onClick 绑定 click 事件，online 作为普通属性
#[test]
fn test_event_binding_and_on_prefixed_attribute() {
    let r = renderer();
    let clicks = Rc::new(Cell::new(0));
    let c = clicks.clone();

    let button = node(r.h(
        "button",
        Props::new()
            .with("onClick", Prop::listener(move |_| c.set(c.get() + 1)))
            .with("online", "yes"),
        children!["Go"],
    ));

    assert_eq!(button.listener_count("click"), 1);
    assert!(!button.has_attribute("onClick"));
    assert_eq!(button.get_attribute("online").as_deref(), Some("yes"));

    assert_eq!(button.dispatch_event(&DomEvent::new("click")), 1);
    button.dispatch_event(&DomEvent::new("click"));
    assert_eq!(clicks.get(), 2);
}

/// 测试事件名大小写归一化
#[test]
fn test_event_key_case_is_normalized() {
    let r = renderer();
    let input = node(r.h(
        "input",
        Props::new().with("ONINPUT", Prop::listener(|_| {})),
        vec![],
    ));
    assert_eq!(input.listener_count("input"), 1);
}

/// 测试事件监听收到事件数据
#[test]
fn test_listener_receives_event() {
    let r = renderer();
    let seen = Rc::new(RefCell::new(None));
    let s = seen.clone();

    let input = node(r.h(
        "input",
        Props::new().with(
            "onInput",
            Prop::listener(move |e: &DomEvent| *s.borrow_mut() = Some(e.detail.clone())),
        ),
        vec![],
    ));
    input.dispatch_event(&DomEvent::new("input").with_detail(json!({ "value": "abc" })));

    assert_eq!(*seen.borrow(), Some(json!({ "value": "abc" })));
}

/// 测试 className 写为 class，大小写不敏感
#[test]
fn test_class_name_alias() {
    let r = renderer();
    let a = node(r.h("div", Props::new().with("className", "card"), vec![]));
    let b = node(r.h("div", Props::new().with("classname", "row"), vec![]));

    assert_eq!(a.get_attribute("class").as_deref(), Some("card"));
    assert!(!a.has_attribute("className"));
    assert_eq!(b.get_attribute("class").as_deref(), Some("row"));
}

/// 测试 undefined 属性被跳过，其他值转为字符串
#[test]
fn test_attribute_values() {
    let r = renderer();
    let input = node(r.h(
        "input",
        Props::new()
            .with("title", Prop::Undefined)
            .with("tabindex", 3)
            .with("disabled", true)
            .with("data-ratio", 0.5)
            .with("placeholder", None::<&str>),
        vec![],
    ));

    assert!(!input.has_attribute("title"));
    assert!(!input.has_attribute("placeholder"));
    assert_eq!(input.get_attribute("tabindex").as_deref(), Some("3"));
    assert_eq!(input.get_attribute("disabled").as_deref(), Some("true"));
    assert_eq!(input.get_attribute("data-ratio").as_deref(), Some("0.5"));
}

/// 测试 dangerouslySetInnerHTML 生成包裹节点
#[test]
fn test_dangerously_set_inner_html() {
    let r = renderer();
    let div = node(r.h(
        "div",
        Props::new().with("dangerouslySetInnerHTML", json!({ "__html": "<b>bold</b> text" })),
        children!["after"],
    ));

    assert_eq!(div.child_count(), 2);
    let wrapper = div.first_child().unwrap();
    assert_eq!(wrapper.tag_name(), "fragment");
    assert_eq!(div.inner_html(), "<fragment><b>bold</b> text</fragment>after");
    assert!(!div.has_attribute("dangerouslySetInnerHTML"));
}

/// 测试 ref 在子节点挂载后调用一次
#[test]
fn test_ref_fires_once_after_children() {
    let r = renderer();
    let calls = Rc::new(Cell::new(0));
    let child_count = Rc::new(Cell::new(0));
    let captured: Rc<RefCell<Option<Node>>> = Rc::new(RefCell::new(None));

    let (c, n, cap) = (calls.clone(), child_count.clone(), captured.clone());
    let list = node(r.h(
        "ul",
        Props::new().with(
            "ref",
            Prop::reference(move |el: &Node| {
                c.set(c.get() + 1);
                n.set(el.child_count());
                *cap.borrow_mut() = Some(el.clone());
            }),
        ),
        children![r.h("li", Props::new(), children!["a"]), r.h("li", Props::new(), children!["b"])],
    ));

    assert_eq!(calls.get(), 1);
    assert_eq!(child_count.get(), 2);
    assert_eq!(captured.borrow().as_ref(), Some(&list));
    assert!(!list.has_attribute("ref"));
}

/// 测试 svg 标签直接在 SVG 命名空间创建
#[test]
fn test_svg_tag_uses_namespace() {
    let r = renderer();
    let svg = node(r.h("svg", Props::new().with("viewBox", "0 0 24 24"), vec![]));
    let div = node(r.h("div", Props::new(), vec![]));

    assert!(svg.is_svg_namespace());
    assert_eq!(svg.namespace().as_deref(), Some(crate::SVG_NAMESPACE));
    assert!(div.namespace().is_none());
}

/// 测试嵌套的 svg 元素保留监听器
#[test]
fn test_nested_svg_keeps_listeners() {
    let r = renderer();
    let icon = r.h(
        "svg",
        Props::new().with("onClick", Prop::listener(|_| {})),
        vec![],
    );
    let icon_node = icon.as_node().unwrap().clone();
    let wrapper = node(r.h("span", Props::new(), vec![icon]));

    assert_eq!(wrapper.first_child(), Some(icon_node.clone()));
    assert_eq!(icon_node.listener_count("click"), 1);
}

/// 测试组件引用只生成描述符
#[test]
fn test_component_is_deferred() {
    let r = renderer();
    let calls = Rc::new(Cell::new(0));
    let c = calls.clone();

    let descriptor = r.h(
        Tag::component(move |props: &Props| {
            c.set(c.get() + 1);
            Renderable::from(props.str("title").unwrap_or_default().to_string())
        }),
        Props::new().with("title", "hi").with("children", "ignored"),
        children!["x", "y"],
    );

    assert_eq!(calls.get(), 0);
    match &descriptor {
        Renderable::Component(d) => {
            assert_eq!(d.props.children.len(), 2);
            assert_eq!(d.props.str("title"), Some("hi"));
            assert!(d.props.get("children").is_none());
        }
        other => panic!("expected a descriptor, got {:?}", other),
    }

    assert_eq!(
        r.resolve(&descriptor).unwrap(),
        Resolved::Single(Piece::Text("hi".to_string()))
    );
    assert_eq!(calls.get(), 1);
}

/// 测试 SSR 模式不安装监听器
#[test]
fn test_ssr_skips_listeners() {
    let r = Renderer::with_config(Document, RenderConfig::ssr());
    let button = node(r.h(
        "button",
        Props::new()
            .with("onClick", Prop::listener(|_| {}))
            .with("type", "submit"),
        vec![],
    ));

    assert_eq!(button.listener_count("click"), 0);
    assert!(!button.has_attribute("onClick"));
    assert_eq!(button.get_attribute("type").as_deref(), Some("submit"));
}
