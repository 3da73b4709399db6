//! 解析器测试

use super::{markup, renderer};
use crate::children;
use crate::dom::Node;
use crate::renderer::{ComponentDescriptor, ComponentRef, Piece, Props, Renderable, Resolved, Tag};
use serde_json::json;

fn text(s: &str) -> Piece {
    Piece::Text(s.to_string())
}

/// 测试字符串与数字解析为文本
#[test]
fn test_scalars_resolve_to_text() {
    let r = renderer();

    assert_eq!(r.resolve(&"hello".into()).unwrap(), Resolved::Single(text("hello")));
    assert_eq!(r.resolve(&Renderable::Number(42.0)).unwrap(), Resolved::Single(text("42")));
    assert_eq!(r.resolve(&Renderable::Number(-1.25)).unwrap(), Resolved::Single(text("-1.25")));
    assert_eq!(r.resolve(&json!(7).into()).unwrap(), Resolved::Single(text("7")));
    assert_eq!(r.resolve(&json!("").into()).unwrap(), Resolved::Single(text("")));
}

/// 测试极大、极小数字使用指数形式
#[test]
fn test_extreme_numbers_use_exponent_form() {
    let r = renderer();

    assert_eq!(r.resolve(&Renderable::Number(1e21)).unwrap(), Resolved::Single(text("1e+21")));
    assert_eq!(r.resolve(&Renderable::Number(1e-7)).unwrap(), Resolved::Single(text("1e-7")));
    assert_eq!(r.resolve(&json!(1e300).into()).unwrap(), Resolved::Single(text("1e+300")));
}

/// 测试空值解析为空序列
#[test]
fn test_empty_values_resolve_to_nothing() {
    let r = renderer();

    for value in [
        Renderable::Empty,
        Renderable::from(()),
        Renderable::from(false),
        Renderable::from(None::<&str>),
        Renderable::Data(json!(null)),
    ] {
        let resolved = r.resolve(&value).unwrap();
        assert!(resolved.is_empty(), "{:?} should resolve to nothing", value);
    }
}

/// 测试嵌套片段按顺序展平
#[test]
fn test_nested_fragments_flatten_in_order() {
    let r = renderer();
    let expected = Resolved::Many(vec![text("1"), text("2"), text("3"), text("4"), text("5")]);

    let data = Renderable::Data(json!([1, [2, [3, 4]], 5]));
    assert_eq!(r.resolve(&data).unwrap(), expected);

    let fragment = Renderable::fragment(vec![
        Renderable::from(1),
        Renderable::fragment(vec![Renderable::from(2), Renderable::fragment(vec![3, 4])]),
        Renderable::from(5),
    ]);
    assert_eq!(r.resolve(&fragment).unwrap(), expected);
}

/// 测试片段中的空值被跳过
#[test]
fn test_fragment_skips_empty_entries() {
    let r = renderer();
    let fragment = Renderable::fragment(vec![
        Renderable::from("a"),
        Renderable::Empty,
        Renderable::from(false),
        Renderable::from("b"),
    ]);
    assert_eq!(r.resolve(&fragment).unwrap(), Resolved::Many(vec![text("a"), text("b")]));
}

/// 测试描述符与直接调用组件结果一致
#[test]
fn test_descriptor_matches_direct_invocation() {
    let r = renderer();
    let card = |props: &Props| -> Renderable {
        crate::h(
            "section",
            Props::new().with("className", props.str("kind").unwrap_or("plain")),
            props.children.clone(),
        )
    };

    let props = Props::new().with("kind", "note");
    let descriptor = r.h(Tag::component(card), props.clone(), children!["body"]);

    let mut direct_props = props;
    direct_props.children = children!["body"];
    let direct = card(&direct_props);

    let via_descriptor = markup(r.resolve(&descriptor).unwrap());
    let via_call = markup(r.resolve(&direct).unwrap());
    assert_eq!(via_descriptor, via_call);
    assert_eq!(via_descriptor, vec![r#"<section class="note">body</section>"#.to_string()]);
}

/// 测试组件返回片段与嵌套组件
#[test]
fn test_component_returning_fragment_and_component() {
    let r = renderer();
    let inner = Tag::component(|props: &Props| Renderable::fragment(props.children.clone()));
    let outer = Tag::component(move |props: &Props| {
        crate::h(inner.clone(), Props::new(), vec![Renderable::from("x"), props.children[0].clone()])
    });

    let descriptor = r.h(outer, Props::new(), children!["y"]);
    assert_eq!(r.resolve(&descriptor).unwrap(), Resolved::Many(vec![text("x"), text("y")]));
}

/// 测试无参函数被调用后解析
#[test]
fn test_thunk_is_invoked() {
    let r = renderer();
    let thunk = Renderable::thunk(|| Renderable::thunk(|| "deep".into()));
    assert_eq!(r.resolve(&thunk).unwrap(), Resolved::Single(text("deep")));
}

/// 测试元素与文本节点原样返回
#[test]
fn test_nodes_pass_through() {
    let r = renderer();
    let div = Node::new_element("div");
    let txt = Node::new_text("t");

    assert_eq!(r.resolve(&div.clone().into()).unwrap(), Resolved::Single(Piece::Node(div)));
    assert_eq!(r.resolve(&txt.clone().into()).unwrap(), Resolved::Single(Piece::Node(txt)));
}

/// 测试 SVG 适配：非命名空间的 svg 被重建
#[test]
fn test_svg_adapter_rebuilds_element() {
    let r = renderer();
    let raw = Node::new_element("svg");
    raw.set_attribute("viewBox", "0 0 10 10");
    raw.set_attribute("width", "10");
    raw.set_inner_html(r#"<circle r="4"></circle>"#);
    assert!(!raw.is_svg_namespace());

    let resolved = r.resolve(&raw.clone().into()).unwrap();
    let svg = resolved.as_node().unwrap();

    assert_ne!(svg, &raw);
    assert!(svg.is_svg_namespace());
    assert_eq!(svg.attributes(), raw.attributes());
    assert_eq!(svg.inner_html(), r#"<circle r="4"></circle>"#);
    assert!(svg.first_child().unwrap().is_svg_namespace());
}

/// 测试已在命名空间中的 svg 不被重建
#[test]
fn test_svg_adapter_keeps_namespaced_element() {
    let r = renderer();
    let svg = Node::new_element_ns(crate::SVG_NAMESPACE, "svg");
    assert_eq!(r.adapt_svg(&svg), svg);
}

/// 测试少见形态：component 字段为节点、数组、描述符或普通值
#[test]
fn test_fallback_component_shapes() {
    let r = renderer();
    let div = Node::new_element("div");

    let by_node = ComponentDescriptor::new(ComponentRef::Node(div.clone()), Props::new());
    assert_eq!(r.resolve(&by_node.into()).unwrap(), Resolved::Single(Piece::Node(div)));

    let by_array = ComponentDescriptor::new(ComponentRef::Fragment(children!["a", "b"]), Props::new());
    assert_eq!(r.resolve(&by_array.into()).unwrap(), Resolved::Many(vec![text("a"), text("b")]));

    let innermost = ComponentDescriptor::new(ComponentRef::function(|_: &Props| "inner".into()), Props::new());
    let nested = ComponentDescriptor::new(ComponentRef::Descriptor(Box::new(innermost)), Props::new());
    assert_eq!(r.resolve(&nested.into()).unwrap(), Resolved::Single(text("inner")));

    let by_value = ComponentDescriptor::new(ComponentRef::Opaque(json!("plain")), Props::new());
    assert_eq!(r.resolve(&by_value.into()).unwrap(), Resolved::Single(text("plain")));
}

/// 测试无法解析的值返回错误
#[test]
fn test_unresolvable_values() {
    let r = renderer();

    let cases = vec![
        Renderable::from(true),
        Renderable::Data(json!({ "tag": "div" })),
        Renderable::Node(Node::new_comment("c")),
        ComponentDescriptor::new(ComponentRef::Opaque(json!(0)), Props::new()).into(),
        ComponentDescriptor::new(ComponentRef::Opaque(json!({})), Props::new()).into(),
    ];

    for value in cases {
        let err = r.resolve(&value).unwrap_err();
        assert!(err.is_unresolvable(), "{:?}", value);
    }
}

/// 测试片段中无法解析的项被丢弃
#[test]
fn test_fragment_drops_unresolvable_entries() {
    let r = renderer();
    let fragment = Renderable::fragment(vec![
        Renderable::from("ok"),
        Renderable::from(true),
        Renderable::from(2),
    ]);
    assert_eq!(r.resolve(&fragment).unwrap(), Resolved::Many(vec![text("ok"), text("2")]));
}
