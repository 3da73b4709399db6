//! 可渲染值 - 解析器的输入与输出类型

use crate::dom::Node;
use crate::event::{DomEvent, Listener};
use indexmap::IndexMap;
use serde_json::Value as JsonValue;
use std::fmt;
use std::rc::Rc;

/// 组件函数：接收属性包，返回任意可渲染值
pub type ComponentFn = Rc<dyn Fn(&Props) -> Renderable>;

/// ref 回调：元素构建完成（子节点已挂载）后以该元素调用一次
pub type RefCallback = Rc<dyn Fn(&Node)>;

/// 属性包中的单个值
#[derive(Clone)]
pub enum Prop {
    /// 普通数据：属性值、样式对象、`dangerouslySetInnerHTML` 负载
    Value(JsonValue),
    /// 未定义，普通属性会被跳过
    Undefined,
    Listener(Listener),
    Ref(RefCallback),
}

impl Prop {
    pub fn listener(f: impl Fn(&DomEvent) + 'static) -> Self {
        Self::Listener(Rc::new(f))
    }

    pub fn reference(f: impl Fn(&Node) + 'static) -> Self {
        Self::Ref(Rc::new(f))
    }

    pub fn as_value(&self) -> Option<&JsonValue> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Debug for Prop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => write!(f, "{}", v),
            Self::Undefined => f.write_str("undefined"),
            Self::Listener(_) => f.write_str("<listener>"),
            Self::Ref(_) => f.write_str("<ref>"),
        }
    }
}

impl From<JsonValue> for Prop {
    fn from(v: JsonValue) -> Self {
        Self::Value(v)
    }
}

impl From<&str> for Prop {
    fn from(v: &str) -> Self {
        Self::Value(JsonValue::String(v.to_string()))
    }
}

impl From<String> for Prop {
    fn from(v: String) -> Self {
        Self::Value(JsonValue::String(v))
    }
}

impl From<bool> for Prop {
    fn from(v: bool) -> Self {
        Self::Value(JsonValue::Bool(v))
    }
}

impl From<i64> for Prop {
    fn from(v: i64) -> Self {
        Self::Value(v.into())
    }
}

impl From<i32> for Prop {
    fn from(v: i32) -> Self {
        Self::Value(v.into())
    }
}

impl From<f64> for Prop {
    fn from(v: f64) -> Self {
        Self::Value(v.into())
    }
}

impl<T: Into<Prop>> From<Option<T>> for Prop {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Self::Undefined)
    }
}

/// 属性包，保持插入顺序；`children` 为构建时传入的子节点
#[derive(Clone, Default)]
pub struct Props {
    entries: IndexMap<String, Prop>,
    pub children: Vec<Renderable>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    /// 链式设置属性
    pub fn with(mut self, key: &str, value: impl Into<Prop>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: &str, value: impl Into<Prop>) {
        self.entries.insert(key.to_string(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<Prop> {
        self.entries.shift_remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&Prop> {
        self.entries.get(key)
    }

    /// 读取数据值
    pub fn value(&self, key: &str) -> Option<&JsonValue> {
        self.get(key).and_then(Prop::as_value)
    }

    /// 读取字符串值
    pub fn str(&self, key: &str) -> Option<&str> {
        self.value(key).and_then(JsonValue::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Prop)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Props {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Props")
            .field("entries", &self.entries)
            .field("children", &self.children)
            .finish()
    }
}

/// 组件描述符中的 component 字段
#[derive(Clone)]
pub enum ComponentRef {
    Function(ComponentFn),
    /// 以下为少见形态，解析时直接展开
    Node(Node),
    Fragment(Vec<Renderable>),
    Descriptor(Box<ComponentDescriptor>),
    /// 不可调用的任意值
    Opaque(JsonValue),
}

impl ComponentRef {
    pub fn function(f: impl Fn(&Props) -> Renderable + 'static) -> Self {
        Self::Function(Rc::new(f))
    }
}

impl fmt::Debug for ComponentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Function(_) => f.write_str("<component fn>"),
            Self::Node(n) => write!(f, "{:?}", n),
            Self::Fragment(items) => f.debug_list().entries(items).finish(),
            Self::Descriptor(d) => write!(f, "{:?}", d),
            Self::Opaque(v) => write!(f, "{}", v),
        }
    }
}

/// 延迟调用记录：组件引用 + 属性包，解析时调用一次后丢弃
#[derive(Clone, Debug)]
pub struct ComponentDescriptor {
    pub component: ComponentRef,
    pub props: Props,
}

impl ComponentDescriptor {
    pub fn new(component: ComponentRef, props: Props) -> Self {
        Self { component, props }
    }
}

/// 可渲染值
#[derive(Clone)]
pub enum Renderable {
    /// null / false / undefined，渲染为空
    Empty,
    Text(String),
    Number(f64),
    /// 已构建的元素或文本节点
    Node(Node),
    Component(ComponentDescriptor),
    /// 无包裹元素的有序序列
    Fragment(Vec<Renderable>),
    /// 无参函数，解析时调用
    Thunk(Rc<dyn Fn() -> Renderable>),
    /// 无类型数据：null/false 为空，字符串/数字为文本，数组为片段
    Data(JsonValue),
}

impl Renderable {
    pub fn thunk(f: impl Fn() -> Renderable + 'static) -> Self {
        Self::Thunk(Rc::new(f))
    }

    pub fn fragment<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Renderable>,
    {
        Self::Fragment(items.into_iter().map(Into::into).collect())
    }

    /// 已构建的节点
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Self::Node(n) => Some(n),
            _ => None,
        }
    }
}

impl fmt::Debug for Renderable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("Empty"),
            Self::Text(s) => write!(f, "Text({:?})", s),
            Self::Number(n) => write!(f, "Number({})", n),
            Self::Node(n) => write!(f, "{:?}", n),
            Self::Component(d) => write!(f, "{:?}", d),
            Self::Fragment(items) => f.debug_list().entries(items).finish(),
            Self::Thunk(_) => f.write_str("<fn>"),
            Self::Data(v) => write!(f, "Data({})", v),
        }
    }
}

impl From<()> for Renderable {
    fn from(_: ()) -> Self {
        Self::Empty
    }
}

impl From<&str> for Renderable {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Renderable {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<f64> for Renderable {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<i32> for Renderable {
    fn from(v: i32) -> Self {
        Self::Number(v as f64)
    }
}

impl From<i64> for Renderable {
    fn from(v: i64) -> Self {
        Self::Data(v.into())
    }
}

impl From<usize> for Renderable {
    fn from(v: usize) -> Self {
        Self::Data(v.into())
    }
}

impl From<bool> for Renderable {
    fn from(v: bool) -> Self {
        Self::Data(JsonValue::Bool(v))
    }
}

impl From<Node> for Renderable {
    fn from(v: Node) -> Self {
        Self::Node(v)
    }
}

impl From<ComponentDescriptor> for Renderable {
    fn from(v: ComponentDescriptor) -> Self {
        Self::Component(v)
    }
}

impl From<JsonValue> for Renderable {
    fn from(v: JsonValue) -> Self {
        Self::Data(v)
    }
}

impl From<Vec<Renderable>> for Renderable {
    fn from(v: Vec<Renderable>) -> Self {
        Self::Fragment(v)
    }
}

impl<T: Into<Renderable>> From<Option<T>> for Renderable {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Self::Empty)
    }
}

/// 解析结果的单个片段：节点或尚未包装的文本
#[derive(Debug, Clone, PartialEq)]
pub enum Piece {
    Node(Node),
    Text(String),
}

impl Piece {
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Self::Node(n) => Some(n),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Node(_) => None,
        }
    }
}

/// 解析结果：单个片段，或扁平序列（不会嵌套）
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved {
    Single(Piece),
    Many(Vec<Piece>),
}

impl Resolved {
    pub fn empty() -> Self {
        Self::Many(Vec::new())
    }

    /// 统一为序列视图
    pub fn into_pieces(self) -> Vec<Piece> {
        match self {
            Self::Single(piece) => vec![piece],
            Self::Many(pieces) => pieces,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Many(pieces) if pieces.is_empty())
    }

    /// 单元素序列收拢为单个片段
    pub fn collapse(self) -> Self {
        match self {
            Self::Many(mut pieces) if pieces.len() == 1 => Self::Single(pieces.remove(0)),
            other => other,
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Self::Single(piece) => piece.as_node(),
            Self::Many(_) => None,
        }
    }
}
