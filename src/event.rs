//! 事件系统 - 元素事件监听

use serde_json::Value as JsonValue;
use std::fmt;
use std::rc::Rc;

/// 元素上可绑定的事件属性（小写）
pub const EVENT_HANDLER_PROPERTIES: &[&str] = &[
    "onabort", "onanimationend", "onanimationiteration", "onanimationstart",
    "onauxclick", "onbeforeinput", "onblur", "oncancel", "oncanplay",
    "oncanplaythrough", "onchange", "onclick", "onclose", "oncontextmenu",
    "oncopy", "oncuechange", "oncut", "ondblclick", "ondrag", "ondragend",
    "ondragenter", "ondragleave", "ondragover", "ondragstart", "ondrop",
    "ondurationchange", "onemptied", "onended", "onerror", "onfocus",
    "onfocusin", "onfocusout", "onformdata", "ongotpointercapture", "oninput",
    "oninvalid", "onkeydown", "onkeypress", "onkeyup", "onload", "onloadeddata",
    "onloadedmetadata", "onloadstart", "onlostpointercapture", "onmousedown",
    "onmouseenter", "onmouseleave", "onmousemove", "onmouseout", "onmouseover",
    "onmouseup", "onpaste", "onpause", "onplay", "onplaying", "onpointercancel",
    "onpointerdown", "onpointerenter", "onpointerleave", "onpointermove",
    "onpointerout", "onpointerover", "onpointerup", "onprogress", "onratechange",
    "onreset", "onresize", "onscroll", "onsecuritypolicyviolation", "onseeked",
    "onseeking", "onselect", "onselectionchange", "onselectstart", "onslotchange",
    "onstalled", "onsubmit", "onsuspend", "ontimeupdate", "ontoggle",
    "ontouchcancel", "ontouchend", "ontouchmove", "ontouchstart",
    "ontransitionend", "onvolumechange", "onwaiting", "onwheel",
];

/// 是否为元素暴露的事件属性
pub fn is_event_property(name: &str) -> bool {
    EVENT_HANDLER_PROPERTIES.contains(&name)
}

/// DOM 事件
#[derive(Debug, Clone, PartialEq)]
pub struct DomEvent {
    pub event_type: String,
    pub detail: JsonValue,
}

impl DomEvent {
    pub fn new(event_type: &str) -> Self {
        Self {
            event_type: event_type.to_string(),
            detail: JsonValue::Null,
        }
    }

    pub fn with_detail(mut self, detail: JsonValue) -> Self {
        self.detail = detail;
        self
    }
}

/// 事件回调
pub type Listener = Rc<dyn Fn(&DomEvent)>;

/// 单个元素的监听器表
#[derive(Default, Clone)]
pub struct EventListeners {
    listeners: Vec<(String, Listener)>,
}

impl EventListeners {
    pub fn new() -> Self {
        Self { listeners: Vec::new() }
    }

    pub fn add(&mut self, event_type: &str, listener: Listener) {
        self.listeners.push((event_type.to_string(), listener));
    }

    /// 收集匹配的监听器，由调用方在释放借用后执行
    pub fn matching(&self, event_type: &str) -> Vec<Listener> {
        self.listeners
            .iter()
            .filter(|(t, _)| t == event_type)
            .map(|(_, l)| l.clone())
            .collect()
    }

    pub fn count(&self, event_type: &str) -> usize {
        self.listeners.iter().filter(|(t, _)| t == event_type).count()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl fmt::Debug for EventListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.listeners.iter().map(|(t, _)| t))
            .finish()
    }
}
