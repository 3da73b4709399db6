//! Nano Render 演示程序
//!
//! 构建一个小型组件树，挂载到无头文档并输出标记。
//! `RUST_LOG` 控制日志级别，`NANO_SSR=1` 开启 SSR 模式。

use nano_render::{children, config, DomEvent, Node, Prop, Props, RenderConfig, RenderError, Renderable, Renderer, Tag};
use serde_json::json;
use std::cell::Cell;
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), RenderError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // 可选的 JSON 配置文件覆盖环境变量
    let config = match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)?;
            RenderConfig::from_json(&text)?
        }
        None => RenderConfig::from_env(),
    };
    config::install(config.clone());
    tracing::info!(ssr = config.is_ssr, "nano-render starting");

    let renderer = Renderer::new();
    let clicks = Rc::new(Cell::new(0));

    // 待办列表组件
    let todo_list = Tag::component(|props: &Props| {
        let items: Vec<Renderable> = props
            .value("todos")
            .and_then(|v| v.as_array())
            .map(|todos| {
                todos
                    .iter()
                    .map(|todo| {
                        let done = todo["done"].as_bool().unwrap_or(false);
                        nano_render::h(
                            "li",
                            Props::new().with("className", if done { "done" } else { "open" }),
                            children![todo["text"].clone()],
                        )
                    })
                    .collect()
            })
            .unwrap_or_default();
        nano_render::h("ul", Props::new(), items)
    });

    let c = clicks.clone();
    let app = renderer.h(
        "div",
        Props::new().with("id", "app"),
        children![
            renderer.h(
                "h1",
                Props::new().with("style", json!({ "fontSize": "20px", "marginBottom": "4px" })),
                children!["Todos"],
            ),
            renderer.h(
                todo_list,
                Props::new().with(
                    "todos",
                    json!([
                        { "text": "write the parser", "done": true },
                        { "text": "render <svg> icons", "done": false }
                    ]),
                ),
                vec![],
            ),
            renderer.h(
                "button",
                Props::new().with("onClick", Prop::listener(move |_| c.set(c.get() + 1))),
                children!["Add"],
            ),
            renderer.h(
                "svg",
                Props::new().with("viewBox", "0 0 8 8"),
                children![renderer.h("circle", Props::new().with("r", 4), vec![])],
            ),
        ],
    );

    // 挂载点：body > div#app，将被同 id 的根元素替换
    let body = Node::new_element("body");
    let mount_point = Node::new_element("div");
    mount_point.set_attribute("id", "app");
    body.append_child(&mount_point);

    renderer.render(app, Some(&mount_point));
    println!("{}", body.outer_html());

    if let Some(button) = body.first_child().and_then(|root| {
        root.children().into_iter().find(|n| n.tag_name() == "button")
    }) {
        let handled = button.dispatch_event(&DomEvent::new("click"));
        tracing::info!(handled, clicks = clicks.get(), "dispatched click");
    }

    println!("{}", nano_render::render_to_string(nano_render::h("p", Props::new(), children!["a & b"])));
    Ok(())
}
