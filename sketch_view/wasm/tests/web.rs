//! Browser tests for the mount point. Run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::future::Future;

use futures::channel::oneshot;
use serde_json::{Value, json};
use sketch_view::{
    CommandInvoker, FailurePolicy, HELLO_WORLD, InvokeArgs, InvokeError, LocalHost, ViewConfig,
};
use sketch_view_wasm::mount_with;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn fresh_root() -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();
    root
}

fn click_call_button(root: &Element) {
    root.query_selector(r#"[data-action="call"]"#)
        .unwrap()
        .expect("call button rendered")
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
}

/// Host whose replies are released by the test, one channel per call.
#[derive(Default)]
struct DeferredHost {
    replies: RefCell<VecDeque<oneshot::Receiver<Value>>>,
}

impl DeferredHost {
    fn expect_call(&self) -> oneshot::Sender<Value> {
        let (tx, rx) = oneshot::channel();
        self.replies.borrow_mut().push_back(rx);
        tx
    }
}

impl CommandInvoker for DeferredHost {
    fn invoke(
        &self,
        command: &str,
        _args: InvokeArgs,
    ) -> impl Future<Output = Result<Value, InvokeError>> {
        let reply = self.replies.borrow_mut().pop_front();
        let command = command.to_string();
        async move {
            match reply {
                Some(rx) => rx
                    .await
                    .map_err(|_| InvokeError::rejected(&command, "reply dropped")),
                None => Err(InvokeError::rejected(&command, "no reply queued")),
            }
        }
    }
}

/// Let spawned click tasks run.
async fn settle() {
    for _ in 0..5 {
        JsFuture::from(js_sys::Promise::resolve(&JsValue::NULL))
            .await
            .unwrap();
    }
}

#[wasm_bindgen_test]
fn mount_renders_placeholder() {
    let root = fresh_root();
    mount_with(root.clone(), LocalHost::with_hello_world(), ViewConfig::default()).unwrap();

    let html = root.inner_html();
    assert!(html.contains("SketchUploader — Hello World demo"));
    assert!(html.contains("(click the button)"));
}

#[wasm_bindgen_test]
async fn click_renders_reply() {
    let root = fresh_root();
    mount_with(root.clone(), LocalHost::with_hello_world(), ViewConfig::default()).unwrap();

    click_call_button(&root);
    settle().await;

    assert!(root.inner_html().contains("Result: Hello World!"));
}

#[wasm_bindgen_test]
async fn button_works_after_rerender() {
    let root = fresh_root();
    let host = LocalHost::new().register(HELLO_WORLD, |_| Ok(Value::from("pong")));
    let controller = mount_with(root.clone(), host, ViewConfig::default()).unwrap();

    click_call_button(&root);
    settle().await;
    click_call_button(&root);
    settle().await;

    assert_eq!(controller.text(), "pong");
    assert!(root.inner_html().contains("Result: pong"));
}

#[wasm_bindgen_test]
async fn failure_is_rendered_under_show_error() {
    let root = fresh_root();
    let config = ViewConfig {
        on_failure: FailurePolicy::ShowError,
        ..Default::default()
    };
    mount_with(root.clone(), LocalHost::new(), config).unwrap();

    click_call_button(&root);
    settle().await;

    assert!(root.inner_html().contains("command not found"));
}

#[wasm_bindgen_test]
async fn overlapping_clicks_show_last_issued_reply() {
    let root = fresh_root();
    let host = DeferredHost::default();
    let first = host.expect_call();
    let second = host.expect_call();
    let controller = mount_with(root.clone(), host, ViewConfig::default()).unwrap();

    click_call_button(&root);
    settle().await;
    click_call_button(&root);
    settle().await;
    assert!(root.inner_html().contains("(click the button)"));

    second.send(json!("second")).unwrap();
    settle().await;
    assert!(root.inner_html().contains("Result: second"));

    first.send(json!("first")).unwrap();
    settle().await;

    assert_eq!(controller.text(), "second");
    assert!(root.inner_html().contains("Result: second"));
}
