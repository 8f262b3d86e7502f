//! Mounting the view into a DOM element.
//!
//! The element's contents are replaced with the controller's markup after
//! mount and after every completed click. One delegated `click` listener on
//! the element itself handles the button, so it survives re-renders.

use std::rc::Rc;

use sketch_view::{CALL_ACTION, ClickOutcome, CommandInvoker, ViewConfig, ViewController};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event};

/// Render a controller for `invoker` into `root` and wire the call button.
///
/// Each click spawns its own task on the browser's microtask queue, so the
/// page stays responsive while a call is pending and clicks may overlap;
/// the controller's overlap policy decides which response is shown.
pub fn mount_with<I>(
    root: Element,
    invoker: I,
    config: ViewConfig,
) -> Result<Rc<ViewController<I>>, JsValue>
where
    I: CommandInvoker + 'static,
{
    let controller = Rc::new(ViewController::with_config(invoker, config));
    root.set_inner_html(&controller.render());

    let on_click = {
        let controller = Rc::clone(&controller);
        let root = root.clone();
        Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            if !is_call_button(&event) {
                return;
            }
            let controller = Rc::clone(&controller);
            let root = root.clone();
            spawn_local(async move {
                if let ClickOutcome::Failed(err) = controller.on_button_click().await {
                    web_sys::console::warn_1(&JsValue::from_str(&err.to_string()));
                }
                root.set_inner_html(&controller.render());
            });
        })
    };
    root.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    // The listener lives as long as the page.
    on_click.forget();

    Ok(controller)
}

fn is_call_button(event: &Event) -> bool {
    let selector = format!("[data-action=\"{}\"]", CALL_ACTION);
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest(&selector).ok().flatten())
        .is_some()
}
