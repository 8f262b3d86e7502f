//! Browser entry point for the SketchUploader view.
//!
//! Loaded by the desktop shell's webview. `mount("app")` renders the view
//! into `#app` and routes the button to the host's `hello_world` command
//! through [`TauriInvoker`].
//!
//! ```js
//! import init, { mount } from "./sketch_view_wasm.js";
//! await init();
//! mount("app");
//! ```

mod bridge;
mod mount;

use sketch_view::ViewConfig;
use wasm_bindgen::prelude::*;

pub use bridge::TauriInvoker;
pub use mount::mount_with;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Mount the view into the element with id `element_id`, backed by Tauri.
#[wasm_bindgen]
pub fn mount(element_id: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document available"))?;
    let root = document
        .get_element_by_id(element_id)
        .ok_or_else(|| JsValue::from_str(&format!("no element with id `{}`", element_id)))?;

    mount_with(root, TauriInvoker, ViewConfig::default())?;
    Ok(())
}

/// Check if WASM module is loaded and functional.
#[wasm_bindgen]
pub fn health_check() -> String {
    format!("sketch-view-wasm v{} ready", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_check_reports_version() {
        assert_eq!(
            health_check(),
            format!("sketch-view-wasm v{} ready", env!("CARGO_PKG_VERSION"))
        );
    }
}
