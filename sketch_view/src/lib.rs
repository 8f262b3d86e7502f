//! # sketch-view
//!
//! The SketchUploader hello-world view: a heading, a button, and a result
//! line. Clicking the button calls the host's `hello_world` command and shows
//! whatever string it returns.
//!
//! ## Architecture
//!
//! - [`state`] - The single display value and request tickets
//! - [`command`] - Command boundary ([`CommandInvoker`]) and its errors
//! - [`controller`] - [`ViewController`], the only writer of the display state
//! - [`components`] - Leptos components, rendered with SSR
//! - [`config`] - Overlap and failure policies, loadable from TOML
//! - [`host`] - [`LocalHost`], an in-process command registry
//! - [`styles`] - CSS constants
//!
//! ## Quick Start
//!
//! ```rust
//! use futures::executor::block_on;
//! use sketch_view::{LocalHost, ViewController};
//!
//! let controller = ViewController::new(LocalHost::with_hello_world());
//! assert_eq!(controller.result_line(), "Result: (click the button)");
//!
//! block_on(controller.on_button_click());
//! assert_eq!(controller.result_line(), "Result: Hello World!");
//! ```
//!
//! ## Leptos 0.8 SSR
//!
//! Markup is produced with `RenderHtml::to_html()`. There is no reactive
//! runtime: the controller re-renders from its state after every click, so
//! [`ViewController::render`] is a pure function of the displayed text.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod command;
pub mod components;
pub mod config;
pub mod controller;
pub mod host;
pub mod state;
pub mod styles;

pub use command::{CommandInvoker, HELLO_WORLD, InvokeArgs, InvokeError, call_hello_world};
pub use config::{ConfigError, FailurePolicy, OverlapPolicy, ViewConfig};
pub use controller::{ClickOutcome, ViewController};
pub use host::{HELLO_WORLD_REPLY, LocalHost};
pub use state::{DisplayState, PLACEHOLDER, RequestTicket};

use components::{HelloView, ViewDocument};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

/// Heading text.
pub const HEADING: &str = "SketchUploader — Hello World demo";

/// Label of the call button.
pub const BUTTON_LABEL: &str = "Call Rust";

/// `data-action` value marking the call button.
pub const CALL_ACTION: &str = "call";

/// Render the view for `text` (empty shows the placeholder).
///
/// ```rust
/// let html = sketch_view::render_view("pong");
/// assert!(html.contains("Result: pong"));
/// ```
pub fn render_view(text: &str) -> String {
    view! { <HelloView text=text.to_string() /> }.to_html()
}

/// Render a standalone HTML page containing the view.
pub fn render_document(text: &str) -> String {
    let doc = view! { <ViewDocument text=text.to_string() /> };

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", doc.to_html())
}
