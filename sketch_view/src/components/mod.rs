//! Leptos components for the hello-world view.
//!
//! # Component Hierarchy
//!
//! ```text
//! ViewDocument (standalone preview page)
//! └── HelloView
//!     ├── <h1> heading
//!     ├── <button data-action="call">
//!     └── ResultLine
//! ```
//!
//! Components are rendered through [`crate::render_view`] and
//! [`crate::render_document`]; nothing here is reactive.

mod document;
mod hello;
mod result_line;

pub use document::ViewDocument;
pub use hello::HelloView;
pub use result_line::ResultLine;
