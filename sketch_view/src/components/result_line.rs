//! Result paragraph

use crate::state::PLACEHOLDER;
use leptos::prelude::*;

/// `Result: {text}`, or the emphasized placeholder while `text` is empty.
#[component]
pub fn ResultLine(text: String) -> impl IntoView {
    view! {
        <p class="result">
            {if text.is_empty() {
                view! {
                    "Result: "
                    <em>{PLACEHOLDER}</em>
                }.into_any()
            } else {
                view! { {format!("Result: {}", text)} }.into_any()
            }}
        </p>
    }
}
