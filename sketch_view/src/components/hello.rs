//! The view itself: heading, call button and result line

use super::ResultLine;
use crate::{BUTTON_LABEL, CALL_ACTION, HEADING};
use leptos::prelude::*;

/// Heading, an always-enabled button, and the result paragraph.
///
/// The button carries `data-action="call"` so a mount point can delegate the
/// click without holding on to the element across re-renders.
#[component]
pub fn HelloView(text: String) -> impl IntoView {
    view! {
        <div class="hello-view">
            <h1>{HEADING}</h1>
            <button type="button" data-action=CALL_ACTION>
                {BUTTON_LABEL}
            </button>
            <ResultLine text=text />
        </div>
    }
}
