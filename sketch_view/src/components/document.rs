//! Standalone HTML page wrapping the view

use super::HelloView;
use crate::styles::{CSP, VIEW_CSS};
use leptos::prelude::*;

/// Complete page with inline CSS and the view inside `#app`.
#[component]
pub fn ViewDocument(text: String) -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <title>"SketchUploader"</title>
                <style>{VIEW_CSS}</style>
            </head>
            <body>
                <div id="app">
                    <HelloView text=text />
                </div>
            </body>
        </html>
    }
}
