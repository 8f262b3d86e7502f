//! CSS for the hello-world view.
//!
//! Injected into the standalone preview document. In the desktop shell the
//! same rules are expected to be served alongside the wasm bundle.

/// Layout rules for the view: system font, padded container, larger button.
pub const VIEW_CSS: &str = r#"
.hello-view {
    font-family: system-ui, sans-serif;
    padding: 24px;
}
.hello-view button {
    padding: 8px 14px;
    font-size: 16px;
}
.hello-view .result {
    margin-top: 16px;
}
"#;

/// Content-Security-Policy for the preview document. No scripts, no network.
pub const CSP: &str = "default-src 'self'; style-src 'self' 'unsafe-inline'; script-src 'none'; connect-src 'none';";
