//! Command boundary over the Tauri JavaScript runtime.
//!
//! Requires `withGlobalTauri` so that `window.__TAURI__.core.invoke` exists.
//! Arguments and replies cross the boundary as JSON text, which keeps the
//! bridge free of any JS-specific value handling beyond `JSON.parse` and
//! `JSON.stringify`.

use std::future::Future;

use serde_json::Value;
use sketch_view::{CommandInvoker, InvokeArgs, InvokeError};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], js_name = invoke, catch)]
    async fn tauri_invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// [`CommandInvoker`] backed by `window.__TAURI__.core.invoke`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TauriInvoker;

impl CommandInvoker for TauriInvoker {
    fn invoke(
        &self,
        command: &str,
        args: InvokeArgs,
    ) -> impl Future<Output = Result<Value, InvokeError>> {
        let command = command.to_string();
        async move {
            let js_args = js_sys::JSON::parse(&args.to_value().to_string())
                .map_err(|err| InvokeError::rejected(&command, describe_js(&err)))?;

            let reply = tauri_invoke(&command, js_args)
                .await
                .map_err(|err| InvokeError::rejected(&command, describe_js(&err)))?;

            let text = if reply.is_undefined() {
                None
            } else {
                let json = js_sys::JSON::stringify(&reply)
                    .map_err(|err| InvokeError::rejected(&command, describe_js(&err)))?;
                Some(String::from(json))
            };
            decode_reply(&command, text.as_deref())
        }
    }
}

/// Turn the stringified reply into JSON. `None` stands for `undefined`
/// (a command returning unit).
pub(crate) fn decode_reply(command: &str, json: Option<&str>) -> Result<Value, InvokeError> {
    match json {
        None => Ok(Value::Null),
        Some(text) => serde_json::from_str(text).map_err(|source| InvokeError::Payload {
            command: command.to_string(),
            source,
        }),
    }
}

/// Best-effort message for a thrown or rejected JS value.
fn describe_js(err: &JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    format!("{:?}", err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_string_reply() {
        let value = decode_reply("hello_world", Some(r#""Hello World!""#)).unwrap();
        assert_eq!(value, json!("Hello World!"));
    }

    #[test]
    fn undefined_reply_is_null() {
        assert_eq!(decode_reply("hello_world", None).unwrap(), Value::Null);
    }

    #[test]
    fn malformed_reply_is_payload_error() {
        let err = decode_reply("hello_world", Some("{not json")).unwrap_err();
        assert!(matches!(err, InvokeError::Payload { .. }));
        assert_eq!(err.command(), "hello_world");
    }
}
