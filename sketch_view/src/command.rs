//! Command boundary between the view and the host runtime.
//!
//! The host registers named commands; the view calls them by name with a JSON
//! object of arguments and gets one JSON value back. Everything that can go
//! wrong on the way is an [`InvokeError`].

use std::future::Future;

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

/// Name of the only command this view calls.
pub const HELLO_WORLD: &str = "hello_world";

/// Arguments passed with a command, always a JSON object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvokeArgs(Map<String, Value>);

impl InvokeArgs {
    /// No arguments. Serializes as `{}`.
    pub fn none() -> Self {
        Self::default()
    }

    /// Add a named argument.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// `true` when no arguments are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Look up a named argument.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The arguments as a JSON object value.
    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

/// Failure of a single command invocation.
#[derive(Debug, Error)]
pub enum InvokeError {
    /// The host refused or failed the call (transport, unknown command, or an
    /// error raised by the command itself).
    #[error("command `{command}` failed: {message}")]
    Rejected {
        /// Command name
        command: String,
        /// Message reported by the host
        message: String,
    },

    /// The host answered, but not with the expected type.
    #[error("command `{command}` returned an unexpected payload: {source}")]
    Payload {
        /// Command name
        command: String,
        /// Decoding failure
        #[source]
        source: serde_json::Error,
    },
}

impl InvokeError {
    /// Build a [`InvokeError::Rejected`] for `command`.
    pub fn rejected(command: &str, message: impl Into<String>) -> Self {
        InvokeError::Rejected {
            command: command.to_string(),
            message: message.into(),
        }
    }

    /// Name of the command that failed.
    pub fn command(&self) -> &str {
        match self {
            InvokeError::Rejected { command, .. } | InvokeError::Payload { command, .. } => command,
        }
    }
}

/// Capability to run host commands.
///
/// Futures are not required to be `Send`: the UI loop is single-threaded and
/// the browser implementation holds JS values across the await.
pub trait CommandInvoker {
    /// Invoke `command` with `args` and resolve to its JSON result.
    fn invoke(
        &self,
        command: &str,
        args: InvokeArgs,
    ) -> impl Future<Output = Result<Value, InvokeError>>;
}

impl<T: CommandInvoker + ?Sized> CommandInvoker for &T {
    fn invoke(
        &self,
        command: &str,
        args: InvokeArgs,
    ) -> impl Future<Output = Result<Value, InvokeError>> {
        (**self).invoke(command, args)
    }
}

impl<T: CommandInvoker + ?Sized> CommandInvoker for std::rc::Rc<T> {
    fn invoke(
        &self,
        command: &str,
        args: InvokeArgs,
    ) -> impl Future<Output = Result<Value, InvokeError>> {
        (**self).invoke(command, args)
    }
}

/// Call `hello_world` with no arguments and decode its string result.
pub async fn call_hello_world<I: CommandInvoker + ?Sized>(
    invoker: &I,
) -> Result<String, InvokeError> {
    debug!(command = HELLO_WORLD, "invoking host command");
    let value = invoker.invoke(HELLO_WORLD, InvokeArgs::none()).await?;
    serde_json::from_value(value).map_err(|source| InvokeError::Payload {
        command: HELLO_WORLD.to_string(),
        source,
    })
}
