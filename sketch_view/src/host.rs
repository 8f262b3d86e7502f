//! In-process command host.
//!
//! Stands in for the desktop runtime when there is none: the preview CLI
//! renders against it, and tests use it as a fixed backend. Handlers are
//! synchronous and resolve immediately.

use std::collections::HashMap;
use std::future::{Future, ready};

use serde_json::Value;

use crate::command::{CommandInvoker, HELLO_WORLD, InvokeArgs, InvokeError};

/// What the desktop host's `hello_world` command returns.
pub const HELLO_WORLD_REPLY: &str = "Hello World!";

type Handler = Box<dyn Fn(&InvokeArgs) -> Result<Value, String>>;

/// Registry of named commands.
#[derive(Default)]
pub struct LocalHost {
    commands: HashMap<String, Handler>,
}

impl LocalHost {
    /// A host with no commands; every call is rejected.
    pub fn new() -> Self {
        Self::default()
    }

    /// A host exposing `hello_world`, replying [`HELLO_WORLD_REPLY`].
    pub fn with_hello_world() -> Self {
        Self::new().register(HELLO_WORLD, |_| Ok(Value::from(HELLO_WORLD_REPLY)))
    }

    /// Register (or replace) a command handler.
    pub fn register<F>(mut self, name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&InvokeArgs) -> Result<Value, String> + 'static,
    {
        self.commands.insert(name.into(), Box::new(handler));
        self
    }

    /// Registered command names, sorted.
    pub fn command_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl std::fmt::Debug for LocalHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalHost")
            .field("commands", &self.command_names())
            .finish()
    }
}

impl CommandInvoker for LocalHost {
    fn invoke(
        &self,
        command: &str,
        args: InvokeArgs,
    ) -> impl Future<Output = Result<Value, InvokeError>> {
        let result = match self.commands.get(command) {
            Some(handler) => {
                handler(&args).map_err(|message| InvokeError::rejected(command, message))
            }
            None => Err(InvokeError::rejected(command, "command not found")),
        };
        ready(result)
    }
}
