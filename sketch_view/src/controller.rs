//! View controller: owns the display state and mediates the one user action.
//!
//! The controller is used from a single-threaded event loop. Clicks may
//! overlap (each one awaits its own host call), so state lives behind
//! `Cell`/`RefCell` and is only borrowed between awaits, never across one.
//! The only code path that writes the display state is the completion step
//! of [`ViewController::on_button_click`].

use std::cell::{Cell, RefCell};

use tracing::{debug, warn};

use crate::command::{CommandInvoker, InvokeError, call_hello_world};
use crate::config::{FailurePolicy, OverlapPolicy, ViewConfig};
use crate::render_view;
use crate::state::{DisplayState, RequestTicket};

/// What a click ended up doing to the display state.
#[derive(Debug)]
pub enum ClickOutcome {
    /// The response replaced the displayed text.
    Applied,
    /// A newer click was issued before this one resolved; its result was
    /// dropped.
    Superseded,
    /// The command failed. The configured [`FailurePolicy`] was applied.
    Failed(InvokeError),
}

impl ClickOutcome {
    /// `true` for [`ClickOutcome::Applied`].
    pub fn is_applied(&self) -> bool {
        matches!(self, ClickOutcome::Applied)
    }
}

/// Owner of the display state; renders it and handles the call button.
pub struct ViewController<I> {
    invoker: I,
    config: ViewConfig,
    state: RefCell<DisplayState>,
    last_issued: Cell<RequestTicket>,
}

impl<I: CommandInvoker> ViewController<I> {
    /// Controller with the default [`ViewConfig`].
    pub fn new(invoker: I) -> Self {
        Self::with_config(invoker, ViewConfig::default())
    }

    /// Controller with explicit policies.
    pub fn with_config(invoker: I, config: ViewConfig) -> Self {
        Self {
            invoker,
            config,
            state: RefCell::new(DisplayState::default()),
            last_issued: Cell::new(RequestTicket(0)),
        }
    }

    /// Policies this controller applies.
    pub fn config(&self) -> ViewConfig {
        self.config
    }

    /// The command backend.
    pub fn invoker(&self) -> &I {
        &self.invoker
    }

    /// Snapshot of the display state.
    pub fn state(&self) -> DisplayState {
        self.state.borrow().clone()
    }

    /// Currently displayed text (empty before the first response).
    pub fn text(&self) -> String {
        self.state.borrow().current_text.clone()
    }

    /// The result paragraph as plain text.
    pub fn result_line(&self) -> String {
        format!("Result: {}", self.state.borrow().result_text())
    }

    /// Markup for the current state.
    pub fn render(&self) -> String {
        render_view(&self.state.borrow().current_text)
    }

    /// Handle a click on the call button.
    ///
    /// Issues `hello_world` once and applies the outcome. Never fails: errors
    /// are reported through [`ClickOutcome::Failed`] after the failure policy
    /// has been applied.
    pub async fn on_button_click(&self) -> ClickOutcome {
        let ticket = self.issue();
        let result = call_hello_world(&self.invoker).await;
        self.complete(ticket, result)
    }

    fn issue(&self) -> RequestTicket {
        let ticket = self.last_issued.get().next();
        self.last_issued.set(ticket);
        debug!(ticket = ticket.0, "click issued");
        ticket
    }

    fn complete(&self, ticket: RequestTicket, result: Result<String, InvokeError>) -> ClickOutcome {
        if self.config.overlap == OverlapPolicy::LastIssued && ticket != self.last_issued.get() {
            debug!(
                ticket = ticket.0,
                latest = self.last_issued.get().0,
                "dropping superseded response"
            );
            return ClickOutcome::Superseded;
        }

        match result {
            Ok(text) => {
                debug!(ticket = ticket.0, "applying response");
                self.state.borrow_mut().replace(text);
                ClickOutcome::Applied
            }
            Err(err) => {
                warn!(ticket = ticket.0, error = %err, "host command failed");
                if self.config.on_failure == FailurePolicy::ShowError {
                    self.state.borrow_mut().replace(format!("Error: {}", err));
                }
                ClickOutcome::Failed(err)
            }
        }
    }
}
