//! Side effects requested by the event handler.
//!
//! [`handle_event`](crate::app::handle_event) never talks to Zellij directly; it
//! returns actions and the plugin shim executes them in order.

use crate::worker::WorkerMessage;

/// Commands executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Posts a request to the background worker.
    ///
    /// Persistence is fire-and-forget: nothing waits for the response.
    PostToWorker(WorkerMessage),
}
