//! Side effects requested by the event handler.
//!
//! [`handle_event`](crate::app::handle_event) never performs I/O itself. It
//! returns a `Vec<Action>` and the runtime in `main.rs` executes them in order.
//!
//! # Example
//!
//! ```rust
//! use product_manager::app::Action;
//! use product_manager::worker::{LoadTrigger, WorkerMessage};
//!
//! let actions = vec![Action::PostToWorker(WorkerMessage::load_products(LoadTrigger::Initial))];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::worker::WorkerMessage;

/// Commands executed by the runtime after an event was handled.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Leave the event loop and restore the terminal.
    Quit,

    /// Run a backend call on the worker.
    ///
    /// Its completion comes back later as
    /// [`Event::WorkerResponse`](crate::app::Event::WorkerResponse).
    PostToWorker(WorkerMessage),
}
