//! Application layer coordinating state, events, and actions.
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Worker
//!                           ↑                                         ↓
//!                           └─────────── Worker Responses ────────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: side effects emitted by the event handler
//! - [`controller`]: awaited orchestration of load, refresh and submit
//! - [`form`]: add-product form state and input validation
//! - [`handler`]: event processing for the interactive runtime
//! - [`modes`]: form focus
//! - [`state`]: central state container and view model computation

pub mod actions;
pub mod controller;
pub mod form;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use controller::ProductController;
pub use form::{validate_product_input, FormState};
pub use handler::{handle_event, Event};
pub use modes::FormField;
pub use state::{AppState, Progress};
