//! Background worker for backend calls.
//!
//! - [`messages`]: request/response protocol between control loop and worker
//! - [`handler`]: task spawning and call execution

pub mod handler;
pub mod messages;

pub use handler::ProductWorker;
pub use messages::{LoadTrigger, WorkerMessage, WorkerResponse};
