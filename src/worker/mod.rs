//! Background worker for storage operations.
//!
//! All file I/O happens on the worker so the plugin thread never blocks while
//! rendering or handling input.
//!
//! - `messages`: request/response protocol with trace context propagation
//! - `handler`: request processing and the Zellij worker entry point

pub mod handler;
pub mod messages;

pub use handler::RoleWorker;
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
