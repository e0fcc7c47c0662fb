//! bomdesk Engine - operation handlers and the menu Orchestrator
//!
//! Handlers coerce raw operator input and call into the store; the
//! Orchestrator drives the menu loop, owns operation-boundary logging and
//! keeps one failing operation from ending the session.

pub mod handlers;
pub mod orchestrator;

pub use handlers::{execute, Outcome};
pub use orchestrator::{Exit, Orchestrator, SessionSummary};
