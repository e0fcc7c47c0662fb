//! bomdesk Core - domain model and dispatch vocabulary
//!
//! This crate provides the pieces every other bomdesk crate speaks in:
//! - Product, Material and Consumption models with the update allow-list
//! - Canonical error facility (`ExError`) plus domain validation errors
//! - Command Registry: menu actions, sub-action selections, prompting
//! - Presentation boundary trait implemented by the terminal front end
//! - Structured logging facility

#[doc(hidden)]
pub use bomdesk_core_types;

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod presentation;
pub mod registry;

// Re-export commonly used types
pub use errors::{BomError, ExError, ExErrorKind, Result};
pub use model::{Cell, FieldKind, FieldValue, GeneratorBounds, Row, Table, UpdateField};
pub use presentation::{PromptError, PromptResult, Prompter};
pub use registry::{Action, Generator, RawArgs, Selection};
