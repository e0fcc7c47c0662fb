//! Structured logging facility for bomdesk
//!
//! This module provides a canonical logging facility with:
//! - Single initialization point via `init(profile)`
//! - An `OpContext` per menu operation and the boundary macros
//!   (`log_op_start!`, `log_op_end!`, `log_op_error!`) that read it
//! - Test capture mode, queried by op or request id
//!
//! Log output goes to stderr so it never interleaves with the menu on stdout.
//!
//! # Usage
//!
//! ```rust
//! use bomdesk_core::logging_facility::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod op_context;
pub mod test_capture;

pub use init::{init, Profile};
pub use op_context::OpContext;
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
