//! Diagnostic system for fatal error reporting.
//!
//! Every error the run driver reports carries:
//! - an error code for searchability (`E6004`)
//! - a message saying what went wrong
//! - the source line, when the failing node has one
//! - optional notes with extra context
//!
//! Rendering goes through [`emitter::DiagnosticEmitter`] so the driver can
//! target stderr while tests capture into a buffer.

mod diagnostic;
pub mod emitter;
mod error_code;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::ErrorCode;
