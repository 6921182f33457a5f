//! Diagnostics for the Quill scanner.
//!
//! The scanner never fails on malformed markup. It emits a fallback token and
//! records a [`Diagnostic`] out of band:
//! - Error codes for searchability
//! - A primary span (where it went wrong)
//! - A severity (whether the construct was lost or merely suspicious)

mod diagnostic;
mod error_code;
mod list;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::ErrorCode;
pub use list::DiagnosticList;
