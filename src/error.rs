//! Typed validation errors surfaced by the public entry points.
//!
//! Every error is synchronous and final: nothing is retried or recovered
//! internally, and the offending value is carried in the message so callers
//! can report it verbatim. Structurally unparseable input is *not* an error
//! (see [`crate::bytes`]); only the four validation failures below are.

use thiserror::Error;

/// Validation failures raised by [`crate::bytes`], [`crate::format_bytes`],
/// and the per-unit conversion helpers.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The parser was handed an empty string.
    #[error("value is not a non-empty string")]
    EmptyValue,

    /// The parser input exceeds the maximum length of 100 characters.
    #[error("value exceeds the maximum length of 100 characters. length={0}")]
    ValueTooLong(usize),

    /// The formatter was handed a non-finite number (the message shows `NaN`
    /// for NaN inputs and the value itself otherwise).
    #[error("byte size is not a finite number. bytes={0}")]
    NotANumber(f64),

    /// The configured base was neither 2 nor 10.
    #[error("unsupported base. base={0}")]
    UnsupportedBase(u32),
}
