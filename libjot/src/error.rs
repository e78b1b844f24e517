//! Error types for JOT parsing.

use thiserror::Error;

/// Result type for JOT parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Error type for JOT parsing.
///
/// The set is closed: every failed parse maps to exactly one of these
/// variants, and the same input always maps to the same variant. Message
/// text is fixed; presentation belongs to the caller.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// No value found in input (empty or whitespace-only).
    #[error("No value found in input")]
    ExpectValue,

    /// Input starts with neither a known literal nor a valid number.
    #[error("Invalid value")]
    InvalidValue,

    /// Non-whitespace content after a complete value.
    #[error("Unexpected extra content after value")]
    RootNotSingular,

    /// Number is grammatically valid but overflows a 64-bit float.
    #[error("Number out of range")]
    NumberTooBig,
}
