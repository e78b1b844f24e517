//! JOT scalar parser implementation.
//!
//! JOT is the scalar core of a JSON front end: it parses one top-level
//! `null`, `true`, `false`, or number from a string. Strings, arrays,
//! objects, and serialization belong to a future composite layer built
//! on top of this crate.
//!
//! # Parsing Pipeline
//!
//! A parse call is a single deterministic pass with no I/O and no heap
//! allocation:
//!
//! 1. **Cursor**: a bounds-checked, forward-only read position over the
//!    borrowed input.
//!
//! 2. **Value parser**: routes on one byte of lookahead to the literal
//!    matcher or to the number scanner and converter.
//!
//! 3. **Trailing check**: after the value, only whitespace may remain.

mod cursor;
mod error;
mod parser;
mod value;

pub use error::{ParseError, Result};
pub use value::{Kind, Value};

/// Parse a single JOT value from a string.
///
/// Leading and trailing whitespace (space, tab, line feed, carriage
/// return) is ignored; any other content around the one value is an
/// error.
///
/// # Example
///
/// ```
/// use libjot::{parse, Value};
///
/// let value = parse(" 3.25 ").unwrap();
/// assert_eq!(value, Value::Number(3.25));
/// ```
pub fn parse(input: &str) -> Result<Value> {
    let mut cursor = cursor::Cursor::new(input);

    cursor.skip_whitespace();
    let value = parser::parse_value(&mut cursor)?;
    cursor.skip_whitespace();

    if !cursor.is_at_end() {
        return Err(ParseError::RootNotSingular);
    }
    Ok(value)
}
