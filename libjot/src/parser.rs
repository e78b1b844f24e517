//! Value parsing: lookahead dispatch, literal keywords, and numbers.
//!
//! The parser never rewinds. One byte of lookahead picks the production,
//! and each production either consumes exactly the text it owns or fails
//! with a definite error.

use crate::cursor::Cursor;
use crate::error::{ParseError, Result};
use crate::value::Value;

// ============================================================================
// Dispatch
// ============================================================================

/// Parse a single value at the cursor.
///
/// Routing is by the first byte: `n`, `t`, and `f` pick a literal
/// keyword, end of input means no value at all, and every other byte
/// goes down the number path. A byte that starts neither a literal nor
/// a number is rejected by the number scanner's own first check.
pub(crate) fn parse_value(cur: &mut Cursor) -> Result<Value> {
    match cur.peek() {
        None => Err(ParseError::ExpectValue),
        Some(b'n') => parse_literal(cur, "null", Value::Null),
        Some(b't') => parse_literal(cur, "true", Value::Bool(true)),
        Some(b'f') => parse_literal(cur, "false", Value::Bool(false)),
        Some(_) => parse_number(cur),
    }
}

// ============================================================================
// Literal Keywords
// ============================================================================

/// Match a fixed keyword at the cursor and yield the value it denotes.
/// The whole run of letters at the cursor must equal the keyword, so a
/// malformed tail like `truee` is an invalid value rather than a valid
/// literal with trailing content.
fn parse_literal(cur: &mut Cursor, keyword: &str, value: Value) -> Result<Value> {
    let rest = cur.rest();
    let len = rest
        .bytes()
        .take_while(|b| b.is_ascii_alphabetic())
        .count();
    if &rest[..len] == keyword {
        cur.advance(len);
        Ok(value)
    } else {
        Err(ParseError::InvalidValue)
    }
}

// ============================================================================
// Number Parsing
// ============================================================================

/// Scan a number production at the start of `bytes` and return the
/// number of bytes it occupies.
///
/// Grammar: `["-"] int ["." 1*digit] [("e"|"E") ["-"|"+"] 1*digit]` with
/// `int = "0" | digit1-9 *digit`. The scan is strict: shapes the float
/// conversion would tolerate (a leading dot, a dot with no fraction
/// digits, a bare exponent marker) are rejected here. A leading `0` ends
/// the integer part, so `0123` scans as just `0` and the leftover digits
/// surface as trailing content.
fn scan_number(bytes: &[u8]) -> Result<usize> {
    let at = |i: usize| bytes.get(i).copied();
    let mut i = 0;

    // Optional minus
    if at(i) == Some(b'-') {
        i += 1;
    }

    // Integer part: a lone zero, or a nonzero digit followed by any digits
    match at(i) {
        Some(b'0') => i += 1,
        Some(b'1'..=b'9') => {
            while matches!(at(i), Some(b'0'..=b'9')) {
                i += 1;
            }
        }
        _ => return Err(ParseError::InvalidValue),
    }

    // Fractional part: a dot requires at least one digit after it
    if at(i) == Some(b'.') {
        i += 1;
        if !matches!(at(i), Some(b'0'..=b'9')) {
            return Err(ParseError::InvalidValue);
        }
        while matches!(at(i), Some(b'0'..=b'9')) {
            i += 1;
        }
    }

    // Exponent: optional sign, then at least one digit
    if matches!(at(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(at(i), Some(b'-' | b'+')) {
            i += 1;
        }
        if !matches!(at(i), Some(b'0'..=b'9')) {
            return Err(ParseError::InvalidValue);
        }
        while matches!(at(i), Some(b'0'..=b'9')) {
            i += 1;
        }
    }

    Ok(i)
}

/// Parse a number at the cursor.
///
/// The grammar scan and the float conversion are separate passes: the
/// scan bounds the text the conversion sees, so the conversion's looser
/// tolerance never widens the accepted language. Conversion of a
/// grammar-valid slice cannot fail, but it can round to infinity, which
/// reports the number as out of range.
fn parse_number(cur: &mut Cursor) -> Result<Value> {
    let rest = cur.rest();
    let len = scan_number(rest.as_bytes())?;
    if len == 0 {
        return Err(ParseError::InvalidValue);
    }
    let n: f64 = rest[..len]
        .parse()
        .map_err(|_| ParseError::InvalidValue)?;
    if n.is_infinite() {
        return Err(ParseError::NumberTooBig);
    }
    cur.advance(len);
    Ok(Value::Number(n))
}
