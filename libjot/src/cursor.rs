//! Read position over the source text.
//!
//! The cursor borrows the input and tracks a byte offset that only moves
//! forward. All access goes through slice APIs, so nothing can read past
//! the end of the input. Byte-level lookahead is sufficient here: every
//! byte the parser consumes is ASCII, and a peeked non-ASCII byte only
//! ever feeds a reject path.

/// Current read position within a borrowed input string.
#[derive(Debug)]
pub(crate) struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `input`.
    pub(crate) fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Look at the byte under the cursor without consuming it.
    pub(crate) fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    /// Move the cursor forward by `n` bytes.
    pub(crate) fn advance(&mut self, n: usize) {
        debug_assert!(self.pos + n <= self.input.len());
        self.pos += n;
    }

    /// The unconsumed tail of the input.
    pub(crate) fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Returns `true` when the whole input has been consumed.
    pub(crate) fn is_at_end(&self) -> bool {
        self.pos == self.input.len()
    }

    /// Consume any run of space, tab, line feed, or carriage return.
    pub(crate) fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.pos += 1;
        }
    }
}
