//! A read-only view into the source buffer.
//!
//! Every parse step takes a [`Cursor`] and hands back the cursor positioned
//! after whatever it consumed. A cursor is only an offset into the original
//! `&str`, so the remaining HTML is never copied and progress is an integer
//! comparison.

use core::fmt;

/// Source location of a token, captured when the token is constructed.
///
/// Both fields are zero-based: the first character of the input is at
/// line 0, position 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Location {
    /// Number of line feeds preceding the token.
    pub line: usize,
    /// Characters between the start of the line and the token.
    pub position: usize,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, position {}", self.line, self.position)
    }
}

/// An immutable borrow of the full input plus a byte offset into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'a> {
    source: &'a str,
    offset: usize,
    /// Line feeds before `offset`, kept current by [`Cursor::advance`].
    line: usize,
    /// Characters between the start of the current line and `offset`.
    column: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `source`.
    #[must_use]
    pub const fn new(source: &'a str) -> Self {
        Self {
            source,
            offset: 0,
            line: 0,
            column: 0,
        }
    }

    /// Byte offset from the start of the buffer.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// The not-yet-consumed suffix of the buffer.
    #[must_use]
    pub fn rest(&self) -> &'a str {
        &self.source[self.offset..]
    }

    /// True when nothing is left to consume.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.offset >= self.source.len()
    }

    /// Move forward by `bytes`, clamped to the end of the buffer.
    ///
    /// `bytes` must land on a character boundary; all callers advance by
    /// lengths measured on ASCII delimiters or on slices of [`Self::rest`].
    #[must_use]
    pub fn advance(self, bytes: usize) -> Self {
        let offset = (self.offset + bytes).min(self.source.len());
        debug_assert!(self.source.is_char_boundary(offset));
        let mut line = self.line;
        let mut column = self.column;
        for &b in &self.source.as_bytes()[self.offset..offset] {
            if b == b'\n' {
                line += 1;
                column = 0;
            } else if !is_utf8_continuation(b) {
                column += 1;
            }
        }
        Self {
            source: self.source,
            offset,
            line,
            column,
        }
    }

    /// The cursor positioned at the end of the buffer.
    #[must_use]
    pub fn end(self) -> Self {
        self.advance(self.source.len() - self.offset)
    }

    /// Skip leading whitespace.
    #[must_use]
    pub fn trim_start(self) -> Self {
        let rest = self.rest();
        self.advance(rest.len() - rest.trim_start().len())
    }

    /// The next character, if any.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// The byte `n` positions past the cursor, if any.
    #[must_use]
    pub fn peek_byte(&self, n: usize) -> Option<u8> {
        self.rest().as_bytes().get(n).copied()
    }

    /// Check if the remaining input starts with `prefix`.
    #[must_use]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.rest().starts_with(prefix)
    }

    /// Check if the remaining input starts with `prefix`, comparing ASCII
    /// letters case-insensitively.
    #[must_use]
    pub fn starts_with_ignore_ascii_case(&self, prefix: &str) -> bool {
        self.rest()
            .as_bytes()
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix.as_bytes()))
    }

    /// Byte index (relative to the cursor) of the first occurrence of `needle`.
    #[must_use]
    pub fn find(&self, needle: &str) -> Option<usize> {
        self.rest().find(needle)
    }

    /// The next `bytes` bytes of input, without consuming them.
    #[must_use]
    pub fn slice(&self, bytes: usize) -> &'a str {
        let rest = self.rest();
        &rest[..bytes.min(rest.len())]
    }

    /// Length in bytes of the leading run of bytes accepted by `accept`.
    #[must_use]
    pub fn run_len(&self, accept: impl Fn(u8) -> bool) -> usize {
        self.rest()
            .as_bytes()
            .iter()
            .position(|&b| !accept(b))
            .unwrap_or(self.rest().len())
    }

    /// Length of a possibly namespaced name (`name` or `prefix:name`) at the
    /// cursor, where both parts are runs of bytes accepted by `accept`.
    ///
    /// Returns 0 when no name starts here. A prefix with nothing after the
    /// colon is not a prefix: `foo:>` scans as `foo`.
    #[must_use]
    pub fn name_len(&self, accept: impl Fn(u8) -> bool) -> usize {
        let head = self.run_len(&accept);
        if head == 0 || self.peek_byte(head) != Some(b':') {
            return head;
        }
        let tail = self.advance(head + 1).run_len(&accept);
        if tail == 0 { head } else { head + 1 + tail }
    }

    /// Zero-based line and column of the cursor in the source.
    #[must_use]
    pub const fn location(&self) -> Location {
        Location {
            line: self.line,
            position: self.column,
        }
    }
}

/// True for the second and later bytes of a multi-byte UTF-8 character.
const fn is_utf8_continuation(b: u8) -> bool {
    b & 0xC0 == 0x80
}

/// Characters allowed in a tag name: ASCII letters, digits and hyphen.
#[must_use]
pub const fn is_tag_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-'
}

/// Characters allowed in an attribute name: tag-name characters plus underscore.
#[must_use]
pub const fn is_attribute_name_byte(b: u8) -> bool {
    is_tag_name_byte(b) || b == b'_'
}
