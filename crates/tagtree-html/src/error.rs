//! Errors raised by strict-mode parsing.
//!
//! In lenient mode none of these escape: the token that hit the problem
//! stops parsing and reports an empty remainder instead.

use tagtree_common::warning::warn_once;
use thiserror::Error;

use crate::cursor::{Cursor, Location};
use crate::token::ParseMode;

/// A malformation that aborts a strict-mode parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A tag opener (`<`) not followed by a valid tag name.
    #[error("invalid element name at {0}")]
    MalformedElementName(Location),

    /// A start tag with no closing `>`, or an element whose closing tag never
    /// appears before the end of input.
    #[error("invalid element: missing closing bracket at {0}")]
    MissingClosingBracket(Location),

    /// A quoted attribute value without its matching closing quote.
    #[error("invalid value encapsulation at {0}")]
    MalformedAttributeValue(Location),

    /// A comment that does not start with `<!--` or never reaches `-->`.
    #[error("invalid comment at {0}")]
    MalformedComment(Location),

    /// A doctype declaration that does not start with `<!DOCTYPE`.
    #[error("invalid doctype at {0}")]
    MalformedDocType(Location),

    /// An element nested more than [`MAX_DEPTH`](crate::MAX_DEPTH) levels deep.
    #[error("element nesting too deep at {0}")]
    NestingTooDeep(Location),
}

impl ParseError {
    /// Where in the source the problem was detected.
    #[must_use]
    pub const fn location(&self) -> Location {
        match self {
            Self::MalformedElementName(location)
            | Self::MissingClosingBracket(location)
            | Self::MalformedAttributeValue(location)
            | Self::MalformedComment(location)
            | Self::MalformedDocType(location)
            | Self::NestingTooDeep(location) => *location,
        }
    }
}

/// Result alias used throughout the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Apply the error policy to `error`, detected at `cursor`.
///
/// Strict mode surfaces the error. Lenient mode reports it once and hands
/// back the end of the buffer, which tells every caller up the stack that
/// nothing is left to parse.
pub(crate) fn truncate_or_fail(mode: ParseMode, cursor: Cursor<'_>, error: ParseError) -> ParseResult<Cursor<'_>> {
    if mode.is_strict() {
        return Err(error);
    }
    warn_once("parser", &format!("{error}; ignoring the rest of the input"));
    Ok(cursor.end())
}
