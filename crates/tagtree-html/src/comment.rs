//! `<!-- ... -->` comments.

use crate::cursor::Cursor;
use crate::error::{ParseError, ParseResult, truncate_or_fail};
use crate::factory::PendingToken;
use crate::token::Token;
use crate::tree::{NodeId, TokenTree};

const OPEN: &str = "<!--";
const CLOSE: &str = "-->";

/// Parse a comment; its value is the trimmed text between the delimiters.
///
/// An unterminated comment swallows the rest of the input as its value.
pub(crate) fn parse<'a>(
    tree: &mut TokenTree,
    token: PendingToken,
    remaining: Cursor<'a>,
) -> ParseResult<(NodeId, Cursor<'a>)> {
    let error = ParseError::MalformedComment(remaining.location());

    let (value, rest) = if remaining.starts_with(OPEN) {
        let body = remaining.advance(OPEN.len());
        match body.find(CLOSE) {
            Some(end) => (body.slice(end).trim().to_string(), body.advance(end + CLOSE.len())),
            None => (
                body.rest().trim().to_string(),
                truncate_or_fail(token.mode, body, error)?,
            ),
        }
    } else {
        (String::new(), truncate_or_fail(token.mode, remaining, error)?)
    };

    let id = tree.alloc(Token::Comment(value), token);
    Ok((id, rest))
}
