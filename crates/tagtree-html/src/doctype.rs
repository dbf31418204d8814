//! `<!DOCTYPE ...>` declarations.

use crate::cursor::Cursor;
use crate::error::{ParseError, ParseResult, truncate_or_fail};
use crate::factory::PendingToken;
use crate::token::Token;
use crate::tree::{NodeId, TokenTree};

const OPEN: &str = "<!DOCTYPE";

/// Parse a doctype; its value is everything between the keyword and `>`,
/// trimmed, with case preserved.
pub(crate) fn parse<'a>(
    tree: &mut TokenTree,
    token: PendingToken,
    remaining: Cursor<'a>,
) -> ParseResult<(NodeId, Cursor<'a>)> {
    let (value, rest) = if remaining.starts_with_ignore_ascii_case(OPEN) {
        let body = remaining.advance(OPEN.len());
        match body.find(">") {
            Some(end) => (body.slice(end).trim().to_string(), body.advance(end + 1)),
            None => {
                let error = ParseError::MissingClosingBracket(remaining.location());
                (String::new(), truncate_or_fail(token.mode, body, error)?)
            }
        }
    } else {
        let error = ParseError::MalformedDocType(remaining.location());
        (String::new(), truncate_or_fail(token.mode, remaining, error)?)
    };

    let id = tree.alloc(Token::DocType(value), token);
    Ok((id, rest))
}
