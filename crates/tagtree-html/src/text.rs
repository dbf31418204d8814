//! Text runs between tags.

use crate::cursor::Cursor;
use crate::factory::PendingToken;
use crate::token::Token;
use crate::tree::{NodeId, TokenTree};

/// Parse character data up to the next `<`.
///
/// The stored value is trimmed. A `<` at the very start belongs to the text
/// (the factory only classifies it as text when it cannot open a tag), so at
/// least one character is always consumed.
pub(crate) fn parse<'a>(tree: &mut TokenTree, token: PendingToken, remaining: Cursor<'a>) -> (NodeId, Cursor<'a>) {
    let skip = usize::from(remaining.starts_with("<"));
    let end = remaining
        .advance(skip)
        .find("<")
        .map_or(remaining.rest().len(), |i| i + skip);

    let value = remaining.slice(end).trim().to_string();
    let id = tree.alloc(Token::Text(value), token);
    (id, remaining.advance(end))
}
