//! Attribute lists inside a start tag.
//!
//! One call extracts one attribute. The element parser keeps calling until the
//! input (with leading whitespace skipped) starts with `>` or `/>`.

use crate::cursor::{Cursor, is_attribute_name_byte};
use crate::error::{ParseError, ParseResult, truncate_or_fail};
use crate::token::{AttributeValue, ParseMode};
use crate::tree::{NodeId, TokenTree};

/// Parse one attribute at `remaining` into element `id`.
///
/// `remaining` must not start with whitespace, `>` or `/>`. Returns the input
/// after the attribute. An unterminated quoted value fails in strict mode; in
/// lenient mode the attribute is dropped and the returned input is empty.
///
/// A character that cannot start an attribute name (a stray quote, `=`, or a
/// `/` that is not part of `/>`) is skipped on its own, so every call
/// consumes at least one character.
pub(crate) fn parse<'a>(
    tree: &mut TokenTree,
    id: NodeId,
    mode: ParseMode,
    remaining: Cursor<'a>,
) -> ParseResult<Cursor<'a>> {
    let name_len = remaining.name_len(is_attribute_name_byte);
    if name_len == 0 {
        let stray = remaining.peek().map_or(0, char::len_utf8);
        return Ok(remaining.advance(stray));
    }

    let name = remaining.slice(name_len).to_string();
    let after_name = remaining.advance(name_len);
    let equals = after_name.trim_start();
    if !equals.starts_with("=") {
        insert(tree, id, name, AttributeValue::Boolean);
        return Ok(after_name);
    }

    let value = equals.advance(1).trim_start();
    match value.peek_byte(0) {
        Some(quote @ (b'"' | b'\'')) => {
            let body = value.advance(1);
            let Some(end) = closing_quote(body, quote) else {
                let error = ParseError::MalformedAttributeValue(value.location());
                return truncate_or_fail(mode, value, error);
            };
            insert(tree, id, name, body.slice(end).into());
            Ok(body.advance(end + 1))
        }
        _ => {
            let len = unquoted_len(value);
            insert(tree, id, name, value.slice(len).into());
            Ok(value.advance(len))
        }
    }
}

fn insert(tree: &mut TokenTree, id: NodeId, name: String, value: AttributeValue) {
    if let Some(element) = tree.element_mut(id) {
        element.attributes.insert(name, value);
    }
}

/// Index of the first `quote` not preceded by a backslash. The value may span
/// lines; an escaped quote stays in the value as written.
fn closing_quote(body: Cursor<'_>, quote: u8) -> Option<usize> {
    let bytes = body.rest().as_bytes();
    bytes
        .iter()
        .enumerate()
        .find_map(|(i, &b)| (b == quote && (i == 0 || bytes[i - 1] != b'\\')).then_some(i))
}

/// Length of an unquoted value: up to whitespace or `>`, leaving a final `/`
/// in place when it belongs to `/>`.
fn unquoted_len(value: Cursor<'_>) -> usize {
    let len = value.run_len(|b| b != b'>' && !b.is_ascii_whitespace());
    if len > 0 && value.peek_byte(len - 1) == Some(b'/') && value.peek_byte(len) == Some(b'>') {
        len - 1
    } else {
        len
    }
}
