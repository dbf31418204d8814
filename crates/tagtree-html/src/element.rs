//! The element parser.
//!
//! An element parses its own start tag, then pulls children out of the
//! remaining input one token at a time until it meets its end tag, a sibling
//! that implies its end tag was omitted, or the end of input. Each child parses
//! itself and hands back the input it did not consume.

use tagtree_common::warning::warn_once;

use crate::attribute;
use crate::cursor::{Cursor, is_tag_name_byte};
use crate::error::{ParseError, ParseResult, truncate_or_fail};
use crate::factory::{PendingToken, build_from_text};
use crate::implied::is_void_element;
use crate::token::{Element, ParseMode, Token, TokenKind};
use crate::tokenizer::MAX_DEPTH;
use crate::tree::{NodeId, TokenTree};

/// Parse an element starting at `remaining` (which begins with `<`).
pub(crate) fn parse<'a>(
    tree: &mut TokenTree,
    token: PendingToken,
    remaining: Cursor<'a>,
) -> ParseResult<(NodeId, Cursor<'a>)> {
    let id = tree.alloc(Token::Element(Element::default()), token);
    let rest = parse_element(tree, id, token.mode, remaining)?;
    Ok((id, rest))
}

/// Read the lowercase tag name of the start tag at `remaining` without
/// consuming anything. Also returns the length of `<` plus the name.
pub(crate) fn peek_tag_name(remaining: Cursor<'_>) -> Option<(String, usize)> {
    if !remaining.starts_with("<") {
        return None;
    }
    let name = remaining.advance(1);
    let len = name.name_len(is_tag_name_byte);
    (len > 0).then(|| (name.slice(len).to_ascii_lowercase(), 1 + len))
}

/// Read a closing tag `</name ...>` at `remaining`.
///
/// Returns the lowercase name (empty for `</>`) and the input after `>`, or
/// `None` when `remaining` is not a closing tag or its `>` never comes.
pub(crate) fn closing_tag(remaining: Cursor<'_>) -> Option<(String, Cursor<'_>)> {
    if !remaining.starts_with("</") {
        return None;
    }
    let (name, after_name) = closing_tag_name(remaining);
    let end = after_name.find(">")?;
    Some((name.to_ascii_lowercase(), after_name.advance(end + 1)))
}

/// The name of the closing tag at `remaining` (which starts with `</`), as
/// written, and the input right after the name.
fn closing_tag_name(remaining: Cursor<'_>) -> (&str, Cursor<'_>) {
    let name = remaining.advance(2).trim_start();
    let len = name.name_len(is_tag_name_byte);
    (name.slice(len), name.advance(len))
}

fn parse_element<'a>(
    tree: &mut TokenTree,
    id: NodeId,
    mode: ParseMode,
    remaining: Cursor<'a>,
) -> ParseResult<Cursor<'a>> {
    let Some((name, consumed)) = peek_tag_name(remaining) else {
        let error = ParseError::MalformedElementName(remaining.location());
        return truncate_or_fail(mode, remaining, error);
    };
    if let Some(element) = tree.element_mut(id) {
        element.name.clone_from(&name);
    }

    let mut rest = remaining.advance(consumed);
    loop {
        rest = rest.trim_start();
        if rest.is_empty() || rest.starts_with(">") || rest.starts_with("/>") {
            break;
        }
        rest = attribute::parse(tree, id, mode, rest)?;
    }

    if rest.is_empty() {
        let error = ParseError::MissingClosingBracket(remaining.location());
        return truncate_or_fail(mode, rest, error);
    }

    let self_closing = rest.starts_with("/>");
    let after_tag = rest.advance(if self_closing { 2 } else { 1 });
    if self_closing || is_void_element(&name) {
        return Ok(after_tag);
    }
    if name == "script" {
        return Ok(parse_script_contents(tree, id, mode, after_tag));
    }
    parse_contents(tree, id, mode, &name, after_tag)
}

/// Pull children until this element's end tag.
///
/// A closing tag for an open ancestor ends this element without consuming the
/// tag; one that matches nothing open is dropped. A child element that would
/// nest deeper than [`MAX_DEPTH`] is treated as malformed input.
fn parse_contents<'a>(
    tree: &mut TokenTree,
    id: NodeId,
    mode: ParseMode,
    name: &str,
    after_tag: Cursor<'a>,
) -> ParseResult<Cursor<'a>> {
    let depth = tree.ancestors_inclusive(id).count();
    let mut rest = after_tag;
    loop {
        rest = rest.trim_start();
        if rest.is_empty() {
            if mode.is_strict() {
                let location = tree.get(id).map(|node| node.location).unwrap_or_default();
                return Err(ParseError::MissingClosingBracket(location));
            }
            return Ok(rest);
        }

        if rest.starts_with("</") {
            let Some((closing, after_closing)) = closing_tag(rest) else {
                let error = ParseError::MissingClosingBracket(rest.location());
                return truncate_or_fail(mode, rest, error);
            };
            if closing == name {
                return Ok(after_closing);
            }
            if tree.has_open_element(id, &closing) {
                return Ok(rest);
            }
            warn_once(
                "element",
                &format!("discarded stray closing tag </{closing}> at {}", rest.location()),
            );
            rest = after_closing;
            continue;
        }

        let Some(child) = build_from_text(rest, Some(id), mode) else {
            return Ok(rest);
        };
        if child.is_closing_implied(tree, rest) {
            return Ok(rest);
        }
        if child.kind == TokenKind::Element && depth >= MAX_DEPTH {
            let error = ParseError::NestingTooDeep(rest.location());
            return truncate_or_fail(mode, rest, error);
        }
        let (_, next) = child.parse(tree, rest)?;
        debug_assert!(next.offset() > rest.offset());
        rest = next;
    }
}

/// Capture everything up to `</script>` as a single text child.
///
/// Markup inside a script is not parsed. Without a closing tag the rest of the
/// input is the script.
fn parse_script_contents<'a>(
    tree: &mut TokenTree,
    id: NodeId,
    mode: ParseMode,
    after_tag: Cursor<'a>,
) -> Cursor<'a> {
    let contents = after_tag.trim_start();

    let (value, rest) = match find_script_end(contents) {
        Some((len, after_closing)) => (contents.slice(len).trim(), after_closing),
        None => {
            warn_once(
                "element",
                &format!("<script> at {} is never closed", after_tag.location()),
            );
            (contents.rest().trim(), contents.end())
        }
    };

    if !value.is_empty() {
        let text = PendingToken {
            kind: TokenKind::Text,
            parent: Some(id),
            location: contents.location(),
            mode,
        };
        let child = tree.alloc(Token::Text(value.to_string()), text);
        tree.append_child(id, child);
    }
    rest
}

/// Locate the `</script ...>` ending a script body that starts at `contents`.
///
/// Returns the body length in bytes and the input after the closing tag. A
/// `</` with any other name is skipped without looking for `>`. A `</script`
/// with no `>` after it means nothing later can close the script either.
fn find_script_end(contents: Cursor<'_>) -> Option<(usize, Cursor<'_>)> {
    let mut search = contents;
    loop {
        let at = search.advance(search.find("</")?);
        let (name, after_name) = closing_tag_name(at);
        if name.eq_ignore_ascii_case("script") {
            let end = after_name.find(">")?;
            return Some((at.offset() - contents.offset(), after_name.advance(end + 1)));
        }
        search = at.advance(2);
    }
}
