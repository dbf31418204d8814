//! Choosing which token to parse next.
//!
//! The factory only looks at the first few characters of the remaining input.
//! It hands back a [`PendingToken`]: a token that knows its kind, parent,
//! location and error policy but has not consumed anything yet. The caller
//! may still decide not to parse it (see [`PendingToken::is_closing_implied`]).

use crate::cursor::{Cursor, Location, is_tag_name_byte};
use crate::error::ParseResult;
use crate::token::{ParseMode, TokenKind};
use crate::tree::{NodeId, TokenTree};
use crate::{comment, doctype, element, implied, text};

/// A token that has been constructed but not parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingToken {
    /// Which parser will run.
    pub kind: TokenKind,
    /// Enclosing element, if any.
    pub parent: Option<NodeId>,
    /// Where the token starts.
    pub location: Location,
    /// Error policy for this token and everything it parses.
    pub mode: ParseMode,
}

/// Decide which token starts at `remaining`.
///
/// Checked in order: `<!DOCTYPE` (any case), `<!--`, `<` followed by a
/// tag-name character, and otherwise text. Returns `None` when the input is
/// exhausted or begins with a closing tag (`</`), which only the enclosing
/// element parser may consume.
#[must_use]
pub fn build_from_text(remaining: Cursor<'_>, parent: Option<NodeId>, mode: ParseMode) -> Option<PendingToken> {
    if remaining.is_empty() || remaining.starts_with("</") {
        return None;
    }

    let kind = if remaining.starts_with_ignore_ascii_case("<!DOCTYPE") {
        TokenKind::DocType
    } else if remaining.starts_with("<!--") {
        TokenKind::Comment
    } else if remaining.starts_with("<") && remaining.peek_byte(1).is_some_and(is_tag_name_byte) {
        TokenKind::Element
    } else {
        TokenKind::Text
    };

    Some(PendingToken {
        kind,
        parent,
        location: remaining.location(),
        mode,
    })
}

impl PendingToken {
    /// Check whether this token, appearing at `remaining` inside its parent,
    /// means the parent's end tag was omitted.
    ///
    /// Only an element can close its parent, and only when the parent is an
    /// element too; the decision itself is [`implied::closing_implied`] on the
    /// two tag names.
    #[must_use]
    pub fn is_closing_implied(&self, tree: &TokenTree, remaining: Cursor<'_>) -> bool {
        if self.kind != TokenKind::Element {
            return false;
        }
        let Some(parent) = self.parent.and_then(|id| tree.element(id)) else {
            return false;
        };
        element::peek_tag_name(remaining)
            .is_some_and(|(name, _)| implied::closing_implied(&parent.name, &name))
    }

    /// Parse this token out of `remaining`, adding it to `tree`.
    ///
    /// Once parsed, the node is appended to its parent's children, or to the
    /// tree's roots when it has no parent. Returns the new node and the input
    /// left over after it.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`](crate::ParseError) in strict mode when the
    /// input is malformed. Lenient mode never fails.
    pub fn parse<'a>(self, tree: &mut TokenTree, remaining: Cursor<'a>) -> ParseResult<(NodeId, Cursor<'a>)> {
        let (id, rest) = match self.kind {
            TokenKind::Element => element::parse(tree, self, remaining)?,
            TokenKind::Text => text::parse(tree, self, remaining),
            TokenKind::Comment => comment::parse(tree, self, remaining)?,
            TokenKind::DocType => doctype::parse(tree, self, remaining)?,
        };
        match self.parent {
            Some(parent) => tree.append_child(parent, id),
            None => tree.push_root(id),
        }
        Ok((id, rest))
    }
}
