//! Top-level driver: turns a whole document into a [`TokenTree`].

use tagtree_common::warning::warn_once;

use crate::cursor::Cursor;
use crate::element::closing_tag;
use crate::error::{ParseError, ParseResult, truncate_or_fail};
use crate::factory::build_from_text;
use crate::token::ParseMode;
use crate::tree::TokenTree;

/// How many elements may be open at once. The parser recurses once per open
/// element, so deeper input is cut off here instead of exhausting the stack.
pub const MAX_DEPTH: usize = 256;

/// Parses complete HTML documents with a fixed [`ParseMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HtmlTokenizer {
    mode: ParseMode,
}

impl HtmlTokenizer {
    /// Create a tokenizer with the given error policy.
    #[must_use]
    pub const fn new(mode: ParseMode) -> Self {
        Self { mode }
    }

    /// A tokenizer that fails on the first malformation.
    #[must_use]
    pub const fn strict() -> Self {
        Self::new(ParseMode::Strict)
    }

    /// A tokenizer that truncates at malformations instead of failing.
    #[must_use]
    pub const fn lenient() -> Self {
        Self::new(ParseMode::Lenient)
    }

    /// The error policy every token will be built with.
    #[must_use]
    pub const fn mode(&self) -> ParseMode {
        self.mode
    }

    /// Parse `html` into a tree of top-level tokens and their descendants.
    ///
    /// Closing tags with no open element are dropped.
    ///
    /// # Errors
    ///
    /// In strict mode, returns the first [`ParseError`] encountered; the
    /// partially built tree is discarded. Lenient mode always succeeds.
    pub fn tokenize(&self, html: &str) -> ParseResult<TokenTree> {
        let mut tree = TokenTree::new(self.mode);
        let mut rest = Cursor::new(html);

        loop {
            rest = rest.trim_start();
            if rest.is_empty() {
                break;
            }

            if let Some(token) = build_from_text(rest, None, self.mode) {
                let (_, next) = token.parse(&mut tree, rest)?;
                debug_assert!(next.offset() > rest.offset());
                rest = next;
                continue;
            }

            // Only a closing tag makes the factory come up empty here.
            rest = match closing_tag(rest) {
                Some((name, after)) => {
                    warn_once(
                        "tokenizer",
                        &format!("discarded stray closing tag </{name}> at {}", rest.location()),
                    );
                    after
                }
                None => {
                    let error = ParseError::MissingClosingBracket(rest.location());
                    truncate_or_fail(self.mode, rest, error)?
                }
            };
        }

        Ok(tree)
    }
}

/// Parse `html` leniently.
///
/// # Errors
///
/// Never fails in practice; the `Result` mirrors [`HtmlTokenizer::tokenize`].
pub fn parse(html: &str) -> ParseResult<TokenTree> {
    HtmlTokenizer::lenient().tokenize(html)
}
