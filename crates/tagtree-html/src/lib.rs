//! Best-effort HTML tokenizer producing a tree of typed tokens.
//!
//! # Scope
//!
//! This crate implements:
//! - **Recursive-descent parsing** over a fully materialized buffer: every
//!   token parses itself out of a [`Cursor`] and returns the unconsumed rest
//! - **Elements** with quoted, unquoted and valueless attributes, self-closing
//!   syntax, void elements, and raw-text `<script>` contents
//! - **Omitted end tags** for `head`, `p`, `li`, `dt`/`dd` and `rp`/`rt`
//!   ([`implied::closing_implied`])
//! - **Text, comments and doctype declarations**
//! - **Strict and lenient error policies** ([`ParseMode`])
//! - **Export** to serde-serializable records and an indented text dump
//!
//! # Not Implemented
//!
//! - Character encoding detection and character references
//! - Foster parenting and the adoption agency algorithm
//! - Insertion modes beyond omitted end tags
//! - Raw-text handling for anything but `script`
//!
//! # Example
//!
//! ```
//! use tagtree_html::{HtmlTokenizer, TreeRecord};
//!
//! let tree = HtmlTokenizer::strict().tokenize("<ul><li>a<li>b</ul>")?;
//! let ul = tree.roots()[0];
//! assert_eq!(tree.children(ul).len(), 2);
//! assert!(matches!(tree.to_tree(ul), Some(TreeRecord::Element { .. })));
//! # Ok::<(), tagtree_html::ParseError>(())
//! ```

mod attribute;
mod comment;
/// Cursor over the source buffer and source locations.
pub mod cursor;
mod doctype;
mod element;
/// Strict-mode parse errors.
pub mod error;
/// Tree export: records, JSON and text dumps.
pub mod export;
/// Token factory and not-yet-parsed tokens.
pub mod factory;
/// Void elements and omitted-end-tag rules.
pub mod implied;
mod text;
/// Token variants.
pub mod token;
/// Top-level document driver.
pub mod tokenizer;
/// Arena storage for parsed tokens.
pub mod tree;

pub use cursor::{Cursor, Location};
pub use error::{ParseError, ParseResult};
pub use export::{TreeRecord, print_tree};
pub use factory::{PendingToken, build_from_text};
pub use token::{AttributeValue, Attributes, Element, ParseMode, Token, TokenKind};
pub use tokenizer::{HtmlTokenizer, MAX_DEPTH, parse};
pub use tree::{Node, NodeId, TokenTree};
