//! Read-only exports of a parsed tree.
//!
//! [`TreeRecord`] is the structured form (`{ type, name, attributes, children }`
//! for elements, `{ type, value, line, position }` for leaves) and serializes
//! with serde. The [`Display`](fmt::Display) impl on [`TokenTree`] is an
//! indented dump for humans.

use core::fmt;

use serde::Serialize;

use crate::token::{Attributes, Token};
use crate::tree::{NodeId, TokenTree};

/// One exported node and, for elements, its exported children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeRecord {
    /// An element.
    Element {
        /// Lowercase tag name.
        name: String,
        /// Omitted when empty.
        #[serde(skip_serializing_if = "Attributes::is_empty")]
        attributes: Attributes,
        /// Omitted when empty.
        #[serde(skip_serializing_if = "Vec::is_empty")]
        children: Vec<TreeRecord>,
    },
    /// A text run.
    Text {
        /// Trimmed text.
        value: String,
        /// Zero-based source line.
        line: usize,
        /// Zero-based source column.
        position: usize,
    },
    /// A comment.
    Comment {
        /// Trimmed comment body.
        value: String,
        /// Zero-based source line.
        line: usize,
        /// Zero-based source column.
        position: usize,
    },
    /// A doctype declaration.
    DocType {
        /// Trimmed doctype value.
        value: String,
        /// Zero-based source line.
        line: usize,
        /// Zero-based source column.
        position: usize,
    },
}

impl TokenTree {
    /// Export `id` and its subtree, or `None` if `id` is not in this tree.
    #[must_use]
    pub fn to_tree(&self, id: NodeId) -> Option<TreeRecord> {
        let node = self.get(id)?;
        let (line, position) = (node.location.line, node.location.position);
        let record = match &node.token {
            Token::Element(element) => TreeRecord::Element {
                name: element.name.clone(),
                attributes: element.attributes.clone(),
                children: element
                    .children
                    .iter()
                    .filter_map(|&child| self.to_tree(child))
                    .collect(),
            },
            Token::Text(value) => TreeRecord::Text {
                value: value.clone(),
                line,
                position,
            },
            Token::Comment(value) => TreeRecord::Comment {
                value: value.clone(),
                line,
                position,
            },
            Token::DocType(value) => TreeRecord::DocType {
                value: value.clone(),
                line,
                position,
            },
        };
        Some(record)
    }

    /// Export every top-level node in order.
    #[must_use]
    pub fn to_records(&self) -> Vec<TreeRecord> {
        self.roots()
            .iter()
            .filter_map(|&id| self.to_tree(id))
            .collect()
    }

    /// The exported tree as a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self.to_records())
    }

    /// The exported tree as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.to_records())
    }

    fn write_node(&self, f: &mut fmt::Formatter<'_>, id: NodeId, indent: usize) -> fmt::Result {
        let Some(node) = self.get(id) else {
            return Ok(());
        };
        let prefix = "  ".repeat(indent);
        match &node.token {
            Token::Element(element) => {
                write!(f, "{prefix}<{}", element.name)?;
                for (name, value) in element.attributes.iter() {
                    match value.as_str() {
                        Some(value) => write!(f, " {name}=\"{value}\"")?,
                        None => write!(f, " {name}")?,
                    }
                }
                writeln!(f, ">")?;
                for &child in &element.children {
                    self.write_node(f, child, indent + 1)?;
                }
            }
            Token::Text(value) => {
                let display = value.replace('\n', "\\n");
                writeln!(f, "{prefix}\"{display}\"")?;
            }
            Token::Comment(value) => writeln!(f, "{prefix}<!-- {value} -->")?,
            Token::DocType(value) => writeln!(f, "{prefix}<!DOCTYPE {value}>")?,
        }
        Ok(())
    }
}

impl fmt::Display for TokenTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &id in self.roots() {
            self.write_node(f, id, 0)?;
        }
        Ok(())
    }
}

/// Print the indented dump of `tree` to stdout.
pub fn print_tree(tree: &TokenTree) {
    print!("{tree}");
}
