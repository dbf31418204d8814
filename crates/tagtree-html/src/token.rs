//! Token variants produced by the parser.
//!
//! Every node in a [`TokenTree`](crate::tree::TokenTree) holds one [`Token`].
//! The variant set is closed: elements, text runs, comments and doctype
//! declarations. Closing tags never become tokens; the element parser consumes
//! them directly.

use serde::ser::{Serialize, SerializeMap, Serializer};
use strum_macros::{Display, EnumString};

use crate::tree::NodeId;

/// Which variant a token is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum TokenKind {
    /// `<name ...>` with attributes and children.
    Element,
    /// Character data between tags.
    Text,
    /// `<!-- ... -->`
    Comment,
    /// `<!DOCTYPE ...>`
    DocType,
}

/// Error policy, fixed for the lifetime of a parse tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ParseMode {
    /// Malformed input aborts the parse with a [`ParseError`](crate::ParseError).
    Strict,
    /// Malformed input truncates the offending token and parsing stops there.
    #[default]
    Lenient,
}

impl ParseMode {
    /// True for [`ParseMode::Strict`].
    #[must_use]
    pub const fn is_strict(self) -> bool {
        matches!(self, Self::Strict)
    }
}

/// The value of an attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttributeValue {
    /// A valueless attribute such as `disabled`.
    Boolean,
    /// An explicit value, quoted or not.
    Text(String),
}

impl AttributeValue {
    /// The text value, or `None` for a boolean attribute.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Boolean => None,
            Self::Text(value) => Some(value),
        }
    }

    /// True for a valueless attribute.
    #[must_use]
    pub const fn is_boolean(&self) -> bool {
        matches!(self, Self::Boolean)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl Serialize for AttributeValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Boolean => serializer.serialize_bool(true),
            Self::Text(value) => serializer.serialize_str(value),
        }
    }
}

/// Attribute names (case preserved) mapped to values, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Attributes {
    entries: Vec<(String, AttributeValue)>,
}

impl Attributes {
    /// Set `name` to `value`. A repeated name keeps its original position and
    /// takes the later value.
    pub fn insert(&mut self, name: String, value: AttributeValue) {
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }

    /// Look up an attribute by its exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.entries
            .iter()
            .find_map(|(n, value)| (n == name).then_some(value))
    }

    /// Check whether an attribute is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of attributes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the element has no attributes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, value)` pairs in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }
}

impl Serialize for Attributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// An element: lowercase tag name, attributes, and the children it owns.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    /// Lowercase tag name, possibly namespaced (`svg:rect`).
    pub name: String,
    /// Attributes in source order.
    pub attributes: Attributes,
    /// Child nodes in source order.
    pub children: Vec<NodeId>,
}

impl Element {
    /// True when this element has at least one attribute.
    #[must_use]
    pub const fn has_attributes(&self) -> bool {
        !self.attributes.is_empty()
    }

    /// True when this element has at least one child.
    #[must_use]
    pub const fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// A parsed token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// An element and its subtree.
    Element(Element),
    /// Trimmed character data.
    Text(String),
    /// Trimmed comment body.
    Comment(String),
    /// Trimmed doctype value, case preserved.
    DocType(String),
}

impl Token {
    /// Which variant this is.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Element(_) => TokenKind::Element,
            Self::Text(_) => TokenKind::Text,
            Self::Comment(_) => TokenKind::Comment,
            Self::DocType(_) => TokenKind::DocType,
        }
    }

    /// The element data, if this is an element.
    #[must_use]
    pub const fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }

    /// The value of a leaf token; `None` for elements.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Element(_) => None,
            Self::Text(value) | Self::Comment(value) | Self::DocType(value) => Some(value),
        }
    }
}
