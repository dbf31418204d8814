//! Arena storage for parsed tokens.
//!
//! # Design
//!
//! All nodes live in one `Vec` owned by [`TokenTree`] and refer to each other
//! by [`NodeId`]. An element's `children` list is the only ownership edge;
//! the `parent` index on each node is a read-only back-reference used for
//! upward queries (the parent's tag name), so there are no reference cycles.

use crate::cursor::Location;
use crate::factory::PendingToken;
use crate::token::{Element, ParseMode, Token};

/// A type-safe index into a [`TokenTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

/// One parsed token plus the fields every token shares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// The token itself.
    pub token: Token,
    /// Enclosing element, or `None` at the top level.
    pub parent: Option<NodeId>,
    /// Where the token starts in the source.
    pub location: Location,
    /// Error policy the token was constructed with.
    pub mode: ParseMode,
}

/// Every token parsed from one document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenTree {
    /// All nodes, indexed by `NodeId`.
    nodes: Vec<Node>,
    /// Top-level nodes in source order.
    roots: Vec<NodeId>,
    mode: ParseMode,
}

impl TokenTree {
    /// Create an empty tree whose tokens will use `mode`.
    #[must_use]
    pub const fn new(mode: ParseMode) -> Self {
        Self {
            nodes: Vec::new(),
            roots: Vec::new(),
            mode,
        }
    }

    /// The error policy shared by every node.
    #[must_use]
    pub const fn mode(&self) -> ParseMode {
        self.mode
    }

    /// Number of nodes at any depth.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when nothing was parsed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Top-level nodes in source order.
    #[must_use]
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Get a node by its ID.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Get element data if this node is an element.
    #[must_use]
    pub fn element(&self, id: NodeId) -> Option<&Element> {
        self.get(id).and_then(|node| node.token.as_element())
    }

    /// Get the children of a node (empty for leaves).
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.element(id).map_or(&[], |element| element.children.as_slice())
    }

    /// Get the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|node| node.parent)
    }

    /// Tag name of the element enclosing `id`.
    #[must_use]
    pub fn parent_name(&self, id: NodeId) -> Option<&str> {
        self.parent(id)
            .and_then(|parent| self.element(parent))
            .map(|element| element.name.as_str())
    }

    /// Iterate over `id` and then its ancestors, innermost first.
    pub fn ancestors_inclusive(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        core::iter::successors(Some(id), |&current| self.parent(current))
    }

    /// Check whether `id` or one of its ancestors is an element called `name`.
    #[must_use]
    pub fn has_open_element(&self, id: NodeId, name: &str) -> bool {
        self.ancestors_inclusive(id)
            .any(|current| self.element(current).is_some_and(|e| e.name == name))
    }

    /// Allocate a node. It is not attached to a parent or to the roots yet.
    pub(crate) fn alloc(&mut self, token: Token, pending: PendingToken) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            token,
            parent: pending.parent,
            location: pending.location,
            mode: pending.mode,
        });
        id
    }

    /// Mutable element data, for the element parser filling itself in.
    pub(crate) fn element_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        match self.nodes.get_mut(id.0).map(|node| &mut node.token) {
            Some(Token::Element(element)) => Some(element),
            _ => None,
        }
    }

    /// Append `child` to the children of element `parent`.
    pub(crate) fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if let Some(element) = self.element_mut(parent) {
            element.children.push(child);
        }
    }

    /// Record `id` as the next top-level node.
    pub(crate) fn push_root(&mut self, id: NodeId) {
        self.roots.push(id);
    }
}
