//! Core node types for the treemap tree

use std::fmt;

use crate::tree::{Colour, Rect};

/// Unique identifier for a node within a tree
///
/// Internally represented as an index into an arena-based storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    /// Create a new NodeId from a usize
    pub const fn new(id: usize) -> Self {
        NodeId(id)
    }

    /// Get the inner usize value
    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl From<usize> for NodeId {
    fn from(id: usize) -> Self {
        NodeId(id)
    }
}

impl From<NodeId> for usize {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

/// The structural kind of a node
///
/// Unlike a filesystem entry, a treemap node's kind is derived from its
/// children: a folder whose last file was moved away becomes a leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A node with at least one child; its size is the sum of its children
    Internal,
    /// A node without children; its size is intrinsic
    Leaf,
}

impl NodeKind {
    /// Returns true if this is an internal node
    pub const fn is_internal(self) -> bool {
        matches!(self, NodeKind::Internal)
    }

    /// Returns true if this is a leaf node
    pub const fn is_leaf(self) -> bool {
        matches!(self, NodeKind::Leaf)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Internal => write!(f, "Internal"),
            NodeKind::Leaf => write!(f, "Leaf"),
        }
    }
}

/// A single node in the tree
///
/// Structural links (parent, children) live in the arena; this is the
/// per-node payload. Generic over `D`, caller metadata such as a paper's
/// authors or a file's full path.
#[derive(Debug, Clone)]
pub struct TreeNode<D> {
    /// `None` marks the empty, content-less node
    pub(crate) name: Option<String>,
    pub(crate) data_size: u64,
    pub(crate) rect: Rect,
    pub(crate) colour: Colour,
    pub(crate) expanded: bool,
    /// User-defined data associated with this node
    pub data: D,
}

impl<D> TreeNode<D> {
    pub(crate) fn new(name: Option<String>, data_size: u64, colour: Colour, data: D) -> Self {
        Self {
            name,
            data_size,
            rect: Rect::default(),
            colour,
            expanded: false,
            data,
        }
    }

    /// The node's name, or `None` for the empty node
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns true if this is the empty sentinel node
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }

    /// Weight of this node: intrinsic for a leaf, derived for an internal node
    pub fn data_size(&self) -> u64 {
        self.data_size
    }

    /// Rectangle assigned by the most recent layout pass
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Colour fixed at construction
    pub fn colour(&self) -> Colour {
        self.colour
    }

    /// Whether this node's children are part of the displayed tree
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }
}

impl<D> fmt::Display for TreeNode<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} ({})", name, self.data_size),
            None => write!(f, "<empty>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id() {
        assert_eq!(NodeId::new(5).get(), 5);
        assert_eq!(NodeId::from(10), NodeId(10));
        assert_eq!(usize::from(NodeId(7)), 7);
        assert_eq!(NodeId(3).to_string(), "NodeId(3)");
    }

    #[test]
    fn test_node_kind() {
        assert!(NodeKind::Internal.is_internal());
        assert!(!NodeKind::Internal.is_leaf());
        assert!(NodeKind::Leaf.is_leaf());
        assert!(!NodeKind::Leaf.is_internal());
    }

    #[test]
    fn test_node() {
        let node = TreeNode::new(Some("report.pdf".to_string()), 42, Colour::BLACK, "meta");
        assert_eq!(node.name(), Some("report.pdf"));
        assert!(!node.is_empty());
        assert_eq!(node.data_size(), 42);
        assert!(!node.is_expanded());
        assert_eq!(node.rect(), Rect::default());
        assert_eq!(node.data, "meta");
        assert_eq!(node.to_string(), "report.pdf (42)");
    }

    #[test]
    fn test_empty_node() {
        let node = TreeNode::new(None, 0, Colour::BLACK, ());
        assert!(node.is_empty());
        assert_eq!(node.name(), None);
        assert_eq!(node.to_string(), "<empty>");
    }
}
