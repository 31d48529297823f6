//! Error types for tree construction and labeling

use derive_more::Display;

use crate::tree::NodeId;

/// Errors reported by structural operations on a [`crate::tree::TreemapTree`]
///
/// Interaction-level dead ends (moving an internal node, expanding a leaf)
/// are not errors; they report [`crate::tree::Outcome::Skipped`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum TreeError {
    /// The id does not address a node in this arena
    #[display(fmt = "no node with id {}", _0)]
    InvalidNode(NodeId),

    /// The node is already owned by a parent
    #[display(fmt = "{} already has a parent", _0)]
    AlreadyAttached(NodeId),

    /// The empty sentinel node cannot own or be owned
    #[display(fmt = "{} is the empty node and cannot be linked", _0)]
    EmptyNode(NodeId),

    /// The same child was listed more than once
    #[display(fmt = "{} listed more than once", _0)]
    DuplicateChild(NodeId),

    /// Linking would make a node its own ancestor
    #[display(fmt = "attaching {} under {} would create a cycle", child, parent)]
    Cycle { parent: NodeId, child: NodeId },

    /// A capability the tree flavor must supply is missing
    #[display(fmt = "{} is not implemented for this tree", _0)]
    Unimplemented(&'static str),
}

impl std::error::Error for TreeError {}

/// Result alias for tree operations
pub type Result<T> = std::result::Result<T, TreeError>;
