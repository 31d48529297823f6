//! Core tree abstraction for treemap layout
//!
//! This module provides an arena-backed tree of size-weighted nodes together
//! with the slice-and-dice layout engine, the expand/collapse display state
//! and the constrained set of edits a treemap session may perform.

mod arena;
mod colour;
mod display;
mod labeling;
mod layout;
mod mutation;
mod node;
mod rect;
mod traits;

pub use arena::TreemapTree;
pub use colour::{Colour, ColourSource, FixedColour, Palette, RandomColours};
pub use labeling::{FilesystemLabeling, PaperLabeling, PathLabeling};
pub use layout::SliceAxis;
pub use mutation::Outcome;
pub use node::{NodeId, NodeKind, TreeNode};
pub use rect::{Point, Rect};
pub use traits::{TraversalOrder, Tree, TreeTraversal, TreeWalker};

/// Re-export common types for convenience
pub mod prelude {
    pub use super::{
        Colour, ColourSource, FilesystemLabeling, FixedColour, NodeId, NodeKind, Outcome,
        Palette, PaperLabeling, PathLabeling, Point, RandomColours, Rect, TraversalOrder, Tree,
        TreeNode, TreeTraversal, TreemapTree,
    };
}
