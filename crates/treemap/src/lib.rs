//! Treemap Library
//!
//! A library for modelling hierarchical size-weighted data (folders and files,
//! categorized publications) and laying it out as a space-filling treemap,
//! with an expand/collapse display state deciding which rectangles are shown.
//!
//! # Core Concepts
//!
//! - **TreemapTree**: Arena owning every node, addressed by [`tree::NodeId`]
//! - **Layout**: Slice-and-dice subdivision with exact integer accounting
//! - **Display state**: Expanded nodes form a root-connected prefix of the tree
//! - **Builders**: Merge flat records into a deduplicated hierarchy
//!
//! # Example
//!
//! ```
//! use treemap::prelude::*;
//!
//! let mut tree: TreemapTree = TreemapTree::with_colours(FixedColour(Colour::BLACK));
//! let a = tree.new_leaf("a.txt", 10);
//! let b = tree.new_leaf("b.txt", 30);
//! let root = tree.new_internal("docs", vec![a, b]).unwrap();
//!
//! tree.layout(root, Rect::new(0, 0, 100, 40)).unwrap();
//! tree.expand(root).unwrap();
//!
//! assert_eq!(tree.visible_nodes(root), vec![a, b]);
//! assert_eq!(tree.locate(root, Point::new(80, 5)), Some(b));
//! ```

pub mod builder;
pub mod error;
pub mod options;
pub mod tree;

pub use error::{Result, TreeError};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::builder::{BuildMode, PaperData, PaperRecord, Record, RecordBuilder};
    pub use crate::error::TreeError;
    pub use crate::options::TreemapOptions;
    pub use crate::tree::prelude::*;
}
