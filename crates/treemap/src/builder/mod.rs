//! Builders that shape flat records into a treemap hierarchy
//!
//! Data sources (directory listings, publication tables) describe each leaf
//! as a path of category names plus a weight. [`RecordBuilder`] merges
//! records sharing a path prefix into the same internal nodes, then hangs
//! everything under a synthetic super-root ready for layout.

mod papers;

pub use papers::{build_paper_tree, BuildMode, PaperData, PaperRecord};

use log::debug;

use crate::error::Result;
use crate::tree::{NodeId, Tree, TreemapTree};

/// One leaf of the hierarchy in flat form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<D> {
    /// Names of the internal nodes from the top level down
    pub path: Vec<String>,
    /// Leaf name
    pub name: String,
    /// Leaf weight
    pub weight: u64,
    /// Leaf metadata
    pub metadata: D,
}

impl<D> Record<D> {
    pub fn new<S: Into<String>>(
        path: impl IntoIterator<Item = S>,
        name: impl Into<String>,
        weight: u64,
        metadata: D,
    ) -> Self {
        Self {
            path: path.into_iter().map(Into::into).collect(),
            name: name.into(),
            weight,
            metadata,
        }
    }
}

/// Incrementally builds a deduplicated tree from records
///
/// # Example
///
/// ```
/// use treemap::prelude::*;
///
/// let tree: TreemapTree = TreemapTree::with_colours(FixedColour(Colour::BLACK));
/// let mut builder = RecordBuilder::new(tree);
/// builder.insert(Record::new(["src", "tree"], "node.rs", 180, ())).unwrap();
/// builder.insert(Record::new(["src", "tree"], "layout.rs", 320, ())).unwrap();
/// builder.insert(Record::new(["src"], "lib.rs", 40, ())).unwrap();
///
/// let (tree, root) = builder.finish("crate").unwrap();
/// let src = tree.find_by_path(root, &["src"]).unwrap();
/// assert_eq!(tree.child_count(src), 2);
/// assert_eq!(tree.get(root).unwrap().data_size(), 540);
/// ```
pub struct RecordBuilder<D> {
    tree: TreemapTree<D>,
    /// Top-level subtrees, in first-seen order
    tops: Vec<NodeId>,
    inserted: usize,
}

impl<D: Default> RecordBuilder<D> {
    /// Build into `tree`, which may already hold unrelated nodes
    pub fn new(tree: TreemapTree<D>) -> Self {
        Self {
            tree,
            tops: Vec::new(),
            inserted: 0,
        }
    }

    /// Number of records inserted so far
    pub fn len(&self) -> usize {
        self.inserted
    }

    pub fn is_empty(&self) -> bool {
        self.inserted == 0
    }

    /// Add one record, reusing existing internal nodes along its path
    ///
    /// Returns the new leaf. At each depth a path segment matches an
    /// existing internal child of the same name; the unmatched remainder of
    /// the path is created as a fresh chain. A record with an empty path is
    /// a top-level leaf and ends up directly under the root.
    pub fn insert(&mut self, record: Record<D>) -> Result<NodeId> {
        let Record {
            path,
            name,
            weight,
            metadata,
        } = record;

        let leaf = self.tree.new_leaf_with(name, weight, metadata);
        self.inserted += 1;

        let Some(first) = path.first() else {
            self.tops.push(leaf);
            return Ok(leaf);
        };
        let top = self.tops.iter().copied().find(|&top| {
            self.tree.is_internal(top) && self.tree.name(top) == Some(first.as_str())
        });
        let Some(mut parent) = top else {
            let chain = self.chain(&path, leaf)?;
            self.tops.push(chain);
            return Ok(leaf);
        };

        let mut depth = 1;
        while let Some(child) = path
            .get(depth)
            .and_then(|segment| self.internal_child_named(parent, segment))
        {
            parent = child;
            depth += 1;
        }

        let subtree = self.chain(&path[depth..], leaf)?;
        self.tree.attach(parent, subtree)?;
        Ok(leaf)
    }

    /// Hang all top-level subtrees under a new root and settle the tree
    ///
    /// Parent links are reconciled, sizes recomputed and the whole tree
    /// collapsed, so only the root is displayed.
    pub fn finish(self, root_name: impl Into<String>) -> Result<(TreemapTree<D>, NodeId)> {
        let Self {
            mut tree,
            tops,
            inserted,
        } = self;

        let root = tree.new_internal(root_name, Vec::new())?;
        let top_count = tops.len();
        for top in tops {
            tree.attach(root, top)?;
        }
        tree.reconcile_parent_links(root)?;
        let total = tree.recompute_sizes(root)?;
        tree.collapse_all(root)?;

        debug!(
            "built tree from {} records: {} top-level subtrees, total size {}",
            inserted, top_count, total
        );
        Ok((tree, root))
    }

    /// `segments` as nested internal nodes ending in `leaf`
    fn chain(&mut self, segments: &[String], leaf: NodeId) -> Result<NodeId> {
        segments.iter().rev().try_fold(leaf, |child, segment| {
            self.tree.new_internal(segment.clone(), vec![child])
        })
    }

    fn internal_child_named(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.tree
            .children(parent)
            .find(|&child| self.tree.is_internal(child) && self.tree.name(child) == Some(name))
    }
}
