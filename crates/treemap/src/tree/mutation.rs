//! Edits a treemap session may perform on a laid-out tree

use derive_more::Display;
use log::debug;

use crate::error::Result;
use crate::tree::{NodeId, TreemapTree};

/// Whether an edit changed the tree
///
/// Requests that make no sense for the target (moving a folder, resizing
/// one) are interaction dead ends, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Outcome {
    #[display(fmt = "applied")]
    Applied,
    #[display(fmt = "skipped")]
    Skipped,
}

impl Outcome {
    pub const fn is_applied(self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

impl<D> TreemapTree<D> {
    /// Move a leaf to the end of an internal node's children
    ///
    /// Skipped unless `leaf` is a leaf and `destination` has at least one
    /// child. Sizes are not recomputed along either ancestor chain; call
    /// [`TreemapTree::recompute_sizes`] on the affected roots before the
    /// next layout.
    pub fn move_leaf(&mut self, leaf: NodeId, destination: NodeId) -> Result<Outcome> {
        let source = self.slot(leaf)?;
        let old_parent = source.parent;
        if !source.children.is_empty() || source.node.is_empty() {
            debug!("move skipped: {} is not a leaf", leaf);
            return Ok(Outcome::Skipped);
        }
        if self.slot(destination)?.children.is_empty() {
            debug!("move skipped: destination {} has no children", destination);
            return Ok(Outcome::Skipped);
        }

        if let Some(old_parent) = old_parent {
            let slot = &mut self.slots[old_parent.get()];
            slot.children.retain(|&child| child != leaf);
            // a folder emptied by the move is now a leaf
            if slot.children.is_empty() {
                slot.node.expanded = false;
            }
        }
        self.slots[destination.get()].children.push(leaf);
        self.slots[leaf.get()].parent = Some(destination);
        debug!("moved {} under {}", leaf, destination);
        Ok(Outcome::Applied)
    }

    /// Scale a leaf's size by `1 + factor`
    ///
    /// Growth rounds up and shrinking rounds down, so any non-zero factor
    /// changes the size by at least one unit. Skipped for internal nodes,
    /// zero-sized leaves, a zero factor, and results below 1.
    pub fn change_size(&mut self, leaf: NodeId, factor: f64) -> Result<Outcome> {
        let slot = self.slot_mut(leaf)?;
        if !slot.children.is_empty() || slot.node.data_size == 0 {
            debug!("change_size skipped: {} is not a sized leaf", leaf);
            return Ok(Outcome::Skipped);
        }

        let size = slot.node.data_size;
        let scaled = size as f64 * (1.0 + factor);
        // f64 cannot represent every u64, so pin the result to at least one
        // unit of movement in the requested direction
        let resized = if factor > 0.0 {
            (scaled.ceil() as u64).max(size.saturating_add(1))
        } else if factor < 0.0 {
            (scaled.floor() as u64).min(size - 1)
        } else {
            return Ok(Outcome::Skipped);
        };

        if resized < 1 || resized == size {
            debug!("change_size skipped: {} cannot move to {}", leaf, resized);
            return Ok(Outcome::Skipped);
        }
        slot.node.data_size = resized;
        Ok(Outcome::Applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{Colour, FixedColour, Tree};
    use pretty_assertions::assert_eq;

    fn tree() -> TreemapTree {
        TreemapTree::with_colours(FixedColour(Colour::BLACK))
    }

    fn size(tree: &TreemapTree, id: NodeId) -> u64 {
        tree.get(id).unwrap().data_size()
    }

    #[test]
    fn test_move_leaf_between_folders() {
        let mut tree = tree();
        let a = tree.new_leaf("a", 1);
        let b = tree.new_leaf("b", 2);
        let src = tree.new_internal("src", vec![a, b]).unwrap();
        let c = tree.new_leaf("c", 3);
        let dst = tree.new_internal("dst", vec![c]).unwrap();
        let root = tree.new_internal("root", vec![src, dst]).unwrap();

        assert_eq!(tree.move_leaf(a, dst), Ok(Outcome::Applied));

        assert_eq!(tree.children_of(src), &[b]);
        assert_eq!(tree.children_of(dst), &[c, a]);
        assert_eq!(tree.parent(a), Some(dst));
        // sizes are stale until recomputed
        assert_eq!(size(&tree, src), 3);
        assert_eq!(tree.recompute_sizes(root), Ok(6));
        assert_eq!(size(&tree, src), 2);
        assert_eq!(size(&tree, dst), 4);
    }

    #[test]
    fn test_move_twice_keeps_single_entry() {
        let mut tree = tree();
        let a = tree.new_leaf("a", 1);
        let src = tree.new_internal("src", vec![a]).unwrap();
        let c = tree.new_leaf("c", 3);
        let dst = tree.new_internal("dst", vec![c]).unwrap();
        let _root = tree.new_internal("root", vec![src, dst]).unwrap();

        tree.move_leaf(a, dst).unwrap();
        tree.move_leaf(a, dst).unwrap();

        assert_eq!(tree.children_of(dst), &[c, a]);
        assert!(tree.children_of(src).is_empty());
        assert!(tree.is_leaf(src));
    }

    #[test]
    fn test_move_rejects_internal_source_and_leaf_destination() {
        let mut tree = tree();
        let a = tree.new_leaf("a", 1);
        let src = tree.new_internal("src", vec![a]).unwrap();
        let b = tree.new_leaf("b", 1);
        let root = tree.new_internal("root", vec![src, b]).unwrap();

        assert_eq!(tree.move_leaf(src, root), Ok(Outcome::Skipped));
        assert_eq!(tree.move_leaf(a, b), Ok(Outcome::Skipped));
        assert_eq!(tree.children_of(root), &[src, b]);
        assert_eq!(tree.parent(a), Some(src));
    }

    #[test]
    fn test_move_emptying_expanded_folder_collapses_it() {
        let mut tree = tree();
        let a = tree.new_leaf("a", 1);
        let src = tree.new_internal("src", vec![a]).unwrap();
        let b = tree.new_leaf("b", 1);
        let root = tree.new_internal("root", vec![src, b]).unwrap();
        tree.expand(root).unwrap();
        tree.expand(src).unwrap();

        tree.move_leaf(a, root).unwrap();

        assert!(!tree.get(src).unwrap().is_expanded());
    }

    #[test]
    fn test_change_size_rounds_away_from_current() {
        let mut tree = tree();
        let leaf = tree.new_leaf("leaf", 10);

        assert_eq!(tree.change_size(leaf, 0.01), Ok(Outcome::Applied));
        assert_eq!(size(&tree, leaf), 11);

        assert_eq!(tree.change_size(leaf, -0.01), Ok(Outcome::Applied));
        assert_eq!(size(&tree, leaf), 10);

        assert_eq!(tree.change_size(leaf, 0.5), Ok(Outcome::Applied));
        assert_eq!(size(&tree, leaf), 15);
    }

    #[test]
    fn test_change_size_never_reaches_zero() {
        let mut tree = tree();
        let leaf = tree.new_leaf("leaf", 3);

        assert_eq!(tree.change_size(leaf, -0.9), Ok(Outcome::Skipped));
        assert_eq!(size(&tree, leaf), 3);

        assert_eq!(tree.change_size(leaf, -0.5), Ok(Outcome::Applied));
        assert_eq!(size(&tree, leaf), 1);
    }

    #[test]
    fn test_change_size_beyond_f64_precision() {
        let mut tree = tree();
        let big = (1u64 << 53) + 1;
        let leaf = tree.new_leaf("leaf", big);

        assert_eq!(tree.change_size(leaf, 1e-17), Ok(Outcome::Applied));
        assert_eq!(size(&tree, leaf), big + 1);

        assert_eq!(tree.change_size(leaf, -1e-17), Ok(Outcome::Applied));
        assert_eq!(size(&tree, leaf), big);

        let max = tree.new_leaf("max", u64::MAX);
        assert_eq!(tree.change_size(max, 1.0), Ok(Outcome::Skipped));
        assert_eq!(size(&tree, max), u64::MAX);
    }

    #[test]
    fn test_change_size_skips() {
        let mut tree = tree();
        let zero = tree.new_leaf("zero", 0);
        let leaf = tree.new_leaf("leaf", 4);
        let root = tree.new_internal("root", vec![zero, leaf]).unwrap();

        assert_eq!(tree.change_size(zero, 1.0), Ok(Outcome::Skipped));
        assert_eq!(tree.change_size(root, 1.0), Ok(Outcome::Skipped));
        assert_eq!(tree.change_size(leaf, 0.0), Ok(Outcome::Skipped));
        assert_eq!(tree.change_size(leaf, f64::NAN), Ok(Outcome::Skipped));
        assert_eq!(size(&tree, leaf), 4);
        assert_eq!(size(&tree, root), 4);
        assert!(tree.change_size(NodeId(20), 1.0).is_err());
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Applied.to_string(), "applied");
        assert!(!Outcome::Skipped.is_applied());
    }
}
