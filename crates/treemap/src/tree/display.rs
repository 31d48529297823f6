//! Expand/collapse display state
//!
//! The displayed tree is always a root-connected prefix of the full tree:
//! a node's children are shown only while the node is expanded, and a
//! collapsed node has no expanded descendants.

use log::debug;

use crate::error::Result;
use crate::tree::{NodeId, Outcome, Tree, TreemapTree};

impl<D> TreemapTree<D> {
    /// Add a node's children to the displayed tree
    ///
    /// Skipped for leaves and zero-sized nodes. The caller must ensure the
    /// node's parent, if any, is already expanded.
    pub fn expand(&mut self, id: NodeId) -> Result<Outcome> {
        let slot = self.slot_mut(id)?;
        if slot.children.is_empty() || slot.node.data_size == 0 {
            debug!("expand skipped: {} is a leaf or has zero size", id);
            return Ok(Outcome::Skipped);
        }
        slot.node.expanded = true;
        Ok(Outcome::Applied)
    }

    /// Expand a node and every descendant that can be expanded
    pub fn expand_all(&mut self, id: NodeId) -> Result<Outcome> {
        let outcome = self.expand(id)?;
        if !outcome.is_applied() {
            return Ok(outcome);
        }

        let mut stack = self.slots[id.get()].children.clone();
        while let Some(current) = stack.pop() {
            if self.expand(current)?.is_applied() {
                stack.extend(self.slots[current.get()].children.iter().copied());
            }
        }
        Ok(outcome)
    }

    /// Collapse the sibling set containing `id`
    ///
    /// Every child of `id`'s parent, `id` included, is collapsed together
    /// with its whole subtree. The parent itself stays expanded, so the
    /// siblings remain displayed as single rectangles. Skipped for a root.
    pub fn collapse(&mut self, id: NodeId) -> Result<Outcome> {
        let Some(parent) = self.slot(id)?.parent else {
            debug!("collapse skipped: {} is a root", id);
            return Ok(Outcome::Skipped);
        };
        let siblings = self.slots[parent.get()].children.clone();
        for sibling in siblings {
            self.collapse_subtree(sibling);
        }
        Ok(Outcome::Applied)
    }

    /// Collapse the entire tree containing `id` down to its root
    ///
    /// Returns the root, which afterwards is the only drawn node.
    pub fn collapse_all(&mut self, id: NodeId) -> Result<NodeId> {
        self.slot(id)?;
        let root = self.root_of(id);
        self.collapse_subtree(root);
        Ok(root)
    }

    pub(crate) fn collapse_subtree(&mut self, id: NodeId) {
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let slot = &mut self.slots[current.get()];
            slot.node.expanded = false;
            stack.extend(slot.children.iter().copied());
        }
    }

    /// The displayed tree rooted at `root`, in pre-order
    ///
    /// Includes expanded nodes as well as the drawn ones.
    pub fn displayed_nodes(&self, root: NodeId) -> Vec<NodeId> {
        let mut displayed = Vec::new();
        if self.slots.get(root.get()).is_none() {
            return displayed;
        }
        let mut stack = vec![root];
        while let Some(current) = stack.pop() {
            displayed.push(current);
            let slot = &self.slots[current.get()];
            if slot.node.expanded {
                stack.extend(slot.children.iter().rev().copied());
            }
        }
        displayed
    }
}
