//! Arena storage and construction for treemap trees

use std::collections::HashSet;
use std::fmt;

use log::{debug, trace};

use crate::error::{Result, TreeError};
use crate::options::TreemapOptions;
use crate::tree::{ColourSource, NodeId, Outcome, PathLabeling, RandomColours, Tree, TreeNode};

/// Internal node storage with structural links
#[derive(Debug, Clone)]
pub(crate) struct Slot<D> {
    /// The node data
    pub(crate) node: TreeNode<D>,
    /// Parent node ID, `None` for a root
    pub(crate) parent: Option<NodeId>,
    /// Owned children in display order
    pub(crate) children: Vec<NodeId>,
}

/// An arena of treemap nodes
///
/// Every node lives in the arena for the arena's lifetime; ownership is
/// expressed by the children lists, and the parent link is a plain id.
/// The arena may hold several detached roots while a builder assembles
/// subtrees; [`TreemapTree::new_internal`] and [`TreemapTree::attach`]
/// adopt them.
///
/// # Invariants
///
/// After every public operation:
/// - an internal node's size equals the sum of its children's sizes, except
///   after [`TreemapTree::move_leaf`], [`TreemapTree::attach`] or
///   [`TreemapTree::set_size`] until [`TreemapTree::recompute_sizes`] runs
/// - the empty node has no children, no parent and size 0
/// - a node appears exactly once in its parent's children
/// - an expanded node has an expanded parent (given the `expand` precondition)
/// - a leaf is never expanded, and a collapsed node has no expanded descendant
///
/// # Example
///
/// ```
/// use treemap::prelude::*;
///
/// let mut tree: TreemapTree = TreemapTree::with_colours(FixedColour(Colour::BLACK));
/// let notes = tree.new_leaf("notes.txt", 12);
/// let home = tree.new_internal("home", vec![notes]).unwrap();
///
/// assert_eq!(tree.get(home).unwrap().data_size(), 12);
/// assert_eq!(tree.parent(notes), Some(home));
/// ```
pub struct TreemapTree<D = ()> {
    /// Arena storage for nodes
    pub(crate) slots: Vec<Slot<D>>,
    colours: Box<dyn ColourSource>,
    pub(crate) labeling: Option<Box<dyn PathLabeling>>,
}

impl<D> TreemapTree<D> {
    /// Create an empty arena with entropy-seeded random colours
    pub fn new() -> Self {
        Self::with_colours(RandomColours::from_entropy())
    }

    /// Create an empty arena drawing colours from `colours`
    pub fn with_colours(colours: impl ColourSource + 'static) -> Self {
        Self {
            slots: Vec::new(),
            colours: Box::new(colours),
            labeling: None,
        }
    }

    /// Create an empty arena configured by `options`
    pub fn with_options(options: &TreemapOptions) -> Self {
        match options.colour_seed {
            Some(seed) => Self::with_colours(RandomColours::seeded(seed)),
            None => Self::new(),
        }
    }

    /// Set the path labeling flavor
    pub fn labeling(mut self, labeling: impl PathLabeling + 'static) -> Self {
        self.set_labeling(labeling);
        self
    }

    /// Replace the path labeling flavor
    pub fn set_labeling(&mut self, labeling: impl PathLabeling + 'static) {
        self.labeling = Some(Box::new(labeling));
    }

    /// Returns true if a path labeling flavor is installed
    pub fn has_labeling(&self) -> bool {
        self.labeling.is_some()
    }

    pub(crate) fn slot(&self, id: NodeId) -> Result<&Slot<D>> {
        self.slots.get(id.get()).ok_or(TreeError::InvalidNode(id))
    }

    pub(crate) fn slot_mut(&mut self, id: NodeId) -> Result<&mut Slot<D>> {
        self.slots.get_mut(id.get()).ok_or(TreeError::InvalidNode(id))
    }

    fn push(&mut self, name: Option<String>, data_size: u64, data: D) -> NodeId {
        let colour = self.colours.next_colour();
        let id = NodeId::new(self.slots.len());
        self.slots.push(Slot {
            node: TreeNode::new(name, data_size, colour, data),
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// Create a detached leaf with an intrinsic size and metadata
    pub fn new_leaf_with(&mut self, name: impl Into<String>, size: u64, data: D) -> NodeId {
        self.push(Some(name.into()), size, data)
    }

    /// Create a detached internal node adopting `children`
    ///
    /// Each child must be a detached root. Children are collapsed and the
    /// node's size is the sum of theirs.
    pub fn new_internal_with(
        &mut self,
        name: impl Into<String>,
        children: Vec<NodeId>,
        data: D,
    ) -> Result<NodeId> {
        let mut seen = HashSet::with_capacity(children.len());
        for &child in &children {
            let slot = self.slot(child)?;
            if slot.node.is_empty() {
                return Err(TreeError::EmptyNode(child));
            }
            if slot.parent.is_some() {
                return Err(TreeError::AlreadyAttached(child));
            }
            if !seen.insert(child) {
                return Err(TreeError::DuplicateChild(child));
            }
        }

        let data_size = children
            .iter()
            .map(|child| self.slots[child.get()].node.data_size)
            .sum();
        let id = self.push(Some(name.into()), data_size, data);
        for &child in &children {
            self.slots[child.get()].parent = Some(id);
            self.collapse_subtree(child);
        }
        self.slots[id.get()].children = children;
        Ok(id)
    }

    /// Append the detached root `child` as the last child of `parent`
    ///
    /// Sizes along `parent`'s ancestor chain are not updated; run
    /// [`TreemapTree::reconcile_parent_links`] and
    /// [`TreemapTree::recompute_sizes`] once all subtrees are attached.
    pub fn attach(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        if self.slot(parent)?.node.is_empty() {
            return Err(TreeError::EmptyNode(parent));
        }
        let slot = self.slot(child)?;
        if slot.node.is_empty() {
            return Err(TreeError::EmptyNode(child));
        }
        if slot.parent.is_some() {
            return Err(TreeError::AlreadyAttached(child));
        }
        if self.root_of(parent) == child {
            return Err(TreeError::Cycle { parent, child });
        }

        self.slots[parent.get()].children.push(child);
        self.slots[child.get()].parent = Some(parent);
        self.collapse_subtree(child);
        trace!("attached {} under {}", child, parent);
        Ok(())
    }

    /// Recompute internal sizes bottom-up from leaf sizes
    ///
    /// Returns the node's size. A leaf returns its size unchanged and the
    /// empty node returns 0.
    pub fn recompute_sizes(&mut self, id: NodeId) -> Result<u64> {
        self.slot(id)?;

        // pre-order; walked backwards, every child is summed before its parent
        let mut order = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            order.push(current);
            stack.extend(self.slots[current.get()].children.iter().copied());
        }

        for &current in order.iter().rev() {
            let slot = &self.slots[current.get()];
            if slot.children.is_empty() {
                continue;
            }
            let total = slot.children.iter().fold(0u64, |total, child| {
                total.saturating_add(self.slots[child.get()].node.data_size)
            });
            self.slots[current.get()].node.data_size = total;
        }
        Ok(self.slots[id.get()].node.data_size)
    }

    /// Point every child's parent link at the node listing it
    ///
    /// Returns the number of links that had to be repaired.
    pub fn reconcile_parent_links(&mut self, id: NodeId) -> Result<usize> {
        self.slot(id)?;
        let mut repaired = 0;
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let children = self.slots[current.get()].children.clone();
            for child in children {
                let slot = &mut self.slots[child.get()];
                if slot.parent != Some(current) {
                    slot.parent = Some(current);
                    repaired += 1;
                }
                stack.push(child);
            }
        }
        if repaired > 0 {
            debug!("repaired {} parent links under {}", repaired, id);
        }
        Ok(repaired)
    }

    /// Overwrite a leaf's intrinsic size
    ///
    /// Ancestors keep their old sizes until [`TreemapTree::recompute_sizes`].
    pub fn set_size(&mut self, leaf: NodeId, size: u64) -> Result<Outcome> {
        let slot = self.slot_mut(leaf)?;
        if !slot.children.is_empty() || slot.node.is_empty() {
            debug!("set_size skipped: {} is not a leaf", leaf);
            return Ok(Outcome::Skipped);
        }
        slot.node.data_size = size;
        Ok(Outcome::Applied)
    }

    /// Mutable access to a node's metadata
    pub fn data_mut(&mut self, id: NodeId) -> Option<&mut D> {
        self.slots.get_mut(id.get()).map(|slot| &mut slot.node.data)
    }

    /// Children of a node as a slice, empty for leaves and invalid ids
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        self.slots
            .get(id.get())
            .map(|slot| slot.children.as_slice())
            .unwrap_or(&[])
    }

    /// All nodes without a parent, in creation order
    pub fn roots(&self) -> Vec<NodeId> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.parent.is_none())
            .map(|(index, _)| NodeId::new(index))
            .collect()
    }
}

impl<D: Default> TreemapTree<D> {
    /// Create a detached leaf with an intrinsic size
    pub fn new_leaf(&mut self, name: impl Into<String>, size: u64) -> NodeId {
        self.new_leaf_with(name, size, D::default())
    }

    /// Create a detached internal node adopting `children`
    pub fn new_internal(&mut self, name: impl Into<String>, children: Vec<NodeId>) -> Result<NodeId> {
        self.new_internal_with(name, children, D::default())
    }

    /// Create the empty node: no name, no children, size 0
    pub fn new_empty(&mut self) -> NodeId {
        self.push(None, 0, D::default())
    }
}

impl<D> Default for TreemapTree<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: fmt::Debug> fmt::Debug for TreemapTree<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreemapTree")
            .field("slots", &self.slots)
            .field("labeling", &self.labeling.is_some())
            .finish_non_exhaustive()
    }
}

impl<D> Tree for TreemapTree<D> {
    type NodeData = D;

    fn get(&self, id: NodeId) -> Option<&TreeNode<D>> {
        self.slots.get(id.get()).map(|slot| &slot.node)
    }

    fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.slots.get(id.get())?.parent
    }

    fn children(&self, id: NodeId) -> Box<dyn Iterator<Item = NodeId> + '_> {
        Box::new(self.children_of(id).iter().copied())
    }

    fn node_count(&self) -> usize {
        self.slots.len()
    }
}
