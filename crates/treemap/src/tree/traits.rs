//! Core tree traits for navigating treemap hierarchies

use std::collections::{HashSet, VecDeque};

use crate::tree::{NodeId, NodeKind, TreeNode};

/// A hierarchical tree of size-weighted nodes
///
/// This trait provides the core abstraction for navigating tree data.
/// Implementations provide the basic structural queries, while derived
/// methods provide convenient higher-level operations.
///
/// A tree may be a forest: several nodes can have no parent. Queries that
/// need a starting point take it explicitly.
///
/// # Example
///
/// ```
/// use treemap::prelude::*;
///
/// fn print_tree<T: Tree>(tree: &T, root: NodeId) {
///     for id in tree.walk(root, TraversalOrder::PreOrder) {
///         let name = tree.name(id).unwrap_or("<empty>");
///         println!("{:indent$}{}", "", name, indent = tree.depth(id) * 2);
///     }
/// }
/// ```
pub trait Tree {
    /// User-defined data stored at each node
    type NodeData;

    /// Get a node by its ID
    ///
    /// Returns `None` if the ID is invalid.
    fn get(&self, id: NodeId) -> Option<&TreeNode<Self::NodeData>>;

    /// Get the parent of a node
    ///
    /// Returns `None` for a root.
    fn parent(&self, id: NodeId) -> Option<NodeId>;

    /// Iterate over children of a node in display order
    ///
    /// Returns an empty iterator for leaf nodes or invalid IDs.
    fn children(&self, id: NodeId) -> Box<dyn Iterator<Item = NodeId> + '_>;

    /// Count total nodes in the tree
    fn node_count(&self) -> usize;

    /// Check if a node is a leaf (has no children)
    ///
    /// Returns false for invalid IDs.
    fn is_leaf(&self, id: NodeId) -> bool {
        self.get(id).is_some() && self.children(id).next().is_none()
    }

    /// Check if a node is internal (has at least one child)
    fn is_internal(&self, id: NodeId) -> bool {
        self.children(id).next().is_some()
    }

    /// The node's current structural kind
    fn kind(&self, id: NodeId) -> Option<NodeKind> {
        self.get(id)?;
        Some(if self.is_internal(id) {
            NodeKind::Internal
        } else {
            NodeKind::Leaf
        })
    }

    /// Get the name of a node
    ///
    /// Returns `None` for the empty node or an invalid ID.
    fn name(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| n.name())
    }

    /// Names from the root down to this node
    fn name_path(&self, id: NodeId) -> Vec<String> {
        let mut components = Vec::new();
        let mut current = Some(id);

        while let Some(node_id) = current {
            if let Some(name) = self.name(node_id) {
                components.push(name.to_string());
            }
            current = self.parent(node_id);
        }

        components.reverse();
        components
    }

    /// Get the depth of a node (root = 0)
    ///
    /// Returns 0 for invalid IDs.
    fn depth(&self, id: NodeId) -> usize {
        self.ancestors(id).len()
    }

    /// Count children of a node
    ///
    /// Returns 0 for leaf nodes or invalid IDs.
    fn child_count(&self, id: NodeId) -> usize {
        self.children(id).count()
    }

    /// Get all ancestors of a node, from parent to root
    ///
    /// Returns an empty vector for a root or invalid IDs.
    fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut ancestors = Vec::new();
        let mut current = self.parent(id);
        while let Some(parent_id) = current {
            ancestors.push(parent_id);
            current = self.parent(parent_id);
        }
        ancestors
    }

    /// Check if a node is an ancestor of another
    fn is_ancestor_of(&self, ancestor: NodeId, descendant: NodeId) -> bool {
        let mut current = self.parent(descendant);
        while let Some(parent_id) = current {
            if parent_id == ancestor {
                return true;
            }
            current = self.parent(parent_id);
        }
        false
    }

    /// The root of the tree containing `id` (the node itself for a root)
    fn root_of(&self, id: NodeId) -> NodeId {
        self.ancestors(id).last().copied().unwrap_or(id)
    }
}

/// Traversal order for walking the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// Visit parent before children (top-down)
    PreOrder,
    /// Visit children before parent (bottom-up)
    PostOrder,
    /// Visit level by level (breadth-first)
    BreadthFirst,
}

/// Extension trait providing tree traversal and search utilities
///
/// This trait is automatically implemented for all types that implement `Tree`.
pub trait TreeTraversal: Tree {
    /// Walk the subtree rooted at `start` in the specified order
    fn walk(&self, start: NodeId, order: TraversalOrder) -> TreeWalker<'_, Self>
    where
        Self: Sized,
    {
        TreeWalker::new(self, start, order)
    }

    /// Get all leaf nodes under `start`
    fn leaves(&self, start: NodeId) -> Vec<NodeId>
    where
        Self: Sized,
    {
        self.walk(start, TraversalOrder::PreOrder)
            .filter(|&id| self.is_leaf(id))
            .collect()
    }

    /// Get all internal nodes under `start`
    fn internal_nodes(&self, start: NodeId) -> Vec<NodeId>
    where
        Self: Sized,
    {
        self.walk(start, TraversalOrder::PreOrder)
            .filter(|&id| self.is_internal(id))
            .collect()
    }

    /// Find nodes under `start` matching a predicate
    fn find<F>(&self, start: NodeId, predicate: F) -> Vec<NodeId>
    where
        F: Fn(&TreeNode<Self::NodeData>) -> bool,
        Self: Sized,
    {
        self.walk(start, TraversalOrder::PreOrder)
            .filter(|&id| self.get(id).map(&predicate).unwrap_or(false))
            .collect()
    }

    /// Follow child names from `start`
    ///
    /// Returns `None` if any segment has no matching child. An empty path
    /// returns `start`.
    fn find_by_path<S: AsRef<str>>(&self, start: NodeId, segments: &[S]) -> Option<NodeId> {
        let mut current = start;
        for segment in segments {
            let segment = segment.as_ref();
            current = self
                .children(current)
                .find(|&id| self.name(id) == Some(segment))?;
        }
        Some(current)
    }

    /// Find a node by name (first match in pre-order)
    fn find_by_name(&self, start: NodeId, name: &str) -> Option<NodeId>
    where
        Self: Sized,
    {
        self.walk(start, TraversalOrder::PreOrder)
            .find(|&id| self.name(id) == Some(name))
    }

    /// Find all nodes with a given name
    fn find_all_by_name(&self, start: NodeId, name: &str) -> Vec<NodeId>
    where
        Self: Sized,
    {
        self.walk(start, TraversalOrder::PreOrder)
            .filter(|&id| self.name(id) == Some(name))
            .collect()
    }
}

// Blanket implementation for all Tree types
impl<T: Tree> TreeTraversal for T {}

/// Iterator for traversing a tree in different orders
pub struct TreeWalker<'a, T: Tree + ?Sized> {
    tree: &'a T,
    order: TraversalOrder,
    pending: VecDeque<NodeId>,
    visited: HashSet<NodeId>,
}

impl<'a, T: Tree + ?Sized> TreeWalker<'a, T> {
    /// Create a new tree walker starting from the given node
    ///
    /// An invalid start yields nothing.
    pub fn new(tree: &'a T, start: NodeId, order: TraversalOrder) -> Self {
        let mut pending = VecDeque::new();
        if tree.get(start).is_some() {
            pending.push_back(start);
        }

        Self {
            tree,
            order,
            pending,
            visited: HashSet::new(),
        }
    }
}

impl<'a, T: Tree + ?Sized> Iterator for TreeWalker<'a, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        match self.order {
            TraversalOrder::PreOrder => self.next_preorder(),
            TraversalOrder::PostOrder => self.next_postorder(),
            TraversalOrder::BreadthFirst => self.next_breadthfirst(),
        }
    }
}

impl<'a, T: Tree + ?Sized> TreeWalker<'a, T> {
    fn next_preorder(&mut self) -> Option<NodeId> {
        let current = self.pending.pop_back()?;

        // Add children in reverse order so they're popped in correct order
        let children: Vec<_> = self.tree.children(current).collect();
        for child in children.into_iter().rev() {
            self.pending.push_back(child);
        }

        Some(current)
    }

    fn next_postorder(&mut self) -> Option<NodeId> {
        while let Some(&current) = self.pending.back() {
            if self.visited.contains(&current) {
                self.pending.pop_back();
                return Some(current);
            }

            self.visited.insert(current);

            let children: Vec<_> = self.tree.children(current).collect();
            for child in children.into_iter().rev() {
                self.pending.push_back(child);
            }
        }
        None
    }

    fn next_breadthfirst(&mut self) -> Option<NodeId> {
        let current = self.pending.pop_front()?;
        self.pending.extend(self.tree.children(current));
        Some(current)
    }
}
