//! Slice-and-dice treemap layout.
//!
//! A node's rectangle is cut into parallel strips, one per child, each as
//! wide (or tall) as the child's share of the node's size. Strips run along
//! the longer side of the rectangle, so orientation alternates naturally as
//! the recursion descends into thinner strips.
//!
//! Extents are whole display units. Every child but the last receives its
//! share rounded down; the last child absorbs whatever is left, so the
//! strips always tile the parent exactly.

use log::trace;

use crate::error::Result;
use crate::tree::{Colour, NodeId, Point, Rect, TreemapTree};

/// Direction in which a rectangle is cut into strips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SliceAxis {
    /// Cut along the x-axis into side-by-side columns
    Vertical,
    /// Cut along the y-axis into stacked rows
    Horizontal,
}

impl SliceAxis {
    /// Columns for wide rectangles, rows otherwise (squares get rows)
    pub const fn for_rect(rect: Rect) -> Self {
        if rect.width > rect.height {
            SliceAxis::Vertical
        } else {
            SliceAxis::Horizontal
        }
    }

    /// The dimension shared out among children
    pub const fn extent(self, rect: Rect) -> i32 {
        match self {
            SliceAxis::Vertical => rect.width,
            SliceAxis::Horizontal => rect.height,
        }
    }

    /// The strip starting `offset` units into `rect` with the given extent
    pub const fn strip(self, rect: Rect, offset: i32, extent: i32) -> Rect {
        match self {
            SliceAxis::Vertical => {
                Rect::new(rect.x.saturating_add(offset), rect.y, extent, rect.height)
            }
            SliceAxis::Horizontal => {
                Rect::new(rect.x, rect.y.saturating_add(offset), rect.width, extent)
            }
        }
    }
}

/// `floor(size / total * extent)` computed exactly in integers
///
/// `total` must be non-zero.
fn proportional_share(size: u64, total: u64, extent: i32) -> i32 {
    let extent = extent.max(0) as u128;
    let share = u128::from(size) * extent / u128::from(total);
    // size <= total keeps this within extent; stale sizes are clamped by the caller
    i32::try_from(share).unwrap_or(i32::MAX)
}

impl<D> TreemapTree<D> {
    /// Lay out the subtree rooted at `id` to fill `rect`
    ///
    /// Every node in the subtree with a non-zero size gets a rectangle.
    /// Zero-sized nodes keep the rectangle they are handed but are never
    /// subdivided and never displayed.
    pub fn layout(&mut self, id: NodeId, rect: Rect) -> Result<()> {
        self.slot(id)?;
        trace!("layout {} into {}", id, rect);

        let mut pending = vec![(id, rect)];
        while let Some((id, rect)) = pending.pop() {
            let slot = &mut self.slots[id.get()];
            slot.node.rect = rect;

            let total = slot.node.data_size;
            if total == 0 || slot.children.is_empty() {
                continue;
            }

            let axis = SliceAxis::for_rect(rect);
            let extent = axis.extent(rect).max(0);
            let last = slot.children.len() - 1;
            let mut consumed = 0;

            for (index, &child) in self.slots[id.get()].children.iter().enumerate() {
                let remaining = extent - consumed;
                let share = if index == last {
                    remaining
                } else {
                    let size = self.slots[child.get()].node.data_size;
                    proportional_share(size, total, extent).min(remaining)
                };

                pending.push((child, axis.strip(rect, consumed, share)));
                consumed += share;
            }
        }
        Ok(())
    }

    /// Nodes of the displayed tree that are drawn, in display order
    ///
    /// A node is drawn if its size is non-zero and it is a leaf or
    /// collapsed; an expanded node is replaced by its children's drawings.
    pub fn visible_nodes(&self, root: NodeId) -> Vec<NodeId> {
        let mut visible = Vec::new();
        if self.slots.get(root.get()).is_none() {
            return visible;
        }
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            let slot = &self.slots[id.get()];
            if slot.node.data_size == 0 {
                continue;
            }
            if slot.children.is_empty() || !slot.node.expanded {
                visible.push(id);
            } else {
                stack.extend(slot.children.iter().rev().copied());
            }
        }
        visible
    }

    /// Rectangle and colour of every drawn node, for a renderer
    pub fn visible_rectangles(&self, root: NodeId) -> Vec<(Rect, Colour)> {
        self.visible_nodes(root)
            .into_iter()
            .map(|id| {
                let node = &self.slots[id.get()].node;
                (node.rect, node.colour)
            })
            .collect()
    }

    /// The drawn node whose rectangle contains `point`
    ///
    /// Rectangles are closed, so a point on a shared edge matches both
    /// neighbours; children are scanned in order and the one nearer the
    /// origin wins. Returns `None` outside `root`'s rectangle or when
    /// `root` has zero size.
    pub fn locate(&self, root: NodeId, point: impl Into<Point>) -> Option<NodeId> {
        let point = point.into();
        self.slots.get(root.get())?;

        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            let slot = &self.slots[id.get()];
            if slot.node.data_size == 0 || !slot.node.rect.contains(point) {
                continue;
            }
            if slot.children.is_empty() || !slot.node.expanded {
                return Some(id);
            }
            stack.extend(slot.children.iter().rev().copied());
        }
        None
    }
}
