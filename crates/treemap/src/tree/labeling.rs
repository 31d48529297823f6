//! Human-readable paths from the root to a node
//!
//! Each tree flavor supplies its own separator and suffix tokens through
//! [`PathLabeling`]; a tree without one cannot render paths.

use crate::error::{Result, TreeError};
use crate::tree::{NodeId, TreemapTree};

/// Tokens used when rendering a node's path
pub trait PathLabeling {
    /// String placed between consecutive names
    fn separator(&self) -> String;

    /// String appended after a node's name
    fn suffix(&self, is_leaf: bool) -> String;
}

/// Folders and files on the local file system
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemLabeling;

impl PathLabeling for FilesystemLabeling {
    fn separator(&self) -> String {
        std::path::MAIN_SEPARATOR.to_string()
    }

    fn suffix(&self, is_leaf: bool) -> String {
        let suffix = if is_leaf { " (file)" } else { " (folder)" };
        suffix.to_string()
    }
}

/// Publication categories and papers
#[derive(Debug, Clone)]
pub struct PaperLabeling {
    separator: String,
}

impl PaperLabeling {
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }
}

impl Default for PaperLabeling {
    fn default() -> Self {
        Self::new(": ")
    }
}

impl PathLabeling for PaperLabeling {
    fn separator(&self) -> String {
        self.separator.clone()
    }

    fn suffix(&self, is_leaf: bool) -> String {
        let suffix = if is_leaf { " (paper)" } else { " (category)" };
        suffix.to_string()
    }
}

impl<D> TreemapTree<D> {
    /// Names from the root to `id` joined by the flavor's separator
    ///
    /// The suffix follows the final name, and any intermediate name that
    /// belongs to a leaf. Fails with [`TreeError::Unimplemented`] when no
    /// labeling is installed.
    pub fn path_string(&self, id: NodeId) -> Result<String> {
        let labeling = self
            .labeling
            .as_deref()
            .ok_or(TreeError::Unimplemented("path labeling"))?;
        self.slot(id)?;

        let mut chain = vec![id];
        let mut current = id;
        while let Some(parent) = self.slots[current.get()].parent {
            chain.push(parent);
            current = parent;
        }
        chain.reverse();

        let separator = labeling.separator();
        let mut path = String::new();
        for (index, &node_id) in chain.iter().enumerate() {
            let slot = &self.slots[node_id.get()];
            if index > 0 {
                path.push_str(&separator);
            }
            path.push_str(slot.node.name().unwrap_or_default());

            let is_leaf = slot.children.is_empty();
            let is_final = index == chain.len() - 1;
            if is_final || (index > 0 && is_leaf) {
                path.push_str(&labeling.suffix(is_leaf));
            }
        }
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{Colour, FixedColour};
    use pretty_assertions::assert_eq;

    fn sample(labeling: impl PathLabeling + 'static) -> (TreemapTree, NodeId, NodeId, NodeId) {
        let mut tree = TreemapTree::with_colours(FixedColour(Colour::BLACK)).labeling(labeling);
        let file = tree.new_leaf("notes.txt", 5);
        let docs = tree.new_internal("docs", vec![file]).unwrap();
        let root = tree.new_internal("home", vec![docs]).unwrap();
        (tree, root, docs, file)
    }

    #[test]
    fn test_filesystem_paths() {
        let (tree, root, docs, file) = sample(FilesystemLabeling);
        let sep = std::path::MAIN_SEPARATOR;

        assert_eq!(tree.path_string(root).unwrap(), "home (folder)");
        assert_eq!(
            tree.path_string(docs).unwrap(),
            format!("home{sep}docs (folder)")
        );
        assert_eq!(
            tree.path_string(file).unwrap(),
            format!("home{sep}docs{sep}notes.txt (file)")
        );
    }

    #[test]
    fn test_paper_paths() {
        let (tree, _root, docs, file) = sample(PaperLabeling::default());

        assert_eq!(tree.path_string(docs).unwrap(), "home: docs (category)");
        assert_eq!(
            tree.path_string(file).unwrap(),
            "home: docs: notes.txt (paper)"
        );
    }

    #[test]
    fn test_leaf_root_gets_suffix() {
        let mut tree: TreemapTree =
            TreemapTree::with_colours(FixedColour(Colour::BLACK)).labeling(FilesystemLabeling);
        let lone = tree.new_leaf("lone.bin", 1);
        assert_eq!(tree.path_string(lone).unwrap(), "lone.bin (file)");
    }

    #[test]
    fn test_missing_labeling_fails_loudly() {
        let mut tree: TreemapTree = TreemapTree::with_colours(FixedColour(Colour::BLACK));
        let leaf = tree.new_leaf("a", 1);
        assert_eq!(
            tree.path_string(leaf),
            Err(TreeError::Unimplemented("path labeling"))
        );
    }

    #[test]
    fn test_invalid_node() {
        let (tree, ..) = sample(FilesystemLabeling);
        assert_eq!(
            tree.path_string(NodeId(50)),
            Err(TreeError::InvalidNode(NodeId(50)))
        );
    }
}
