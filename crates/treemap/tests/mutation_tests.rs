use pretty_assertions::assert_eq;
use treemap::prelude::*;

fn sizes_are_consistent(tree: &TreemapTree, root: NodeId) -> bool {
    tree.walk(root, TraversalOrder::PostOrder)
        .filter(|&id| tree.is_internal(id))
        .all(|id| {
            let total: u64 = tree
                .children(id)
                .map(|child| tree.get(child).unwrap().data_size())
                .sum();
            tree.get(id).unwrap().data_size() == total
        })
}

#[test]
fn test_move_twice_appends_once() {
    let mut tree: TreemapTree = TreemapTree::with_colours(FixedColour(Colour::WHITE));
    let a = tree.new_leaf("a", 1);
    let b = tree.new_leaf("b", 1);
    let src = tree.new_internal("src", vec![a, b]).unwrap();
    let c = tree.new_leaf("c", 1);
    let dst = tree.new_internal("dst", vec![c]).unwrap();
    let root = tree.new_internal("root", vec![src, dst]).unwrap();

    assert_eq!(tree.move_leaf(a, dst), Ok(Outcome::Applied));
    assert_eq!(tree.move_leaf(a, dst), Ok(Outcome::Applied));

    assert_eq!(tree.children_of(dst).iter().filter(|&&id| id == a).count(), 1);
    assert_eq!(tree.children_of(src), &[b]);
    assert!(!sizes_are_consistent(&tree, root));

    tree.recompute_sizes(root).unwrap();
    assert!(sizes_are_consistent(&tree, root));
    assert_eq!(tree.get(dst).unwrap().data_size(), 2);
}

#[test]
fn test_builder_tree_survives_edits() {
    let mut builder = RecordBuilder::new(
        TreemapTree::with_colours(FixedColour(Colour::BLACK)).labeling(FilesystemLabeling),
    );
    for (dir, file, size) in [
        ("src", "main.rs", 1200),
        ("src", "lib.rs", 300),
        ("tests", "it.rs", 800),
        ("docs", "guide.md", 90),
    ] {
        builder.insert(Record::new([dir], file, size, ())).unwrap();
    }
    let (mut tree, root) = builder.finish("project").unwrap();
    assert!(sizes_are_consistent(&tree, root));

    let guide = tree.find_by_name(root, "guide.md").unwrap();
    let src = tree.find_by_name(root, "src").unwrap();
    tree.change_size(guide, 9.0).unwrap();
    tree.move_leaf(guide, src).unwrap();
    tree.recompute_sizes(root).unwrap();

    assert!(sizes_are_consistent(&tree, root));
    assert_eq!(tree.get(guide).unwrap().data_size(), 900);
    assert_eq!(tree.get(src).unwrap().data_size(), 2400);
    assert_eq!(
        tree.path_string(guide).unwrap(),
        format!("project{0}src{0}guide.md (file)", std::path::MAIN_SEPARATOR)
    );

    // docs lost its only file; as a leaf it keeps its last size
    let docs = tree.find_by_name(root, "docs").unwrap();
    assert!(tree.is_leaf(docs));
    assert_eq!(tree.get(docs).unwrap().data_size(), 90);
}

#[test]
fn test_errors_for_unknown_nodes() {
    let mut tree: TreemapTree = TreemapTree::with_colours(FixedColour(Colour::BLACK));
    let ghost = NodeId(12);

    assert_eq!(tree.move_leaf(ghost, ghost), Err(TreeError::InvalidNode(ghost)));
    assert_eq!(tree.change_size(ghost, 0.5), Err(TreeError::InvalidNode(ghost)));
    assert_eq!(tree.expand(ghost), Err(TreeError::InvalidNode(ghost)));
    assert_eq!(tree.collapse(ghost), Err(TreeError::InvalidNode(ghost)));
    assert_eq!(tree.collapse_all(ghost), Err(TreeError::InvalidNode(ghost)));
    assert_eq!(tree.recompute_sizes(ghost), Err(TreeError::InvalidNode(ghost)));
}
