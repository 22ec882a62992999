use bough::{BinaryTree, Dictionary, RenderConfig, TreeError};
use pretty_assertions::assert_eq;
use rstest::rstest;

const DEMO_KEYS: [i64; 11] = [9, 1, 46, 20, 68, 15, 5, 0, 6, 55, 95];

#[rustfmt::skip]
const DEMO_DIAGRAM: [&str; 15] = [
    "            9",
    "           / \\",
    "          /   \\",
    "         /     \\",
    "        /       \\",
    "       /         \\",
    "      /           \\",
    "     /             \\",
    "    1               46",
    "   / \\             / \\",
    "  /   \\           /   \\",
    " /     \\         /     \\",
    "0       5      20       68",
    "         \\     /       / \\",
    "          6  15      55   95",
];

#[test]
fn demo_tree() {
    let tree = BinaryTree::from(DEMO_KEYS);
    assert_eq!(tree.render(), DEMO_DIAGRAM);
}

#[test]
fn demo_tree_after_removing_the_root() {
    let mut tree = BinaryTree::from(DEMO_KEYS);
    tree.remove(&9).unwrap();

    #[rustfmt::skip]
    let expected = [
        "           15",
        "           / \\",
        "          /   \\",
        "         /     \\",
        "        /       \\",
        "       /         \\",
        "      /           \\",
        "     /             \\",
        "    1               46",
        "   / \\             / \\",
        "  /   \\           /   \\",
        " /     \\         /     \\",
        "0       5      20       68",
        "         \\             / \\",
        "          6          55   95",
    ];
    assert_eq!(tree.render(), expected);
}

#[rstest]
#[case(&[10, 5], &[" 10", " /", "5"])]
#[case(&[10, 5, 20], &[" 10", " / \\", "5   20"])]
#[case(&[1, 2, 3], &["1", " \\", "  \\", "   \\", "    2", "     \\", "      3"])]
#[case(&[5, 5, 5], &["5", " \\", "  \\", "   \\", "    5", "     \\", "      5"])]
#[case(&[100, 7, 1000], &["  100", "  / \\", " /   \\", "7    1000"])]
fn small_trees(#[case] keys: &[i64], #[case] expected: &[&str]) {
    let tree: BinaryTree<i64> = keys.iter().copied().collect();
    assert_eq!(tree.render(), expected);
}

#[test]
fn dictionaries_render_their_keys() {
    let dictionary = Dictionary::from([("m", 1), ("c", 2), ("x", 3), ("a", 4)]);
    assert_eq!(dictionary.render(), ["      m", "     / \\", "    /   \\", "   /     \\", "  c       x", " /", "a"]);
}

#[test]
fn no_line_has_trailing_spaces() {
    let tree = BinaryTree::from(DEMO_KEYS);
    for line in tree.render() {
        assert_eq!(line.trim_end(), line);
    }
}

#[test]
fn display_indents_each_line() {
    let tree = BinaryTree::from([2, 1, 3]);
    assert_eq!(tree.to_string(), "   2\n  / \\\n 1   3");
}

#[test]
fn empty_tree_message() {
    let tree: BinaryTree<i64> = BinaryTree::new();

    assert_eq!(tree.render(), ["tree is empty."]);
    assert_eq!(tree.to_string(), " tree is empty.");

    let config = RenderConfig::new().empty_message("nothing here");
    assert_eq!(tree.render_with(&config), Ok(vec!["nothing here".to_string()]));
}

#[test]
fn tall_trees_are_refused() {
    let tree: BinaryTree<i64> = (0..14).collect();

    assert_eq!(tree.render(), ["tree of height 14 is too tall to render (limit 13)"]);
    assert_eq!(
        tree.render_with(&RenderConfig::new()),
        Err(TreeError::TooTall { height: 14, limit: 13 })
    );
}

#[test]
fn rendering_does_not_change_the_tree() {
    let tree = BinaryTree::from(DEMO_KEYS);
    let before: Vec<_> = tree.preorder().map(|node| *node.key()).collect();

    let _ = tree.render();
    let after: Vec<_> = tree.preorder().map(|node| *node.key()).collect();
    assert_eq!(before, after);
}
