//! Read-only views of tree nodes.

use core::fmt;

use crate::raw::{Handle, Node, RawTree};

/// A borrowed view of one node of a [`Dictionary`](crate::Dictionary) or
/// [`BinaryTree`](crate::BinaryTree).
///
/// Lookups that resolve to a node (by key or by rank) return a `NodeRef`, which
/// exposes the node's entry and lets the caller step to its children. The view
/// borrows the tree, so the tree cannot change while it is alive.
///
/// # Examples
///
/// ```
/// use bough::BinaryTree;
///
/// let tree = BinaryTree::from([9, 1, 46]);
/// let root = tree.node_at_rank(1).unwrap();
///
/// assert_eq!(*root.key(), 9);
/// assert_eq!(root.branch_count(), 2);
/// assert_eq!(root.left().map(|node| *node.key()), Some(1));
/// assert!(root.right().unwrap().is_leaf());
/// ```
pub struct NodeRef<'a, K, V = ()> {
    tree: &'a RawTree<K, V>,
    handle: Handle,
}

impl<'a, K, V> NodeRef<'a, K, V> {
    pub(crate) fn new(tree: &'a RawTree<K, V>, handle: Handle) -> Self {
        Self { tree, handle }
    }

    fn node(&self) -> &'a Node<K, V> {
        self.tree.node(self.handle)
    }

    /// The node's key.
    #[must_use]
    pub fn key(&self) -> &'a K {
        self.node().key()
    }

    /// The value stored alongside the key.
    #[must_use]
    pub fn value(&self) -> &'a V {
        self.node().value()
    }

    /// The key and value together.
    #[must_use]
    pub fn entry(&self) -> (&'a K, &'a V) {
        let node = self.node();
        (node.key(), node.value())
    }

    /// The root of the left subtree, if any.
    #[must_use]
    pub fn left(&self) -> Option<Self> {
        self.node().left().map(|handle| Self::new(self.tree, handle))
    }

    /// The root of the right subtree, if any.
    #[must_use]
    pub fn right(&self) -> Option<Self> {
        self.node().right().map(|handle| Self::new(self.tree, handle))
    }

    /// Number of children present: 0, 1 or 2.
    #[must_use]
    pub fn branch_count(&self) -> usize {
        self.node().branch_count()
    }

    /// Returns `true` if the node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.branch_count() == 0
    }

    /// Number of nodes in the subtree rooted here, this node included.
    #[must_use]
    pub fn subtree_len(&self) -> usize {
        self.tree.subtree_len(Some(self.handle))
    }

    /// Height of the subtree rooted here; a leaf has height 1.
    #[must_use]
    pub fn height(&self) -> usize {
        self.tree.height(Some(self.handle))
    }
}

impl<K, V> Clone for NodeRef<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for NodeRef<'_, K, V> {}

/// Two views are equal when they refer to the same node of the same tree.
impl<K, V> PartialEq for NodeRef<'_, K, V> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.tree, other.tree) && self.handle == other.handle
    }
}

impl<K, V> Eq for NodeRef<'_, K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for NodeRef<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("key", self.key())
            .field("value", self.value())
            .field("branches", &self.branch_count())
            .finish()
    }
}
