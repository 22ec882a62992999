use core::borrow::Borrow;
use core::cmp::Ordering;
use core::iter::FusedIterator;

use smallvec::SmallVec;

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Node, Side};

/// Inline capacity of the explicit traversal stacks. Deeper trees spill to the heap.
const STACK_INLINE: usize = 32;

type Stack<T> = SmallVec<[T; STACK_INLINE]>;

/// The unbalanced binary search tree backing `Dictionary` and `BinaryTree`.
///
/// Keys that compare less than a node go to its left subtree; keys that
/// compare greater than *or equal* go to its right subtree, so duplicates form
/// a right-leaning chain under the first node holding that key.
///
/// Every walk is iterative: without rebalancing a sorted insertion order
/// produces a tree as deep as it is long.
#[derive(Clone)]
pub(crate) struct RawTree<K, V> {
    /// Arena storing all tree nodes.
    nodes: Arena<Node<K, V>>,
    /// Handle to the root node, if the tree is non-empty.
    root: Option<Handle>,
}

impl<K, V> RawTree<K, V> {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
        }
    }

    /// Creates a new tree with room for `capacity` nodes before reallocating.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
        }
    }

    /// Creates a tree holding exactly one entry.
    pub(crate) fn with_root(key: K, value: V) -> Self {
        let mut nodes = Arena::new();
        let root = nodes.alloc(Node::new(key, value));
        Self { nodes, root: Some(root) }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub(crate) const fn root(&self) -> Option<Handle> {
        self.root
    }

    /// Returns a reference to a node by handle.
    pub(crate) fn node(&self, handle: Handle) -> &Node<K, V> {
        self.nodes.get(handle)
    }

    /// Returns a mutable reference to a node by handle.
    pub(crate) fn node_mut(&mut self, handle: Handle) -> &mut Node<K, V> {
        self.nodes.get_mut(handle)
    }

    /// Drops every node.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Number of nodes reachable from the root.
    ///
    /// Counted by traversal rather than cached, so it can never drift from the
    /// structure it describes.
    pub(crate) fn len(&self) -> usize {
        self.subtree_len(self.root)
    }

    /// Number of nodes in the subtree rooted at `from` (0 for an empty slot).
    pub(crate) fn subtree_len(&self, from: Option<Handle>) -> usize {
        self.preorder_from(from).count()
    }

    /// Height of the subtree rooted at `from`: 0 for an empty slot, otherwise
    /// one more than the taller of its two children.
    pub(crate) fn height(&self, from: Option<Handle>) -> usize {
        let mut stack: Stack<(Handle, usize)> = from.into_iter().map(|handle| (handle, 1)).collect();
        let mut height = 0;

        while let Some((handle, depth)) = stack.pop() {
            height = height.max(depth);
            let node = self.nodes.get(handle);
            stack.extend(node.left().into_iter().chain(node.right()).map(|child| (child, depth + 1)));
        }

        height
    }

    /// Pre-order walk over the whole tree.
    pub(crate) fn preorder(&self) -> Preorder<'_, K, V> {
        self.preorder_from(self.root)
    }

    /// Pre-order walk (node, left subtree, right subtree) starting at `from`.
    pub(crate) fn preorder_from(&self, from: Option<Handle>) -> Preorder<'_, K, V> {
        Preorder {
            nodes: &self.nodes,
            stack: from.into_iter().collect(),
        }
    }

    /// In-order walk over the whole tree, yielding keys in non-decreasing order.
    pub(crate) fn inorder(&self) -> Inorder<'_, K, V> {
        let mut iter = Inorder {
            nodes: &self.nodes,
            stack: SmallVec::new(),
        };
        iter.descend_left(self.root);
        iter
    }

    /// Handle of the left-most node, found without recursion.
    pub(crate) fn first(&self) -> Option<Handle> {
        self.root.map(|root| self.leftmost(root))
    }

    /// Handle of the right-most node.
    pub(crate) fn last(&self) -> Option<Handle> {
        let mut current = self.root?;
        while let Some(right) = self.nodes.get(current).right() {
            current = right;
        }
        Some(current)
    }

    fn leftmost(&self, mut current: Handle) -> Handle {
        while let Some(left) = self.nodes.get(current).left() {
            current = left;
        }
        current
    }

    /// Handle of the node at 1-based pre-order position `rank`.
    pub(crate) fn node_at_rank(&self, rank: usize) -> Option<Handle> {
        let index = rank.checked_sub(1)?;
        self.preorder().nth(index).map(|(handle, _)| handle)
    }

    /// First node in pre-order whose key equals `key`.
    ///
    /// Duplicates resolve to the match closest to the root.
    pub(crate) fn find<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        self.preorder()
            .find(|(_, node)| {
                let candidate: &Q = node.key().borrow();
                candidate == key
            })
            .map(|(handle, _)| handle)
    }

    /// 1-based pre-order position of the first node whose key equals `key`.
    pub(crate) fn rank_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        self.preorder()
            .position(|(_, node)| {
                let candidate: &Q = node.key().borrow();
                candidate == key
            })
            .map(|index| index + 1)
    }

    /// Points `parent`'s slot (or the root slot when `parent` is `None`) at `child`.
    fn relink(&mut self, parent: Option<(Handle, Side)>, child: Option<Handle>) {
        match parent {
            None => self.root = child,
            Some((handle, side)) => {
                self.nodes.get_mut(handle).set_child(side, child);
            }
        }
    }
}

impl<K: Ord, V> RawTree<K, V> {
    /// Inserts a new node below the first empty slot on the search path.
    ///
    /// Always succeeds; equal keys descend right.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Handle {
        let Some(mut current) = self.root else {
            let handle = self.nodes.alloc(Node::new(key, value));
            self.root = Some(handle);
            tracing::trace!(depth = 0, "inserted root node");
            return handle;
        };

        let mut depth = 1;
        loop {
            let node = self.nodes.get(current);
            let side = if key < *node.key() { Side::Left } else { Side::Right };
            match node.child(side) {
                Some(child) => {
                    current = child;
                    depth += 1;
                }
                None => {
                    let handle = self.nodes.alloc(Node::new(key, value));
                    self.nodes.get_mut(current).set_child(side, Some(handle));
                    tracing::trace!(depth, ?side, "inserted node");
                    return handle;
                }
            }
        }
    }

    /// Removes the first node met by comparison descent whose key equals `key`
    /// and returns its entry.
    ///
    /// A node with two children keeps its slot: the in-order successor (the
    /// left-most node of its right subtree) is unlinked and its entry moved in.
    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut parent: Option<(Handle, Side)> = None;
        let mut current = self.root?;

        loop {
            let node_key: &Q = self.nodes.get(current).key().borrow();
            let side = match key.cmp(node_key) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => break,
            };
            parent = Some((current, side));
            current = self.nodes.get(current).child(side)?;
        }

        let node = self.nodes.get(current);
        match (node.left(), node.right()) {
            (left, None) => {
                self.relink(parent, left);
                tracing::trace!(replacement = "left child", "removed node");
                Some(self.nodes.take(current).into_entry())
            }
            (None, right) => {
                self.relink(parent, right);
                tracing::trace!(replacement = "right child", "removed node");
                Some(self.nodes.take(current).into_entry())
            }
            (Some(_), Some(right)) => {
                let mut successor_parent = current;
                let mut successor = right;
                while let Some(left) = self.nodes.get(successor).left() {
                    successor_parent = successor;
                    successor = left;
                }

                // The successor has no left child, so it unlinks like a single-child node.
                let side = if successor_parent == current { Side::Right } else { Side::Left };
                let successor_right = self.nodes.get(successor).right();
                self.nodes.get_mut(successor_parent).set_child(side, successor_right);

                let (key, value) = self.nodes.take(successor).into_entry();
                tracing::trace!(replacement = "in-order successor", "removed node");
                Some(self.nodes.get_mut(current).replace_entry(key, value))
            }
        }
    }
}

/// Pre-order traversal driven by an explicit stack.
pub(crate) struct Preorder<'a, K, V> {
    nodes: &'a Arena<Node<K, V>>,
    stack: Stack<Handle>,
}

impl<'a, K, V> Iterator for Preorder<'a, K, V> {
    type Item = (Handle, &'a Node<K, V>);

    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.stack.pop()?;
        let node = self.nodes.get(handle);
        // Right goes in first so that the left subtree is finished before it.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some((handle, node))
    }
}

impl<K, V> FusedIterator for Preorder<'_, K, V> {}

impl<K, V> Clone for Preorder<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            stack: self.stack.clone(),
        }
    }
}

/// In-order traversal driven by an explicit stack of pending ancestors.
pub(crate) struct Inorder<'a, K, V> {
    nodes: &'a Arena<Node<K, V>>,
    stack: Stack<Handle>,
}

impl<K, V> Inorder<'_, K, V> {
    fn descend_left(&mut self, mut next: Option<Handle>) {
        while let Some(handle) = next {
            self.stack.push(handle);
            next = self.nodes.get(handle).left();
        }
    }
}

impl<'a, K, V> Iterator for Inorder<'a, K, V> {
    type Item = (Handle, &'a Node<K, V>);

    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.stack.pop()?;
        let node = self.nodes.get(handle);
        self.descend_left(node.right());
        Some((handle, node))
    }
}

impl<K, V> FusedIterator for Inorder<'_, K, V> {}

impl<K, V> Clone for Inorder<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            stack: self.stack.clone(),
        }
    }
}
