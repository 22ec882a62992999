use core::borrow::Borrow;
use core::fmt;
use core::iter::FusedIterator;

use alloc::string::String;
use alloc::vec::Vec;

use crate::dictionary::{self, Dictionary, Preorder};
use crate::error::Result;
use crate::node::NodeRef;
use crate::render::RenderConfig;

mod capacity;
mod order_statistic;

pub use crate::Rank;

/// An unbalanced binary search tree of keys.
///
/// This is a [`Dictionary`] without values: it keeps every inserted key,
/// duplicates included, with the same placement, lookup and rank rules.
///
/// # Examples
///
/// ```
/// use bough::BinaryTree;
///
/// let mut tree = BinaryTree::new();
/// for key in [9, 1, 46, 20, 68, 15, 5, 0, 6, 55, 95] {
///     tree.insert(key);
/// }
///
/// assert_eq!(tree.len(), 11);
/// assert_eq!(tree.min().map(|node| *node.key()), Ok(0));
/// assert_eq!(tree.max().map(|node| *node.key()), Ok(95));
///
/// // The first key inserted is the root: rank 1, with two children.
/// assert_eq!(*tree.node_at_rank(1).unwrap().key(), 9);
/// assert_eq!(tree.branch_count_at_rank(1), Ok(2));
///
/// // Removing a node with two children pulls up its in-order successor.
/// tree.remove(&9).unwrap();
/// assert_eq!(*tree.node_at_rank(1).unwrap().key(), 15);
/// ```
pub struct BinaryTree<T> {
    map: Dictionary<T, ()>,
}

impl<T> BinaryTree<T> {
    /// Makes a new, empty `BinaryTree`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bough::BinaryTree;
    ///
    /// let mut tree = BinaryTree::new();
    /// tree.insert("U");
    /// ```
    #[must_use]
    pub const fn new() -> BinaryTree<T> {
        BinaryTree { map: Dictionary::new() }
    }

    /// Makes a tree holding a single key.
    #[must_use]
    pub fn with_root(key: T) -> BinaryTree<T> {
        BinaryTree {
            map: Dictionary::with_root(key, ()),
        }
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Returns the number of keys, counted by walking the tree.
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the tree holds no keys.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Number of levels in the tree; 0 when empty.
    #[must_use]
    pub fn height(&self) -> usize {
        self.map.height()
    }

    /// Returns the root node.
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyTree`](crate::TreeError::EmptyTree) if the tree is empty.
    pub fn root(&self) -> Result<NodeRef<'_, T>> {
        self.map.root()
    }

    /// Returns the left-most node.
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyTree`](crate::TreeError::EmptyTree) if the tree is empty.
    pub fn min(&self) -> Result<NodeRef<'_, T>> {
        self.map.min()
    }

    /// Returns the right-most node.
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyTree`](crate::TreeError::EmptyTree) if the tree is empty.
    pub fn max(&self) -> Result<NodeRef<'_, T>> {
        self.map.max()
    }

    /// Returns the first node in pre-order holding `key`.
    ///
    /// # Errors
    ///
    /// [`TreeError::NotFound`](crate::TreeError::NotFound) if no node holds `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bough::{BinaryTree, TreeError};
    ///
    /// let tree = BinaryTree::from([3, 3, 1]);
    ///
    /// // The copy of 3 nearer the root is found first.
    /// assert_eq!(tree.find(&3).unwrap(), tree.root().unwrap());
    /// assert_eq!(tree.find(&2).unwrap_err(), TreeError::NotFound);
    /// ```
    pub fn find<Q>(&self, key: &Q) -> Result<NodeRef<'_, T>>
    where
        T: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        self.map.find(key)
    }

    /// Returns `true` if some node holds `key`.
    #[must_use]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        self.map.contains_key(key)
    }

    /// Gets an iterator over the keys in sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bough::BinaryTree;
    ///
    /// let tree = BinaryTree::from([2, 3, 1, 2]);
    /// let keys: Vec<_> = tree.iter().copied().collect();
    /// assert_eq!(keys, [1, 2, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { inner: self.map.keys() }
    }

    /// Gets an iterator over the nodes in pre-order; the `n`th item has rank `n`.
    pub fn preorder(&self) -> Preorder<'_, T> {
        self.map.preorder()
    }
}

impl<T: Ord> BinaryTree<T> {
    /// Adds a key. Always succeeds; an equal key is placed in the right-hand
    /// chain below the existing copies.
    ///
    /// # Complexity
    ///
    /// O(h) where h is the height of the tree.
    pub fn insert(&mut self, key: T) {
        self.map.insert(key, ());
    }

    /// Removes one copy of `key`, the one nearest the root, and returns it.
    ///
    /// # Errors
    ///
    /// [`TreeError::NothingToRemove`](crate::TreeError::NothingToRemove) if the
    /// tree is empty or does not hold `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bough::{BinaryTree, TreeError};
    ///
    /// let mut tree = BinaryTree::from([7, 7]);
    /// assert_eq!(tree.remove(&7), Ok(7));
    /// assert_eq!(tree.len(), 1);
    /// assert_eq!(tree.remove(&8), Err(TreeError::NothingToRemove));
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Result<T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.remove(key).map(|(key, ())| key)
    }
}

impl<T: fmt::Display> BinaryTree<T> {
    /// Draws the tree's current shape, one string per line, root first.
    ///
    /// # Examples
    ///
    /// ```
    /// use bough::BinaryTree;
    ///
    /// let tree = BinaryTree::from([9, 1, 46, 20, 68]);
    /// assert_eq!(
    ///     tree.render(),
    ///     [
    ///         "    9",
    ///         "   / \\",
    ///         "  /   \\",
    ///         " /     \\",
    ///         "1       46",
    ///         "       / \\",
    ///         "     20   68",
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn render(&self) -> Vec<String> {
        self.map.render()
    }

    /// Draws the tree with the given layout options.
    ///
    /// # Errors
    ///
    /// [`TreeError::TooTall`](crate::TreeError::TooTall) if the tree has more
    /// levels than `config` allows.
    pub fn render_with(&self, config: &RenderConfig) -> Result<Vec<String>> {
        self.map.render_with(config)
    }
}

/// Writes the rendered diagram, indented by one space.
impl<T: fmt::Display> fmt::Display for BinaryTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.map, f)
    }
}

impl<T: Clone> Clone for BinaryTree<T> {
    fn clone(&self) -> Self {
        BinaryTree { map: self.map.clone() }
    }
}

impl<T: fmt::Debug> fmt::Debug for BinaryTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for BinaryTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = BinaryTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for BinaryTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, T: 'a + Ord + Copy> Extend<&'a T> for BinaryTree<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

/// Inserts the keys in array order, so the first key becomes the root.
impl<T: Ord, const N: usize> From<[T; N]> for BinaryTree<T> {
    fn from(keys: [T; N]) -> Self {
        keys.into_iter().collect()
    }
}

impl<'a, T> IntoIterator for &'a BinaryTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// An iterator over the keys of a `BinaryTree`, in sorted order.
///
/// This `struct` is created by the [`iter`](BinaryTree::iter) method on
/// [`BinaryTree`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T> {
    inner: dictionary::Keys<'a, T, ()>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use alloc::format;

    use super::*;
    use crate::TreeError;
    use pretty_assertions::assert_eq;

    #[test]
    fn debug_lists_keys_in_order() {
        let tree = BinaryTree::from([2, 1, 2]);
        assert_eq!(format!("{tree:?}"), "{1, 2, 2}");
    }

    #[test]
    fn string_keys_render_with_wider_cells() {
        let tree = BinaryTree::from(["m", "c", "x", "a"]);
        assert_eq!(tree.render(), ["      m", "     / \\", "    /   \\", "   /     \\", "  c       x", " /", "a"]);
    }

    #[test]
    fn remove_on_empty_tree_reports_nothing_to_remove() {
        let mut tree: BinaryTree<i32> = BinaryTree::new();
        assert_eq!(tree.remove(&1), Err(TreeError::NothingToRemove));
    }

    #[test]
    fn extend_from_references() {
        let mut tree = BinaryTree::with_root(5);
        tree.extend(&[3, 8]);
        assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [3, 5, 8]);
    }
}
