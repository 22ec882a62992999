use core::borrow::Borrow;
use core::fmt;
use core::iter::FusedIterator;

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::{Result, TreeError};
use crate::node::NodeRef;
use crate::raw::{self, RawTree};
use crate::render::{self, RenderConfig};

mod capacity;
mod order_statistic;

pub use crate::Rank;

/// A key-value dictionary stored in an unbalanced [binary search tree].
///
/// Keys need a [total order]. A key that compares less than a node's key is
/// placed in that node's left subtree; a key that compares greater than *or
/// equal to* it goes right. Equal keys are therefore all kept, forming a chain
/// down the right side of the first node that holds the key. Lookups by key
/// resolve to the first match in pre-order, which is the one nearest the root.
///
/// Besides key lookups, every node can be addressed by its [`Rank`]: its
/// 1-based position in a pre-order walk (node, left subtree, right subtree) of
/// the tree's current shape. Ranks are recomputed on every query and shift as
/// the tree changes.
///
/// The tree never rebalances, so inserting keys in sorted order builds a tree
/// as tall as it is long. Every operation walks the tree with an explicit stack
/// instead of recursion, so such trees cost time but never overflow the call
/// stack.
///
/// It is a logic error for a key to be modified in such a way that the key's
/// ordering relative to any other key changes while it is in the dictionary.
///
/// # Examples
///
/// ```
/// use bough::Dictionary;
///
/// let mut scores = Dictionary::with_root("Mallory", 61);
/// scores.insert("Alice", 100);
/// scores.insert("Bob", 85);
/// scores.insert("Trent", 92);
///
/// assert_eq!(scores.get("Bob"), Some(&85));
/// assert_eq!(scores.len(), 4);
///
/// // The first key inserted is the root, and the root has rank 1.
/// assert_eq!(*scores.node_at_rank(1).unwrap().key(), "Mallory");
/// assert_eq!(scores.rank_of("Bob"), Ok(3));
///
/// // Keys come back sorted from iteration.
/// let names: Vec<_> = scores.keys().copied().collect();
/// assert_eq!(names, ["Alice", "Bob", "Mallory", "Trent"]);
/// ```
///
/// The tree can draw itself:
///
/// ```
/// use bough::Dictionary;
///
/// let dictionary = Dictionary::from([(2, 'b'), (1, 'a'), (3, 'c')]);
/// assert_eq!(dictionary.render(), ["  2", " / \\", "1   3"]);
/// ```
///
/// [binary search tree]: https://en.wikipedia.org/wiki/Binary_search_tree
/// [total order]: https://en.wikipedia.org/wiki/Total_order
pub struct Dictionary<K, V> {
    raw: RawTree<K, V>,
}

impl<K, V> Dictionary<K, V> {
    /// Makes a new, empty `Dictionary`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bough::Dictionary;
    ///
    /// let mut dictionary = Dictionary::new();
    /// dictionary.insert(1, "a");
    /// ```
    #[must_use]
    pub const fn new() -> Dictionary<K, V> {
        Dictionary { raw: RawTree::new() }
    }

    /// Makes a `Dictionary` holding a single entry, which becomes the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use bough::Dictionary;
    ///
    /// let dictionary = Dictionary::with_root(4, "This is a string");
    /// assert_eq!(dictionary.at(&4), Ok(&"This is a string"));
    /// assert_eq!(dictionary.root_key(), Ok(&4));
    /// ```
    #[must_use]
    pub fn with_root(key: K, value: V) -> Dictionary<K, V> {
        Dictionary {
            raw: RawTree::with_root(key, value),
        }
    }

    /// Removes every entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use bough::Dictionary;
    ///
    /// let mut dictionary = Dictionary::from([(1, "a"), (2, "b")]);
    /// dictionary.clear();
    /// assert!(dictionary.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns the number of entries.
    ///
    /// The count is taken by walking the tree, not read from a cached field.
    ///
    /// # Examples
    ///
    /// ```
    /// use bough::Dictionary;
    ///
    /// let mut dictionary = Dictionary::new();
    /// dictionary.insert(7, ());
    /// dictionary.insert(7, ());
    /// assert_eq!(dictionary.len(), 2);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the dictionary has no entries.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Number of levels in the tree; 0 when empty, 1 for a lone root.
    ///
    /// # Examples
    ///
    /// ```
    /// use bough::Dictionary;
    ///
    /// // Sorted input degenerates into a chain.
    /// let dictionary: Dictionary<_, _> = (0..5).map(|key| (key, ())).collect();
    /// assert_eq!(dictionary.height(), 5);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn height(&self) -> usize {
        self.raw.height(self.raw.root())
    }

    /// Returns the root node.
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyTree`] if there are no entries.
    pub fn root(&self) -> Result<NodeRef<'_, K, V>> {
        self.raw
            .root()
            .map(|handle| NodeRef::new(&self.raw, handle))
            .ok_or(TreeError::EmptyTree)
    }

    /// Returns the key stored at the root.
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyTree`] if there are no entries.
    pub fn root_key(&self) -> Result<&K> {
        self.root().map(|node| node.key())
    }

    /// Returns the node with the smallest key, reached by following left
    /// children from the root.
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyTree`] if there are no entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use bough::{Dictionary, TreeError};
    ///
    /// let mut dictionary = Dictionary::new();
    /// assert_eq!(dictionary.min().unwrap_err(), TreeError::EmptyTree);
    ///
    /// dictionary.insert(2, "b");
    /// dictionary.insert(1, "a");
    /// assert_eq!(dictionary.min().unwrap().entry(), (&1, &"a"));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h) where h is the height of the tree.
    pub fn min(&self) -> Result<NodeRef<'_, K, V>> {
        self.raw
            .first()
            .map(|handle| NodeRef::new(&self.raw, handle))
            .ok_or(TreeError::EmptyTree)
    }

    /// Returns the node reached by following right children from the root.
    ///
    /// With duplicate keys this is the last copy of the largest key.
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyTree`] if there are no entries.
    ///
    /// # Complexity
    ///
    /// O(h) where h is the height of the tree.
    pub fn max(&self) -> Result<NodeRef<'_, K, V>> {
        self.raw
            .last()
            .map(|handle| NodeRef::new(&self.raw, handle))
            .ok_or(TreeError::EmptyTree)
    }

    /// Returns the first node in pre-order whose key equals `key`.
    ///
    /// # Errors
    ///
    /// [`TreeError::NotFound`] if no node holds `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bough::{Dictionary, TreeError};
    ///
    /// let mut dictionary = Dictionary::new();
    /// dictionary.insert(5, "first");
    /// dictionary.insert(5, "second");
    ///
    /// // Of two equal keys, the one nearer the root wins.
    /// assert_eq!(*dictionary.find(&5).unwrap().value(), "first");
    /// assert_eq!(dictionary.find(&6).unwrap_err(), TreeError::NotFound);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn find<Q>(&self, key: &Q) -> Result<NodeRef<'_, K, V>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        self.raw
            .find(key)
            .map(|handle| NodeRef::new(&self.raw, handle))
            .ok_or(TreeError::NotFound)
    }

    /// Returns `true` if some node holds `key`.
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        self.raw.find(key).is_some()
    }

    /// Returns `true` if `key` has a value associated with it.
    ///
    /// Same as [`contains_key`](Dictionary::contains_key).
    #[must_use]
    pub fn is_set<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        self.contains_key(key)
    }

    /// Returns the value of the first node holding `key`, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use bough::Dictionary;
    ///
    /// let dictionary = Dictionary::from([(4, "four")]);
    /// assert_eq!(dictionary.get(&4), Some(&"four"));
    /// assert_eq!(dictionary.get(&100), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        self.raw.find(key).map(|handle| self.raw.node(handle).value())
    }

    /// Returns the value of the first node holding `key`.
    ///
    /// # Errors
    ///
    /// [`TreeError::NotFound`] if no node holds `key`.
    pub fn at<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        self.get(key).ok_or(TreeError::NotFound)
    }

    /// Returns a mutable reference to the value of the first node holding `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bough::Dictionary;
    ///
    /// let mut dictionary = Dictionary::from([(1, 10)]);
    /// if let Some(value) = dictionary.get_mut(&1) {
    ///     *value += 1;
    /// }
    /// assert_eq!(dictionary.get(&1), Some(&11));
    /// ```
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        let handle = self.raw.find(key)?;
        Some(self.raw.node_mut(handle).value_mut())
    }

    /// Replaces the value of the first node holding `key` and returns the old one.
    ///
    /// Unlike [`insert`](Dictionary::insert), `set` never adds a node.
    ///
    /// # Errors
    ///
    /// [`TreeError::NotFound`] if no node holds `key`; the dictionary is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use bough::{Dictionary, TreeError};
    ///
    /// let mut dictionary = Dictionary::with_root(4, "This is a string");
    /// assert_eq!(dictionary.set(&4, "new string"), Ok("This is a string"));
    /// assert_eq!(dictionary.at(&4), Ok(&"new string"));
    /// assert_eq!(dictionary.set(&45, "nope"), Err(TreeError::NotFound));
    /// ```
    pub fn set<Q>(&mut self, key: &Q, value: V) -> Result<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        let slot = self.get_mut(key).ok_or(TreeError::NotFound)?;
        Ok(core::mem::replace(slot, value))
    }

    /// Gets an iterator over the entries, sorted by key.
    ///
    /// Equal keys come out in the order they were inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use bough::Dictionary;
    ///
    /// let dictionary = Dictionary::from([(3, 'c'), (1, 'a'), (2, 'b')]);
    /// let entries: Vec<_> = dictionary.iter().collect();
    /// assert_eq!(entries, [(&1, &'a'), (&2, &'b'), (&3, &'c')]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.raw.inorder(),
        }
    }

    /// Gets an iterator over the keys, in sorted order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Gets an iterator over the values, in key order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Gets an iterator over the nodes in pre-order; the `n`th item has rank `n`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bough::Dictionary;
    ///
    /// let dictionary = Dictionary::from([(2, ()), (1, ()), (3, ())]);
    /// let keys: Vec<_> = dictionary.preorder().map(|node| *node.key()).collect();
    /// assert_eq!(keys, [2, 1, 3]);
    /// ```
    pub fn preorder(&self) -> Preorder<'_, K, V> {
        Preorder {
            tree: &self.raw,
            inner: self.raw.preorder(),
        }
    }
}

impl<K: Ord, V> Dictionary<K, V> {
    /// Inserts a key-value pair.
    ///
    /// The pair always gets a new node, even if the key is already present:
    /// the new node lands at the bottom of the right-hand chain of equal keys.
    /// No rebalancing is done.
    ///
    /// # Examples
    ///
    /// ```
    /// use bough::Dictionary;
    ///
    /// let mut dictionary = Dictionary::new();
    /// dictionary.insert(37, "a");
    /// dictionary.insert(37, "b");
    ///
    /// assert_eq!(dictionary.len(), 2);
    /// assert_eq!(dictionary.get(&37), Some(&"a"));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h) where h is the height of the tree.
    pub fn insert(&mut self, key: K, value: V) {
        self.raw.insert(key, value);
    }

    /// Removes a node holding `key` and returns its entry.
    ///
    /// The node is located by comparison from the root, so among duplicates the
    /// one nearest the root is removed. A node with two children is replaced by
    /// its in-order successor.
    ///
    /// # Errors
    ///
    /// [`TreeError::NothingToRemove`] if the dictionary is empty or holds no
    /// such key; the dictionary is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use bough::{Dictionary, TreeError};
    ///
    /// let mut dictionary = Dictionary::from([(1, "a")]);
    /// assert_eq!(dictionary.remove(&1), Ok((1, "a")));
    /// assert_eq!(dictionary.remove(&1), Err(TreeError::NothingToRemove));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h) where h is the height of the tree.
    pub fn remove<Q>(&mut self, key: &Q) -> Result<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.remove(key).ok_or_else(|| {
            tracing::debug!(empty = self.raw.is_empty(), "nothing to remove");
            TreeError::NothingToRemove
        })
    }

    /// Removes a node holding `key`; the same as [`remove`](Dictionary::remove).
    ///
    /// # Errors
    ///
    /// [`TreeError::NothingToRemove`] if the dictionary holds no such key.
    pub fn erase<Q>(&mut self, key: &Q) -> Result<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.remove(key)
    }
}

impl<K: fmt::Display, V> Dictionary<K, V> {
    /// Draws the tree's current shape, one string per line, root first.
    ///
    /// Uses [`RenderConfig::default`]. An empty tree renders as the single line
    /// `"tree is empty."`; a tree taller than the configured limit renders as a
    /// single line explaining that.
    ///
    /// # Examples
    ///
    /// ```
    /// use bough::Dictionary;
    ///
    /// let mut dictionary = Dictionary::new();
    /// assert_eq!(dictionary.render(), ["tree is empty."]);
    ///
    /// dictionary.insert(5, "five");
    /// assert_eq!(dictionary.render(), ["5"]);
    /// ```
    #[must_use]
    pub fn render(&self) -> Vec<String> {
        self.render_with(&RenderConfig::default())
            .unwrap_or_else(|error| alloc::vec![alloc::string::ToString::to_string(&error)])
    }

    /// Draws the tree with the given layout options.
    ///
    /// # Errors
    ///
    /// [`TreeError::TooTall`] if the tree has more levels than `config` allows.
    pub fn render_with(&self, config: &RenderConfig) -> Result<Vec<String>> {
        render::layout(&self.raw, config)
    }
}

/// Writes the rendered diagram, indented by one space.
impl<K: fmt::Display, V> fmt::Display for Dictionary<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = match self.render_with(&RenderConfig::new().margin(1)) {
            Ok(lines) => lines,
            Err(error) => return write!(f, " {error}"),
        };
        for (index, line) in lines.iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

impl<K: Clone, V: Clone> Clone for Dictionary<K, V> {
    fn clone(&self) -> Self {
        Dictionary { raw: self.raw.clone() }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Dictionary<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Default for Dictionary<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for Dictionary<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dictionary = Dictionary::new();
        dictionary.extend(iter);
        dictionary
    }
}

impl<K: Ord, V> Extend<(K, V)> for Dictionary<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

/// Inserts the pairs in array order, so the first pair becomes the root.
impl<K: Ord, V, const N: usize> From<[(K, V); N]> for Dictionary<K, V> {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<'a, K, V> IntoIterator for &'a Dictionary<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

/// An iterator over the entries of a `Dictionary`, in key order.
///
/// This `struct` is created by the [`iter`](Dictionary::iter) method on
/// [`Dictionary`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K, V> {
    inner: raw::Inorder<'a, K, V>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, node)| (node.key(), node.value()))
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

/// An iterator over the keys of a `Dictionary`, in sorted order.
///
/// This `struct` is created by the [`keys`](Dictionary::keys) method on
/// [`Dictionary`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.inner.next().map(|(key, _)| key)
    }
}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Keys {
            inner: self.inner.clone(),
        }
    }
}

/// An iterator over the values of a `Dictionary`, in key order.
///
/// This `struct` is created by the [`values`](Dictionary::values) method on
/// [`Dictionary`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.inner.next().map(|(_, value)| value)
    }
}

impl<K, V> FusedIterator for Values<'_, K, V> {}

/// An iterator over the nodes of a tree in pre-order (rank order).
///
/// This `struct` is created by [`Dictionary::preorder`] and
/// [`BinaryTree::preorder`](crate::BinaryTree::preorder).
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Preorder<'a, K, V = ()> {
    tree: &'a RawTree<K, V>,
    inner: raw::Preorder<'a, K, V>,
}

impl<'a, K, V> Iterator for Preorder<'a, K, V> {
    type Item = NodeRef<'a, K, V>;

    fn next(&mut self) -> Option<NodeRef<'a, K, V>> {
        self.inner.next().map(|(handle, _)| NodeRef::new(self.tree, handle))
    }
}

impl<K, V> FusedIterator for Preorder<'_, K, V> {}
