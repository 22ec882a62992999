use core::borrow::Borrow;
use core::ops::Index;

use super::Dictionary;
use crate::Rank;
use crate::error::{Result, TreeError};
use crate::node::NodeRef;

impl<K, V> Dictionary<K, V> {
    /// Returns the node at pre-order position `rank`.
    ///
    /// Ranks are one-based and follow the tree's current shape: rank 1 is the
    /// root, then the whole left subtree is numbered before the right one.
    ///
    /// # Errors
    ///
    /// [`TreeError::OutOfRange`] if `rank` is 0 or greater than [`len`](Dictionary::len).
    /// The dictionary is never modified by a failed lookup.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use bough::{Dictionary, TreeError};
    ///
    /// let dictionary = Dictionary::from([(9, "root"), (1, "left"), (46, "right")]);
    ///
    /// assert_eq!(dictionary.node_at_rank(2).unwrap().entry(), (&1, &"left"));
    /// assert_eq!(dictionary.node_at_rank(4).unwrap_err(), TreeError::OutOfRange { rank: 4, len: 3 });
    /// ```
    pub fn node_at_rank(&self, rank: usize) -> Result<NodeRef<'_, K, V>> {
        self.raw
            .node_at_rank(rank)
            .map(|handle| NodeRef::new(&self.raw, handle))
            .ok_or_else(|| TreeError::OutOfRange { rank, len: self.len() })
    }

    /// Returns the rank of the first node in pre-order whose key equals `key`.
    ///
    /// # Errors
    ///
    /// [`TreeError::NotFound`] if no node holds `key`.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use bough::Dictionary;
    ///
    /// let dictionary = Dictionary::from([(9, ()), (1, ()), (46, ()), (5, ())]);
    /// assert_eq!(dictionary.rank_of(&5), Ok(3));
    /// assert_eq!(dictionary.rank_of(&46), Ok(4));
    /// ```
    pub fn rank_of<Q>(&self, key: &Q) -> Result<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        self.raw.rank_of(key).ok_or(TreeError::NotFound)
    }

    /// Returns how many children the node at `rank` has: 0, 1 or 2.
    ///
    /// # Errors
    ///
    /// [`TreeError::OutOfRange`], as for [`node_at_rank`](Dictionary::node_at_rank).
    pub fn branch_count_at_rank(&self, rank: usize) -> Result<usize> {
        self.node_at_rank(rank).map(|node| node.branch_count())
    }

    /// Returns the node one position before `rank` in pre-order.
    ///
    /// # Errors
    ///
    /// [`TreeError::OutOfRange`] if `rank` itself is out of range, or if it is
    /// 1 (the root has no predecessor).
    ///
    /// # Examples
    ///
    /// ```
    /// use bough::{Dictionary, TreeError};
    ///
    /// let dictionary = Dictionary::from([(2, ()), (1, ()), (3, ())]);
    /// assert_eq!(*dictionary.node_before_rank(3).unwrap().key(), 1);
    /// assert_eq!(dictionary.node_before_rank(1).unwrap_err(), TreeError::OutOfRange { rank: 0, len: 3 });
    /// ```
    pub fn node_before_rank(&self, rank: usize) -> Result<NodeRef<'_, K, V>> {
        self.node_at_rank(rank)?;
        self.node_at_rank(rank - 1)
    }

    /// Returns the node one position after `rank` in pre-order.
    ///
    /// # Errors
    ///
    /// [`TreeError::OutOfRange`] if `rank` itself is out of range, or if it is
    /// the last rank.
    pub fn node_after_rank(&self, rank: usize) -> Result<NodeRef<'_, K, V>> {
        self.node_at_rank(rank)?;
        self.node_at_rank(rank + 1)
    }
}

/// Indexes into the dictionary by pre-order rank.
///
/// # Panics
///
/// Panics if `rank` is out of range.
///
/// # Examples
///
/// ```
/// use bough::{Dictionary, Rank};
///
/// let dictionary = Dictionary::from([("b", 2), ("a", 1)]);
///
/// assert_eq!(dictionary[Rank(1)], 2);
/// assert_eq!(dictionary[Rank(2)], 1);
/// ```
impl<K, V> Index<Rank> for Dictionary<K, V> {
    type Output = V;

    fn index(&self, rank: Rank) -> &Self::Output {
        match self.node_at_rank(rank.0) {
            Ok(node) => node.value(),
            Err(error) => panic!("{error}"),
        }
    }
}
