use core::borrow::Borrow;
use core::ops::Index;

use super::BinaryTree;
use crate::Rank;
use crate::error::Result;
use crate::node::NodeRef;

impl<T> BinaryTree<T> {
    /// Returns the node at pre-order position `rank` (1 is the root).
    ///
    /// # Errors
    ///
    /// [`TreeError::OutOfRange`](crate::TreeError::OutOfRange) if `rank` is 0 or
    /// greater than [`len`](BinaryTree::len).
    ///
    /// # Examples
    ///
    /// ```
    /// use bough::{BinaryTree, TreeError};
    ///
    /// let tree = BinaryTree::from([9, 1, 46, 20, 68, 15, 5, 0, 6, 55, 95]);
    ///
    /// let ranked: Vec<_> = (1..=tree.len()).map(|rank| *tree.node_at_rank(rank).unwrap().key()).collect();
    /// assert_eq!(ranked, [9, 1, 0, 5, 6, 46, 20, 15, 68, 55, 95]);
    ///
    /// assert_eq!(tree.node_at_rank(12).unwrap_err(), TreeError::OutOfRange { rank: 12, len: 11 });
    /// ```
    pub fn node_at_rank(&self, rank: usize) -> Result<NodeRef<'_, T>> {
        self.map.node_at_rank(rank)
    }

    /// Returns the rank of the first node in pre-order holding `key`.
    ///
    /// # Errors
    ///
    /// [`TreeError::NotFound`](crate::TreeError::NotFound) if no node holds `key`.
    pub fn rank_of<Q>(&self, key: &Q) -> Result<usize>
    where
        T: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        self.map.rank_of(key)
    }

    /// Returns how many children the node at `rank` has.
    ///
    /// # Errors
    ///
    /// [`TreeError::OutOfRange`](crate::TreeError::OutOfRange) if `rank` is out of range.
    pub fn branch_count_at_rank(&self, rank: usize) -> Result<usize> {
        self.map.branch_count_at_rank(rank)
    }

    /// Returns the node one position before `rank` in pre-order.
    ///
    /// # Errors
    ///
    /// [`TreeError::OutOfRange`](crate::TreeError::OutOfRange) if `rank` is out
    /// of range or is the root's rank.
    pub fn node_before_rank(&self, rank: usize) -> Result<NodeRef<'_, T>> {
        self.map.node_before_rank(rank)
    }

    /// Returns the node one position after `rank` in pre-order.
    ///
    /// # Errors
    ///
    /// [`TreeError::OutOfRange`](crate::TreeError::OutOfRange) if `rank` is out
    /// of range or is the last rank.
    pub fn node_after_rank(&self, rank: usize) -> Result<NodeRef<'_, T>> {
        self.map.node_after_rank(rank)
    }
}

/// Indexes into the tree by pre-order rank.
///
/// # Panics
///
/// Panics if `rank` is out of range.
impl<T> Index<Rank> for BinaryTree<T> {
    type Output = T;

    fn index(&self, rank: Rank) -> &Self::Output {
        match self.map.node_at_rank(rank.0) {
            Ok(node) => node.key(),
            Err(error) => panic!("{error}"),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::TreeError;
    use rstest::rstest;

    #[rstest]
    #[case(1, 9)]
    #[case(2, 1)]
    #[case(3, 46)]
    fn index_by_rank(#[case] rank: usize, #[case] expected: i32) {
        let tree = BinaryTree::from([9, 1, 46]);
        assert_eq!(tree[Rank(rank)], expected);
    }

    #[test]
    #[should_panic(expected = "rank 4 is out of range for a tree of 3 nodes")]
    fn index_past_the_end_panics() {
        let tree = BinaryTree::from([9, 1, 46]);
        let _ = tree[Rank(4)];
    }

    #[test]
    fn neighbours_of_a_rank() {
        let tree = BinaryTree::from([2, 1, 3]);

        assert_eq!(tree.node_after_rank(1).map(|node| *node.key()), Ok(1));
        assert_eq!(tree.node_before_rank(3).map(|node| *node.key()), Ok(1));
        assert_eq!(tree.node_after_rank(3).unwrap_err(), TreeError::OutOfRange { rank: 4, len: 3 });
        assert_eq!(tree.node_before_rank(0).unwrap_err(), TreeError::OutOfRange { rank: 0, len: 3 });
    }

    #[test]
    fn rank_zero_is_out_of_range() {
        let tree = BinaryTree::from([2]);
        assert_eq!(tree.branch_count_at_rank(0), Err(TreeError::OutOfRange { rank: 0, len: 1 }));
    }
}
