use super::BinaryTree;
use crate::dictionary::Dictionary;

impl<T> BinaryTree<T> {
    /// Creates an empty tree with room for at least `capacity` nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use bough::BinaryTree;
    ///
    /// let tree: BinaryTree<u8> = BinaryTree::with_capacity(16);
    /// assert!(tree.capacity() >= 16);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        BinaryTree {
            map: Dictionary::with_capacity(capacity),
        }
    }

    /// Returns how many nodes the tree can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.map.capacity()
    }
}
