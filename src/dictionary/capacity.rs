use super::Dictionary;
use crate::raw::RawTree;

impl<K, V> Dictionary<K, V> {
    /// Creates an empty dictionary with room for at least `capacity` nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use bough::Dictionary;
    ///
    /// let dictionary: Dictionary<i32, i32> = Dictionary::with_capacity(32);
    /// assert!(dictionary.is_empty());
    /// assert!(dictionary.capacity() >= 32);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Dictionary {
            raw: RawTree::with_capacity(capacity),
        }
    }

    /// Returns how many nodes the dictionary can hold without reallocating.
    ///
    /// Slots freed by removals are reused before the storage grows.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
