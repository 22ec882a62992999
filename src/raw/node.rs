use core::mem;

use super::handle::Handle;

/// Which child slot of a node.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Side {
    Left,
    Right,
}

/// A single tree node: one entry and two child slots.
///
/// Nodes perform no validation of their own; the ordering invariant is kept by
/// [`RawTree`](super::RawTree).
#[derive(Clone)]
pub(crate) struct Node<K, V> {
    key: K,
    value: V,
    left: Option<Handle>,
    right: Option<Handle>,
}

impl<K, V> Node<K, V> {
    /// Creates a childless node.
    pub(crate) const fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
        }
    }

    #[inline]
    pub(crate) const fn key(&self) -> &K {
        &self.key
    }

    #[inline]
    pub(crate) const fn value(&self) -> &V {
        &self.value
    }

    #[inline]
    pub(crate) fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    #[inline]
    pub(crate) const fn left(&self) -> Option<Handle> {
        self.left
    }

    #[inline]
    pub(crate) const fn right(&self) -> Option<Handle> {
        self.right
    }

    #[inline]
    pub(crate) const fn child(&self, side: Side) -> Option<Handle> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Overwrites one child slot, returning what it previously held.
    pub(crate) fn set_child(&mut self, side: Side, child: Option<Handle>) -> Option<Handle> {
        match side {
            Side::Left => mem::replace(&mut self.left, child),
            Side::Right => mem::replace(&mut self.right, child),
        }
    }

    /// Number of occupied child slots (0, 1 or 2).
    pub(crate) fn branch_count(&self) -> usize {
        usize::from(self.left.is_some()) + usize::from(self.right.is_some())
    }

    /// Replaces this node's entry, keeping its children.
    pub(crate) fn replace_entry(&mut self, key: K, value: V) -> (K, V) {
        (mem::replace(&mut self.key, key), mem::replace(&mut self.value, value))
    }

    pub(crate) fn into_entry(self) -> (K, V) {
        (self.key, self.value)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn new_node_has_no_children() {
        let node = Node::new(7, "seven");
        assert_eq!(node.key(), &7);
        assert_eq!(node.value(), &"seven");
        assert_eq!(node.left(), None);
        assert_eq!(node.right(), None);
        assert_eq!(node.branch_count(), 0);
    }

    #[rstest]
    #[case(None, None, 0)]
    #[case(Some(0), None, 1)]
    #[case(None, Some(1), 1)]
    #[case(Some(0), Some(1), 2)]
    fn branch_count_counts_occupied_slots(#[case] left: Option<usize>, #[case] right: Option<usize>, #[case] expected: usize) {
        let mut node = Node::new(0, ());
        node.set_child(Side::Left, left.map(Handle::from_index));
        node.set_child(Side::Right, right.map(Handle::from_index));
        assert_eq!(node.branch_count(), expected);
    }

    #[test]
    fn set_child_returns_previous_occupant() {
        let mut node = Node::new(0, ());
        assert_eq!(node.set_child(Side::Right, Some(Handle::from_index(3))), None);
        assert_eq!(node.set_child(Side::Right, None), Some(Handle::from_index(3)));
        assert_eq!(node.child(Side::Right), None);
    }

    #[test]
    fn replace_entry_keeps_children() {
        let mut node = Node::new(1, 'a');
        node.set_child(Side::Left, Some(Handle::from_index(0)));
        assert_eq!(node.replace_entry(2, 'b'), (1, 'a'));
        assert_eq!(node.left(), Some(Handle::from_index(0)));
        assert_eq!(node.into_entry(), (2, 'b'));
    }
}
