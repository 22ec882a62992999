use core::fmt;

/// A one-based pre-order position within a tree's current shape.
///
/// Rank 1 is always the root; a node's left subtree is numbered before its
/// right subtree. Ranks are derived on demand, so any insertion or removal may
/// renumber the nodes.
///
/// Formatting a rank with `{}` writes it as an English ordinal.
///
/// # Examples
///
/// ```
/// use bough::{BinaryTree, Rank};
///
/// let tree = BinaryTree::from([2, 1, 3]);
///
/// assert_eq!(tree[Rank(1)], 2);
/// assert_eq!(tree[Rank(3)], 3);
/// assert_eq!(Rank(2).to_string(), "2nd");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(pub usize);

impl Rank {
    /// The root's rank.
    pub const ROOT: Self = Self(1);

    /// The English ordinal suffix for this rank ("st", "nd", "rd" or "th").
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match (self.0 % 10, self.0 % 100) {
            (_, 11..=13) => "th",
            (1, _) => "st",
            (2, _) => "nd",
            (3, _) => "rd",
            _ => "th",
        }
    }
}

impl From<usize> for Rank {
    fn from(rank: usize) -> Self {
        Self(rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0, self.suffix())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use alloc::string::ToString;

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, "1st")]
    #[case(2, "2nd")]
    #[case(3, "3rd")]
    #[case(4, "4th")]
    #[case(11, "11th")]
    #[case(12, "12th")]
    #[case(13, "13th")]
    #[case(21, "21st")]
    #[case(102, "102nd")]
    #[case(111, "111th")]
    fn ordinals(#[case] rank: usize, #[case] expected: &str) {
        assert_eq!(Rank(rank).to_string(), expected);
    }
}
