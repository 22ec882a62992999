//! Error types reported by tree operations.

use thiserror::Error;

/// Recoverable outcomes of tree operations.
///
/// None of these are produced by corrupting stored data: a failed lookup
/// leaves the tree exactly as it was.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
pub enum TreeError {
    /// The operation needs at least one node.
    #[error("tree is empty")]
    EmptyTree,

    /// No node holds the requested key.
    #[error("key not found")]
    NotFound,

    /// A rank outside `1..=len` was requested.
    #[error("rank {rank} is out of range for a tree of {len} nodes")]
    OutOfRange {
        /// The rank that was asked for.
        rank: usize,
        /// Number of nodes in the tree at the time of the request.
        len: usize,
    },

    /// `remove` found no node to take out, either because the tree is empty or
    /// because the key is absent.
    #[error("nothing to remove")]
    NothingToRemove,

    /// The tree is too tall to lay out as a diagram.
    #[error("tree of height {height} is too tall to render (limit {limit})")]
    TooTall {
        /// Height of the tree.
        height: usize,
        /// Largest height the renderer was configured to accept.
        limit: usize,
    },
}

/// Result type alias for tree operations.
pub type Result<T> = core::result::Result<T, TreeError>;
