//! Unbalanced binary search trees with pre-order rank queries and ASCII diagrams.
//!
//! This crate provides [`Dictionary`], a key-value tree, and [`BinaryTree`], its
//! key-only counterpart. Both are plain, never-rebalanced binary search trees:
//! the first key inserted is the root for as long as it stays in the tree, and
//! the shape depends entirely on insertion order. On top of the usual
//! operations they offer:
//!
//! - [`node_at_rank`](BinaryTree::node_at_rank) - Get the node at a 1-based pre-order position
//! - [`rank_of`](BinaryTree::rank_of) - Get the pre-order position of a key
//! - [`branch_count_at_rank`](BinaryTree::branch_count_at_rank) - How many children a ranked node has
//! - [`render`](BinaryTree::render) - Draw the tree's current shape as text
//!
//! # Example
//!
//! ```
//! use bough::{BinaryTree, Rank};
//!
//! let tree = BinaryTree::from([9, 1, 46, 20, 68]);
//!
//! assert_eq!(tree.len(), 5);
//! assert_eq!(tree.min().map(|node| *node.key()), Ok(1));
//!
//! // Ranks follow a pre-order walk: root, left subtree, right subtree.
//! assert_eq!(tree.rank_of(&46), Ok(3));
//! assert_eq!(tree[Rank(4)], 20);
//!
//! for line in tree.render() {
//!     println!("{line}");
//! }
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - The library only requires `alloc`
//! - **No recursion** - Traversals use explicit stacks, so degenerate trees cannot overflow the call stack
//! - **Duplicates kept** - Equal keys are stored, not merged
//!
//! # Implementation
//!
//! Nodes live in an arena and refer to their children by index, so the tree
//! needs no reference counting and no unsafe code. Neither sizes nor heights
//! are cached: counts, heights and ranks are recomputed by walking the tree.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod order_statistic;
mod raw;

pub mod binary_tree;
pub mod dictionary;
pub mod error;
pub mod node;
pub mod render;

pub use binary_tree::BinaryTree;
pub use dictionary::Dictionary;
pub use error::{Result, TreeError};
pub use node::NodeRef;
pub use order_statistic::Rank;
pub use render::RenderConfig;
