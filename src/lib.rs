//! Duplicate-counting word index for Rust.
//!
//! This crate provides [`Tree`], an ordered index of short string keys that counts how
//! many times each key was inserted. A tree runs in one of two [`Mode`]s, fixed at
//! construction:
//!
//! - [`Mode::Bst`] - a plain binary search tree; sorted input degenerates into a chain
//! - [`Mode::Rbt`] - a red-black tree, rebalanced bottom-up after every insertion
//!
//! Alongside the tree sit two small collaborators used by the `wordtree` binary:
//! [`Words`], which tokenizes a byte stream into normalized keys, and the Graphviz
//! exporter [`Tree::export_dot`].
//!
//! # Example
//!
//! ```
//! use wordtree::{Mode, Tree, Words};
//!
//! let text = "the cat and the hat";
//! let mut tree = Tree::new(Mode::Rbt);
//! for word in Words::new(text.as_bytes()) {
//!     tree.insert(&word.unwrap());
//! }
//! tree.set_black_root();
//!
//! assert_eq!(tree.frequency("the"), Some(2));
//! assert_eq!(tree.len(), 4);
//! assert!(tree.check_invariants().is_ok());
//! ```
//!
//! # Implementation
//!
//! Nodes are stored in an arena and linked by index handles, so rotations move
//! subtree ownership by rewriting a handful of links rather than juggling pointers.
//! Insertion records its descent on an explicit path and rebalances while unwinding
//! it; traversals also use explicit stacks, so even a degenerate plain tree is walked
//! without deep recursion.

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

mod mode;
mod raw;
mod tree;
mod words;

pub mod cli;

pub use mode::{Color, Mode};
pub use tree::{Iter, MAX_KEY_LEN, Tree, Violation};
pub use words::Words;
