//! Arena-backed prefix tree over Unicode codepoints.
//!
//! A [`Trie`] stores string keys one `char` per edge. Children keep their
//! insertion order, deleting a key prunes every ancestor that no longer leads
//! to a stored key, and [`Trie::dump_keys`] writes the stored keys depth-first
//! to any [`std::io::Write`].
//!
//! # Key properties
//!
//! - **Insertion-ordered children**: enumeration order follows insertion,
//!   not lexicographic order
//! - **Ancestor pruning**: no non-terminal leaf survives a delete
//! - **Arena storage**: nodes addressed by `safe_bump` indices, with slots
//!   of pruned nodes reused by later inserts
//! - **Zero `unsafe`**: enforced by `#![forbid(unsafe_code)]`
//!
//! # Example
//!
//! ```rust
//! use rune_trie::{Trie, TrieError};
//!
//! let mut trie = Trie::new();
//! trie.insert("go").unwrap();
//! trie.insert("goal").unwrap();
//!
//! assert!(trie.contains("go"));
//! assert!(!trie.contains("goa"));
//!
//! trie.delete("go").unwrap();
//! assert_eq!(trie.delete("go"), Err(TrieError::KeyNotFound));
//! assert!(trie.contains("goal"));
//!
//! let mut out = Vec::new();
//! trie.dump_keys(&mut out, "\n").unwrap();
//! assert_eq!(out, b"goal\n");
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod iter;
pub mod node;
pub mod node_ref;
pub mod store;

mod arena;
mod ops;
mod trie;

#[cfg(test)]
mod tests;

pub use arena::TrieArena;
pub use error::TrieError;
pub use node_ref::NodeRef;
pub use trie::Trie;
