//! Errors returned by trie mutations.

use thiserror::Error;

/// Caller-input errors raised by [`Trie::insert`](crate::Trie::insert) and
/// [`Trie::delete`](crate::Trie::delete).
///
/// Both are detected before the tree is touched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrieError {
    /// The key has zero codepoints.
    #[error("key length cannot be zero")]
    EmptyKey,
    /// The key is not stored in the trie.
    #[error("key not found")]
    KeyNotFound,
}
