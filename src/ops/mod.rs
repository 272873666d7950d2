//! Trie algorithms, generic over [`TrieStore`](crate::store::TrieStore).

pub mod dump;
pub mod insert;
pub mod lookup;
pub mod remove;
