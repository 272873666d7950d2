//! Iterator over the keys stored in a trie.

use safe_bump::Idx;

use crate::node::Node;
use crate::ops::dump;
use crate::store::TrieStore;

/// Iterator over the keys of a [`Trie`](crate::Trie), in the order
/// [`dump_keys`](crate::Trie::dump_keys) writes them.
pub struct Keys {
    keys: std::vec::IntoIter<String>,
}

impl Keys {
    /// Creates an iterator by collecting all stored keys via DFS.
    pub fn new<S: TrieStore>(store: &S, root: Idx<Node>) -> Self {
        let mut keys = Vec::new();
        dump::collect(store, root, &mut String::new(), &mut keys);
        Self {
            keys: keys.into_iter(),
        }
    }
}

impl Iterator for Keys {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.keys.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl ExactSizeIterator for Keys {}
