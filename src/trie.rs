//! Single-threaded trie.

use std::fmt;
use std::io;

use safe_bump::Idx;

use crate::arena::TrieArena;
use crate::error::TrieError;
use crate::iter::Keys;
use crate::node::Node;
use crate::node_ref::NodeRef;
use crate::ops::dump::{count_nodes, dump_recursive};
use crate::ops::insert::insert;
use crate::ops::lookup::lookup;
use crate::ops::remove::{RemoveOutcome, remove};
use crate::store::TrieStore;

/// Prefix tree over Unicode codepoints.
///
/// Children are kept in insertion order, so [`dump_keys`](Self::dump_keys)
/// and [`keys`](Self::keys) list siblings in the order they were first
/// inserted rather than lexicographically.
///
/// `Trie` is `Send + Sync` but takes no locks of its own. To share it
/// between threads, guard the whole tree with one `RwLock` or `Mutex`.
pub struct Trie {
    store: TrieArena,
    root: Idx<Node>,
    len: usize,
}

// ---------------------------------------------------------------------------
// Construction & accessors
// ---------------------------------------------------------------------------

impl Trie {
    /// Creates an empty trie holding only the root node.
    #[must_use]
    pub fn new() -> Self {
        let mut store = TrieArena::new();
        let root = store.alloc_node(Node::root());
        Self { store, root, len: 0 }
    }

    /// Returns the number of stored keys.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no key is stored.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of nodes reachable from the root, root included.
    ///
    /// An empty trie has exactly one node.
    #[must_use]
    pub fn node_count(&self) -> usize {
        count_nodes(&self.store, self.root)
    }

    /// Returns the number of allocated node slots, including vacant slots
    /// left by pruned nodes.
    ///
    /// Never exceeds the largest [`node_count`](Self::node_count) reached
    /// since the trie was created or last emptied.
    #[must_use]
    pub fn arena_len(&self) -> usize {
        self.store.arena_len()
    }

    /// Returns the number of vacant node slots waiting for reuse.
    #[must_use]
    pub fn free_len(&self) -> usize {
        self.store.free_len()
    }
}

// ---------------------------------------------------------------------------
// Read operations
// ---------------------------------------------------------------------------

impl Trie {
    /// Looks up `key`.
    ///
    /// Returns the node reached and whether `key` is stored. If some
    /// codepoint has no matching child, the node is the deepest one matched
    /// and the flag is `false`. A key that only prefixes stored keys is not
    /// found. The empty key is never found and yields the root.
    #[must_use]
    pub fn lookup(&self, key: &str) -> (NodeRef<'_, TrieArena>, bool) {
        NodeRef::new(&self.store, self.root).lookup(key)
    }

    /// Returns `true` if `key` is stored.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        let chars: Vec<char> = key.chars().collect();
        lookup(&self.store, self.root, &chars).1
    }

    /// Writes every stored key to `out`, each immediately followed by `sep`.
    ///
    /// Keys are visited depth-first, pre-order, children in insertion order.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by `out`; no further keys are
    /// written after it.
    pub fn dump_keys<W>(&self, out: &mut W, sep: &str) -> io::Result<()>
    where
        W: io::Write + ?Sized,
    {
        let result = dump_recursive(&self.store, self.root, &mut String::new(), out, sep);
        match &result {
            Ok(()) => tracing::trace!(keys = self.len, "dumped keys"),
            Err(err) => tracing::trace!(%err, "key dump aborted"),
        }
        result
    }

    /// Returns an iterator over the stored keys, in [`dump_keys`](Self::dump_keys) order.
    #[must_use]
    pub fn keys(&self) -> Keys {
        Keys::new(&self.store, self.root)
    }
}

// ---------------------------------------------------------------------------
// Write operations
// ---------------------------------------------------------------------------

impl Trie {
    /// Stores `key`.
    ///
    /// Inserting a key that is already stored changes nothing. Keys may be
    /// prefixes or extensions of one another.
    ///
    /// # Errors
    ///
    /// [`TrieError::EmptyKey`] if `key` is empty.
    pub fn insert(&mut self, key: &str) -> Result<(), TrieError> {
        if key.is_empty() {
            tracing::trace!("rejected insert of empty key");
            return Err(TrieError::EmptyKey);
        }
        let chars: Vec<char> = key.chars().collect();
        let outcome = insert(&mut self.store, self.root, &chars);
        if outcome.inserted {
            self.len += 1;
            tracing::debug!(key, created = outcome.created, "inserted key");
        }
        Ok(())
    }

    /// Removes `key`, then prunes every ancestor left non-terminal and
    /// childless. Pruned slots are reused by later inserts. The root is
    /// never removed.
    ///
    /// # Errors
    ///
    /// [`TrieError::EmptyKey`] if `key` is empty, [`TrieError::KeyNotFound`]
    /// if `key` is not stored. The trie is unchanged in both cases.
    pub fn delete(&mut self, key: &str) -> Result<(), TrieError> {
        if key.is_empty() {
            tracing::trace!("rejected delete of empty key");
            return Err(TrieError::EmptyKey);
        }
        let chars: Vec<char> = key.chars().collect();
        match remove(&mut self.store, self.root, &chars) {
            RemoveOutcome::NotFound => {
                tracing::trace!(key, "delete of missing key");
                Err(TrieError::KeyNotFound)
            }
            RemoveOutcome::Removed { pruned } => {
                self.len -= 1;
                tracing::debug!(key, pruned, "deleted key");
                if self.len == 0 {
                    self.clear();
                }
                Ok(())
            }
        }
    }

    /// Removes every key and releases all node storage.
    pub fn clear(&mut self) {
        self.store.reset();
        self.root = self.store.alloc_node(Node::root());
        self.len = 0;
    }
}

// ---------------------------------------------------------------------------
// Trait impls
// ---------------------------------------------------------------------------

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Trie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trie")
            .field("len", &self.len)
            .field("node_count", &self.node_count())
            .finish_non_exhaustive()
    }
}

impl IntoIterator for &Trie {
    type Item = String;
    type IntoIter = Keys;

    fn into_iter(self) -> Keys {
        self.keys()
    }
}
