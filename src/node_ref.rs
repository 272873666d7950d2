//! Borrowed node handles returned by lookups.

use std::fmt;

use safe_bump::Idx;

use crate::node::Node;
use crate::ops::lookup::lookup;
use crate::store::TrieStore;

/// A node of a trie, borrowed from it.
///
/// Follows the node's parent back-reference for [`parent`](Self::parent),
/// [`depth`](Self::depth) and [`prefix`](Self::prefix).
pub struct NodeRef<'a, S> {
    store: &'a S,
    idx: Idx<Node>,
}

impl<S> Clone for NodeRef<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for NodeRef<'_, S> {}

impl<'a, S: TrieStore> NodeRef<'a, S> {
    pub(crate) const fn new(store: &'a S, idx: Idx<Node>) -> Self {
        Self { store, idx }
    }

    fn node(&self) -> &'a Node {
        self.store.get_node(self.idx)
    }

    /// Returns the codepoint on the edge from the parent, or `None` for the
    /// root.
    #[must_use]
    pub fn label(&self) -> Option<char> {
        (!self.is_root()).then(|| self.node().label)
    }

    /// Returns `true` if this is the trie root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.node().parent.is_none()
    }

    /// Returns `true` when a stored key ends at this node.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.node().terminal
    }

    /// Returns the number of children.
    #[must_use]
    pub fn children_len(&self) -> usize {
        self.node().children.len()
    }

    /// Returns the number of edges between the root and this node.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.ancestors().count() - 1
    }

    /// Returns the parent node, or `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.node().parent.map(|idx| Self::new(self.store, idx))
    }

    /// Returns the codepoints spelled from the root to this node.
    #[must_use]
    pub fn prefix(&self) -> String {
        let mut labels: Vec<char> = self.ancestors().filter_map(|n| n.label()).collect();
        labels.reverse();
        labels.into_iter().collect()
    }

    /// Returns the children of this node in insertion order.
    #[must_use]
    pub fn children(&self) -> Vec<Self> {
        self.node()
            .children
            .iter()
            .map(|&idx| Self::new(self.store, idx))
            .collect()
    }

    /// Looks `key` up relative to this node.
    ///
    /// Same contract as [`Trie::lookup`](crate::Trie::lookup): the returned
    /// node is the deepest one matched, and an empty key is never found.
    #[must_use]
    pub fn lookup(&self, key: &str) -> (Self, bool) {
        let chars: Vec<char> = key.chars().collect();
        let (idx, found) = lookup(self.store, self.idx, &chars);
        (Self::new(self.store, idx), found)
    }

    /// This node, then each ancestor up to and including the root.
    fn ancestors(&self) -> impl Iterator<Item = Self> + 'a {
        std::iter::successors(Some(*self), |n| n.parent())
    }
}

impl<S: TrieStore> fmt::Debug for NodeRef<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("prefix", &self.prefix())
            .field("leaf", &self.is_leaf())
            .field("children_len", &self.children_len())
            .finish()
    }
}
