//! Trie node record.

use safe_bump::Idx;

use crate::store::TrieStore;

/// Label carried by the root node. Never compared against key codepoints.
pub const ROOT_LABEL: char = '\0';

/// A single trie node.
#[derive(Debug, Clone)]
pub struct Node {
    /// Codepoint on the edge from the parent. [`ROOT_LABEL`] for the root.
    pub label: char,
    /// A stored key ends at this node.
    pub terminal: bool,
    /// Back-reference to the parent. `None` only for the root and for
    /// vacant slots.
    pub parent: Option<Idx<Self>>,
    /// Child handles in insertion order. Labels are distinct.
    pub children: Vec<Idx<Self>>,
}

impl Node {
    /// Returns an empty, non-terminal root node.
    #[must_use]
    pub const fn root() -> Self {
        Self {
            label: ROOT_LABEL,
            terminal: false,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Returns a non-terminal, childless node hanging off `parent`.
    #[must_use]
    pub const fn child(label: char, parent: Idx<Self>) -> Self {
        Self {
            label,
            terminal: false,
            parent: Some(parent),
            children: Vec::new(),
        }
    }

    /// Linear scan of the children for `label`.
    pub fn find_child<S: TrieStore>(&self, store: &S, label: char) -> Option<Idx<Self>> {
        self.children
            .iter()
            .copied()
            .find(|&child| store.get_node(child).label == label)
    }

    /// Returns `true` if this node holds no key and leads to none.
    #[must_use]
    pub fn is_dangling(&self) -> bool {
        !self.terminal && self.children.is_empty()
    }
}
