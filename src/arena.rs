//! Arena-backed storage with slot reuse.

use safe_bump::{Arena, Idx};

use crate::node::Node;
use crate::store::TrieStore;

/// Storage backend on a single [`Arena`] plus a free list of pruned slots.
pub struct TrieArena {
    nodes: Arena<Node>,
    free: Vec<Idx<Node>>,
}

impl TrieArena {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            free: Vec::new(),
        }
    }
}

impl Default for TrieArena {
    fn default() -> Self {
        Self::new()
    }
}

impl TrieStore for TrieArena {
    fn alloc_node(&mut self, node: Node) -> Idx<Node> {
        match self.free.pop() {
            Some(idx) => {
                *self.nodes.get_mut(idx) = node;
                idx
            }
            None => self.nodes.alloc(node),
        }
    }

    fn free_node(&mut self, idx: Idx<Node>) {
        // Vacate the slot so its child vector is released now.
        *self.nodes.get_mut(idx) = Node::root();
        self.free.push(idx);
    }

    fn get_node(&self, idx: Idx<Node>) -> &Node {
        self.nodes.get(idx)
    }

    fn get_node_mut(&mut self, idx: Idx<Node>) -> &mut Node {
        self.nodes.get_mut(idx)
    }

    fn reset(&mut self) {
        self.nodes.reset();
        self.nodes.shrink_to_fit();
        self.free = Vec::new();
    }

    fn arena_len(&self) -> usize {
        self.nodes.len()
    }

    fn free_len(&self) -> usize {
        self.free.len()
    }
}
