//! Storage abstraction for trie operations.

use safe_bump::Idx;

use crate::node::Node;

/// Storage backend for trie operations.
///
/// Nodes are addressed by stable [`Idx`] handles. A freed handle may be
/// handed out again by a later [`alloc_node`](Self::alloc_node).
pub trait TrieStore {
    /// Allocates a single node, returning its index. Reuses a freed slot
    /// when one is available.
    fn alloc_node(&mut self, node: Node) -> Idx<Node>;

    /// Releases the slot at `idx` for reuse. The node must already be
    /// unlinked from its parent.
    fn free_node(&mut self, idx: Idx<Node>);

    /// Returns a reference to the node at `idx`.
    fn get_node(&self, idx: Idx<Node>) -> &Node;

    /// Returns a mutable reference to the node at `idx`.
    fn get_node_mut(&mut self, idx: Idx<Node>) -> &mut Node;

    /// Drops every node, live or vacant.
    fn reset(&mut self);

    /// Returns the number of allocated node slots, vacant ones included.
    fn arena_len(&self) -> usize;

    /// Returns the number of vacant slots waiting for reuse.
    fn free_len(&self) -> usize;
}
