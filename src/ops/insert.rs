//! Insertion operation: descend, appending a child per novel codepoint.

use safe_bump::Idx;

use crate::node::Node;
use crate::store::TrieStore;

/// Outcome of an insert.
pub struct InsertOutcome {
    /// `true` if the key was not stored before this call.
    pub inserted: bool,
    /// Number of nodes added to the tree for novel codepoints.
    pub created: usize,
}

/// Inserts `key` below the node at `node_idx`.
///
/// Missing children are appended to the end of their parent's child
/// sequence; the node reached by the last codepoint is marked terminal.
/// Re-inserting a stored key touches nothing.
pub fn insert<S: TrieStore>(store: &mut S, node_idx: Idx<Node>, key: &[char]) -> InsertOutcome {
    debug_assert!(!key.is_empty(), "the empty key is never stored");
    let mut current = node_idx;
    let mut created = 0;

    for &label in key {
        let found = store.get_node(current).find_child(&*store, label);
        current = match found {
            Some(child) => child,
            None => {
                let child = store.alloc_node(Node::child(label, current));
                store.get_node_mut(current).children.push(child);
                created += 1;
                child
            }
        };
    }

    let node = store.get_node_mut(current);
    let inserted = !node.terminal;
    node.terminal = true;
    InsertOutcome { inserted, created }
}
