//! Lookup operation: descends the trie without allocating.

use safe_bump::Idx;

use crate::node::Node;
use crate::store::TrieStore;

/// Descends from `node_idx` one codepoint of `key` at a time.
///
/// Returns the deepest node matched and whether `key` is stored there. On a
/// mismatch the node is the last one matched and the flag is `false`. An
/// empty key is never found.
pub fn lookup<S: TrieStore>(store: &S, node_idx: Idx<Node>, key: &[char]) -> (Idx<Node>, bool) {
    if key.is_empty() {
        return (node_idx, false);
    }

    let mut current = node_idx;
    for &label in key {
        match store.get_node(current).find_child(store, label) {
            Some(child) => current = child,
            None => return (current, false),
        }
    }
    (current, store.get_node(current).terminal)
}
