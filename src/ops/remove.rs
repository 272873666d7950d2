//! Removal operation: clear the terminal flag, then prune dangling ancestors.

use safe_bump::Idx;

use crate::node::Node;
use crate::ops::lookup::lookup;
use crate::store::TrieStore;

/// Outcome of a remove.
pub enum RemoveOutcome {
    /// Key was not found; tree unchanged.
    NotFound,
    /// Key was removed.
    Removed {
        /// Number of nodes unlinked and freed by the pruning walk.
        pruned: usize,
    },
}

/// Removes `key` from the subtree rooted at `node_idx`.
pub fn remove<S: TrieStore>(store: &mut S, node_idx: Idx<Node>, key: &[char]) -> RemoveOutcome {
    let (target, found) = lookup(&*store, node_idx, key);
    if !found {
        return RemoveOutcome::NotFound;
    }
    store.get_node_mut(target).terminal = false;
    RemoveOutcome::Removed {
        pruned: prune(store, target),
    }
}

/// Walks up from `start`, unlinking and freeing each node that is neither
/// terminal nor a parent. Stops at the first node still needed, or at the
/// root, which has no parent to be removed from.
pub fn prune<S: TrieStore>(store: &mut S, start: Idx<Node>) -> usize {
    let mut pruned = 0;
    let mut current = start;

    loop {
        let node = store.get_node(current);
        if !node.is_dangling() {
            break;
        }
        let Some(parent) = node.parent else {
            break;
        };

        // Unlink by handle identity, not by label.
        store
            .get_node_mut(parent)
            .children
            .retain(|&child| child != current);
        store.free_node(current);
        pruned += 1;
        current = parent;
    }
    pruned
}
