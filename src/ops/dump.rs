//! Key enumeration: pre-order DFS in child insertion order.

use std::io;

use safe_bump::Idx;

use crate::node::Node;
use crate::store::TrieStore;

/// Writes every key stored at or below `node_idx` to `out`, each followed by
/// `sep`.
///
/// `prefix` holds the codepoints from the trie root to `node_idx` and is
/// restored before returning. Stops at the first write error.
pub fn dump_recursive<S, W>(
    store: &S,
    node_idx: Idx<Node>,
    prefix: &mut String,
    out: &mut W,
    sep: &str,
) -> io::Result<()>
where
    S: TrieStore,
    W: io::Write + ?Sized,
{
    let node = store.get_node(node_idx);
    if node.terminal {
        out.write_all(prefix.as_bytes())?;
        out.write_all(sep.as_bytes())?;
    }
    for &child in &node.children {
        prefix.push(store.get_node(child).label);
        let result = dump_recursive(store, child, prefix, out, sep);
        prefix.pop();
        result?;
    }
    Ok(())
}

/// DFS collect every key stored at or below `node_idx`, in dump order.
pub fn collect<S: TrieStore>(
    store: &S,
    node_idx: Idx<Node>,
    prefix: &mut String,
    out: &mut Vec<String>,
) {
    let node = store.get_node(node_idx);
    if node.terminal {
        out.push(prefix.clone());
    }
    for &child in &node.children {
        prefix.push(store.get_node(child).label);
        collect(store, child, prefix, out);
        prefix.pop();
    }
}

/// Counts the nodes reachable from `node_idx`, itself included.
pub fn count_nodes<S: TrieStore>(store: &S, node_idx: Idx<Node>) -> usize {
    let node = store.get_node(node_idx);
    1 + node
        .children
        .iter()
        .map(|&child| count_nodes(store, child))
        .sum::<usize>()
}
