use crate::{Trie, TrieError};

use super::{GO_WORDS, build_trie};

#[test]
fn empty_trie() {
    let trie = Trie::new();
    assert_eq!(trie.len(), 0);
    assert!(trie.is_empty());
    assert_eq!(trie.node_count(), 1);
}

#[test]
fn insert_and_lookup() {
    let trie = build_trie(GO_WORDS);
    assert_eq!(trie.len(), GO_WORDS.len());

    let cases = [
        ("go", true),
        ("goad", true),
        ("goat", false),
        ("oat", false),
        ("", false),
    ];
    for (key, expected) in cases {
        let (_, found) = trie.lookup(key);
        assert_eq!(found, expected, "lookup({key:?})");
        assert_eq!(trie.contains(key), expected, "contains({key:?})");
    }
}

#[test]
fn every_inserted_key_is_found() {
    let trie = build_trie(GO_WORDS);
    for key in GO_WORDS {
        assert!(trie.lookup(key).1, "missing key {key}");
    }
}

#[test]
fn strict_prefix_is_not_found() {
    let trie = build_trie(&["go", "goad", "goal"]);
    assert!(!trie.lookup("goa").1);
    assert!(!trie.lookup("g").1);
    assert!(trie.lookup("go").1);
    assert!(!trie.lookup("goat").1);
}

#[test]
fn insert_prefix_of_existing_key() {
    let mut trie = build_trie(&["goal"]);
    assert!(!trie.contains("go"));
    trie.insert("go").unwrap();
    assert!(trie.contains("go"));
    assert!(trie.contains("goal"));
    assert_eq!(trie.len(), 2);
}

#[test]
fn insert_extension_of_existing_key() {
    let mut trie = build_trie(&["go"]);
    trie.insert("goal").unwrap();
    assert!(trie.contains("go"));
    assert!(trie.contains("goal"));
    assert!(!trie.contains("goa"));
}

#[test]
fn insert_empty_key_fails() {
    let mut trie = build_trie(&["go"]);
    assert_eq!(trie.insert(""), Err(TrieError::EmptyKey));
    assert_eq!(trie.len(), 1);
    assert_eq!(trie.node_count(), 3);
}

#[test]
fn delete_keys() {
    let mut trie = build_trie(GO_WORDS);
    for key in ["go", "goal", "goalpost", "goalkeepers"] {
        trie.delete(key).unwrap();
        assert!(!trie.lookup(key).1, "{key} still found after delete");
    }
    assert_eq!(trie.len(), GO_WORDS.len() - 4);
    assert!(trie.contains("goalposts"));
    assert!(trie.contains("goalkeeper"));
}

#[test]
fn delete_errors() {
    let mut trie = build_trie(GO_WORDS);
    assert_eq!(trie.delete(""), Err(TrieError::EmptyKey));
    assert_eq!(trie.delete("_"), Err(TrieError::KeyNotFound));
    assert_eq!(trie.len(), GO_WORDS.len());
}

#[test]
fn delete_prefix_only_path_fails() {
    let mut trie = build_trie(&["goal"]);
    assert_eq!(trie.delete("goa"), Err(TrieError::KeyNotFound));
    assert_eq!(trie.delete("goals"), Err(TrieError::KeyNotFound));
    assert!(trie.contains("goal"));
    assert_eq!(trie.node_count(), 5);
}

#[test]
fn delete_missing_leaves_tree_unchanged() {
    let mut trie = build_trie(&["go", "goad", "goal"]);
    let arena_before = trie.arena_len();
    assert_eq!(trie.delete("gone"), Err(TrieError::KeyNotFound));
    assert_eq!(trie.arena_len(), arena_before);
    for key in ["go", "goad", "goal"] {
        assert!(trie.contains(key));
    }
}

#[test]
fn delete_twice_fails_second_time() {
    let mut trie = build_trie(&["go", "goal"]);
    trie.delete("goal").unwrap();
    assert_eq!(trie.delete("goal"), Err(TrieError::KeyNotFound));
}

#[test]
fn go_goad_goal_scenario() {
    let mut trie = build_trie(&["go", "goad", "goal"]);
    assert!(!trie.lookup("goa").1);
    assert!(trie.lookup("go").1);
    assert!(!trie.lookup("goat").1);

    trie.delete("go").unwrap();
    assert!(!trie.lookup("go").1);
    assert!(trie.lookup("goad").1);
    assert!(trie.lookup("goal").1);
}

#[test]
fn multibyte_codepoints() {
    let trie = build_trie(&["héllo", "hé", "日本", "日本語"]);
    assert!(trie.contains("hé"));
    assert!(trie.contains("日本語"));
    assert!(!trie.contains("日"));
    // One node per codepoint, not per byte.
    assert_eq!(trie.node_count(), 1 + 5 + 3);
}

#[test]
fn reinsert_after_delete() {
    let mut trie = build_trie(&["goal"]);
    trie.delete("goal").unwrap();
    assert!(trie.is_empty());
    trie.insert("goal").unwrap();
    assert!(trie.contains("goal"));
    assert_eq!(trie.len(), 1);
}
