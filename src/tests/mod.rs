mod basic;

/// Keys sharing the "go" stem; several are prefixes of others.
pub const GO_WORDS: &[&str] = &[
    "go",
    "goad",
    "goaded",
    "goading",
    "goads",
    "goal",
    "goaled",
    "goalie",
    "goalies",
    "goaling",
    "goalkeeper",
    "goalkeepers",
    "goalless",
    "goalpost",
    "goalposts",
    "goals",
    "goaltender",
    "goaltenders",
];

/// Builds a trie holding `keys`, inserted in order.
pub fn build_trie(keys: &[&str]) -> crate::Trie {
    let mut trie = crate::Trie::new();
    for key in keys {
        trie.insert(key).unwrap();
    }
    trie
}
