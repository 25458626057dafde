use std::collections::HashMap;

/// Prefix tree gating vocabulary insertion.
///
/// Keys are full Unicode words, one scalar value per edge. Nodes are never
/// removed: the index is built once from the durable log at startup and
/// only grows afterwards.
#[derive(Default)]
pub struct PrefixIndex {
    root: Node,
}

#[derive(Default)]
struct Node {
    children: HashMap<char, Node>,
    /// True iff the path from the root to this node spells an inserted word.
    terminal: bool,
}

impl PrefixIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word, creating missing nodes along the way.
    ///
    /// Idempotent: re-inserting an already-present word changes nothing.
    /// Inserting the empty string marks the root itself as a word.
    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.children.entry(ch).or_default();
        }
        node.terminal = true;
    }

    /// Exact membership test.
    ///
    /// A path that exists only as a prefix of a longer inserted word does
    /// not count as a member; the walk must end on a terminal node.
    pub fn contains(&self, word: &str) -> bool {
        let mut node = &self.root;
        for ch in word.chars() {
            match node.children.get(&ch) {
                Some(child) => node = child,
                None => return false,
            }
        }
        node.terminal
    }
}
