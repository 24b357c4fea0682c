//! Prefix tree over the dictionary.
//!
//! The tree is built once from a word list and is structurally immutable
//! afterwards. The only mutable state is the per-node visited flag, which a
//! search claims atomically the first time it completes a word at that node.
//! That claim is what makes every dictionary word surface at most once per
//! search, no matter how many board paths (or worker threads) reach it.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

/// Handle to a node in the [`Trie`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

#[derive(Debug, Default)]
struct TrieNode {
    /// Children keyed by letter. Each child is owned by exactly one parent.
    children: HashMap<char, NodeId>,
    /// A complete dictionary entry ends here.
    is_word: bool,
    /// At least one longer word extends this prefix.
    has_children: bool,
    /// Claimed the first time a search consumes this node as a completed
    /// word. Atomic because workers share the trie.
    visited: AtomicBool,
}

/// Prefix tree over a word list, case-sensitive or case-insensitive.
///
/// Nodes live in an arena indexed by [`NodeId`]; the root sits at index zero
/// and carries no letter.
#[derive(Debug)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    case_sensitive: bool,
}

impl Trie {
    const ROOT: NodeId = NodeId(0);

    pub fn new(case_sensitive: bool) -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            case_sensitive,
        }
    }

    pub fn root(&self) -> NodeId {
        Self::ROOT
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// True when no word has been inserted.
    pub fn is_empty(&self) -> bool {
        self.nodes[0].children.is_empty()
    }

    /// Number of nodes in the arena, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn fold(&self, letter: char) -> char {
        if self.case_sensitive {
            letter
        } else {
            letter.to_ascii_lowercase()
        }
    }

    /// Adds a word: the final letter's node is marked as a word ending and
    /// every node strictly before it as having children. Inserting the same
    /// word twice is a no-op; inserting the empty string does nothing.
    pub fn insert(&mut self, word: &str) {
        let letters: Vec<char> = word.chars().map(|c| self.fold(c)).collect();
        let last = match letters.len().checked_sub(1) {
            Some(last) => last,
            None => return,
        };

        let mut current = Self::ROOT;
        for (i, &letter) in letters.iter().enumerate() {
            let next = match self.nodes[current.0].children.get(&letter).copied() {
                Some(id) => id,
                None => {
                    let id = NodeId(self.nodes.len());
                    self.nodes.push(TrieNode::default());
                    self.nodes[current.0].children.insert(letter, id);
                    id
                }
            };
            if i == last {
                self.nodes[next.0].is_word = true;
            } else {
                self.nodes[next.0].has_children = true;
            }
            current = next;
        }
    }

    /// The child of `from` for `letter`, if any inserted word continues the
    /// path with that letter.
    pub fn node(&self, letter: char, from: NodeId) -> Option<NodeId> {
        self.nodes[from.0].children.get(&self.fold(letter)).copied()
    }

    /// True when the child of `from` for `letter` ends a dictionary word.
    ///
    /// With `consume_if_unvisited` the node is also claimed: only the first
    /// caller to reach it during a search sees `true`; later callers, on any
    /// thread, see `false` until [`Trie::reset_visited`].
    pub fn is_word_at(&self, letter: char, from: NodeId, consume_if_unvisited: bool) -> bool {
        match self.node(letter, from) {
            Some(id) => self.check_word(id, consume_if_unvisited),
            None => false,
        }
    }

    /// True when the child of `from` for `letter` has at least one longer
    /// word extending it.
    pub fn is_prefix_at(&self, letter: char, from: NodeId) -> bool {
        match self.node(letter, from) {
            Some(id) => self.nodes[id.0].has_children,
            None => false,
        }
    }

    /// Whole-word lookup, as repeated [`Trie::node`] steps from the root.
    /// See [`Trie::is_word_at`] for the `consume_if_unvisited` semantics.
    pub fn is_word(&self, word: &str, consume_if_unvisited: bool) -> bool {
        match self.walk(word) {
            Some(id) if id != Self::ROOT => self.check_word(id, consume_if_unvisited),
            _ => false,
        }
    }

    /// True when at least one dictionary word is strictly longer than
    /// `prefix` and starts with it.
    pub fn is_prefix(&self, prefix: &str) -> bool {
        match self.walk(prefix) {
            Some(id) if id != Self::ROOT => self.nodes[id.0].has_children,
            _ => false,
        }
    }

    fn walk(&self, word: &str) -> Option<NodeId> {
        let mut current = Self::ROOT;
        for letter in word.chars() {
            current = self.node(letter, current)?;
        }
        Some(current)
    }

    fn check_word(&self, id: NodeId, consume_if_unvisited: bool) -> bool {
        let node = &self.nodes[id.0];
        if !node.is_word {
            return false;
        }
        if !consume_if_unvisited {
            return true;
        }
        // First claimant wins. Results are only read after every worker has
        // joined, so relaxed ordering is enough.
        node.visited
            .compare_exchange(false, true, Ordering::Relaxed, Ordering::Relaxed)
            .is_ok()
    }

    /// Clears every visited flag. Taking `&mut self` makes this an exclusive
    /// phase: no search can hold the trie while the flags reset.
    pub fn reset_visited(&mut self) {
        for node in &mut self.nodes {
            *node.visited.get_mut() = false;
        }
    }
}
