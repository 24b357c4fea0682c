//! Depth-first traversal that walks the board and the trie in lock-step.
//!
//! Two strategies share one worker type. The carried-cursor strategy advances
//! a trie [`NodeId`] alongside the board path, so each step costs a single
//! child lookup. The naive strategy re-derives the trie position from the
//! whole prefix at every step. Both prune a branch the moment the prefix
//! stops being a prefix of any dictionary word, and both produce identical
//! result sets.

use crate::board::Board;
use crate::trie::{NodeId, Trie};

/// Words shorter than this are never reported.
pub const MIN_WORD_LEN: usize = 3;

/// How a board cell printed `Q` maps to letters in a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QMode {
    /// `Q` is a single letter.
    Single,
    /// `Q` is the Boggle `Qu` cube: one cell, two letters.
    TwoLetter,
}

/// All eight neighbors at Chebyshev distance one.
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Traversal state for words starting inside one range of board cells.
///
/// Workers never share state with each other; the trie's visited flags are
/// the only cross-worker coordination.
pub(crate) struct SearchWorker<'a> {
    board: &'a Board,
    trie: &'a Trie,
    q_mode: QMode,
    /// Cells on the current path. One slot per cell even when a `Qu` cell
    /// contributes two letters.
    visited: Vec<Vec<bool>>,
    prefix: String,
    found: Vec<String>,
}

impl<'a> SearchWorker<'a> {
    pub fn new(board: &'a Board, trie: &'a Trie, q_mode: QMode) -> Self {
        Self {
            board,
            trie,
            q_mode,
            visited: vec![vec![false; board.width()]; board.height()],
            prefix: String::new(),
            found: Vec::new(),
        }
    }

    /// Hands back the words found so far.
    pub fn into_words(self) -> Vec<String> {
        self.found
    }

    /// Carried-cursor strategy, starting at `(row, col)`.
    pub fn search_from(&mut self, row: isize, col: isize) {
        self.visit_fast(row, col, self.trie.root());
    }

    /// Whole-prefix re-lookup strategy, starting at `(row, col)`.
    pub fn search_from_naive(&mut self, row: isize, col: isize) {
        self.visit_naive(row, col);
    }

    fn visit_fast(&mut self, row: isize, col: isize, cursor: NodeId) {
        let letter = match self.admit(row, col) {
            Some(letter) => letter,
            None => return,
        };
        let pushed = self.push_piece(letter);
        self.explore_fast(row as usize, col as usize, letter, cursor);
        self.pop_piece(pushed);
    }

    /// Body of one carried-cursor step. Early returns are prunes; the caller
    /// owns the matching prefix pop, so every exit path restores state.
    fn explore_fast(&mut self, row: usize, col: usize, letter: char, cursor: NodeId) {
        let mut cursor = cursor;
        let mut letter = letter;

        if self.is_qu(letter) {
            // The cell spells `qu`: walk the `q` edge first, and only keep
            // going if some word continues past it.
            if !self.trie.is_prefix_at(letter, cursor) {
                return;
            }
            cursor = match self.trie.node(letter, cursor) {
                Some(node) => node,
                None => return,
            };
            letter = 'u';
        }

        if self.long_enough() && self.trie.is_word_at(letter, cursor, true) {
            self.found.push(self.prefix.clone());
        }

        if !self.trie.is_prefix_at(letter, cursor) {
            return;
        }
        let next = match self.trie.node(letter, cursor) {
            Some(node) => node,
            None => return,
        };

        self.visited[row][col] = true;
        for (dr, dc) in NEIGHBORS {
            self.visit_fast(row as isize + dr, col as isize + dc, next);
        }
        self.visited[row][col] = false;
    }

    fn visit_naive(&mut self, row: isize, col: isize) {
        let letter = match self.admit(row, col) {
            Some(letter) => letter,
            None => return,
        };
        let pushed = self.push_piece(letter);
        self.explore_naive(row as usize, col as usize);
        self.pop_piece(pushed);
    }

    fn explore_naive(&mut self, row: usize, col: usize) {
        if self.long_enough() && self.trie.is_word(&self.prefix, true) {
            self.found.push(self.prefix.clone());
        }

        if !self.trie.is_prefix(&self.prefix) {
            return;
        }

        self.visited[row][col] = true;
        for (dr, dc) in NEIGHBORS {
            self.visit_naive(row as isize + dr, col as isize + dc);
        }
        self.visited[row][col] = false;
    }

    /// Bounds and path check for a candidate cell; yields its letter when the
    /// cell may extend the current path.
    fn admit(&self, row: isize, col: isize) -> Option<char> {
        let letter = self.board.piece(row, col)?;
        if self.visited[row as usize][col as usize] {
            None
        } else {
            Some(letter)
        }
    }

    fn is_qu(&self, letter: char) -> bool {
        self.q_mode == QMode::TwoLetter && letter.eq_ignore_ascii_case(&'q')
    }

    fn long_enough(&self) -> bool {
        self.prefix.chars().count() >= MIN_WORD_LEN
    }

    /// Appends the cell's letters to the prefix and reports how many were
    /// pushed, so the caller can undo the exact amount.
    fn push_piece(&mut self, letter: char) -> usize {
        self.prefix.push(letter);
        if self.is_qu(letter) {
            self.prefix.push('u');
            2
        } else {
            1
        }
    }

    fn pop_piece(&mut self, pushed: usize) {
        for _ in 0..pushed {
            self.prefix.pop();
        }
    }
}
