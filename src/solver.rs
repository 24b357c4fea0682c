//! Search scheduling: runs the engine over every start cell, either on the
//! calling thread or fanned out across parallel workers on disjoint,
//! contiguous cell ranges.

use std::ops::Range;
use std::thread;

use rayon::prelude::*;
use serde::Serialize;

use crate::board::Board;
use crate::scoring;
use crate::search::{QMode, SearchWorker};
use crate::trie::Trie;

/// Solver strategy. All three produce the identical word set and score for
/// identical inputs; they differ only in how the work is done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Single-threaded; re-derives the trie position from the whole prefix
    /// at every step.
    Basic,
    /// Single-threaded; carries the trie cursor along with the board path.
    Fast,
    /// The fast traversal across parallel workers.
    MultiThreaded,
}

/// Fewest start cells worth giving a worker of its own, so tiny boards do
/// not fan out.
pub const MIN_CELLS_PER_WORKER: usize = 25;

/// The outcome of one search: every unique dictionary word reachable on the
/// board, with the total score. Owned by the caller; the engine retains
/// nothing.
#[derive(Debug, Clone, Serialize)]
pub struct Solution {
    pub words: Vec<String>,
    pub score: u32,
}

impl Solution {
    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

/// Finds every dictionary word on the board.
///
/// The exclusive trie borrow lets the visited flags reset before the
/// traversal starts; the traversal itself only reads the trie structure and
/// claims visited flags atomically, so workers can share it freely. Word
/// order in the result is unspecified.
pub fn solve(board: &Board, trie: &mut Trie, q_mode: QMode, algorithm: Algorithm) -> Solution {
    trie.reset_visited();
    let trie = &*trie;

    let words = match algorithm {
        Algorithm::Basic => run_single(board, trie, q_mode, false),
        Algorithm::Fast => run_single(board, trie, q_mode, true),
        Algorithm::MultiThreaded => run_parallel(board, trie, q_mode),
    };

    let score = scoring::total_score(&words);
    Solution { words, score }
}

fn run_single(board: &Board, trie: &Trie, q_mode: QMode, fast: bool) -> Vec<String> {
    let mut worker = SearchWorker::new(board, trie, q_mode);
    for row in 0..board.height() {
        for col in 0..board.width() {
            if fast {
                worker.search_from(row as isize, col as isize);
            } else {
                worker.search_from_naive(row as isize, col as isize);
            }
        }
    }
    worker.into_words()
}

fn run_parallel(board: &Board, trie: &Trie, q_mode: QMode) -> Vec<String> {
    let cells = board.cell_count();
    if cells == 0 {
        return Vec::new();
    }

    let ranges = partition(cells, worker_count(cells));
    log::debug!("searching {} cells across {} workers", cells, ranges.len());

    ranges
        .into_par_iter()
        .map(|range| {
            let mut worker = SearchWorker::new(board, trie, q_mode);
            let width = board.width();
            for cell in range {
                worker.search_from((cell / width) as isize, (cell % width) as isize);
            }
            worker.into_words()
        })
        .reduce(Vec::new, |mut merged, mut words| {
            merged.append(&mut words);
            merged
        })
}

/// One worker per hardware thread, but never fewer than
/// [`MIN_CELLS_PER_WORKER`] cells each.
fn worker_count(cells: usize) -> usize {
    let max_workers = (cells + MIN_CELLS_PER_WORKER - 1) / MIN_CELLS_PER_WORKER;
    let parallelism = thread::available_parallelism().map(|n| n.get()).unwrap_or(2);
    parallelism.min(max_workers)
}

/// Splits `0..cells` into `workers` contiguous ranges in row-major cell
/// order; the final range takes the remainder.
fn partition(cells: usize, workers: usize) -> Vec<Range<usize>> {
    let block = cells / workers;
    let mut ranges = Vec::with_capacity(workers);
    let mut start = 0;
    for i in 0..workers {
        let end = if i + 1 == workers { cells } else { start + block };
        ranges.push(start..end);
        start = end;
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Orientation;
    use crate::dictionary::trie_from_words;
    use std::collections::HashSet;

    fn make_board(flat: &str, height: usize, width: usize) -> Board {
        Board::from_flat(flat, height, width, false, Orientation::RowMajor).unwrap()
    }

    #[test]
    fn test_partition_covers_all_cells() {
        for (cells, workers) in [(100, 4), (101, 4), (25, 1), (99, 2)] {
            let ranges = partition(cells, workers);
            assert_eq!(ranges.len(), workers);
            let mut next = 0;
            for range in &ranges {
                assert_eq!(range.start, next);
                next = range.end;
            }
            assert_eq!(next, cells);
        }
    }

    #[test]
    fn test_small_boards_get_one_worker() {
        assert_eq!(worker_count(1), 1);
        assert_eq!(worker_count(16), 1);
        assert_eq!(worker_count(25), 1);
        assert!(worker_count(26) <= 2);
    }

    #[test]
    fn test_all_algorithms_agree() {
        let board = make_board("cate", 2, 2);
        let mut trie = trie_from_words(["cat", "ate", "tea", "eat", "cate", "none"], false);

        let mut expected: Option<HashSet<String>> = None;
        for algorithm in [Algorithm::Basic, Algorithm::Fast, Algorithm::MultiThreaded] {
            let solution = solve(&board, &mut trie, QMode::TwoLetter, algorithm);
            let words: HashSet<String> = solution.words.iter().cloned().collect();
            assert_eq!(words.len(), solution.words.len(), "duplicates in result");
            assert_eq!(solution.score, scoring::total_score(&solution.words));
            match &expected {
                Some(prev) => assert_eq!(prev, &words, "{algorithm:?} disagrees"),
                None => expected = Some(words),
            }
        }
        assert_eq!(expected.unwrap().len(), 5);
    }

    #[test]
    fn test_degenerate_inputs() {
        let empty_board = make_board("", 0, 0);
        let mut trie = trie_from_words(["cat"], false);
        for algorithm in [Algorithm::Basic, Algorithm::Fast, Algorithm::MultiThreaded] {
            let solution = solve(&empty_board, &mut trie, QMode::TwoLetter, algorithm);
            assert!(solution.words.is_empty());
            assert_eq!(solution.score, 0);
        }

        let board = make_board("cate", 2, 2);
        let mut empty_trie = Trie::new(false);
        let solution = solve(&board, &mut empty_trie, QMode::TwoLetter, Algorithm::MultiThreaded);
        assert!(solution.words.is_empty());
        assert_eq!(solution.score, 0);
    }

    #[test]
    fn test_resolving_is_idempotent() {
        let board = make_board("cate", 2, 2);
        let mut trie = trie_from_words(["cat", "ate", "tea"], false);

        let first = solve(&board, &mut trie, QMode::TwoLetter, Algorithm::MultiThreaded);
        let second = solve(&board, &mut trie, QMode::TwoLetter, Algorithm::MultiThreaded);

        let first_words: HashSet<String> = first.words.into_iter().collect();
        let second_words: HashSet<String> = second.words.into_iter().collect();
        assert_eq!(first_words, second_words);
        assert_eq!(first.score, second.score);
    }
}
