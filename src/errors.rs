use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced while loading the inputs of a search.
///
/// The search core itself has no failure modes: empty boards and empty
/// dictionaries are valid inputs that produce empty results, and bounds
/// misses during traversal are pruning signals rather than errors.
#[derive(Debug, Error)]
pub enum BoggleError {
    #[error("failed to read dictionary {}: {source}", path.display())]
    DictionaryIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read board {}: {source}", path.display())]
    BoardIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse board {}: {source}", path.display())]
    BoardFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("board string holds {actual} letters but a {height}x{width} board needs {expected}")]
    BoardShape {
        height: usize,
        width: usize,
        expected: usize,
        actual: usize,
    },

    #[error("board row {row} is {actual} letters wide, expected {expected}")]
    RaggedBoard {
        row: usize,
        expected: usize,
        actual: usize,
    },
}
