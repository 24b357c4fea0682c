//! The rectangular grid of letters being searched.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::errors::BoggleError;

/// Layout of the flat character buffer a board is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    RowMajor,
    ColumnMajor,
}

/// Immutable `height x width` grid of letters, stored as rows.
#[derive(Debug, Clone)]
pub struct Board {
    pieces: Vec<Vec<char>>,
    height: usize,
    width: usize,
    case_sensitive: bool,
}

impl Board {
    /// Builds a board from a flat buffer of exactly `height * width`
    /// characters. Letters are folded to ASCII lowercase unless the board is
    /// case-sensitive.
    pub fn from_flat(
        raw: &str,
        height: usize,
        width: usize,
        case_sensitive: bool,
        orientation: Orientation,
    ) -> Result<Self, BoggleError> {
        let letters: Vec<char> = raw.chars().collect();
        let expected = height * width;
        if letters.len() != expected {
            return Err(BoggleError::BoardShape {
                height,
                width,
                expected,
                actual: letters.len(),
            });
        }

        let mut pieces = Vec::with_capacity(height);
        for r in 0..height {
            let mut row = Vec::with_capacity(width);
            for c in 0..width {
                let letter = match orientation {
                    Orientation::RowMajor => letters[r * width + c],
                    Orientation::ColumnMajor => letters[r + c * height],
                };
                row.push(if case_sensitive {
                    letter
                } else {
                    letter.to_ascii_lowercase()
                });
            }
            pieces.push(row);
        }

        Ok(Self {
            pieces,
            height,
            width,
            case_sensitive,
        })
    }

    /// Loads a board from a JSON file holding an array of row strings, all of
    /// the same width.
    pub fn from_file<P: AsRef<Path>>(path: P, case_sensitive: bool) -> Result<Self, BoggleError> {
        let path = path.as_ref();
        let mut data = String::new();
        File::open(path)
            .and_then(|mut file| file.read_to_string(&mut data))
            .map_err(|source| BoggleError::BoardIo {
                path: path.to_path_buf(),
                source,
            })?;

        let rows: Vec<String> =
            serde_json::from_str(&data).map_err(|source| BoggleError::BoardFormat {
                path: path.to_path_buf(),
                source,
            })?;

        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.chars().count());
        for (i, row) in rows.iter().enumerate() {
            let actual = row.chars().count();
            if actual != width {
                return Err(BoggleError::RaggedBoard {
                    row: i,
                    expected: width,
                    actual,
                });
            }
        }

        let flat: String = rows.concat();
        Self::from_flat(&flat, height, width, case_sensitive, Orientation::RowMajor)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Number of cells on the board.
    pub fn cell_count(&self) -> usize {
        self.height * self.width
    }

    /// The letter at `(row, col)`, or `None` when the coordinates fall off
    /// the board. Coordinates are signed so neighbor probes may step past any
    /// edge.
    pub fn piece(&self, row: isize, col: isize) -> Option<char> {
        if self.out_of_bounds(row, col) {
            None
        } else {
            Some(self.pieces[row as usize][col as usize])
        }
    }

    /// Bounds check against `[0, height) x [0, width)`.
    pub fn out_of_bounds(&self, row: isize, col: isize) -> bool {
        row < 0 || col < 0 || row as usize >= self.height || col as usize >= self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_row_major_layout() {
        let board = Board::from_flat("abcd", 2, 2, false, Orientation::RowMajor).unwrap();
        assert_eq!(board.piece(0, 0), Some('a'));
        assert_eq!(board.piece(0, 1), Some('b'));
        assert_eq!(board.piece(1, 0), Some('c'));
        assert_eq!(board.piece(1, 1), Some('d'));
    }

    #[test]
    fn test_column_major_layout() {
        let board = Board::from_flat("abcd", 2, 2, false, Orientation::ColumnMajor).unwrap();
        assert_eq!(board.piece(0, 0), Some('a'));
        assert_eq!(board.piece(0, 1), Some('c'));
        assert_eq!(board.piece(1, 0), Some('b'));
        assert_eq!(board.piece(1, 1), Some('d'));
    }

    #[test]
    fn test_case_fold() {
        let board = Board::from_flat("AbCd", 2, 2, false, Orientation::RowMajor).unwrap();
        assert_eq!(board.piece(0, 0), Some('a'));
        assert_eq!(board.piece(1, 0), Some('c'));

        let strict = Board::from_flat("AbCd", 2, 2, true, Orientation::RowMajor).unwrap();
        assert_eq!(strict.piece(0, 0), Some('A'));
        assert!(strict.is_case_sensitive());
    }

    #[test]
    fn test_out_of_bounds() {
        let board = Board::from_flat("abcd", 2, 2, false, Orientation::RowMajor).unwrap();
        assert!(board.out_of_bounds(-1, 0));
        assert!(board.out_of_bounds(0, -1));
        assert!(board.out_of_bounds(2, 0));
        assert!(board.out_of_bounds(0, 2));
        assert!(!board.out_of_bounds(1, 1));
        assert_eq!(board.piece(-1, 0), None);
        assert_eq!(board.piece(0, 2), None);
    }

    #[test]
    fn test_empty_board() {
        let board = Board::from_flat("", 0, 0, false, Orientation::RowMajor).unwrap();
        assert_eq!(board.cell_count(), 0);
        assert!(board.out_of_bounds(0, 0));
        assert_eq!(board.piece(0, 0), None);
    }

    #[test]
    fn test_shape_mismatch() {
        let err = Board::from_flat("abc", 2, 2, false, Orientation::RowMajor).unwrap_err();
        match err {
            BoggleError::BoardShape {
                expected, actual, ..
            } => {
                assert_eq!(expected, 4);
                assert_eq!(actual, 3);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join("boggle-board-test.json");
        fs::write(&path, r#"["ca", "te"]"#).unwrap();
        let board = Board::from_file(&path, false).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(board.height(), 2);
        assert_eq!(board.width(), 2);
        assert_eq!(board.piece(1, 0), Some('t'));
    }

    #[test]
    fn test_from_file_ragged_rows() {
        let path = std::env::temp_dir().join("boggle-board-ragged-test.json");
        fs::write(&path, r#"["ca", "tea"]"#).unwrap();
        let err = Board::from_file(&path, false).unwrap_err();
        fs::remove_file(&path).ok();

        assert!(matches!(err, BoggleError::RaggedBoard { row: 1, .. }));
    }

    #[test]
    fn test_from_file_missing() {
        let err = Board::from_file("no-such-board.json", false).unwrap_err();
        assert!(matches!(err, BoggleError::BoardIo { .. }));
    }
}
