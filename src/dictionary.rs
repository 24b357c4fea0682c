//! Word-list loading.
//!
//! A dictionary is just an owned [`Trie`]: build it once here, pass it to
//! [`crate::solver::solve`] for as many searches as you like, and drop it to
//! free it. There is no shared global dictionary state.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::errors::BoggleError;
use crate::trie::Trie;

/// Reads a dictionary file, one word per line, into a case-insensitive trie.
/// Blank lines and surrounding whitespace are skipped.
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> Result<Trie, BoggleError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| BoggleError::DictionaryIo {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let mut trie = Trie::new(false);
    let mut count = 0usize;
    for line in reader.lines() {
        let line = line.map_err(|source| BoggleError::DictionaryIo {
            path: path.to_path_buf(),
            source,
        })?;
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        trie.insert(word);
        count += 1;
    }
    log::info!("loaded {} words from {}", count, path.display());

    Ok(trie)
}

/// Builds a trie from an in-memory word list.
pub fn trie_from_words<I, S>(words: I, case_sensitive: bool) -> Trie
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut trie = Trie::new(case_sensitive);
    for word in words {
        trie.insert(word.as_ref());
    }
    trie
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_dictionary() {
        let path = std::env::temp_dir().join("boggle-dictionary-test.txt");
        fs::write(&path, "cat\nDOG\n\n  bird  \n").unwrap();
        let trie = load_dictionary(&path).unwrap();
        fs::remove_file(&path).ok();

        assert!(trie.is_word("cat", false));
        assert!(trie.is_word("dog", false));
        assert!(trie.is_word("bird", false));
        assert!(!trie.is_word("fish", false));
    }

    #[test]
    fn test_missing_dictionary_is_an_error() {
        let err = load_dictionary("no-such-dictionary.txt").unwrap_err();
        assert!(matches!(err, BoggleError::DictionaryIo { .. }));
    }

    #[test]
    fn test_trie_from_words() {
        let trie = trie_from_words(["cat", "cart"], false);
        assert!(trie.is_word("cat", false));
        assert!(trie.is_prefix("car"));
        assert!(!trie.is_word("car", false));
    }
}
