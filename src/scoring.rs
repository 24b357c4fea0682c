//! Word scoring, following the standard Boggle table.

/// Points awarded for a single word. Everything under five letters is worth
/// one point; the solver never reports anything under three.
pub fn word_score(word: &str) -> u32 {
    match word.chars().count() {
        0..=4 => 1,
        5 => 2,
        6 => 3,
        7 => 5,
        _ => 11,
    }
}

/// Total score for a set of found words.
pub fn total_score<S: AsRef<str>>(words: &[S]) -> u32 {
    words.iter().map(|w| word_score(w.as_ref())).sum()
}
