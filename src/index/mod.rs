//! Word index for grid generation
//!
//! Filters a normalized word list down to the grid length and builds the lookups the
//! search needs: full-word membership and a prefix set.

mod prefix;

pub use prefix::PrefixSet;

use crate::core::Word;
use rustc_hash::FxHashSet;

/// Keep only words with exactly `n` letters
///
/// Order and duplicates are preserved; the input is not modified.
#[must_use]
pub fn filter_by_length(words: &[Word], n: usize) -> Vec<Word> {
    words.iter().filter(|w| w.len() == n).cloned().collect()
}

/// Length-n candidate words with membership and prefix lookups
///
/// Built once per generation attempt; the candidate order is the order the search
/// will try words in.
#[derive(Debug, Clone)]
pub struct WordIndex {
    size: usize,
    words: Vec<Word>,
    vocabulary: FxHashSet<String>,
    prefixes: PrefixSet,
}

impl WordIndex {
    /// Build an index over the words of length `n`
    ///
    /// Words of other lengths are dropped.
    #[must_use]
    pub fn new(mut words: Vec<Word>, n: usize) -> Self {
        words.retain(|w| w.len() == n);
        let vocabulary = words.iter().map(|w| w.text().to_string()).collect();
        let prefixes = PrefixSet::build(&words, n);

        Self {
            size: n,
            words,
            vocabulary,
            prefixes,
        }
    }

    /// Word length this index was built for
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Candidate words in search order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn prefixes(&self) -> &PrefixSet {
        &self.prefixes
    }

    /// Check whether a full word is one of the candidates
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.vocabulary.contains(word.text())
    }

    /// Number of candidate entries, duplicates included
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of distinct candidate words
    #[must_use]
    pub fn distinct_len(&self) -> usize {
        self.vocabulary.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn filter_keeps_only_requested_length() {
        let words = words_from_slice(&["bath", "cat", "also", "horns", "tear"]);
        let filtered = filter_by_length(&words, 4);

        let texts: Vec<&str> = filtered.iter().map(Word::text).collect();
        assert_eq!(texts, ["BATH", "ALSO", "TEAR"]);
        // Input untouched
        assert_eq!(words.len(), 5);
    }

    #[test]
    fn filter_preserves_duplicates() {
        let words = words_from_slice(&["bath", "BATH", "bath"]);
        assert_eq!(filter_by_length(&words, 4).len(), 3);
    }

    #[test]
    fn index_membership() {
        let words = words_from_slice(&["card", "area", "cat"]);
        let index = WordIndex::new(words, 4);

        assert_eq!(index.size(), 4);
        assert_eq!(index.len(), 2);
        assert!(index.contains(&Word::new("card").unwrap()));
        assert!(!index.contains(&Word::new("cat").unwrap()));
        assert!(!index.contains(&Word::new("dart").unwrap()));
    }

    #[test]
    fn index_counts_distinct_words() {
        let words = words_from_slice(&["card", "card", "area"]);
        let index = WordIndex::new(words, 4);

        assert_eq!(index.len(), 3);
        assert_eq!(index.distinct_len(), 2);
    }

    #[test]
    fn index_prefixes_cover_candidates() {
        let words = words_from_slice(&["card", "area"]);
        let index = WordIndex::new(words, 4);

        assert!(index.prefixes().contains(&['A', 'R']));
        assert!(!index.prefixes().contains(&['R']));
    }

    #[test]
    fn empty_index() {
        let index = WordIndex::new(Vec::new(), 4);
        assert!(index.is_empty());
        assert!(index.prefixes().is_empty());
    }
}
