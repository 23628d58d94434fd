//! Prefix set for pruning partial columns

use crate::core::Word;
use rustc_hash::FxHashSet;

/// Every prefix (lengths 1..=n) of every length-n word
///
/// Answers "could some word start with exactly these letters?" in O(1). A hit is a
/// necessary condition for a column to be completable, not a sufficient one.
#[derive(Debug, Clone, Default)]
pub struct PrefixSet {
    prefixes: FxHashSet<Box<[char]>>,
}

impl PrefixSet {
    /// Build the prefix set for words of length `n`
    ///
    /// Words of any other length are skipped.
    ///
    /// # Examples
    /// ```
    /// use four_down::core::Word;
    /// use four_down::index::PrefixSet;
    ///
    /// let words = vec![Word::new("card").unwrap(), Word::new("cart").unwrap()];
    /// let prefixes = PrefixSet::build(&words, 4);
    ///
    /// assert!(prefixes.contains(&['C', 'A', 'R']));
    /// assert!(prefixes.contains(&['C', 'A', 'R', 'T']));
    /// assert!(!prefixes.contains(&['A', 'R']));
    /// assert_eq!(prefixes.len(), 5);
    /// ```
    #[must_use]
    pub fn build(words: &[Word], n: usize) -> Self {
        let mut prefixes: FxHashSet<Box<[char]>> = FxHashSet::default();
        for word in words.iter().filter(|w| w.len() == n) {
            for end in 1..=n {
                prefixes.insert(word.letters()[..end].into());
            }
        }
        Self { prefixes }
    }

    /// Check whether some word starts with exactly `prefix`
    #[inline]
    #[must_use]
    pub fn contains(&self, prefix: &[char]) -> bool {
        self.prefixes.contains(prefix)
    }

    /// Number of distinct prefixes
    #[must_use]
    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
}
