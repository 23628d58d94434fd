//! Backtracking search for a word square
//!
//! Rows are placed one at a time in candidate order. Every placement extends the N
//! column prefixes by one letter, and a candidate is only tried if all N extended
//! prefixes exist in the prefix set. Placements are undone explicitly on backtrack,
//! so the search owns all of its state and never touches the index.

use crate::core::{Solution, Word, all_distinct};
use crate::index::WordIndex;

/// Counters collected during one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Rows placed, including ones later undone
    pub placements: usize,
    /// Rows undone after their subtree failed
    pub backtracks: usize,
    /// Complete grids rejected at the base case
    pub rejected_grids: usize,
}

impl SearchStats {
    pub(crate) fn merge(&mut self, other: Self) {
        self.placements += other.placements;
        self.backtracks += other.backtracks;
        self.rejected_grids += other.rejected_grids;
    }
}

/// How a single search ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(Solution),
    /// Every candidate order was explored without a valid grid
    Exhausted,
    /// The placement cap was hit before the search finished
    StepLimit,
}

impl SearchOutcome {
    #[must_use]
    pub fn into_solution(self) -> Option<Solution> {
        match self {
            Self::Found(solution) => Some(solution),
            Self::Exhausted | Self::StepLimit => None,
        }
    }
}

/// Search the index for one valid grid, trying candidates in index order
///
/// Deterministic for a given index. Stops at the first grid whose columns are all
/// candidate words and pairwise distinct.
///
/// # Examples
/// ```
/// use four_down::generator::{SearchOutcome, search};
/// use four_down::index::WordIndex;
/// use four_down::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["card", "area", "rear", "dart", "bath"]);
/// let (outcome, stats) = search(&WordIndex::new(words, 4), None);
///
/// let solution = outcome.into_solution().unwrap();
/// assert_eq!(solution.row(0).text(), "CARD");
/// assert!(stats.placements >= 4);
/// ```
#[must_use]
pub fn search(index: &WordIndex, max_steps: Option<usize>) -> (SearchOutcome, SearchStats) {
    let mut search = Search::new(index, max_steps);
    let outcome = search.run();
    (outcome, search.stats)
}

enum Step {
    Dead,
    Found(Solution),
    Abort,
}

struct Search<'a> {
    index: &'a WordIndex,
    max_steps: Option<usize>,
    /// Indices into `index.words()` of the rows placed so far
    placed: Vec<usize>,
    /// Letters of each column read down the placed rows
    columns: Vec<Vec<char>>,
    stats: SearchStats,
}

impl<'a> Search<'a> {
    fn new(index: &'a WordIndex, max_steps: Option<usize>) -> Self {
        let n = index.size();
        Self {
            index,
            max_steps,
            placed: Vec::with_capacity(n),
            columns: vec![Vec::with_capacity(n); n],
            stats: SearchStats::default(),
        }
    }

    fn run(&mut self) -> SearchOutcome {
        let n = self.index.size();
        // N distinct rows are needed
        if n == 0 || self.index.distinct_len() < n {
            return SearchOutcome::Exhausted;
        }

        match self.extend() {
            Step::Found(solution) => SearchOutcome::Found(solution),
            Step::Dead => SearchOutcome::Exhausted,
            Step::Abort => SearchOutcome::StepLimit,
        }
    }

    fn extend(&mut self) -> Step {
        let index = self.index;
        if self.placed.len() == index.size() {
            return self.complete();
        }

        for (candidate, word) in index.words().iter().enumerate() {
            if self.is_placed(word) || !self.fits(word) {
                continue;
            }
            if self
                .max_steps
                .is_some_and(|limit| self.stats.placements >= limit)
            {
                return Step::Abort;
            }

            self.push(candidate, word);
            match self.extend() {
                Step::Dead => {}
                done => return done,
            }
            self.pop();
            self.stats.backtracks += 1;
        }

        Step::Dead
    }

    /// Base case: all rows placed, the columns are full words.
    fn complete(&mut self) -> Step {
        let index = self.index;
        let cols: Vec<Word> = self
            .columns
            .iter()
            .map(|column| Word::from_letters(column))
            .collect();

        if cols.iter().all(|col| index.contains(col)) && all_distinct(&cols) {
            let rows = self
                .placed
                .iter()
                .map(|&i| index.words()[i].clone())
                .collect();
            return Step::Found(Solution::from_parts(rows, cols));
        }

        self.stats.rejected_grids += 1;
        Step::Dead
    }

    fn is_placed(&self, word: &Word) -> bool {
        let words = self.index.words();
        self.placed.iter().any(|&i| words[i] == *word)
    }

    /// Check that `word` keeps every column a valid prefix.
    fn fits(&mut self, word: &Word) -> bool {
        let prefixes = self.index.prefixes();
        self.columns
            .iter_mut()
            .zip(word.letters())
            .all(|(column, &letter)| {
                column.push(letter);
                let ok = prefixes.contains(column.as_slice());
                column.pop();
                ok
            })
    }

    fn push(&mut self, candidate: usize, word: &Word) {
        self.placed.push(candidate);
        for (column, &letter) in self.columns.iter_mut().zip(word.letters()) {
            column.push(letter);
        }
        self.stats.placements += 1;
    }

    fn pop(&mut self) {
        self.placed.pop();
        for column in &mut self.columns {
            column.pop();
        }
    }
}
