//! Word list loading utilities
//!
//! Turns newline-delimited text into normalized words, from a file or from the
//! embedded difficulty lists.

use super::Difficulty;
use crate::core::Word;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to read a word list
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Could not read word list {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Where a word list comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// One of the lists compiled into the binary
    Embedded(Difficulty),
    /// A newline-delimited text file
    File(PathBuf),
}

impl fmt::Display for WordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded(difficulty) => write!(f, "{difficulty} word list"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Normalize raw newline-delimited text into words
///
/// Each line is trimmed and uppercased; blank lines are dropped. No length or
/// alphabet filtering happens here.
///
/// # Examples
/// ```
/// use four_down::wordlists::loader::normalize;
///
/// let words = normalize("bath\n  Also \r\n\n tear\n");
/// let texts: Vec<&str> = words.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["BATH", "ALSO", "TEAR"]);
/// ```
#[must_use]
pub fn normalize(raw_text: &str) -> Vec<Word> {
    raw_text
        .lines()
        .filter_map(|line| Word::new(line).ok())
        .collect()
}

/// Load words from a file
///
/// # Errors
///
/// Returns `LoadError::Read` if the file cannot be opened or is not valid UTF-8.
///
/// # Examples
/// ```no_run
/// use four_down::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words4.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let words = normalize(&content);
    if words.is_empty() {
        log::warn!("Word list {} contains no words", path.display());
    }
    Ok(words)
}

/// Convert an embedded string slice to normalized words
///
/// # Examples
/// ```
/// use four_down::wordlists::loader::words_from_slice;
/// use four_down::wordlists::EASY;
///
/// let words = words_from_slice(EASY);
/// assert_eq!(words.len(), EASY.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Load the words for a source
///
/// # Errors
///
/// Returns `LoadError` if a file source cannot be read. Embedded sources never fail.
pub fn load_words(source: &WordSource) -> Result<Vec<Word>, LoadError> {
    let words = match source {
        WordSource::Embedded(difficulty) => words_from_slice(difficulty.words()),
        WordSource::File(path) => load_from_file(path)?,
    };
    log::debug!("Loaded {} words from {source}", words.len());
    Ok(words)
}
