//! Difficulty presets
//!
//! Each difficulty pairs an embedded word list with a hint allowance.

use super::{EASY, HARD, MEDIUM};
use std::fmt;
use std::str::FromStr;

/// Game difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Embedded word list for this difficulty
    #[must_use]
    pub const fn words(self) -> &'static [&'static str] {
        match self {
            Self::Easy => EASY,
            Self::Medium => MEDIUM,
            Self::Hard => HARD,
        }
    }

    /// Hints available per game
    #[must_use]
    pub const fn max_hints(self) -> usize {
        match self {
            Self::Easy => 5,
            Self::Medium => 3,
            Self::Hard => 1,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Cycle to the next difficulty, wrapping from hard back to easy
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Easy => Self::Medium,
            Self::Medium => Self::Hard,
            Self::Hard => Self::Easy,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            other => Err(format!(
                "Unknown difficulty '{other}' (expected easy, medium or hard)"
            )),
        }
    }
}
