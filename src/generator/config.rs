//! Generator configuration

/// Side length of the puzzle grid
pub const GRID_SIZE: usize = 4;

/// Fresh-shuffle attempts before giving up
pub const DEFAULT_ATTEMPTS: usize = 10;

/// Configuration for generating a puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Grid side length N (word length and number of rows)
    pub size: usize,
    /// Number of fresh-shuffle attempts
    pub max_attempts: usize,
    /// Cap on placements per attempt; `None` searches each shuffle to completion
    pub max_steps: Option<usize>,
    /// Seed for the shuffle RNG; `None` uses the thread RNG
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    #[must_use]
    pub const fn new(size: usize) -> Self {
        Self {
            size,
            max_attempts: DEFAULT_ATTEMPTS,
            max_steps: None,
            seed: None,
        }
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub const fn with_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    #[must_use]
    pub const fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    /// Config for the next puzzle in a session: bumps the seed when one is set
    #[must_use]
    pub const fn advance_seed(mut self) -> Self {
        if let Some(seed) = self.seed {
            self.seed = Some(seed.wrapping_add(1));
        }
        self
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(GRID_SIZE)
    }
}
