//! Configuration for a game session.

/// Configuration for a session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// RNG seed for reproducible enemy draws.
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

impl SessionConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
