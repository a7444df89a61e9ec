//! Configuration-keyed pattern cache.
//!
//! Pattern sets are invariant for a configuration, so hosts running many
//! games (or resetting one) can share a single generated set per
//! `(grid_size, win_length)` pair instead of regenerating it.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::core::GameConfig;

use super::{generator, Pattern};

/// Shared pattern sets keyed by configuration.
#[derive(Clone, Debug, Default)]
pub struct PatternCache {
    sets: FxHashMap<GameConfig, Arc<[Pattern]>>,
}

impl PatternCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the pattern set for a configuration, generating it on first use.
    pub fn patterns(&mut self, config: &GameConfig) -> Arc<[Pattern]> {
        if let Some(set) = self.sets.get(config) {
            return Arc::clone(set);
        }
        debug!(%config, "caching pattern set");
        let set: Arc<[Pattern]> = generator::generate(config).into();
        self.sets.insert(*config, Arc::clone(&set));
        set
    }

    /// Number of cached configurations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Check whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}
