//! Dashboard configuration
//!
//! Holds the tunables that shape summarization, card geometry and the
//! `gh` cache. Built from CLI flags; there is no configuration file.

use anyhow::{bail, Result};

/// Default number of runs the health summary is scaled against
pub const DEFAULT_MAX_RUNS: usize = 5;
/// Default number of workflow name characters shown on a card
pub const DEFAULT_NAME_LENGTH: usize = 17;
/// Default TTL passed to `gh api --cache`
pub const DEFAULT_CACHE_TTL: &str = "60m";

/// Width of the ellipsis appended to truncated names
pub const ELLIPSIS_WIDTH: usize = 3;
/// Horizontal padding on each side of a card's content
pub const CARD_PADDING: usize = 1;
/// Border thickness on each side of a card
pub const CARD_BORDER: usize = 1;

/// Settings injected into the summarizer, card renderer and gh client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashConfig {
    /// Sample cap for health and average elapsed. `max_runs + 1` runs are
    /// inspected; the average divides by `max_runs`.
    pub max_runs: usize,
    /// Workflow names longer than this are truncated on cards
    pub name_length: usize,
    /// Cache TTL handed to `gh api --cache`
    pub cache_ttl: String,
}

impl Default for DashConfig {
    fn default() -> Self {
        Self {
            max_runs: DEFAULT_MAX_RUNS,
            name_length: DEFAULT_NAME_LENGTH,
            cache_ttl: DEFAULT_CACHE_TTL.to_string(),
        }
    }
}

impl DashConfig {
    /// Build a config, rejecting values the summarizer cannot work with.
    pub fn new(max_runs: usize, name_length: usize, cache_ttl: &str) -> Result<Self> {
        let config = Self {
            max_runs,
            name_length,
            cache_ttl: cache_ttl.to_string(),
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.max_runs == 0 {
            bail!("max runs must be at least 1");
        }
        if self.name_length == 0 {
            bail!("name length must be at least 1");
        }
        if self.cache_ttl.trim().is_empty() {
            bail!("cache TTL must not be empty");
        }
        Ok(())
    }

    /// Text width inside a card: the longest name plus its ellipsis.
    #[must_use]
    pub const fn content_width(&self) -> usize {
        self.name_length + ELLIPSIS_WIDTH
    }

    /// Full outer width of a card, padding and border included.
    #[must_use]
    pub const fn column_width(&self) -> usize {
        self.content_width() + 2 * CARD_PADDING + 2 * CARD_BORDER
    }
}
