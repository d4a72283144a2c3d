//! Recency window
//!
//! Parses `--last` values such as `30d` or `12h` and decides whether a run
//! finished inside the window.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};

const SECS_PER_HOUR: u64 = 60 * 60;

/// How far back the dashboard looks, stored in whole hours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    hours: u64,
}

impl Window {
    /// A window covering the given number of hours
    #[must_use]
    pub const fn from_hours(hours: u64) -> Self {
        Self { hours }
    }

    /// A window covering the given number of days
    #[must_use]
    pub const fn from_days(days: u64) -> Self {
        Self {
            hours: days.saturating_mul(24),
        }
    }

    /// Window length in hours
    #[must_use]
    pub const fn hours(self) -> u64 {
        self.hours
    }

    /// Window length as a duration
    #[must_use]
    pub const fn duration(self) -> Duration {
        Duration::from_secs(self.hours.saturating_mul(SECS_PER_HOUR))
    }

    /// Whether something that finished at `finished` lies strictly inside the
    /// window ending at `now`. A run exactly at the edge is outside.
    #[must_use]
    pub fn contains(self, finished: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        // A finish time in the future counts as zero age.
        let age = (now - finished).to_std().unwrap_or(Duration::ZERO);
        self.duration() > age
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::from_days(30)
    }
}

impl FromStr for Window {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let Some(unit) = s.chars().last() else {
            bail!("period of time must not be empty, e.g. '7d' for 7 days");
        };
        let number = &s[..s.len() - unit.len_utf8()];

        let amount: u64 = match unit {
            'h' | 'd' => number
                .parse()
                .with_context(|| format!("invalid number '{number}' in period '{s}'"))?,
            _ => bail!("period of time should be in days or hours, e.g. '7d' for 7 days"),
        };

        Ok(if unit == 'd' {
            Self::from_days(amount)
        } else {
            Self::from_hours(amount)
        })
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hours % 24 == 0 && self.hours > 0 {
            write!(f, "{}d", self.hours / 24)
        } else {
            write!(f, "{}h", self.hours)
        }
    }
}
