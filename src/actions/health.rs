//! Run-health summarization
//!
//! Turns the head of a workflow's run history into a glyph string and an
//! average elapsed duration. Both inspect `max_runs + 1` runs and the
//! average divides by `max_runs`, so a workflow with fewer runs reports a
//! proportionally lower average.

use std::time::Duration;

use super::model::Run;

/// Outcome class of a single run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    /// Completed successfully
    Success,
    /// Completed with a failing conclusion
    Failure,
    /// Still running, or completed without a verdict (skipped, cancelled, neutral)
    Neutral,
}

impl Glyph {
    /// Classify a run by status and conclusion.
    #[must_use]
    pub fn of(run: &Run) -> Self {
        if !run.is_completed() {
            return Self::Neutral;
        }
        match run.conclusion.as_str() {
            "success" => Self::Success,
            "skipped" | "cancelled" | "neutral" => Self::Neutral,
            _ => Self::Failure,
        }
    }

    /// Character drawn for this outcome
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Success => '✓',
            Self::Failure => 'x',
            Self::Neutral => '-',
        }
    }
}

/// The runs the summary looks at: the first `max_runs + 1`.
fn sampled(runs: &[Run], max_runs: usize) -> &[Run] {
    &runs[..runs.len().min(max_runs + 1)]
}

/// Glyphs for the most recent runs, in run order.
#[must_use]
pub fn glyphs(runs: &[Run], max_runs: usize) -> Vec<Glyph> {
    sampled(runs, max_runs).iter().map(Glyph::of).collect()
}

/// Render recent health as a glyph string, e.g. `✓✓x-✓✓`.
#[must_use]
pub fn health(runs: &[Run], max_runs: usize) -> String {
    glyphs(runs, max_runs).into_iter().map(Glyph::as_char).collect()
}

/// Average elapsed time of the most recent runs, in whole seconds.
///
/// Sums the elapsed seconds of the first `max_runs + 1` runs and divides by
/// `max_runs`, regardless of how many runs were summed. Returns zero when
/// `max_runs` is zero.
#[must_use]
pub fn average_elapsed(runs: &[Run], max_runs: usize) -> Duration {
    if max_runs == 0 {
        return Duration::ZERO;
    }
    let total: u64 = sampled(runs, max_runs)
        .iter()
        .map(|r| r.elapsed.as_secs())
        .sum();
    Duration::from_secs(total / max_runs as u64)
}
