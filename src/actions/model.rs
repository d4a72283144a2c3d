//! Dashboard data model
//!
//! Repositories own workflows, workflows own runs. Everything is built
//! during a single fetch pass and read-only afterwards.

use std::time::Duration;

use chrono::{DateTime, Utc};

/// Status string reported by the API for a finished run
pub const STATUS_COMPLETED: &str = "completed";

/// One execution of a workflow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    /// When the run last updated (its finish time for completed runs)
    pub finished: DateTime<Utc>,
    /// Wall-clock time between creation and finish
    pub elapsed: Duration,
    /// Lifecycle phase, e.g. "completed", "in_progress"
    pub status: String,
    /// Terminal outcome, e.g. "success", "failure"
    pub conclusion: String,
    /// API URL of the run
    pub url: String,
}

impl Run {
    /// Whether the run has reached its terminal phase
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == STATUS_COMPLETED
    }
}

/// A named CI pipeline within a repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workflow {
    /// Display name of the workflow
    pub name: String,
    /// Runs, most recent first
    pub runs: Vec<Run>,
    /// Billable milliseconds across this workflow's runs (private repos only)
    pub billable_ms: u64,
}

/// A repository and its active workflows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    /// "owner/name"
    pub full_name: String,
    /// Whether the repository is private (and therefore metered)
    pub private: bool,
    /// Active workflows, in API order
    pub workflows: Vec<Workflow>,
}

impl Repository {
    /// Sum of billable time over every workflow in the repository,
    /// saturating at `u64::MAX`
    #[must_use]
    pub fn billable_ms(&self) -> u64 {
        self.workflows
            .iter()
            .map(|w| w.billable_ms)
            .fold(0, u64::saturating_add)
    }
}
