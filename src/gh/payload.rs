//! JSON payloads returned by the GitHub REST API via `gh api`
//!
//! Only the fields the dashboard reads are declared; everything else is
//! ignored by serde.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// `repos/{owner}/{repo}` and entries of `orgs/{org}/repos`, `users/{user}/repos`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepositoryPayload {
    /// "owner/name"
    pub full_name: String,
    /// Whether the repository is private
    #[serde(default)]
    pub private: bool,
}

/// Entry of `repos/{owner}/{repo}/actions/workflows` `.workflows`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorkflowPayload {
    /// "active", "disabled_manually", "disabled_inactivity", ...
    pub state: String,
    /// Display name
    pub name: String,
    /// API URL of the workflow
    pub url: String,
}

impl WorkflowPayload {
    /// Disabled workflows are left off the dashboard
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.state.starts_with("disabled")
    }
}

/// Entry of `{workflow url}/runs` `.workflow_runs`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RunPayload {
    /// When the run was created
    pub created_at: DateTime<Utc>,
    /// When the run last changed state
    pub updated_at: DateTime<Utc>,
    /// Lifecycle phase
    pub status: String,
    /// Terminal outcome; null while the run is in progress
    #[serde(default)]
    pub conclusion: Option<String>,
    /// API URL of the run
    pub url: String,
}

/// Per-platform billing entry of `{run url}/timing` `.billable`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct PlatformTiming {
    /// Billable milliseconds on this platform
    #[serde(default)]
    pub total_ms: u64,
}

/// `{run url}/timing` `.billable`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct BillablePayload {
    /// Linux runners
    #[serde(rename = "UBUNTU", default)]
    pub ubuntu: PlatformTiming,
    /// macOS runners
    #[serde(rename = "MACOS", default)]
    pub macos: PlatformTiming,
    /// Windows runners
    #[serde(rename = "WINDOWS", default)]
    pub windows: PlatformTiming,
}

impl BillablePayload {
    /// Billable milliseconds summed across the three runner platforms,
    /// saturating at `u64::MAX`
    #[must_use]
    pub const fn total_ms(&self) -> u64 {
        self.ubuntu
            .total_ms
            .saturating_add(self.macos.total_ms)
            .saturating_add(self.windows.total_ms)
    }
}
