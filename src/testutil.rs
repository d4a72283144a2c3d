//! Shared test utilities
//!
//! Common helpers used across test modules. Only compiled in test builds.

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};

use crate::actions::model::{Run, Workflow};
use crate::gh::{ApiRequest, GhApi, GhError};

/// In-memory `gh` that answers from canned responses keyed by path.
///
/// Unknown paths fail the way gh does for a 404.
#[derive(Debug, Default)]
pub struct FakeGh {
    responses: HashMap<String, String>,
    calls: RefCell<Vec<String>>,
}

impl FakeGh {
    /// Create an empty fake
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a response body for a path
    #[must_use]
    pub fn with(mut self, path: &str, body: &str) -> Self {
        self.responses.insert(path.to_string(), body.to_string());
        self
    }

    /// Paths requested so far, in order
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl GhApi for FakeGh {
    async fn api(&self, request: &ApiRequest<'_>) -> Result<String, GhError> {
        self.calls.borrow_mut().push(request.path.to_string());
        self.responses
            .get(request.path)
            .cloned()
            .ok_or_else(|| GhError::Failed {
                path: request.path.to_string(),
                status: "exit status: 1".to_string(),
                stderr: "gh: Not Found (HTTP 404)".to_string(),
            })
    }
}

/// A fixed reference instant for deterministic window checks.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

/// Create a completed run with the given conclusion and elapsed seconds.
#[must_use]
pub fn make_run(conclusion: &str, elapsed_secs: u64) -> Run {
    Run {
        finished: fixed_now(),
        elapsed: Duration::from_secs(elapsed_secs),
        status: "completed".to_string(),
        conclusion: conclusion.to_string(),
        url: String::new(),
    }
}

/// Create a workflow from runs, with no billable time.
#[must_use]
pub fn make_workflow(name: &str, runs: Vec<Run>) -> Workflow {
    Workflow {
        name: name.to_string(),
        runs,
        billable_ms: 0,
    }
}
