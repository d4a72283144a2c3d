//! Dashboard data fetching
//!
//! Resolves the selector to repositories, then walks workflows, runs and
//! (for private repositories) per-run billing, one `gh` request at a time.
//! Any failed request aborts the whole fetch.

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;

use super::model::{Repository, Run, Workflow, STATUS_COMPLETED};
use super::window::Window;
use crate::gh::payload::{BillablePayload, RepositoryPayload, RunPayload, WorkflowPayload};
use crate::gh::{ApiRequest, GhApi};

/// What to fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    /// Organization or user login
    pub selector: String,
    /// Explicit repository names under the selector; empty means all
    pub repositories: Vec<String>,
    /// Only runs finished inside this window are kept
    pub window: Window,
}

/// Everything the renderer needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    /// Organization or user login
    pub selector: String,
    /// Window the runs were filtered to
    pub window: Window,
    /// Repositories with their workflows
    pub repositories: Vec<Repository>,
    /// Billable time summed over every repository and workflow
    pub total_billable_ms: u64,
}

/// Issue a request and decode its JSON body.
async fn get_json<T, A>(api: &A, request: &ApiRequest<'_>) -> Result<T>
where
    T: DeserializeOwned,
    A: GhApi,
{
    let body = api.api(request).await?;
    serde_json::from_str(&body)
        .with_context(|| format!("Failed to decode gh response for '{}'", request.path))
}

async fn repositories_at<A: GhApi>(api: &A, path: &str) -> Result<Vec<RepositoryPayload>> {
    get_json(api, &ApiRequest::new(path)).await
}

/// Turn the selector (and optional explicit names) into repository payloads.
///
/// With explicit names each `repos/<selector>/<name>` is fetched. Otherwise
/// the selector is tried as an organization, then as a user; if both fail
/// the error carries both causes.
pub async fn resolve_repositories<A: GhApi>(
    api: &A,
    selector: &str,
    names: &[String],
) -> Result<Vec<RepositoryPayload>> {
    if !names.is_empty() {
        let mut repos = Vec::with_capacity(names.len());
        for name in names {
            let path = format!("repos/{selector}/{name}");
            let repo: RepositoryPayload = get_json(api, &ApiRequest::new(&path))
                .await
                .with_context(|| format!("Failed to fetch repository '{selector}/{name}'"))?;
            repos.push(repo);
        }
        return Ok(repos);
    }

    match repositories_at(api, &format!("orgs/{selector}/repos")).await {
        Ok(repos) => Ok(repos),
        Err(org_err) => {
            tracing::debug!(selector, "not an organization, trying user lookup");
            repositories_at(api, &format!("users/{selector}/repos"))
                .await
                .map_err(|user_err| {
                    anyhow!("could not find '{selector}': {org_err:#}; {user_err:#}")
                })
        }
    }
}

/// Keep completed runs that finished inside the window, converting them to
/// the model. Order is preserved.
#[must_use]
pub fn recent_runs(payloads: Vec<RunPayload>, window: Window, now: DateTime<Utc>) -> Vec<Run> {
    payloads
        .into_iter()
        .filter(|r| r.status == STATUS_COMPLETED)
        .filter_map(|r| {
            if !window.contains(r.updated_at, now) {
                tracing::debug!(url = %r.url, "run outside window");
                return None;
            }
            let elapsed = (r.updated_at - r.created_at).to_std().unwrap_or_default();
            Some(Run {
                finished: r.updated_at,
                elapsed,
                status: r.status,
                conclusion: r.conclusion.unwrap_or_default(),
                url: r.url,
            })
        })
        .collect()
}

/// Billable milliseconds for a set of runs, summed across platforms.
async fn sum_billable_ms<A: GhApi>(api: &A, runs: &[Run]) -> Result<u64> {
    let mut total: u64 = 0;
    for run in runs {
        let path = format!("{}/timing", run.url);
        let billable: BillablePayload =
            get_json(api, &ApiRequest::with_jq(&path, ".billable")).await?;
        total = billable.total_ms().saturating_add(total);
    }
    Ok(total)
}

/// Fetch the active workflows of a repository with their recent runs.
///
/// Billable time is only looked up for private repositories and is counted
/// per workflow.
pub async fn fetch_workflows<A: GhApi>(
    api: &A,
    repo: &RepositoryPayload,
    window: Window,
    now: DateTime<Utc>,
) -> Result<Vec<Workflow>> {
    let path = format!("repos/{}/actions/workflows", repo.full_name);
    let payloads: Vec<WorkflowPayload> = get_json(api, &ApiRequest::with_jq(&path, ".workflows"))
        .await
        .with_context(|| format!("Failed to list workflows for '{}'", repo.full_name))?;

    let mut workflows = Vec::new();
    for payload in payloads {
        if payload.is_disabled() {
            tracing::debug!(workflow = %payload.name, state = %payload.state, "skipping disabled workflow");
            continue;
        }

        let runs_path = format!("{}/runs", payload.url);
        let run_payloads: Vec<RunPayload> =
            get_json(api, &ApiRequest::with_jq(&runs_path, ".workflow_runs"))
                .await
                .with_context(|| format!("Failed to list runs for '{}'", payload.name))?;
        let runs = recent_runs(run_payloads, window, now);

        let billable_ms = if repo.private {
            sum_billable_ms(api, &runs)
                .await
                .with_context(|| format!("Failed to fetch billable time for '{}'", payload.name))?
        } else {
            0
        };

        workflows.push(Workflow {
            name: payload.name,
            runs,
            billable_ms,
        });
    }

    Ok(workflows)
}

/// Resolve, fetch and aggregate everything for one dashboard.
pub async fn build_dashboard<A: GhApi>(
    api: &A,
    options: &FetchOptions,
    now: DateTime<Utc>,
) -> Result<Dashboard> {
    let payloads = resolve_repositories(api, &options.selector, &options.repositories).await?;

    let mut repositories = Vec::with_capacity(payloads.len());
    for payload in payloads {
        let workflows = fetch_workflows(api, &payload, options.window, now).await?;
        repositories.push(Repository {
            full_name: payload.full_name,
            private: payload.private,
            workflows,
        });
    }

    let total_billable_ms = repositories
        .iter()
        .map(Repository::billable_ms)
        .fold(0, u64::saturating_add);

    Ok(Dashboard {
        selector: options.selector.clone(),
        window: options.window,
        repositories,
        total_billable_ms,
    })
}
