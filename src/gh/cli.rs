//! gh CLI command builder and runner
//!
//! Constructs `std::process::Command` for `gh api` requests and runs them
//! one at a time, returning stdout. The `GhApi` trait is the seam the
//! orchestrator is written against, so tests can substitute canned
//! responses for the real binary.

use std::io::ErrorKind;
use std::process::{Command, Stdio};
use std::time::Instant;

use thiserror::Error;
use tokio::process::Command as TokioCommand;

/// Name of the binary looked up on `PATH`
pub const GH_BINARY: &str = "gh";

/// Failures invoking `gh`
#[derive(Debug, Error)]
pub enum GhError {
    /// The binary is not on `PATH`
    #[error("could not find gh. Is it installed? error: {0}")]
    NotFound(#[source] std::io::Error),
    /// The process could not be started or waited on
    #[error("failed to run gh for '{path}': {source}")]
    Spawn {
        /// API path that was requested
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// gh exited unsuccessfully
    #[error("failed to run gh for '{path}' ({status}), stderr: {stderr}")]
    Failed {
        /// API path that was requested
        path: String,
        /// Exit status description
        status: String,
        /// Captured stderr, trimmed
        stderr: String,
    },
    /// stdout was not valid UTF-8
    #[error("gh returned non UTF-8 output for '{path}'")]
    InvalidOutput {
        /// API path that was requested
        path: String,
    },
}

/// A single `gh api` request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest<'a> {
    /// Endpoint path or full API URL
    pub path: &'a str,
    /// Optional `--jq` filter applied by gh
    pub jq: Option<&'a str>,
}

impl<'a> ApiRequest<'a> {
    /// Request a path with no filter
    #[must_use]
    pub const fn new(path: &'a str) -> Self {
        Self { path, jq: None }
    }

    /// Request a path filtered through `--jq`
    #[must_use]
    pub const fn with_jq(path: &'a str, jq: &'a str) -> Self {
        Self { path, jq: Some(jq) }
    }
}

/// Something that answers `gh api` requests with a JSON body.
#[allow(async_fn_in_trait)]
pub trait GhApi {
    /// Perform the request and return its stdout.
    async fn api(&self, request: &ApiRequest<'_>) -> Result<String, GhError>;
}

/// Build the `gh api` command for a request.
///
/// Arguments are `api --cache <ttl> <path>` followed by `--jq <expr>` when
/// a filter is given.
#[must_use]
pub fn build_command(request: &ApiRequest<'_>, cache_ttl: &str) -> Command {
    build_command_with_program(GH_BINARY, request, cache_ttl)
}

/// Build the `gh api` command for a request, running `program` instead of
/// the `gh` on `PATH`.
#[must_use]
pub fn build_command_with_program(
    program: &str,
    request: &ApiRequest<'_>,
    cache_ttl: &str,
) -> Command {
    let mut cmd = Command::new(program);
    cmd.arg("api");
    cmd.arg("--cache").arg(cache_ttl);
    cmd.arg(request.path);

    if let Some(jq) = request.jq {
        cmd.arg("--jq").arg(jq);
    }

    cmd
}

/// The real gh binary
#[derive(Debug, Clone)]
pub struct GhCli {
    program: String,
    cache_ttl: String,
}

impl GhCli {
    /// Create a client whose requests use the given cache TTL
    #[must_use]
    pub fn new(cache_ttl: &str) -> Self {
        Self::with_binary(GH_BINARY, cache_ttl)
    }

    /// Create a client that runs `program` in place of `gh`
    #[must_use]
    pub fn with_binary(program: &str, cache_ttl: &str) -> Self {
        Self {
            program: program.to_string(),
            cache_ttl: cache_ttl.to_string(),
        }
    }
}

impl GhApi for GhCli {
    async fn api(&self, request: &ApiRequest<'_>) -> Result<String, GhError> {
        let cmd = build_command_with_program(&self.program, request, &self.cache_ttl);
        tracing::debug!(path = request.path, jq = ?request.jq, "invoking gh api");

        let start = Instant::now();
        let output = TokioCommand::from(cmd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => GhError::NotFound(e),
                _ => GhError::Spawn {
                    path: request.path.to_string(),
                    source: e,
                },
            })?;

        tracing::trace!(
            path = request.path,
            elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
            bytes = output.stdout.len(),
            "gh api finished"
        );

        if !output.status.success() {
            return Err(GhError::Failed {
                path: request.path.to_string(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|_| GhError::InvalidOutput {
            path: request.path.to_string(),
        })
    }
}
