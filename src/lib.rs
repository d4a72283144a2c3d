//! actions-dash - GitHub Actions health dashboard
//!
//! Queries workflow runs through the `gh` CLI, summarizes recent health and
//! billable time per workflow, and renders the result as a card grid or a
//! plain list.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

pub mod actions;
pub mod cli;
pub mod config;
pub mod gh;
pub mod logging;

#[cfg(test)]
mod testutil;

// Re-export commonly used types
pub use actions::{build_dashboard, Dashboard, FetchOptions, Repository, Run, Window, Workflow};
pub use cli::{render_dashboard, OutputMode};
pub use config::DashConfig;
pub use gh::{GhApi, GhCli, GhError};
