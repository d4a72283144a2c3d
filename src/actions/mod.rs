//! GitHub Actions domain
//!
//! The data model, run-health summarization, recency filtering and the
//! fetch pass that assembles a dashboard.

pub mod fetch;
pub mod health;
pub mod model;
pub mod window;

pub use fetch::{build_dashboard, Dashboard, FetchOptions};
pub use health::{average_elapsed, health, Glyph};
pub use model::{Repository, Run, Workflow};
pub use window::Window;
