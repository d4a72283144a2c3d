//! gh CLI integration
//!
//! This module handles `gh api` command building, subprocess execution
//! and decoding of the JSON payloads it returns.

pub mod cli;
pub mod payload;

pub use cli::{build_command, build_command_with_program, ApiRequest, GhApi, GhCli, GhError};
