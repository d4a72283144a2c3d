//! Dashboard rendering
//!
//! Produces the full dashboard text either as a card grid (interactive
//! terminal of known width) or as a plain list (piped output). The caller
//! decides which through `OutputMode`; nothing here queries the terminal.

use std::fmt::Write as _;

use colored::Colorize;

use super::card::{render_card, render_line, Card};
use super::format::{fuzzy_ago, pretty_ms};
use super::layout::layout;
use crate::actions::fetch::Dashboard;
use crate::actions::model::Repository;
use crate::config::DashConfig;

/// How the dashboard is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Bordered cards packed into rows of a terminal this many columns wide
    Cards {
        /// Terminal width in columns
        width: usize,
        /// Whether ANSI styling is applied
        styled: bool,
    },
    /// One line per workflow, no packing or styling
    Plain,
}

impl OutputMode {
    /// Pick the mode from terminal capabilities: cards only when stdout is
    /// a terminal whose width is known.
    #[must_use]
    pub const fn detect(is_terminal: bool, width: Option<usize>) -> Self {
        match (is_terminal, width) {
            (true, Some(width)) => Self::Cards {
                width,
                styled: true,
            },
            _ => Self::Plain,
        }
    }
}

fn header(dashboard: &Dashboard) -> String {
    format!(
        "GitHub Actions dashboard for {} for the last {}\nTotal billable time: {}\n",
        dashboard.selector,
        fuzzy_ago(dashboard.window.duration()),
        pretty_ms(dashboard.total_billable_ms)
    )
}

fn repository_cards(
    repo: &Repository,
    config: &DashConfig,
    width: usize,
    styled: bool,
) -> Vec<String> {
    let cards: Vec<Card> = repo
        .workflows
        .iter()
        .map(|w| render_card(w, config, styled))
        .collect();
    layout(&cards, config.column_width(), width)
}

/// Render the whole dashboard.
///
/// Repositories without active workflows are left out.
#[must_use]
pub fn render_dashboard(dashboard: &Dashboard, config: &DashConfig, mode: OutputMode) -> String {
    let mut out = header(dashboard);

    for repo in dashboard
        .repositories
        .iter()
        .filter(|r| !r.workflows.is_empty())
    {
        out.push('\n');
        match mode {
            OutputMode::Cards { width, styled } => {
                let title = if styled {
                    repo.full_name.bold().to_string()
                } else {
                    repo.full_name.clone()
                };
                let _ = writeln!(out, "{title}");
                for row in repository_cards(repo, config, width, styled) {
                    let _ = writeln!(out, "{row}");
                }
            }
            OutputMode::Plain => {
                let _ = writeln!(out, "{}", repo.full_name);
                for workflow in &repo.workflows {
                    let _ = writeln!(out, "  {}", render_line(workflow, config));
                }
            }
        }
    }

    out
}
