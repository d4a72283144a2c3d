//! Workflow cards
//!
//! A card is a fixed-width bordered block summarizing one workflow. Widths
//! are always measured in display columns on the unstyled text so colour
//! codes and wide characters never disturb alignment.

use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::format::{format_duration, pretty_ms, truncate_name};
use crate::actions::health::{average_elapsed, health};
use crate::actions::model::Workflow;
use crate::config::{DashConfig, CARD_PADDING};

/// A rendered card: its lines and the visible width of every line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// Lines top to bottom, possibly containing ANSI styling
    pub lines: Vec<String>,
    /// Visible width of each line
    pub width: usize,
}

impl Card {
    /// Number of lines
    #[must_use]
    pub fn height(&self) -> usize {
        self.lines.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Name,
    Health,
    Detail,
}

/// The unstyled text of a card, one entry per logical line.
fn card_body(workflow: &Workflow, config: &DashConfig) -> Vec<(LineKind, String)> {
    let name = truncate_name(&workflow.name, config.name_length);

    if workflow.runs.is_empty() {
        return vec![
            (LineKind::Name, name),
            (LineKind::Detail, "No runs".to_string()),
        ];
    }

    let health = health(&workflow.runs, config.max_runs);
    let avg = average_elapsed(&workflow.runs, config.max_runs);

    let mut body = vec![
        (LineKind::Name, name),
        (LineKind::Health, format!("Health: {health}")),
        (
            LineKind::Detail,
            format!("Avg elapsed: {}", format_duration(avg)),
        ),
    ];
    if workflow.billable_ms > 0 {
        body.push((
            LineKind::Detail,
            format!("Billable time: {}", pretty_ms(workflow.billable_ms)),
        ));
    }
    body
}

/// Greedy word wrap by display width; words wider than `width` are split.
fn wrap(line: &str, width: usize) -> Vec<String> {
    if width == 0 || line.width() <= width {
        return vec![line.to_string()];
    }

    let mut out = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;
    for word in line.split(' ') {
        let word_width = word.width();
        if word_width > width {
            if !current.is_empty() {
                out.push(std::mem::take(&mut current));
            }
            current_width = 0;
            for c in word.chars() {
                let cw = c.width().unwrap_or(0);
                if current_width + cw > width && !current.is_empty() {
                    out.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(c);
                current_width += cw;
            }
            continue;
        }

        let sep = usize::from(!current.is_empty());
        if current_width + sep + word_width > width {
            out.push(std::mem::take(&mut current));
            current_width = 0;
        } else if sep == 1 {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(word);
        current_width += word_width;
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

/// Right-pad `text` with spaces to `width` display columns.
fn pad(text: &str, width: usize) -> String {
    format!("{text}{}", " ".repeat(width.saturating_sub(text.width())))
}

fn style_glyphs(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '✓' => c.to_string().green().to_string(),
            'x' => c.to_string().red().bold().to_string(),
            '-' => c.to_string().dimmed().to_string(),
            _ => c.to_string(),
        })
        .collect()
}

fn style_line(kind: LineKind, padded: &str, styled: bool) -> String {
    if !styled {
        return padded.to_string();
    }
    match kind {
        LineKind::Name => padded.bold().to_string(),
        // Only the glyphs after the label are coloured.
        LineKind::Health => match padded.split_once(": ") {
            Some((label, rest)) => format!("{label}: {}", style_glyphs(rest)),
            None => style_glyphs(padded),
        },
        LineKind::Detail => padded.to_string(),
    }
}

fn border(text: &str, styled: bool) -> String {
    if styled {
        text.blue().to_string()
    } else {
        text.to_string()
    }
}

/// Draw body lines inside a double border with one line and one column of
/// padding on each side.
fn frame(body: &[(LineKind, String)], content_width: usize, styled: bool) -> Card {
    let inner = content_width + 2 * CARD_PADDING;
    let side_pad = " ".repeat(CARD_PADDING);
    let left = border("║", styled);
    let right = border("║", styled);
    let blank = format!("{left}{}{right}", " ".repeat(inner));

    let mut lines = vec![border(&format!("╔{}╗", "═".repeat(inner)), styled), blank.clone()];
    for (kind, text) in body {
        for piece in wrap(text, content_width) {
            let content = style_line(*kind, &pad(&piece, content_width), styled);
            lines.push(format!("{left}{side_pad}{content}{side_pad}{right}"));
        }
    }
    lines.push(blank);
    lines.push(border(&format!("╚{}╝", "═".repeat(inner)), styled));

    Card {
        lines,
        width: inner + 2,
    }
}

/// Render one workflow as a bordered card.
///
/// Cards contain the truncated name, the health glyphs, the average elapsed
/// time and, when non-zero, the billable time. A workflow without runs gets
/// a short "No runs" card.
#[must_use]
pub fn render_card(workflow: &Workflow, config: &DashConfig, styled: bool) -> Card {
    frame(&card_body(workflow, config), config.content_width(), styled)
}

/// Render one workflow as a single plain line for non-terminal output.
#[must_use]
pub fn render_line(workflow: &Workflow, config: &DashConfig) -> String {
    card_body(workflow, config)
        .into_iter()
        .map(|(_, text)| text)
        .collect::<Vec<_>>()
        .join("  ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{make_run, make_workflow};

    fn body_texts(card: &Card) -> Vec<String> {
        // Strip the border column and padding from content lines.
        card.lines[2..card.lines.len() - 2]
            .iter()
            .map(|l| {
                l.trim_start_matches('║')
                    .trim_end_matches('║')
                    .trim()
                    .to_string()
            })
            .collect()
    }

    #[test]
    fn test_card_contains_fields_in_order() {
        let wf = make_workflow(
            "CI",
            vec![make_run("success", 60), make_run("failure", 120)],
        );
        let card = render_card(&wf, &DashConfig::default(), false);
        assert_eq!(
            body_texts(&card),
            vec!["CI", "Health: ✓x", "Avg elapsed: 36s"]
        );
    }

    #[test]
    fn test_card_shows_billable_only_when_nonzero() {
        let mut wf = make_workflow("CI", vec![make_run("success", 10)]);
        let without = render_card(&wf, &DashConfig::default(), false);
        assert!(!body_texts(&without).iter().any(|l| l.starts_with("Billable")));

        wf.billable_ms = 90_000;
        let with = render_card(&wf, &DashConfig::default(), false);
        assert_eq!(body_texts(&with).last().unwrap(), "Billable time: 1.50m");
    }

    #[test]
    fn test_card_without_runs_is_short() {
        let wf = make_workflow("Nightly", vec![]);
        let card = render_card(&wf, &DashConfig::default(), false);
        assert_eq!(body_texts(&card), vec!["Nightly", "No runs"]);
    }

    #[test]
    fn test_card_truncates_long_name() {
        let wf = make_workflow("Build and publish release artifacts", vec![]);
        let card = render_card(&wf, &DashConfig::default(), false);
        assert_eq!(body_texts(&card)[0], "Build and publish...");
    }

    #[test]
    fn test_card_lines_share_column_width() {
        let mut wf = make_workflow("Deploy", vec![make_run("success", 4000)]);
        wf.billable_ms = 12_345_678;
        let config = DashConfig::default();
        let card = render_card(&wf, &config, false);

        assert_eq!(card.width, config.column_width());
        for line in &card.lines {
            assert_eq!(line.chars().count(), card.width, "line: {line:?}");
        }
    }

    #[test]
    fn test_card_border_shape() {
        let wf = make_workflow("CI", vec![]);
        let card = render_card(&wf, &DashConfig::default(), false);
        assert!(card.lines[0].starts_with('╔') && card.lines[0].ends_with('╗'));
        assert!(card.lines.last().unwrap().starts_with('╚'));
        // border, padding, two body lines, padding, border
        assert_eq!(card.height(), 6);
    }

    #[test]
    fn test_styled_card_keeps_width_metadata() {
        let wf = make_workflow("CI", vec![make_run("success", 10)]);
        let plain = render_card(&wf, &DashConfig::default(), false);
        let styled = render_card(&wf, &DashConfig::default(), true);
        assert_eq!(plain.width, styled.width);
        assert_eq!(plain.height(), styled.height());
    }

    #[test]
    fn test_card_with_wide_name_keeps_border_aligned() {
        let wf = make_workflow("ビルドとテストの実行ジョブ", vec![make_run("success", 10)]);
        let config = DashConfig::default();
        let card = render_card(&wf, &config, false);

        assert_eq!(body_texts(&card)[0], "ビルドとテストの...");
        for line in &card.lines {
            assert_eq!(line.width(), config.column_width(), "line: {line:?}");
        }
    }

    #[test]
    fn test_pad_counts_display_columns() {
        assert_eq!(pad("ビルド", 8), "ビルド  ");
        assert_eq!(pad("CI", 4), "CI  ");
    }

    #[test]
    fn test_wrap_hard_splits_wide_words_by_columns() {
        assert_eq!(wrap("ビルドテスト", 4), vec!["ビル", "ドテ", "スト"]);
    }

    #[test]
    fn test_card_health_line_matches_health_summary() {
        let runs: Vec<_> = ["success", "failure", "skipped", "success", "success", "success", "failure"]
            .iter()
            .map(|c| make_run(c, 10))
            .collect();
        let wf = make_workflow("CI", runs);
        let config = DashConfig::default();
        let card = render_card(&wf, &config, false);
        assert_eq!(
            body_texts(&card)[1],
            format!("Health: {}", health(&wf.runs, config.max_runs))
        );
        assert_eq!(body_texts(&card)[1], "Health: ✓x-✓✓✓");
    }

    #[test]
    fn test_wrap_splits_on_words() {
        assert_eq!(
            wrap("Billable time: 205.76m", 20),
            vec!["Billable time:", "205.76m"]
        );
    }

    #[test]
    fn test_wrap_hard_splits_long_words() {
        assert_eq!(wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn test_wrap_short_line_untouched() {
        assert_eq!(wrap("Health: ✓✓", 20), vec!["Health: ✓✓"]);
    }

    #[test]
    fn test_render_line_joins_fields() {
        let mut wf = make_workflow("CI", vec![make_run("success", 50)]);
        wf.billable_ms = 60_000;
        assert_eq!(
            render_line(&wf, &DashConfig::default()),
            "CI  Health: ✓  Avg elapsed: 10s  Billable time: 1m"
        );
    }

    #[test]
    fn test_render_line_no_runs() {
        let wf = make_workflow("CI", vec![]);
        assert_eq!(render_line(&wf, &DashConfig::default()), "CI  No runs");
    }
}
