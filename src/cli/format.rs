//! Short human-readable labels for durations and names

use std::time::Duration;

use unicode_width::UnicodeWidthChar;

const MS_PER_MINUTE: u64 = 60_000;

/// Format billable milliseconds: `59999ms`, `1m`, `2.00m`.
#[must_use]
pub fn pretty_ms(ms: u64) -> String {
    if ms == MS_PER_MINUTE {
        return "1m".to_string();
    }
    if ms < MS_PER_MINUTE {
        return format!("{ms}ms");
    }
    #[allow(clippy::cast_precision_loss)]
    let minutes = ms as f64 / MS_PER_MINUTE as f64;
    format!("{minutes:.2}m")
}

/// Format a duration at second precision: `0s`, `45s`, `1m30s`, `2h0m5s`.
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let total = duration.as_secs();
    let hours = total / 3600;
    let mins = (total % 3600) / 60;
    let secs = total % 60;

    if hours > 0 {
        format!("{hours}h{mins}m{secs}s")
    } else if mins > 0 {
        format!("{mins}m{secs}s")
    } else {
        format!("{secs}s")
    }
}

/// `1 day`, `3 days`
#[must_use]
pub fn pluralize(num: u64, thing: &str) -> String {
    if num == 1 {
        format!("{num} {thing}")
    } else {
        format!("{num} {thing}s")
    }
}

/// Coarse description of a span of time, e.g. `5 hours`, `30 days`, `2 months`.
#[must_use]
pub fn fuzzy_ago(ago: Duration) -> String {
    let hours = ago.as_secs() / 3600;
    if hours < 24 {
        return pluralize(hours, "hour");
    }
    let days = hours / 24;
    if days < 30 {
        return pluralize(days, "day");
    }
    if days < 365 {
        return pluralize(days / 30, "month");
    }
    pluralize(days / 365, "year")
}

/// Cut `name` to at most `max` display columns, appending `...` when
/// anything was cut. A wide character that would straddle the limit is
/// dropped whole.
#[must_use]
pub fn truncate_name(name: &str, max: usize) -> String {
    let mut cut = String::new();
    let mut used = 0;
    for c in name.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max {
            return format!("{cut}...");
        }
        used += w;
        cut.push(c);
    }
    cut
}
