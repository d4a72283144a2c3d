//! CLI output formatting
//!
//! Provides human-readable terminal display for the dashboard: label
//! formatting, workflow cards, the card grid layout and the plain list.

pub mod card;
pub mod display;
pub mod format;
pub mod layout;

pub use card::{render_card, Card};
pub use display::{render_dashboard, OutputMode};
pub use format::{pretty_ms, truncate_name};
pub use layout::layout;
