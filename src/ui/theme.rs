//! Cybex color theme
//!
//! Styles are named for the part of the wizard they paint.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders};

const ACCENT: Color = Color::Cyan;
const VALUE: Color = Color::Blue;
const DONE: Color = Color::Green;
const INVALID: Color = Color::Red;
const INK: Color = Color::White;
const MUTED: Color = Color::DarkGray;

// =============================================================================
// Pages
// =============================================================================

/// Bordered frame around a wizard page, titled with the page name
pub fn page_block(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
        .title(Span::styled(format!(" {} ", title), page_title()))
}

pub fn page_title() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Help text, separators and placeholders
pub fn hint() -> Style {
    Style::default().fg(MUTED)
}

pub fn body() -> Style {
    Style::default().fg(INK)
}

/// Border of the stepper and of popups drawn over a page
pub fn emphasis_border() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Key names in footers and dialogs
pub fn key() -> Style {
    Style::default().fg(VALUE)
}

// =============================================================================
// Fields
// =============================================================================

pub fn field_label() -> Style {
    Style::default().fg(MUTED)
}

pub fn field_value() -> Style {
    Style::default().fg(INK)
}

/// The input receiving keystrokes
pub fn field_focused() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn field_error() -> Style {
    Style::default().fg(INVALID)
}

/// Entered values on the review page
pub fn summary_value() -> Style {
    Style::default().fg(VALUE)
}

// =============================================================================
// Stepper
// =============================================================================

pub fn step_done() -> Style {
    Style::default().fg(DONE)
}

pub fn step_active() -> Style {
    field_focused()
}

pub fn step_pending() -> Style {
    Style::default().fg(MUTED)
}

pub fn step_label(active: bool) -> Style {
    if active {
        page_title()
    } else {
        body()
    }
}

// =============================================================================
// Submission
// =============================================================================

/// Spinner and endpoint while the request is in flight
pub fn submitting() -> Style {
    Style::default().fg(VALUE)
}

pub fn submitted() -> Style {
    Style::default().fg(DONE)
}

pub fn submit_failed() -> Style {
    Style::default().fg(INVALID)
}
