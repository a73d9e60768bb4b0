//! Review and submit page

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::helpers::display_value;
use crate::app::App;
use crate::form::{Field, SubmitStatus, WizardStep};
use crate::ui::theme;
use crate::ui::widgets::Spinner;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(5)])
        .split(area);

    draw_summary(frame, chunks[0], app);
    draw_status(frame, chunks[1], app);
}

fn draw_summary(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![Line::from("")];

    for field in Field::ALL {
        let value = app.form.value(field);
        let mut spans = vec![Span::styled(
            format!("  {:<18}", format!("{}:", field.label())),
            theme::field_label(),
        )];
        if value.is_empty() {
            spans.push(Span::styled("(empty)", theme::hint()));
        } else {
            spans.push(Span::styled(
                display_value(value, field.is_secret(), false),
                theme::summary_value(),
            ));
        }
        if let Some(err) = app.form.visible_error(field) {
            spans.push(Span::styled(format!("  ⚠ {}", err), theme::field_error()));
        }
        lines.push(Line::from(spans));
    }

    let title = if app.form.is_submitted() {
        "Submitted Values"
    } else {
        WizardStep::Review.title()
    };
    let summary = Paragraph::new(lines).block(theme::page_block(title));
    frame.render_widget(summary, area);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::hint());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if let Some((at, err)) = app.visible_submit_error() {
        let lines = vec![
            Line::from(Span::styled(
                format!(" ✗ {} at {}", err.summary(), at.format("%H:%M:%S")),
                theme::submit_failed(),
            )),
            Line::from(Span::styled(format!("   {}", err.suggestion()), theme::hint())),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
        return;
    }

    match app.form.submit_status() {
        SubmitStatus::InFlight => {
            let label = Line::from(vec![
                Span::styled("Submitting to ", theme::body()),
                Span::styled(app.endpoint().to_string(), theme::submitting()),
                Span::styled("...", theme::hint()),
            ]);
            frame.render_widget(Spinner::new(app.spinner_state).label(label), inner);
        }
        SubmitStatus::Succeeded { at } => {
            let lines = vec![
                Line::from(Span::styled(
                    format!(" ✓ Submitted at {}", at.format("%H:%M:%S")),
                    theme::submitted(),
                )),
                Line::from(Span::styled(
                    "   The values above were sent. Press Esc to exit.",
                    theme::hint(),
                )),
            ];
            frame.render_widget(Paragraph::new(lines), inner);
        }
        // Idle, or a failure that is only logged
        _ => frame.render_widget(Paragraph::new(ready_lines(app)), inner),
    }
}

fn ready_lines(app: &App) -> Vec<Line<'static>> {
    let flagged = app
        .form
        .errors()
        .keys()
        .filter(|f| app.form.is_touched(**f))
        .count();

    if flagged > 0 {
        return vec![Line::from(Span::styled(
            format!(
                " {} field{} need{} attention. Press Esc to go back and fix.",
                flagged,
                if flagged == 1 { "" } else { "s" },
                if flagged == 1 { "s" } else { "" },
            ),
            theme::field_error(),
        ))];
    }

    vec![Line::from(vec![
        Span::styled(" Press Enter to submit to ", theme::hint()),
        Span::styled(app.endpoint().to_string(), theme::submitting()),
    ])]
}
