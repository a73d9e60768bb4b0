//! Shared helper functions for wizard screens

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::form::Field;
use crate::ui::theme;

/// Width of the label column
const LABEL_WIDTH: usize = 20;

/// Text shown for a value: masked for passwords, with a cursor when focused
pub fn display_value(value: &str, secret: bool, focused: bool) -> String {
    let mut shown = if secret {
        "*".repeat(value.chars().count())
    } else {
        value.to_string()
    };
    if focused {
        shown.push('_');
    }
    shown
}

/// Label, value and (once touched) error line for each input on a page
pub fn input_lines(app: &App, fields: &[Field]) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("")];

    for field in fields {
        let focused = app.focus == *field;
        let style = if focused {
            theme::field_focused()
        } else {
            theme::field_value()
        };
        let value = display_value(app.form.value(*field), field.is_secret(), focused);

        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<width$}", format!("{}:", field.label()), width = LABEL_WIDTH),
                theme::field_label(),
            ),
            Span::styled(value, style),
        ]));

        match app.form.visible_error(*field) {
            Some(err) => lines.push(Line::from(Span::styled(
                format!("  {:<width$}⚠ {}", "", err, width = LABEL_WIDTH),
                theme::field_error(),
            ))),
            None => lines.push(Line::from("")),
        }
    }

    lines
}

/// Draw a footer with key hints
pub fn draw_footer(frame: &mut Frame, area: Rect, hints: &[&str]) {
    let spans: Vec<Span> = hints
        .iter()
        .enumerate()
        .flat_map(|(i, hint)| {
            let mut v = vec![];
            if i > 0 {
                v.push(Span::styled("  ", theme::hint()));
            }
            v.push(Span::styled("[", theme::hint()));
            let parts: Vec<&str> = hint.splitn(2, ' ').collect();
            if parts.len() == 2 {
                v.push(Span::styled(parts[0], theme::key()));
                v.push(Span::styled(format!("] {}", parts[1]), theme::hint()));
            } else {
                v.push(Span::styled(*hint, theme::key()));
                v.push(Span::styled("]", theme::hint()));
            }
            v
        })
        .collect();

    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_value_masks_secrets() {
        assert_eq!(display_value("hunter22", true, false), "********");
        assert_eq!(display_value("äb", true, true), "**_");
        assert_eq!(display_value("Ada", false, true), "Ada_");
        assert_eq!(display_value("", false, false), "");
    }
}
