//! Account details page (email and password)

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::helpers::input_lines;
use crate::app::App;
use crate::constants::MIN_PASSWORD_LENGTH;
use crate::form::WizardStep;
use crate::ui::theme;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let step = WizardStep::AccountDetails;
    let mut lines = input_lines(app, step.fields());
    lines.push(Line::from(Span::styled(
        format!(
            "  Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        ),
        theme::hint(),
    )));

    let fields = Paragraph::new(lines).block(theme::page_block(step.title()));
    frame.render_widget(fields, area);
}
