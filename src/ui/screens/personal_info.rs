//! Personal info page

use ratatui::{layout::Rect, widgets::Paragraph, Frame};

use super::helpers::input_lines;
use crate::app::App;
use crate::form::WizardStep;
use crate::ui::theme;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let step = WizardStep::PersonalInfo;
    let fields = Paragraph::new(input_lines(app, step.fields())).block(theme::page_block(step.title()));
    frame.render_widget(fields, area);
}
