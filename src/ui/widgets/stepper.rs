//! Horizontal wizard stepper widget

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::form::WizardStep;
use crate::ui::theme;

pub struct Stepper {
    active: WizardStep,
}

impl Stepper {
    pub fn new(active: WizardStep) -> Self {
        Self { active }
    }

    fn spans(&self) -> Vec<Span<'static>> {
        let active = self.active.index();
        let mut spans = Vec::new();
        for (i, step) in WizardStep::ALL.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" ── ", theme::hint()));
            }
            let (icon, style) = if i < active {
                ("✓".to_string(), theme::step_done())
            } else if i == active {
                (format!("{}", i + 1), theme::step_active())
            } else {
                (format!("{}", i + 1), theme::step_pending())
            };
            spans.push(Span::styled(format!(" {} ", icon), style));
            spans.push(Span::styled(
                format!(" {}", step.title()),
                theme::step_label(i == active),
            ));
        }
        spans
    }
}

impl Widget for Stepper {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let paragraph = Paragraph::new(Line::from(self.spans()))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme::emphasis_border()),
            );
        paragraph.render(area, buf);
    }
}
