//! In-flight indicator: an animated glyph followed by a status line

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::ui::theme;

/// Braille animation frames
const SPINNER_FRAMES: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub struct Spinner<'a> {
    frame: usize,
    label: Line<'a>,
}

impl<'a> Spinner<'a> {
    pub fn new(frame: usize) -> Self {
        Self {
            frame,
            label: Line::default(),
        }
    }

    /// Text drawn after the glyph
    pub fn label(mut self, label: impl Into<Line<'a>>) -> Self {
        self.label = label.into();
        self
    }

    fn glyph(&self) -> char {
        SPINNER_FRAMES[self.frame % SPINNER_FRAMES.len()]
    }

    fn line(self) -> Line<'a> {
        let mut spans = vec![Span::styled(format!(" [{}] ", self.glyph()), theme::submitting())];
        spans.extend(self.label.spans);
        Line::from(spans)
    }
}

impl Widget for Spinner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 1 || area.height < 1 {
            return;
        }
        let line = self.line();
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
