//! Keyboard input handlers for the application

use crossterm::event::KeyCode;

use super::App;
use crate::constants::MAX_INPUT_LENGTH;
use crate::form::{Advance, SubmitGate};
use crate::submit::errors::SubmitError;
use crate::submit::start_submission;

impl App {
    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyCode) {
        // Handle exit confirmation dialog
        if self.show_exit_confirm {
            match key {
                KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                    self.should_quit = true;
                }
                KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                    self.show_exit_confirm = false;
                }
                _ => {}
            }
            return;
        }

        match key {
            KeyCode::Esc => self.handle_back(),
            KeyCode::Enter => self.handle_next(),
            KeyCode::Tab | KeyCode::Down => self.move_focus(1),
            KeyCode::BackTab | KeyCode::Up => self.move_focus(-1),
            KeyCode::Char(c) => {
                if self.editing() {
                    let mut value = self.form.value(self.focus).to_string();
                    if value.chars().count() < MAX_INPUT_LENGTH {
                        value.push(c);
                        self.form.set_field(self.focus, value);
                    }
                }
            }
            KeyCode::Backspace => {
                if self.editing() {
                    let mut value = self.form.value(self.focus).to_string();
                    if value.pop().is_some() {
                        self.form.set_field(self.focus, value);
                    }
                }
            }
            _ => {}
        }
    }

    /// True when the focused input is on the current page and the form is still open
    fn editing(&self) -> bool {
        self.focus.step() == self.form.active_step() && !self.form.is_submitted()
    }

    /// Back button; on the first page, and once submitted, Esc asks to exit instead
    fn handle_back(&mut self) {
        if self.form.retreat() {
            self.focus_step(self.form.active_step());
        } else {
            self.show_exit_confirm = true;
        }
    }

    /// Next/Submit button
    fn handle_next(&mut self) {
        match self.form.advance() {
            Advance::Moved(step) => {
                tracing::info!("Moved to step {}: {}", step.index(), step.title());
                self.focus_step(step);
            }
            Advance::Blocked => {
                tracing::debug!(
                    "Step {} has empty fields, showing validation errors",
                    self.form.active_step().index()
                );
            }
            Advance::Submit => self.handle_submit(),
        }
    }

    fn handle_submit(&mut self) {
        match self.form.submit() {
            SubmitGate::Ready(values) => match &self.submit_tx {
                Some(tx) => start_submission(tx.clone(), self.client.clone(), values),
                None => {
                    tracing::error!("No submission channel configured");
                    self.form.finish_submission(Err(SubmitError::Transport(
                        "submission channel not configured".to_string(),
                    )));
                }
            },
            SubmitGate::Invalid => {
                tracing::info!(
                    "Submission blocked by {} invalid field(s)",
                    self.form.invalid_fields().len()
                );
            }
            SubmitGate::Busy => {
                tracing::debug!("Submission already in flight, ignoring");
            }
            SubmitGate::AlreadySubmitted => {
                tracing::debug!("Form already submitted, ignoring");
            }
        }
    }

    /// Cycle focus within the current page. Leaving a field marks it touched.
    fn move_focus(&mut self, delta: isize) {
        let fields = self.form.active_step().fields();
        let Some(pos) = fields.iter().position(|f| *f == self.focus) else {
            return;
        };

        self.form.touch(self.focus);
        let len = fields.len() as isize;
        let next = (pos as isize + delta).rem_euclid(len) as usize;
        self.focus = fields[next];
    }
}
