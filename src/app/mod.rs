//! Application state management
//!
//! This module contains the wizard controller and is split into:
//! - `mod.rs` - The `App` struct owning the form state
//! - `handlers.rs` - Keyboard input handlers
//! - `messages.rs` - Submission result handling

mod handlers;
mod messages;

use chrono::{DateTime, Local};
use std::time::Instant;
use tokio::sync::mpsc;

use crate::config::SignupConfig;
use crate::constants::SPINNER_TICK_MS;
use crate::form::{Field, FormState, SubmitStatus, WizardStep};
use crate::submit::errors::SubmitError;
use crate::submit::{SubmitClient, SubmitMessage};

/// Main application state
pub struct App {
    pub form: FormState,
    /// Input that receives typed characters
    pub focus: Field,
    pub should_quit: bool,
    pub show_exit_confirm: bool,
    pub spinner_state: usize,
    pub last_tick: Instant,
    pub config: SignupConfig,
    client: SubmitClient,
    pub(crate) submit_tx: Option<mpsc::Sender<SubmitMessage>>,
}

impl App {
    pub fn new(config: SignupConfig, client: SubmitClient) -> Self {
        Self {
            form: FormState::new(),
            focus: Field::Email,
            should_quit: false,
            show_exit_confirm: false,
            spinner_state: 0,
            last_tick: Instant::now(),
            config,
            client,
            submit_tx: None,
        }
    }

    pub fn set_submit_sender(&mut self, tx: mpsc::Sender<SubmitMessage>) {
        self.submit_tx = Some(tx);
    }

    pub fn endpoint(&self) -> &str {
        self.client.url()
    }

    /// Called on each tick to update animations
    pub fn tick(&mut self) {
        if self.last_tick.elapsed().as_millis() >= SPINNER_TICK_MS {
            self.spinner_state = self.spinner_state.wrapping_add(1);
            self.last_tick = Instant::now();
        }
    }

    /// Submission failure and its time, shown on the review screen if enabled in config
    pub fn visible_submit_error(&self) -> Option<(DateTime<Local>, &SubmitError)> {
        if !self.config.ui.show_submit_errors {
            return None;
        }
        match self.form.submit_status() {
            SubmitStatus::Failed { at, error } => Some((*at, error)),
            _ => None,
        }
    }

    /// Move focus to the first input of a step
    fn focus_step(&mut self, step: WizardStep) {
        if let Some(first) = step.fields().first() {
            self.focus = *first;
        }
    }
}
