//! Submission result handling for the application

use super::App;
use crate::submit::errors::SubmitError;
use crate::submit::SubmitMessage;

impl App {
    /// Handle messages from the submission task
    pub fn handle_submit_message(&mut self, msg: SubmitMessage) {
        match msg {
            SubmitMessage::Succeeded => {
                tracing::info!(
                    "Form submitted successfully for {}",
                    self.form.values().email
                );
                self.form.finish_submission(Ok(()));
            }
            SubmitMessage::Failed(error) => {
                tracing::error!("Error submitting form: {}", error);
                tracing::error!("  {}", error.summary());
                tracing::error!("  Suggestion: {}", error.suggestion());
                if let SubmitError::Status { body, .. } = &error {
                    if !body.is_empty() {
                        tracing::debug!("  Response body: {}", body);
                    }
                }
                self.form.finish_submission(Err(error));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SignupConfig;
    use crate::form::{Field, SubmitGate, SubmitStatus};
    use crate::submit::SubmitClient;

    fn in_flight_app() -> App {
        let config = SignupConfig::default();
        let client = SubmitClient::new(&config.endpoint).unwrap();
        let mut app = App::new(config, client);
        app.form.set_field(Field::Email, "a@b.com");
        app.form.set_field(Field::FirstName, "Ada");
        app.form.set_field(Field::LastName, "Lovelace");
        assert!(matches!(app.form.submit(), SubmitGate::Ready(_)));
        app
    }

    #[test]
    fn test_success_message() {
        let mut app = in_flight_app();
        app.handle_submit_message(SubmitMessage::Succeeded);
        assert!(matches!(
            app.form.submit_status(),
            SubmitStatus::Succeeded { .. }
        ));
    }

    #[test]
    fn test_failure_message_keeps_error() {
        let mut app = in_flight_app();
        app.handle_submit_message(SubmitMessage::Failed(SubmitError::Timeout));
        match app.form.submit_status() {
            SubmitStatus::Failed { error, .. } => assert_eq!(error, &SubmitError::Timeout),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_stray_message_ignored() {
        let config = SignupConfig::default();
        let client = SubmitClient::new(&config.endpoint).unwrap();
        let mut app = App::new(config, client);
        app.handle_submit_message(SubmitMessage::Succeeded);
        assert!(matches!(app.form.submit_status(), SubmitStatus::Idle));
    }
}
