//! UI rendering module

mod layout;
mod screens;
pub mod theme;
pub mod widgets;

use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::form::WizardStep;
use layout::{centered_fixed, centered_rect, wizard_layout};
use screens::helpers::draw_footer;
use widgets::Stepper;

/// Main draw function - dispatches to the active wizard page
pub fn draw(frame: &mut Frame, app: &App) {
    let area = centered_rect(80, 80, frame.area());
    let (stepper_area, page_area, footer_area) = wizard_layout(area);

    let step = app.form.active_step();
    frame.render_widget(Stepper::new(step), stepper_area);

    match step {
        WizardStep::AccountDetails => screens::account_details::draw(frame, page_area, app),
        WizardStep::PersonalInfo => screens::personal_info::draw(frame, page_area, app),
        WizardStep::Review => screens::review::draw(frame, page_area, app),
    }

    draw_footer(frame, footer_area, &footer_hints(step, app.form.is_submitted()));

    // Render exit confirmation popup on top of any screen
    if app.show_exit_confirm {
        draw_exit_confirm(frame, app.form.is_submitted());
    }
}

/// Key hints: Back is not offered on the first page, Enter submits on the last.
/// A submitted form can only be left.
fn footer_hints(step: WizardStep, submitted: bool) -> Vec<&'static str> {
    if submitted {
        return vec!["Esc Exit"];
    }
    let mut hints = Vec::new();
    if step == WizardStep::AccountDetails {
        hints.push("Esc Exit");
    } else {
        hints.push("Esc Back");
    }
    if !step.fields().is_empty() {
        hints.push("Tab/↓ Next field");
        hints.push("Shift+Tab/↑ Previous field");
    }
    if step.is_last() {
        hints.push("Enter Submit");
    } else {
        hints.push("Enter Next");
    }
    hints
}

/// Draw the exit confirmation popup centered on screen
fn draw_exit_confirm(frame: &mut Frame, submitted: bool) {
    let question = if submitted {
        "Signup complete. Exit?"
    } else {
        "Discard this form and exit?"
    };
    let popup_area = centered_fixed(40, 7, frame.area());

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(question, theme::body())),
        Line::from(""),
        Line::from(vec![
            Span::styled("[", theme::hint()),
            Span::styled("Enter/Y", theme::key()),
            Span::styled("] Yes  [", theme::hint()),
            Span::styled("Esc/N", theme::key()),
            Span::styled("] No", theme::hint()),
        ]),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::emphasis_border())
            .title(Span::styled(" Exit ", theme::page_title())),
    );
    frame.render_widget(content, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SignupConfig;
    use crate::form::{Field, SubmitGate};
    use crate::submit::errors::SubmitError;
    use crate::submit::SubmitClient;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App) -> String {
        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn new_app() -> App {
        let config = SignupConfig::default();
        let client = SubmitClient::new(&config.endpoint).unwrap();
        App::new(config, client)
    }

    fn app_on_review() -> App {
        let mut app = new_app();
        for field in Field::ALL {
            app.form.set_field(field, "value1234");
        }
        app.form.set_field(Field::Email, "a@b.com");
        app.form.advance();
        app.form.advance();
        app
    }

    #[test]
    fn test_footer_hints() {
        assert!(footer_hints(WizardStep::AccountDetails, false).contains(&"Esc Exit"));
        assert!(footer_hints(WizardStep::PersonalInfo, false).contains(&"Esc Back"));
        assert!(footer_hints(WizardStep::Review, false).contains(&"Enter Submit"));
        assert!(!footer_hints(WizardStep::Review, false).contains(&"Tab/↓ Next field"));
        assert_eq!(footer_hints(WizardStep::Review, true), vec!["Esc Exit"]);
    }

    #[test]
    fn test_in_flight_shows_spinner_and_endpoint() {
        let mut app = app_on_review();
        assert!(matches!(app.form.submit(), SubmitGate::Ready(_)));
        let screen = render(&app);
        assert!(screen.contains("] Submitting to http://localhost:3000/api/submit..."));
    }

    #[test]
    fn test_submitted_view() {
        let mut app = app_on_review();
        app.form.submit();
        app.form.finish_submission(Ok(()));
        let screen = render(&app);
        assert!(screen.contains("Submitted Values"));
        assert!(screen.contains("✓ Submitted at"));
        assert!(!screen.contains("Enter Submit"));

        app.show_exit_confirm = true;
        assert!(render(&app).contains("Signup complete. Exit?"));
    }

    #[test]
    fn test_failure_time_shown_when_enabled() {
        let mut app = app_on_review();
        app.config.ui.show_submit_errors = true;
        app.form.submit();
        app.form.finish_submission(Err(SubmitError::Timeout));
        let screen = render(&app);
        assert!(screen.contains("✗ Submission timed out at "));
    }

    #[test]
    fn test_password_is_masked() {
        let mut app = new_app();
        app.form.set_field(Field::Password, "hunter22");
        let screen = render(&app);
        assert!(screen.contains("********"));
        assert!(!screen.contains("hunter22"));
    }

    #[test]
    fn test_errors_render_only_when_touched() {
        let mut app = new_app();
        app.form.set_field(Field::Password, "short");
        assert!(!render(&app).contains("Password should be at least 8 characters"));
        app.form.touch(Field::Password);
        assert!(render(&app).contains("Password should be at least 8 characters"));
    }

    #[test]
    fn test_exit_dialog_renders() {
        let mut app = new_app();
        app.show_exit_confirm = true;
        assert!(render(&app).contains("Discard this form and exit?"));
    }
}
