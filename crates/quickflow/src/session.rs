//! Interactive terminal rendition of the application page.
//!
//! The session reads one line per field, enforces native constraints as each value is entered,
//! submits once every field holds a valid value, and then shows either the results screen or the
//! form with its error banner.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::application::constraints::{self, ConstraintViolation};
use crate::application::{FormField, FormSection, InputKind};
use crate::client::ScoringBackend;
use crate::controller::{ApplicationController, ViewState};
use crate::report::{render_form, render_form_header, render_results, Palette, Tone};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("input closed before the application was complete")]
    InputClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Retry,
    NewApplication,
    Print,
    Quit,
}

impl Action {
    const fn key(self) -> &'static str {
        match self {
            Action::Retry => "r",
            Action::NewApplication => "n",
            Action::Print => "p",
            Action::Quit => "q",
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Action::Retry => "Resubmit",
            Action::NewApplication => "New Application",
            Action::Print => "Print Results",
            Action::Quit => "Quit",
        }
    }

    fn matches(self, answer: &str) -> bool {
        let answer = answer.trim();
        answer.eq_ignore_ascii_case(self.key()) || answer.eq_ignore_ascii_case(self.label())
    }
}

const FAILURE_ACTIONS: [Action; 3] = [Action::Retry, Action::NewApplication, Action::Quit];
const RESULTS_ACTIONS: [Action; 3] = [Action::NewApplication, Action::Print, Action::Quit];

/// Drives an [`ApplicationController`] from line-oriented input.
pub struct FormSession<'a, B: ?Sized, R, W> {
    controller: ApplicationController,
    backend: &'a B,
    input: R,
    output: W,
    palette: Palette,
}

impl<'a, B, R, W> FormSession<'a, B, R, W>
where
    B: ScoringBackend + ?Sized,
    R: BufRead,
    W: Write,
{
    pub fn new(backend: &'a B, input: R, output: W, palette: Palette) -> Self {
        Self {
            controller: ApplicationController::new(),
            backend,
            input,
            output,
            palette,
        }
    }

    pub fn controller(&self) -> &ApplicationController {
        &self.controller
    }

    /// Run until the user quits. End of input at an action prompt counts as quitting; end of
    /// input while the form is being filled is an error.
    pub async fn run(&mut self) -> Result<(), SessionError> {
        loop {
            match self.controller.view() {
                ViewState::Form => {
                    self.fill_form()?;
                    if !self.submit_until_resolved().await? {
                        return Ok(());
                    }
                }
                ViewState::Results => {
                    if !self.show_results()? {
                        return Ok(());
                    }
                }
            }
        }
    }

    /// Returns `false` when the user chose to quit.
    async fn submit_until_resolved(&mut self) -> Result<bool, SessionError> {
        loop {
            self.ensure_valid()?;
            if let Some(payload) = self.controller.begin_submission() {
                render_form(&mut self.output, &self.controller.form_view(), &self.palette)?;
                self.output.flush()?;
                let outcome = self.backend.submit_application(&payload).await;
                self.controller.complete_submission(outcome);
            }

            if self.controller.view() == ViewState::Results {
                return Ok(true);
            }

            writeln!(self.output)?;
            render_form(&mut self.output, &self.controller.form_view(), &self.palette)?;
            match self.prompt_action(&FAILURE_ACTIONS)? {
                Some(Action::Retry) => continue,
                Some(Action::NewApplication) => {
                    self.controller.reset();
                    return Ok(true);
                }
                _ => return Ok(false),
            }
        }
    }

    /// Returns `false` when the user chose to quit.
    fn show_results(&mut self) -> Result<bool, SessionError> {
        let Some(view) = self.controller.results_view() else {
            return Ok(true);
        };
        writeln!(self.output)?;
        render_results(&mut self.output, &view, &self.palette)?;

        loop {
            match self.prompt_action(&RESULTS_ACTIONS)? {
                Some(Action::Print) => {
                    writeln!(self.output)?;
                    render_results(&mut self.output, &view, &Palette::plain())?;
                }
                Some(Action::NewApplication) => {
                    self.controller.reset();
                    return Ok(true);
                }
                _ => return Ok(false),
            }
        }
    }

    fn fill_form(&mut self) -> Result<(), SessionError> {
        render_form_header(&mut self.output, &self.palette)?;

        for section in FormSection::ordered() {
            writeln!(self.output)?;
            writeln!(self.output, "{}", self.palette.heading(section.label()))?;
            for field in section.fields() {
                let value = self.prompt_field(field)?;
                self.controller.update_field(field, value);
            }
        }

        debug!("application form complete");
        Ok(())
    }

    /// The form submits only once every field passes its native constraints. The first failing
    /// field is reported and asked for again.
    fn ensure_valid(&mut self) -> Result<(), SessionError> {
        while let Some((field, violation)) = self.controller.input().first_violation() {
            debug!(field = field.key(), "field fails its constraint at submit");
            self.report_violation(&violation)?;
            let value = self.prompt_field(field)?;
            self.controller.update_field(field, value);
        }
        Ok(())
    }

    fn report_violation(&mut self, violation: &ConstraintViolation) -> Result<(), SessionError> {
        let message = format!("! {violation}");
        writeln!(self.output, "  {}", self.palette.tone(&message, Tone::Unfavorable))?;
        Ok(())
    }

    fn prompt_field(&mut self, field: FormField) -> Result<String, SessionError> {
        let options: &[&str] = match field.kind() {
            InputKind::Select(options) => options,
            _ => &[],
        };

        loop {
            writeln!(
                self.output,
                "{} {}",
                field.label(),
                self.palette.muted(&format!("({})", field.placeholder()))
            )?;
            for (index, option) in options.iter().enumerate() {
                writeln!(self.output, "  {:>2}. {}", index + 1, option)?;
            }
            write!(self.output, "> ")?;
            self.output.flush()?;

            let line = self.read_line()?.ok_or(SessionError::InputClosed)?;
            let value = resolve_option(options, line.trim());

            match constraints::check(field, &value) {
                Ok(()) => return Ok(value),
                Err(violation) => self.report_violation(&violation)?,
            }
        }
    }

    fn prompt_action(&mut self, actions: &[Action]) -> Result<Option<Action>, SessionError> {
        let menu = actions
            .iter()
            .map(|action| format!("[{}] {}", action.key(), action.label()))
            .collect::<Vec<_>>()
            .join("   ");

        loop {
            writeln!(self.output)?;
            writeln!(self.output, "{menu}")?;
            write!(self.output, "> ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            if let Some(action) = actions.iter().copied().find(|action| action.matches(&line)) {
                return Ok(Some(action));
            }
            writeln!(self.output, "  Choose one of: {menu}")?;
        }
    }

    fn read_line(&mut self) -> Result<Option<String>, SessionError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// A select accepts either the option's 1-based number or its label.
fn resolve_option(options: &[&str], answer: &str) -> String {
    answer
        .parse::<usize>()
        .ok()
        .and_then(|number| number.checked_sub(1))
        .and_then(|index| options.get(index))
        .map(|option| option.to_string())
        .unwrap_or_else(|| answer.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{INDUSTRIES, LOAN_PURPOSES};
    use crate::client::HttpScoringClient;
    use std::io::Cursor;

    #[test]
    fn select_answers_resolve_by_number_or_label() {
        assert_eq!(resolve_option(&INDUSTRIES, "4"), "Retail");
        assert_eq!(resolve_option(&INDUSTRIES, "Retail"), "Retail");
        assert_eq!(resolve_option(&LOAN_PURPOSES, "0"), "0");
        assert_eq!(resolve_option(&LOAN_PURPOSES, "11"), "11");
        assert_eq!(resolve_option(&[], "42"), "42");
    }

    #[test]
    fn submit_gate_asks_again_for_the_first_invalid_field() {
        let backend = HttpScoringClient::new("http://127.0.0.1:9");
        let mut output = Vec::new();
        let mut session = FormSession::new(
            &backend,
            Cursor::new("720\n"),
            &mut output,
            Palette::plain(),
        );
        for field in FormField::ordered() {
            let value = match field.kind() {
                InputKind::Select(options) => options[0],
                InputKind::Email => "a@b.com",
                InputKind::Number(_) => "50",
                InputKind::Text | InputKind::Tel => "x",
            };
            session.controller.update_field(field, value);
        }
        session.controller.update_field(FormField::CreditScore, "900");

        session.ensure_valid().expect("gate completes");
        assert_eq!(session.controller().input().credit_score, "720");
        assert!(session.controller().input().first_violation().is_none());

        let text = String::from_utf8(output).expect("utf8 output");
        assert!(text.contains("! Value must be less than or equal to 850."));
        assert!(text.contains("Credit Score"));
    }

    #[test]
    fn actions_match_key_or_label() {
        assert!(Action::Print.matches("p"));
        assert!(Action::Print.matches(" P "));
        assert!(Action::NewApplication.matches("new application"));
        assert!(!Action::Quit.matches("quitting"));
    }
}
