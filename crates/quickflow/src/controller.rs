//! Two-state view controller driving the form and results screens.

use tracing::{error, info};

use crate::application::{ApplicationInput, FormField, SubmissionPayload};
use crate::client::{ScoringBackend, SubmissionError};
use crate::qualification::QualificationResult;
use crate::report::{FormView, ResultsView};

/// Shown alongside the form whenever a submission fails, whatever the cause.
pub const SUBMISSION_ERROR_MESSAGE: &str = "Error submitting application. Please try again.";
pub const SUBMIT_LABEL: &str = "Get Prequalification Results";
pub const BUSY_LABEL: &str = "Analyzing Application...";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Form,
    Results,
}

#[derive(Debug, Default)]
pub struct ApplicationController {
    step: ViewState,
    input: ApplicationInput,
    results: Option<QualificationResult>,
    loading: bool,
    error: Option<String>,
}

impl ApplicationController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Results are shown only when a result is actually held.
    pub fn view(&self) -> ViewState {
        match (self.step, &self.results) {
            (ViewState::Results, Some(_)) => ViewState::Results,
            _ => ViewState::Form,
        }
    }

    pub fn input(&self) -> &ApplicationInput {
        &self.input
    }

    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        self.input.set(field, value);
    }

    pub fn is_busy(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn results(&self) -> Option<&QualificationResult> {
        self.results.as_ref()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.loading {
            BUSY_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    pub fn form_view(&self) -> FormView {
        FormView::new(
            &self.input,
            self.error.as_deref(),
            self.submit_label(),
            self.loading,
        )
    }

    pub fn results_view(&self) -> Option<ResultsView> {
        match self.view() {
            ViewState::Results => self.results.as_ref().map(ResultsView::from_result),
            ViewState::Form => None,
        }
    }

    /// Mark the controller busy and produce the coerced payload. Returns `None` while a
    /// submission is already outstanding.
    pub fn begin_submission(&mut self) -> Option<SubmissionPayload> {
        if self.loading {
            return None;
        }
        self.loading = true;
        self.error = None;
        Some(SubmissionPayload::from(&self.input))
    }

    /// Apply the outcome of the outstanding submission. Responses are never discarded, even if
    /// the controller was reset while the call was in flight.
    pub fn complete_submission(&mut self, outcome: Result<QualificationResult, SubmissionError>) {
        match outcome {
            Ok(result) => {
                info!(
                    status = %result.qualification_status,
                    "application prequalified"
                );
                self.results = Some(result);
                self.step = ViewState::Results;
            }
            Err(err) => {
                error!(error = %err, "application submission failed");
                self.error = Some(SUBMISSION_ERROR_MESSAGE.to_string());
            }
        }
        self.loading = false;
    }

    /// Submit the current input through `backend` and return the resulting view.
    pub async fn submit<B>(&mut self, backend: &B) -> ViewState
    where
        B: ScoringBackend + ?Sized,
    {
        let Some(payload) = self.begin_submission() else {
            return self.view();
        };
        let outcome = backend.submit_application(&payload).await;
        self.complete_submission(outcome);
        self.view()
    }

    /// Back to an empty form with no results and no error. An outstanding call keeps the busy
    /// flag until it completes.
    pub fn reset(&mut self) {
        self.step = ViewState::Form;
        self.results = None;
        self.error = None;
        self.input = ApplicationInput::default();
    }
}
