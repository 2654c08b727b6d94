//! Step controller: navigation, validation gating and submission hand-off

mod presenter;

pub use presenter::{ControlVisibility, Presenter};

#[cfg(test)]
pub use presenter::MockPresenter;

use crate::error::SubmissionError;
use crate::state::{validate_step, ApplicationForm, FormSession, Phase};
use crate::submission::{ProcessingTask, SubmissionClient, SubmissionReceipt};
use std::sync::Arc;

pub const FILL_REQUIRED_NOTICE: &str = "Please fill in all required fields before continuing.";
pub const SUBMIT_REQUIRED_NOTICE: &str =
    "Please fill in all required fields and upload all bank statements.";
pub const THANK_YOU_NOTICE: &str =
    "Thank you for your application! Our team will contact you within 4 hours.";

/// Drives the step session against a presenter.
///
/// Sessions are passed in by value and the next session is returned; the
/// controller itself holds no step state.
pub struct StepController<P: Presenter> {
    presenter: P,
}

impl<P: Presenter> StepController<P> {
    pub fn new(presenter: P) -> Self {
        Self { presenter }
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Push the whole visible state for `session` to the presenter
    pub fn render(&mut self, session: &FormSession) {
        tracing::debug!("Rendering step {}", session.current_step());
        self.presenter.set_progress(session.progress_percent());
        self.presenter.set_step_label(session.step_label());
        self.presenter.set_step_indicator(&session.indicator());
        self.presenter.set_active_step(session.current_step());
        self.presenter
            .set_control_visibility(ControlVisibility::for_session(session));
        self.presenter.scroll_to_top();
    }

    /// Check the fields of `step`, updating every error marker
    pub fn validate_step(&mut self, form: &ApplicationForm, step: usize) -> bool {
        let report = validate_step(form, step);
        for (name, invalid) in &report.markers {
            self.presenter.set_field_error_marker(name, *invalid);
        }
        report.is_valid()
    }

    pub fn on_continue(&mut self, session: FormSession, form: &ApplicationForm) -> FormSession {
        if !session.is_editing() || session.is_last_step() {
            return session;
        }
        if !self.validate_step(form, session.current_step()) {
            self.presenter.notify_user(FILL_REQUIRED_NOTICE);
            return session;
        }

        let next = session.advanced();
        tracing::info!("Advanced to step {}", next.current_step());
        self.render(&next);
        next
    }

    pub fn on_back(&mut self, session: FormSession) -> FormSession {
        if !session.is_editing() || session.is_first_step() {
            return session;
        }

        let prev = session.retreated();
        tracing::info!("Back to step {}", prev.current_step());
        self.render(&prev);
        prev
    }

    /// Validate the last step and hand the collected values to `client`.
    ///
    /// Returns the in-flight task when the session moved to Processing.
    pub fn on_submit(
        &mut self,
        session: FormSession,
        form: &ApplicationForm,
        client: &Arc<dyn SubmissionClient>,
    ) -> (FormSession, Option<ProcessingTask>) {
        if !session.is_editing() || !session.is_last_step() {
            return (session, None);
        }
        if !self.validate_step(form, session.current_step()) {
            self.presenter.notify_user(SUBMIT_REQUIRED_NOTICE);
            return (session, None);
        }

        let payload = form.collect_payload();
        tracing::info!("Submitting application with {} field(s)", payload.len());
        self.presenter.show_processing_overlay(true);
        let task = ProcessingTask::spawn(Arc::clone(client), payload);
        (session.with_phase(Phase::Processing), Some(task))
    }

    /// Settle a Processing session with the collaborator's outcome.
    ///
    /// Failure returns to the last step with every value kept so the user
    /// can try again.
    pub fn on_processing_complete(
        &mut self,
        session: FormSession,
        outcome: Result<SubmissionReceipt, SubmissionError>,
    ) -> FormSession {
        if session.phase != Phase::Processing {
            return session;
        }
        self.presenter.show_processing_overlay(false);

        match outcome {
            Ok(receipt) => {
                tracing::info!("Application accepted, reference {}", receipt.reference);
                self.presenter.notify_user(&format!(
                    "{THANK_YOU_NOTICE}\nReference: {}",
                    receipt.short_reference()
                ));
                session.with_phase(Phase::Submitted(receipt))
            }
            Err(e) => {
                tracing::warn!("Submission failed: {e}");
                self.presenter
                    .notify_user(&format!("Submission failed: {e}. Please try again."));
                let session = session.with_phase(Phase::Editing);
                self.render(&session);
                session
            }
        }
    }
}
