//! Submission workflow for the registration page.
//!
//! DESIGN
//! ======
//! The page talks to the outside world through `SubmissionEffects` so the
//! ordering rules (clear session, notify once, wait, then navigate) live in one
//! plain async function that tests can drive with a recording fake.
//!
//! The whole submission runs as one abortable future. Cancelling it (page
//! teardown) drops the pending request or redirect delay, so nothing touches
//! the page or the router afterwards.

#[cfg(test)]
#[path = "register_flow_test.rs"]
mod register_flow_test;

use std::future::Future;
use std::time::Duration;

use futures::future::{AbortHandle, abortable};

use crate::net::types::RegistrationPayload;
use crate::state::register_form::{FieldErrors, RegisterForm, prepare_submission};

/// Pause between the success notification and the redirect to login.
pub const REDIRECT_DELAY: Duration = Duration::from_millis(2000);
pub const LOGIN_ROUTE: &str = "/login";
pub const DASHBOARD_ROUTE: &str = "/dashboard";
pub const SUCCESS_MESSAGE: &str = "Conta criada";

/// Where the form is in its submit cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Redirecting,
}

impl SubmitPhase {
    /// Whether a new submit must be ignored.
    #[must_use]
    pub fn is_busy(self) -> bool {
        !matches!(self, SubmitPhase::Idle)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Redirected,
    Rejected(String),
}

/// Capabilities the workflow needs from its host page.
#[allow(async_fn_in_trait)]
pub trait SubmissionEffects {
    async fn register(&self, payload: &RegistrationPayload) -> Result<(), String>;
    fn clear_session(&self);
    fn notify_success(&self, message: &str);
    fn notify_error(&self, message: &str);
    async fn sleep(&self, delay: Duration);
    fn navigate(&self, path: &str);
    fn enter_phase(&self, phase: SubmitPhase);
}

/// Send an already-validated payload and route on the result.
pub async fn run_submission<E: SubmissionEffects>(payload: RegistrationPayload, effects: &E) -> SubmissionOutcome {
    effects.enter_phase(SubmitPhase::Submitting);
    match effects.register(&payload).await {
        Ok(()) => {
            effects.clear_session();
            effects.notify_success(SUCCESS_MESSAGE);
            effects.enter_phase(SubmitPhase::Redirecting);
            effects.sleep(REDIRECT_DELAY).await;
            effects.navigate(LOGIN_ROUTE);
            SubmissionOutcome::Redirected
        }
        Err(message) => {
            effects.notify_error(&message);
            effects.enter_phase(SubmitPhase::Idle);
            SubmissionOutcome::Rejected(message)
        }
    }
}

/// Handle to an in-flight submission.
#[derive(Clone, Debug)]
pub struct SubmissionTask {
    handle: AbortHandle,
}

impl SubmissionTask {
    /// Abandon the submission. Safe to call more than once or after it finished.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.handle.is_aborted()
    }
}

/// Wrap `run_submission` so it can be cancelled.
///
/// The returned future resolves to `None` when the task was cancelled before
/// it completed.
pub fn abortable_submission<E>(
    payload: RegistrationPayload,
    effects: E,
) -> (impl Future<Output = Option<SubmissionOutcome>>, SubmissionTask)
where
    E: SubmissionEffects,
{
    let (inner, handle) = abortable(async move { run_submission(payload, &effects).await });
    (async move { inner.await.ok() }, SubmissionTask { handle })
}

/// Validate the form and, when it is clean, build the cancellable submission.
///
/// # Errors
///
/// Returns the per-field messages when validation fails. No effect is run in
/// that case.
pub fn submit_form<E>(
    form: &RegisterForm,
    effects: E,
) -> Result<(impl Future<Output = Option<SubmissionOutcome>> + use<E>, SubmissionTask), FieldErrors>
where
    E: SubmissionEffects,
{
    let payload = prepare_submission(form)?;
    Ok(abortable_submission(payload, effects))
}
