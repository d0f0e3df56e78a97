//! Registration page: guest-only sign-up form with client-side validation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the session from `RwSignal<AuthState>` and sends already-authenticated
//! visitors to the dashboard before any field is rendered. Submission ordering
//! lives in `register_flow`; this module binds it to signals, storage, toasts
//! and the router.

use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::{A, Redirect};
use leptos_router::hooks::use_navigate;

use super::register_flow::{
    DASHBOARD_ROUTE, LOGIN_ROUTE, SubmissionEffects, SubmissionOutcome, SubmissionTask, SubmitPhase, submit_form,
};
use crate::components::field_input::FieldInput;
use crate::components::register_illustration::RegisterIllustration;
use crate::net::types::RegistrationPayload;
use crate::state::auth::{AuthState, SessionGate, session_gate};
use crate::state::notices::NoticeState;
use crate::state::register_form::{Field, FieldErrors, NAME_MAX_LEN, RegisterForm, revalidate_field};

/// Registration page. Renders nothing until the session is known, then either
/// redirects to `/dashboard` or shows the form.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    // Memoized so clearing an already-empty token does not rebuild the form
    // (which would cancel the pending redirect).
    let gate = Memo::new(move |_| session_gate(&auth.get()));

    view! {
        <div class="register-page">
            {move || match gate.get() {
                SessionGate::Pending => ().into_any(),
                SessionGate::Authenticated => view! { <Redirect path=DASHBOARD_ROUTE/> }.into_any(),
                SessionGate::Anonymous => {
                    view! {
                        <RegisterIllustration/>
                        <RegistrationForm/>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn RegistrationForm() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();

    let form = RwSignal::new(RegisterForm::default());
    let errors = RwSignal::new(FieldErrors::default());
    let phase = RwSignal::new(SubmitPhase::Idle);
    let pending: Arc<Mutex<Option<SubmissionTask>>> = Arc::new(Mutex::new(None));

    let pending_cleanup = Arc::clone(&pending);
    on_cleanup(move || {
        if let Ok(mut slot) = pending_cleanup.lock() {
            if let Some(task) = slot.take() {
                task.cancel();
            }
        }
    });

    let busy = Signal::derive(move || phase.get().is_busy());
    let value_of = move |field: Field| Signal::derive(move || form.with(|f| f.value(field).to_owned()));
    let error_of = move |field: Field| Signal::derive(move || errors.with(|e| e.get(field).map(str::to_owned)));
    let edit = move |field: Field| {
        Callback::new(move |value: String| {
            form.update(|f| f.set(field, value));
            let current = form.get_untracked();
            errors.update(|e| revalidate_field(e, &current, field));
        })
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if phase.get_untracked().is_busy() {
            return;
        }
        let effects = PageEffects { auth, notices, phase, navigate: navigate.clone() };
        let (submission, task) = match submit_form(&form.get_untracked(), effects) {
            Ok(started) => started,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(FieldErrors::default());
        phase.set(SubmitPhase::Submitting);

        spawn_submission(submission);
        if let Ok(mut slot) = pending.lock() {
            *slot = Some(task);
        }
    };

    view! {
        <section class="register-form">
            <h1>"Cadastro"</h1>
            <form class="register-form__form" on:submit=on_submit novalidate>
                <FieldInput
                    name={Field::Name.input_name()}
                    placeholder="Nome"
                    maxlength=NAME_MAX_LEN
                    data_cy="name/register"
                    disabled=busy
                    value={value_of(Field::Name)}
                    on_input={edit(Field::Name)}
                    error={error_of(Field::Name)}
                />
                <FieldInput
                    name={Field::Email.input_name()}
                    placeholder="E-mail"
                    input_type="email"
                    data_cy="email/register"
                    disabled=busy
                    value={value_of(Field::Email)}
                    on_input={edit(Field::Email)}
                    error={error_of(Field::Email)}
                />
                <FieldInput
                    name={Field::Password.input_name()}
                    placeholder="Senha"
                    input_type="password"
                    data_cy="password/register"
                    disabled=busy
                    value={value_of(Field::Password)}
                    on_input={edit(Field::Password)}
                    error={error_of(Field::Password)}
                />
                <FieldInput
                    name={Field::ConfirmPassword.input_name()}
                    placeholder="Confirmar Senha"
                    input_type="password"
                    data_cy="confirmpassword/register"
                    disabled=busy
                    value={value_of(Field::ConfirmPassword)}
                    on_input={edit(Field::ConfirmPassword)}
                    error={error_of(Field::ConfirmPassword)}
                />
                <button class="register-form__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Cadastrando..." } else { "Cadastrar" }}
                </button>
                <p class="register-form__login">
                    "Já possui um cadastro? "
                    <A href=LOGIN_ROUTE>"faça seu login"</A>
                </p>
            </form>
        </section>
    }
}

/// Browser-backed effects: `gloo-net` request, `localStorage`, toasts, router.
struct PageEffects<N> {
    auth: RwSignal<AuthState>,
    notices: RwSignal<NoticeState>,
    phase: RwSignal<SubmitPhase>,
    navigate: N,
}

impl<N> SubmissionEffects for PageEffects<N>
where
    N: Fn(&str, NavigateOptions),
{
    async fn register(&self, payload: &RegistrationPayload) -> Result<(), String> {
        crate::net::api::register_user(payload).await
    }

    fn clear_session(&self) {
        crate::util::session::clear();
        self.auth.update(|a| a.token = None);
    }

    fn notify_success(&self, message: &str) {
        self.notices.update(|n| {
            n.success(message);
        });
    }

    fn notify_error(&self, message: &str) {
        self.notices.update(|n| {
            n.error(message);
        });
    }

    async fn sleep(&self, delay: Duration) {
        #[cfg(feature = "hydrate")]
        {
            gloo_timers::future::sleep(delay).await;
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = delay;
        }
    }

    fn navigate(&self, path: &str) {
        (self.navigate)(path, NavigateOptions::default());
    }

    fn enter_phase(&self, phase: SubmitPhase) {
        self.phase.set(phase);
    }
}

/// Drive the submission in the background. Only the browser build actually
/// sends anything; the server never handles form events.
fn spawn_submission(submission: impl Future<Output = Option<SubmissionOutcome>> + 'static) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match submission.await {
                Some(SubmissionOutcome::Redirected) => log::info!("registration accepted"),
                Some(SubmissionOutcome::Rejected(message)) => log::warn!("registration rejected: {message}"),
                None => log::debug!("registration abandoned on teardown"),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        drop(submission);
    }
}
