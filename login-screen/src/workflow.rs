//! Login attempt orchestration.
//!
//! An attempt moves `Idle -> Validating -> Submitting -> Completed`
//! (identity-provider attempts skip `Validating`). Only one attempt may be in
//! flight; `Completed` is stable and accepts the next attempt.

use crate::error::{ValidationError, WorkflowError};
use crate::models::{AuthOutcome, AuthProvider};
use crate::navigation::NavigationPresenter;
use crate::services::{metrics, validation, AuthGateway, AuthRequestBuilder};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;
use tokio::task::JoinHandle;
use tracing::Instrument;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptState {
    Idle,
    Validating,
    Submitting,
    Completed,
}

impl AttemptState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, AttemptState::Validating | AttemptState::Submitting)
    }
}

/// How a `submit` ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptResult {
    /// Stopped by form validation; nothing was sent.
    Rejected(ValidationError),
    Resolved(AuthOutcome),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Username,
    Password,
}

/// Where keyboard focus goes after the return key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFocus {
    Password,
    /// Keyboard dismissed.
    None,
}

pub struct FieldReturn {
    pub focus: FieldFocus,
    /// Set when the return key submitted the form.
    pub attempt: Option<JoinHandle<Result<AttemptResult, WorkflowError>>>,
}

fn lock(state: &Mutex<AttemptState>) -> MutexGuard<'_, AttemptState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Marks the attempt `Completed` when dropped, including when the attempt
/// future itself is dropped mid-flight.
struct AttemptGuard<'a> {
    state: &'a Mutex<AttemptState>,
}

impl AttemptGuard<'_> {
    fn advance(&self, next: AttemptState) {
        *lock(self.state) = next;
    }
}

impl Drop for AttemptGuard<'_> {
    fn drop(&mut self) {
        *lock(self.state) = AttemptState::Completed;
    }
}

pub struct LoginWorkflow<G, P> {
    gateway: G,
    presenter: P,
    builder: AuthRequestBuilder,
    state: Mutex<AttemptState>,
}

impl<G, P> LoginWorkflow<G, P>
where
    G: AuthGateway,
    P: NavigationPresenter,
{
    pub fn new(gateway: G, presenter: P, builder: AuthRequestBuilder) -> Self {
        Self {
            gateway,
            presenter,
            builder,
            state: Mutex::new(AttemptState::Idle),
        }
    }

    pub fn state(&self) -> AttemptState {
        *lock(&self.state)
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    fn begin(&self, first: AttemptState) -> Result<AttemptGuard<'_>, WorkflowError> {
        let mut state = lock(&self.state);
        if state.is_in_flight() {
            tracing::warn!(state = ?*state, "Ignoring login while another attempt is in flight");
            return Err(WorkflowError::AttemptInProgress);
        }
        *state = first;
        Ok(AttemptGuard { state: &self.state })
    }

    /// Validate the form and, if it passes, log in against the direct
    /// endpoint. Validation failures are shown without any network call.
    pub async fn submit(
        &self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<AttemptResult, WorkflowError> {
        let attempt = self.begin(AttemptState::Validating)?;
        let span = tracing::info_span!(
            "login_attempt",
            attempt_id = %Uuid::new_v4(),
            provider = %AuthProvider::Direct,
        );

        async move {
            let started = Instant::now();

            let credentials = match validation::validate(username, password) {
                Ok(credentials) => credentials,
                Err(err) => {
                    tracing::info!(reason = %err, "Login form rejected");
                    metrics::record_attempt(AuthProvider::Direct, "invalid", started.elapsed());
                    self.presenter.show_error(err.user_message());
                    drop(attempt);
                    return Ok(AttemptResult::Rejected(err));
                }
            };

            attempt.advance(AttemptState::Submitting);
            tracing::info!(username = %credentials.username(), "Submitting login");

            let request = self.builder.build(credentials);
            let outcome = self
                .gateway
                .authenticate(AuthProvider::Direct, Some(request))
                .await;

            self.present(AuthProvider::Direct, &outcome, started);
            drop(attempt);
            Ok(AttemptResult::Resolved(outcome))
        }
        .instrument(span)
        .await
    }

    /// Run an identity provider's interactive sign-in.
    pub async fn sign_in_with(&self, provider: AuthProvider) -> Result<AuthOutcome, WorkflowError> {
        let attempt = self.begin(AttemptState::Submitting)?;
        let span = tracing::info_span!(
            "login_attempt",
            attempt_id = %Uuid::new_v4(),
            provider = %provider,
        );

        async move {
            let started = Instant::now();
            tracing::info!("Starting identity provider sign-in");

            let outcome = self.gateway.authenticate(provider, None).await;

            self.present(provider, &outcome, started);
            drop(attempt);
            Ok(outcome)
        }
        .instrument(span)
        .await
    }

    pub fn open_sign_up(&self) {
        self.presenter.go_to_sign_up_screen();
    }

    fn present(&self, provider: AuthProvider, outcome: &AuthOutcome, started: Instant) {
        metrics::record_attempt(provider, outcome.label(), started.elapsed());

        match outcome.error_message() {
            None => {
                tracing::info!("Login succeeded");
                self.presenter.go_to_home_screen();
            }
            Some(message) => {
                tracing::info!(outcome = outcome.label(), reason = %message, "Login did not succeed");
                self.presenter.show_error(&message);
            }
        }
    }
}

impl<G, P> LoginWorkflow<G, P>
where
    G: AuthGateway + 'static,
    P: NavigationPresenter + Send + Sync + 'static,
{
    /// Fire a submission from a synchronous tap handler.
    pub fn submit_detached(
        self: &Arc<Self>,
        username: Option<String>,
        password: Option<String>,
    ) -> JoinHandle<Result<AttemptResult, WorkflowError>> {
        let workflow = Arc::clone(self);
        tokio::spawn(async move {
            workflow
                .submit(username.as_deref(), password.as_deref())
                .await
        })
    }

    pub fn sign_in_with_detached(
        self: &Arc<Self>,
        provider: AuthProvider,
    ) -> JoinHandle<Result<AuthOutcome, WorkflowError>> {
        let workflow = Arc::clone(self);
        tokio::spawn(async move { workflow.sign_in_with(provider).await })
    }

    /// Return key on a text field: username moves focus to password,
    /// password dismisses the keyboard and submits.
    pub fn on_field_return(
        self: &Arc<Self>,
        field: TextField,
        username: Option<String>,
        password: Option<String>,
    ) -> FieldReturn {
        match field {
            TextField::Username => FieldReturn {
                focus: FieldFocus::Password,
                attempt: None,
            },
            TextField::Password => FieldReturn {
                focus: FieldFocus::None,
                attempt: Some(self.submit_detached(username, password)),
            },
        }
    }
}
