//! Seam for third-party identity SDKs (Google, Facebook).
//!
//! SDKs are callback driven: `sign_in` returns at once and the SDK later
//! invokes the completion, possibly from one of its own threads. The
//! completion is consumed on use, so it can fire at most once.

use crate::error::AuthError;
use std::sync::Mutex;
use tokio::sync::oneshot;

/// The screen an SDK presents its modal sign-in flow from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentingSurface {
    pub screen: String,
}

impl PresentingSurface {
    pub fn new(screen: impl Into<String>) -> Self {
        Self {
            screen: screen.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInOptions {
    pub surface: PresentingSurface,
    /// Provider-specific client configuration, if the SDK takes one.
    pub configuration: Option<String>,
    pub permissions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentitySession {
    pub user_id: String,
}

/// What an SDK reports when its flow ends.
///
/// SDKs may set more than one field; [`SdkReport::into_result`] decides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SdkReport {
    pub session: Option<IdentitySession>,
    pub error: Option<String>,
    pub cancelled: bool,
}

impl SdkReport {
    pub fn success(user_id: impl Into<String>) -> Self {
        Self {
            session: Some(IdentitySession {
                user_id: user_id.into(),
            }),
            ..Default::default()
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Default::default()
        }
    }

    pub fn cancelled() -> Self {
        Self {
            cancelled: true,
            ..Default::default()
        }
    }

    /// Error wins over cancellation, cancellation wins over a session.
    pub fn into_result(self) -> Result<IdentitySession, AuthError> {
        if let Some(message) = self.error {
            if self.session.is_some() {
                tracing::warn!(
                    error = %message,
                    "Identity provider reported both a session and an error; treating as failure"
                );
            }
            return Err(AuthError::SdkError(message));
        }
        if self.cancelled {
            return Err(AuthError::Cancelled);
        }
        self.session.ok_or_else(|| {
            AuthError::SdkError("identity provider returned no session".to_string())
        })
    }
}

/// Single-shot completion handed to [`IdentitySdk::sign_in`].
#[derive(Debug)]
pub struct SignInCompletion {
    sender: oneshot::Sender<SdkReport>,
}

impl SignInCompletion {
    pub fn channel() -> (Self, oneshot::Receiver<SdkReport>) {
        let (sender, receiver) = oneshot::channel();
        (Self { sender }, receiver)
    }

    pub fn complete(self, report: SdkReport) {
        if self.sender.send(report).is_err() {
            tracing::debug!("Sign-in completion arrived after the attempt was dropped");
        }
    }
}

/// An interactive third-party sign-in flow.
pub trait IdentitySdk: Send + Sync {
    fn sign_in(&self, options: &SignInOptions, completion: SignInCompletion);
}

/// SDK double that answers with a fixed report from a separate thread.
pub struct ScriptedIdentitySdk {
    report: SdkReport,
    pub calls: Mutex<Vec<SignInOptions>>,
}

impl ScriptedIdentitySdk {
    pub fn new(report: SdkReport) -> Self {
        Self {
            report,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|calls| calls.len()).unwrap_or(0)
    }
}

impl IdentitySdk for ScriptedIdentitySdk {
    fn sign_in(&self, options: &SignInOptions, completion: SignInCompletion) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(options.clone());
        }
        let report = self.report.clone();
        std::thread::spawn(move || completion.complete(report));
    }
}
