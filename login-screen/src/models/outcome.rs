use crate::error::{AuthError, CANCELLED_MESSAGE};
use std::fmt;

/// Backend used for one login attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthProvider {
    Direct,
    GoogleIdentity,
    FacebookIdentity,
}

impl AuthProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Direct => "direct",
            AuthProvider::GoogleIdentity => "google",
            AuthProvider::FacebookIdentity => "facebook",
        }
    }
}

impl fmt::Display for AuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal result of an attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Success,
    Failure(String),
    Cancelled,
}

impl AuthOutcome {
    /// Text to show on the screen, `None` on success.
    pub fn error_message(&self) -> Option<String> {
        match self {
            AuthOutcome::Success => None,
            AuthOutcome::Failure(reason) => Some(reason.clone()),
            AuthOutcome::Cancelled => Some(CANCELLED_MESSAGE.to_string()),
        }
    }

    /// Metric label.
    pub fn label(&self) -> &'static str {
        match self {
            AuthOutcome::Success => "success",
            AuthOutcome::Failure(_) => "failure",
            AuthOutcome::Cancelled => "cancelled",
        }
    }
}

impl From<Result<(), AuthError>> for AuthOutcome {
    fn from(result: Result<(), AuthError>) -> Self {
        match result {
            Ok(()) => AuthOutcome::Success,
            Err(AuthError::Cancelled) => AuthOutcome::Cancelled,
            Err(err) => AuthOutcome::Failure(err.user_message()),
        }
    }
}
