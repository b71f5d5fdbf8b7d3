use thiserror::Error;

pub const MISSING_FIELD_MESSAGE: &str = "some fields empty";
pub const PASSWORD_TOO_SHORT_MESSAGE: &str = "password should be at least 8 character long";
pub const LOGIN_FAILED_MESSAGE: &str = "login failed";
pub const CANCELLED_MESSAGE: &str = "User cancelled login";

/// Form problems caught before anything is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("username or password is missing")]
    MissingField,

    #[error("password is shorter than the minimum length")]
    PasswordTooShort,
}

impl ValidationError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::MissingField => MISSING_FIELD_MESSAGE,
            ValidationError::PasswordTooShort => PASSWORD_TOO_SHORT_MESSAGE,
        }
    }
}

/// Failures raised inside the gateway. They never leave it: the gateway turns
/// each one into an [`AuthOutcome`](crate::models::AuthOutcome).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Server rejected login with status {0}")]
    ServerRejected(u16),

    #[error("Identity provider error: {0}")]
    SdkError(String),

    #[error("Sign-in cancelled")]
    Cancelled,
}

impl AuthError {
    pub fn user_message(&self) -> String {
        match self {
            AuthError::Transport(message) | AuthError::SdkError(message) => message.clone(),
            AuthError::ServerRejected(_) => LOGIN_FAILED_MESSAGE.to_string(),
            AuthError::Cancelled => CANCELLED_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WorkflowError {
    #[error("A login attempt is already in progress")]
    AttemptInProgress,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::MissingField.user_message(),
            "some fields empty"
        );
        assert_eq!(
            ValidationError::PasswordTooShort.user_message(),
            "password should be at least 8 character long"
        );
    }

    #[test]
    fn test_auth_error_messages() {
        assert_eq!(AuthError::ServerRejected(401).user_message(), "login failed");
        assert_eq!(AuthError::Cancelled.user_message(), "User cancelled login");
        assert_eq!(
            AuthError::Transport("connection refused".to_string()).user_message(),
            "connection refused"
        );
        assert_eq!(
            AuthError::SdkError("account disabled".to_string()).user_message(),
            "account disabled"
        );
    }
}
