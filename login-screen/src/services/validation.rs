use crate::error::ValidationError;
use crate::models::Credentials;
use validator::Validate;

#[derive(Validate)]
struct LoginForm {
    username: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    password: String,
}

/// Check the raw form fields and turn them into [`Credentials`].
///
/// Absent and empty fields are both `MissingField`; that check runs before
/// the length rule. Length is counted in characters, not bytes.
pub fn validate(
    username: Option<&str>,
    password: Option<&str>,
) -> Result<Credentials, ValidationError> {
    let (username, password) = match (username, password) {
        (Some(u), Some(p)) if !u.is_empty() && !p.is_empty() => (u, p),
        _ => return Err(ValidationError::MissingField),
    };

    let form = LoginForm {
        username: username.to_owned(),
        password: password.to_owned(),
    };
    form.validate().map_err(|_| ValidationError::PasswordTooShort)?;

    Ok(Credentials::new(form.username, form.password))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields() {
        assert_eq!(
            validate(None, Some("hunter22")).unwrap_err(),
            ValidationError::MissingField
        );
        assert_eq!(
            validate(Some("alice"), None).unwrap_err(),
            ValidationError::MissingField
        );
        assert_eq!(
            validate(Some(""), Some("hunter22")).unwrap_err(),
            ValidationError::MissingField
        );
        assert_eq!(
            validate(Some("alice"), Some("")).unwrap_err(),
            ValidationError::MissingField
        );
        assert_eq!(validate(None, None).unwrap_err(), ValidationError::MissingField);
    }

    #[test]
    fn test_short_passwords_rejected() {
        for len in 1..=7 {
            let password = "x".repeat(len);
            assert_eq!(
                validate(Some("alice"), Some(&password)).unwrap_err(),
                ValidationError::PasswordTooShort,
                "length {} should be rejected",
                len
            );
        }
    }

    #[test]
    fn test_scenario_seven_char_password() {
        assert_eq!(
            validate(Some("alice"), Some("hunter2")).unwrap_err(),
            ValidationError::PasswordTooShort
        );
    }

    #[test]
    fn test_valid_credentials() {
        let credentials = validate(Some("alice"), Some("hunter22")).unwrap();
        assert_eq!(credentials.username(), "alice");
        assert_eq!(credentials.expose_password(), "hunter22");
    }

    #[test]
    fn test_length_counts_characters() {
        // 7 characters but 14 bytes
        assert_eq!(
            validate(Some("alice"), Some("ééééééé")).unwrap_err(),
            ValidationError::PasswordTooShort
        );
        assert!(validate(Some("alice"), Some("éééééééé")).is_ok());
    }

    #[test]
    fn test_validation_is_repeatable() {
        let first = validate(Some("alice"), Some("hunter2"));
        let second = validate(Some("alice"), Some("hunter2"));
        assert_eq!(first.unwrap_err(), second.unwrap_err());

        let first = validate(Some("alice"), Some("hunter22")).unwrap();
        let second = validate(Some("alice"), Some("hunter22")).unwrap();
        assert_eq!(first.username(), second.username());
        assert_eq!(first.expose_password(), second.expose_password());
    }
}
