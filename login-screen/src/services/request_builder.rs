use crate::models::{AuthRequest, Credentials};
use reqwest::Method;

/// Turns validated credentials into the direct endpoint's wire request.
#[derive(Debug, Clone)]
pub struct AuthRequestBuilder {
    login_url: String,
}

impl AuthRequestBuilder {
    pub fn new(login_url: impl Into<String>) -> Self {
        Self {
            login_url: login_url.into(),
        }
    }

    pub fn login_url(&self) -> &str {
        &self.login_url
    }

    /// Body is a JSON object with exactly `username` and `password`.
    pub fn build(&self, credentials: Credentials) -> AuthRequest {
        let body = serde_json::json!({
            "username": credentials.username(),
            "password": credentials.expose_password(),
        });

        AuthRequest::new(
            Method::POST,
            self.login_url.clone(),
            body.to_string().into_bytes(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::validation::validate;

    #[test]
    fn test_body_round_trips() {
        let builder = AuthRequestBuilder::new("https://someurl.com/login");
        let credentials = validate(Some("alice"), Some("hunter22")).unwrap();

        let request = builder.build(credentials);
        let decoded: serde_json::Value = serde_json::from_slice(request.body()).unwrap();

        let object = decoded.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(object["username"], "alice");
        assert_eq!(object["password"], "hunter22");
    }

    #[test]
    fn test_special_characters_survive_encoding() {
        let builder = AuthRequestBuilder::new("https://someurl.com/login");
        let credentials = validate(Some("a\"lice\\"), Some("pässwörd\n{}")).unwrap();

        let request = builder.build(credentials);
        let decoded: serde_json::Value = serde_json::from_slice(request.body()).unwrap();
        assert_eq!(decoded["username"], "a\"lice\\");
        assert_eq!(decoded["password"], "pässwörd\n{}");
    }

    #[test]
    fn test_request_targets_login_url() {
        let builder = AuthRequestBuilder::new("http://localhost:9096/login");
        let request = builder.build(validate(Some("alice"), Some("hunter22")).unwrap());

        assert_eq!(request.method(), &Method::POST);
        assert_eq!(request.url(), "http://localhost:9096/login");
    }
}
