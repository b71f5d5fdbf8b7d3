use reqwest::Method;
use secrecy::{ExposeSecret, Secret};
use std::fmt;

/// Username and password that passed form validation.
///
/// Only [`validate`](crate::services::validation::validate) creates these.
#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: Secret<String>,
}

impl Credentials {
    pub(crate) fn new(username: String, password: String) -> Self {
        Self {
            username,
            password: Secret::new(password),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &Secret<String> {
        &self.password
    }

    pub(crate) fn expose_password(&self) -> &str {
        self.password.expose_secret()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// A ready-to-send direct login request.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthRequest {
    method: Method,
    url: String,
    body: Vec<u8>,
}

impl AuthRequest {
    pub(crate) fn new(method: Method, url: String, body: Vec<u8>) -> Self {
        Self { method, url, body }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Serialized JSON body. Contains the plaintext password.
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

impl fmt::Debug for AuthRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthRequest")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("body", &format_args!("<{} bytes>", self.body.len()))
            .finish()
    }
}
