use crate::config::AuthServiceSettings;
use crate::error::AuthError;
use crate::models::AuthRequest;
use reqwest::{header::CONTENT_TYPE, Client, StatusCode};
use service_core::observability::TracedClientExt;
use std::time::Duration;

/// HTTP transport for the direct login endpoint.
pub struct AuthClient {
    client: Client,
    settings: AuthServiceSettings,
}

impl AuthClient {
    pub fn new(settings: AuthServiceSettings) -> Self {
        Self {
            client: Client::new(),
            settings,
        }
    }

    pub fn login_url(&self) -> String {
        self.settings.login_url()
    }

    /// Send a built login request with trace context propagation.
    ///
    /// Only status 200 counts as accepted. The response body is drained but
    /// not interpreted; failing to read it is a transport error.
    pub async fn send(&self, request: &AuthRequest) -> Result<(), AuthError> {
        let url = request.url();

        let mut outbound = self
            .client
            .traced_request(request.method().clone(), url)
            .header(CONTENT_TYPE.as_str(), "application/json")
            .body(request.body().to_vec());
        if let Some(secs) = self.settings.timeout_secs {
            outbound = outbound.timeout(Duration::from_secs(secs));
        }

        let response = outbound.send().await.map_err(|e| {
            tracing::error!("Failed to send login request to {}: {}", url, e);
            AuthError::Transport(e.to_string())
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(status = status.as_u16(), "Login rejected by {}", url);
            return Err(AuthError::ServerRejected(status.as_u16()));
        }

        response.bytes().await.map_err(|e| {
            tracing::error!("Failed to read login response from {}: {}", url, e);
            AuthError::Transport(e.to_string())
        })?;

        Ok(())
    }
}
