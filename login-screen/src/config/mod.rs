use serde::Deserialize;
use service_core::config::{load_layered, resolve_config_dir};
use service_core::error::CoreError;

#[derive(Deserialize, Clone, Debug)]
pub struct LoginSettings {
    pub auth_service: AuthServiceSettings,
    #[serde(default)]
    pub identity: IdentitySettings,
    #[serde(default)]
    pub telemetry: TelemetrySettings,
}

#[derive(Deserialize, Clone, Debug)]
pub struct AuthServiceSettings {
    /// Base URL of the direct authentication endpoint.
    pub url: String,
    #[serde(default = "default_login_path")]
    pub login_path: String,
    /// Per-request timeout. Unset leaves the HTTP client's default in place.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl AuthServiceSettings {
    pub fn login_url(&self) -> String {
        format!("{}{}", self.url.trim_end_matches('/'), self.login_path)
    }
}

fn default_login_path() -> String {
    "/login".to_string()
}

#[derive(Deserialize, Clone, Debug)]
pub struct IdentitySettings {
    /// Opaque configuration handed to the Google sign-in SDK.
    #[serde(default = "default_google_client_config")]
    pub google_client_config: String,
    /// Permissions requested from Facebook login.
    #[serde(default)]
    pub facebook_permissions: Vec<String>,
}

impl Default for IdentitySettings {
    fn default() -> Self {
        Self {
            google_client_config: default_google_client_config(),
            facebook_permissions: Vec::new(),
        }
    }
}

fn default_google_client_config() -> String {
    "Google sign in configuration".to_string()
}

#[derive(Deserialize, Clone, Debug)]
pub struct TelemetrySettings {
    #[serde(default = "default_service_name")]
    pub service_name: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// OTLP collector, e.g. http://tempo:4317. Unset disables trace export.
    #[serde(default)]
    pub otlp_endpoint: Option<String>,
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            log_level: default_log_level(),
            otlp_endpoint: None,
        }
    }
}

fn default_service_name() -> String {
    "login-screen".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

pub fn get_configuration() -> Result<LoginSettings, CoreError> {
    let configuration_directory = resolve_config_dir("login-screen")?;
    load_layered(&configuration_directory, "APP")
}
