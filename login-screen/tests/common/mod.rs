//! Shared doubles and settings for login-screen integration tests.
#![allow(dead_code)]

use async_trait::async_trait;
use login_screen::config::{AuthServiceSettings, IdentitySettings, LoginSettings, TelemetrySettings};
use login_screen::models::{AuthOutcome, AuthProvider, AuthRequest};
use login_screen::services::identity::ScriptedIdentitySdk;
use login_screen::services::{AuthGateway, SdkReport};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

pub fn settings_for(base_url: &str) -> LoginSettings {
    LoginSettings {
        auth_service: AuthServiceSettings {
            url: base_url.to_string(),
            login_path: "/login".to_string(),
            timeout_secs: Some(5),
        },
        identity: IdentitySettings::default(),
        telemetry: TelemetrySettings::default(),
    }
}

pub fn sdk(report: SdkReport) -> Arc<ScriptedIdentitySdk> {
    Arc::new(ScriptedIdentitySdk::new(report))
}

/// Address nothing is listening on.
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// Gateway double that counts calls and answers with a fixed outcome.
pub struct CountingGateway {
    outcome: AuthOutcome,
    calls: AtomicUsize,
}

impl CountingGateway {
    pub fn new(outcome: AuthOutcome) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthGateway for CountingGateway {
    async fn authenticate(
        &self,
        _provider: AuthProvider,
        _request: Option<AuthRequest>,
    ) -> AuthOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

/// Gateway double that parks every call until released.
pub struct GatedGateway {
    pub entered: Notify,
    pub release: Notify,
    calls: AtomicUsize,
}

impl GatedGateway {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            entered: Notify::new(),
            release: Notify::new(),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthGateway for GatedGateway {
    async fn authenticate(
        &self,
        _provider: AuthProvider,
        _request: Option<AuthRequest>,
    ) -> AuthOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.entered.notify_one();
        self.release.notified().await;
        AuthOutcome::Success
    }
}
