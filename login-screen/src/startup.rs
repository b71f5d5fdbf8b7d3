use crate::config::{LoginSettings, TelemetrySettings};
use crate::navigation::{main_thread_channel, MainLoop, MainThreadPresenter};
use crate::services::{
    metrics, AuthClient, AuthRequestBuilder, IdentityBinding, IdentitySdk, PresentingSurface,
    ProviderGateway, SignInOptions,
};
use crate::workflow::LoginWorkflow;
use service_core::error::CoreError;
use service_core::observability::init_tracing;
use std::sync::Arc;

pub type LoginScreen = LoginWorkflow<ProviderGateway, MainThreadPresenter>;

/// Install logging, optional trace export and the metrics registry.
pub fn init_observability(settings: &TelemetrySettings) -> Result<(), CoreError> {
    init_tracing(
        &settings.service_name,
        &settings.log_level,
        settings.otlp_endpoint.as_deref(),
    )?;
    metrics::init_metrics().map_err(|e| CoreError::Telemetry(e.to_string()))
}

/// Wire the production gateway and the main-loop presenter into a workflow.
///
/// The returned [`MainLoop`] must be driven by the UI-owning context.
pub fn build_login_screen(
    settings: &LoginSettings,
    google: Arc<dyn IdentitySdk>,
    facebook: Arc<dyn IdentitySdk>,
    surface: PresentingSurface,
) -> (Arc<LoginScreen>, MainLoop) {
    let google = IdentityBinding::new(
        google,
        SignInOptions {
            surface: surface.clone(),
            configuration: Some(settings.identity.google_client_config.clone()),
            permissions: Vec::new(),
        },
    );
    let facebook = IdentityBinding::new(
        facebook,
        SignInOptions {
            surface,
            configuration: None,
            permissions: settings.identity.facebook_permissions.clone(),
        },
    );

    let client = AuthClient::new(settings.auth_service.clone());
    let builder = AuthRequestBuilder::new(client.login_url());
    let gateway = ProviderGateway::new(client, google, facebook);

    let (presenter, main_loop) = main_thread_channel();
    tracing::info!(
        login_url = %builder.login_url(),
        "Login screen ready"
    );

    (
        Arc::new(LoginWorkflow::new(gateway, presenter, builder)),
        main_loop,
    )
}
