use crate::error::AuthError;
use crate::models::{AuthOutcome, AuthProvider, AuthRequest};
use crate::services::auth_client::AuthClient;
use crate::services::identity::{IdentitySdk, SignInCompletion, SignInOptions};
use async_trait::async_trait;
use std::sync::Arc;

/// Runs one authentication attempt against one provider.
///
/// Implementations catch every [`AuthError`] and resolve to an
/// [`AuthOutcome`]; nothing escapes as an error.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// `request` is required for [`AuthProvider::Direct`] and ignored by the
    /// identity providers.
    async fn authenticate(
        &self,
        provider: AuthProvider,
        request: Option<AuthRequest>,
    ) -> AuthOutcome;
}

#[async_trait]
impl<T: AuthGateway + ?Sized> AuthGateway for Arc<T> {
    async fn authenticate(
        &self,
        provider: AuthProvider,
        request: Option<AuthRequest>,
    ) -> AuthOutcome {
        (**self).authenticate(provider, request).await
    }
}

/// An identity SDK together with the options it is always invoked with.
#[derive(Clone)]
pub struct IdentityBinding {
    sdk: Arc<dyn IdentitySdk>,
    options: SignInOptions,
}

impl IdentityBinding {
    pub fn new(sdk: Arc<dyn IdentitySdk>, options: SignInOptions) -> Self {
        Self { sdk, options }
    }
}

/// Gateway that sends direct logins over HTTP and delegates the rest to
/// identity SDKs.
pub struct ProviderGateway {
    client: AuthClient,
    google: IdentityBinding,
    facebook: IdentityBinding,
}

impl ProviderGateway {
    pub fn new(client: AuthClient, google: IdentityBinding, facebook: IdentityBinding) -> Self {
        Self {
            client,
            google,
            facebook,
        }
    }

    async fn direct(&self, request: Option<AuthRequest>) -> Result<(), AuthError> {
        let request = request.ok_or_else(|| {
            AuthError::Transport("direct login requires a request body".to_string())
        })?;
        self.client.send(&request).await
    }

    async fn identity(&self, binding: &IdentityBinding) -> Result<(), AuthError> {
        let (completion, receiver) = SignInCompletion::channel();
        binding.sdk.sign_in(&binding.options, completion);

        let report = receiver.await.map_err(|_| {
            AuthError::SdkError("identity provider ended sign-in without a result".to_string())
        })?;
        let session = report.into_result()?;

        tracing::info!(user_id = %session.user_id, "Identity provider sign-in succeeded");
        Ok(())
    }
}

#[async_trait]
impl AuthGateway for ProviderGateway {
    async fn authenticate(
        &self,
        provider: AuthProvider,
        request: Option<AuthRequest>,
    ) -> AuthOutcome {
        let result = match provider {
            AuthProvider::Direct => self.direct(request).await,
            AuthProvider::GoogleIdentity => self.identity(&self.google).await,
            AuthProvider::FacebookIdentity => self.identity(&self.facebook).await,
        };

        if let Err(err) = &result {
            tracing::warn!(provider = %provider, error = %err, "Authentication failed");
        }

        AuthOutcome::from(result)
    }
}
