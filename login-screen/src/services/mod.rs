pub mod auth_client;
pub mod gateway;
pub mod identity;
pub mod metrics;
pub mod request_builder;
pub mod validation;

pub use auth_client::AuthClient;
pub use gateway::{AuthGateway, IdentityBinding, ProviderGateway};
pub use identity::{IdentitySdk, PresentingSurface, SdkReport, SignInCompletion, SignInOptions};
pub use request_builder::AuthRequestBuilder;
