use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Failed to determine the current directory: {0}")]
    WorkingDirectory(#[from] std::io::Error),

    #[error("Telemetry error: {0}")]
    Telemetry(String),
}

impl From<opentelemetry::trace::TraceError> for CoreError {
    fn from(err: opentelemetry::trace::TraceError) -> Self {
        CoreError::Telemetry(err.to_string())
    }
}

impl From<tracing_subscriber::util::TryInitError> for CoreError {
    fn from(err: tracing_subscriber::util::TryInitError) -> Self {
        CoreError::Telemetry(err.to_string())
    }
}
