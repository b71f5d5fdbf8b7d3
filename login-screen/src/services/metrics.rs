use crate::models::AuthProvider;
use once_cell::sync::OnceCell;
use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};
use std::time::Duration;

struct LoginMetrics {
    registry: Registry,
    attempts_total: IntCounterVec,
    attempt_duration_seconds: HistogramVec,
}

impl LoginMetrics {
    fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let attempts_total = IntCounterVec::new(
            Opts::new("login_attempts_total", "Total number of login attempts"),
            &["provider", "outcome"],
        )?;

        let attempt_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "login_attempt_duration_seconds",
                "Login attempt duration in seconds",
            ),
            &["provider"],
        )?;

        registry.register(Box::new(attempts_total.clone()))?;
        registry.register(Box::new(attempt_duration_seconds.clone()))?;

        Ok(Self {
            registry,
            attempts_total,
            attempt_duration_seconds,
        })
    }
}

static METRICS: OnceCell<LoginMetrics> = OnceCell::new();

/// Idempotent.
pub fn init_metrics() -> Result<(), prometheus::Error> {
    METRICS.get_or_try_init(LoginMetrics::new).map(|_| ())
}

/// No-op until [`init_metrics`] has run.
pub fn record_attempt(provider: AuthProvider, outcome: &str, elapsed: Duration) {
    let Some(metrics) = METRICS.get() else {
        return;
    };
    metrics
        .attempts_total
        .with_label_values(&[provider.as_str(), outcome])
        .inc();
    metrics
        .attempt_duration_seconds
        .with_label_values(&[provider.as_str()])
        .observe(elapsed.as_secs_f64());
}

/// Render all login metrics in the Prometheus text format.
pub fn get_metrics() -> Result<String, prometheus::Error> {
    let metrics = METRICS.get_or_try_init(LoginMetrics::new)?;

    let mut buffer = Vec::new();
    TextEncoder::new().encode(&metrics.registry.gather(), &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorded_attempts_are_exported() {
        init_metrics().unwrap();
        init_metrics().unwrap();

        record_attempt(
            AuthProvider::FacebookIdentity,
            "cancelled",
            Duration::from_millis(120),
        );

        let output = get_metrics().unwrap();
        assert!(output.contains("login_attempts_total"));
        assert!(output.contains("provider=\"facebook\""));
        assert!(output.contains("outcome=\"cancelled\""));
        assert!(output.contains("login_attempt_duration_seconds"));
    }
}
