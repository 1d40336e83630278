//! Logging and OpenTelemetry tracing setup.
//!
//! Applications embedding the client call [`TracingConfig::init`] once. It
//! installs a `tracing-subscriber` registry filtered by `RUST_LOG` (default
//! `info`), with a stdout layer unless disabled and an OTLP/gRPC exporter when
//! an endpoint is configured (`GOCD_OTLP_ENDPOINT` by default).
//!
//! Every outgoing request carries the current span's W3C `traceparent`.
//!
//! ```rust,ignore
//! use gocd_client::tracing::TracingConfig;
//!
//! let guard = TracingConfig::new().with_service_name("gocd-sync").init()?;
//! // ...
//! guard.shutdown()?;
//! ```

use opentelemetry::KeyValue;
use opentelemetry::propagation::{Injector, TextMapPropagator};
use opentelemetry::trace::TracerProvider;
use opentelemetry_sdk::Resource;
use opentelemetry_sdk::propagation::TraceContextPropagator;
use opentelemetry_sdk::trace::{BatchSpanProcessor, SdkTracerProvider};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::time::Duration;
use tracing_opentelemetry::OpenTelemetrySpanExt;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "info";

/// Variable naming the OTLP collector, e.g. `http://localhost:4317`.
pub const OTLP_ENDPOINT_ENV: &str = "GOCD_OTLP_ENDPOINT";

/// How the process-wide subscriber is assembled.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// OTLP/gRPC collector; spans are only exported when set.
    pub otlp_endpoint: Option<String>,
    /// `service.name` resource attribute and tracer name.
    pub service_name: String,
    /// `service.version` resource attribute.
    pub service_version: String,
    /// Print formatted events to stdout.
    pub enable_stdout: bool,
    /// Export timeout for the OTLP exporter.
    pub export_timeout: Duration,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            otlp_endpoint: std::env::var(OTLP_ENDPOINT_ENV)
                .ok()
                .filter(|v| !v.is_empty()),
            service_name: "gocd-client".to_string(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            enable_stdout: true,
            export_timeout: Duration::from_secs(5),
        }
    }
}

impl TracingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_otlp_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.otlp_endpoint = Some(endpoint.into());
        self
    }

    /// Never export spans, even if the endpoint variable is set.
    pub fn without_otlp(mut self) -> Self {
        self.otlp_endpoint = None;
        self
    }

    pub fn with_service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = name.into();
        self
    }

    pub fn with_service_version(mut self, version: impl Into<String>) -> Self {
        self.service_version = version.into();
        self
    }

    pub fn with_stdout(mut self, enable: bool) -> Self {
        self.enable_stdout = enable;
        self
    }

    /// Install the global subscriber.
    ///
    /// Keep the returned guard for the life of the process and call
    /// [`TracingGuard::shutdown`] before exit so buffered spans are exported.
    ///
    /// # Errors
    /// - `TracingError::InitError` if the OTLP exporter cannot be built
    /// - `TracingError::AlreadyInitialized` if a global subscriber exists
    pub fn init(&self) -> Result<TracingGuard, TracingError> {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let provider = match self.otlp_endpoint.as_deref() {
            Some(endpoint) => Some(self.otlp_provider(endpoint)?),
            None => None,
        };

        let otel_layer = provider.as_ref().map(|provider| {
            tracing_opentelemetry::layer().with_tracer(provider.tracer(self.service_name.clone()))
        });
        let fmt_layer = self.enable_stdout.then(|| tracing_subscriber::fmt::layer());

        tracing_subscriber::registry()
            .with(env_filter)
            .with(otel_layer)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| TracingError::AlreadyInitialized(e.to_string()))?;

        ::tracing::debug!(
            service = %self.service_name,
            otlp = provider.is_some(),
            "Tracing initialized"
        );
        Ok(TracingGuard { provider })
    }

    fn otlp_provider(&self, endpoint: &str) -> Result<SdkTracerProvider, TracingError> {
        use opentelemetry_otlp::{Protocol, WithExportConfig};

        let exporter = opentelemetry_otlp::SpanExporter::builder()
            .with_tonic()
            .with_endpoint(endpoint)
            .with_protocol(Protocol::Grpc)
            .with_timeout(self.export_timeout)
            .build()
            .map_err(|e| TracingError::InitError(e.to_string()))?;

        let resource = Resource::builder()
            .with_service_name(self.service_name.clone())
            .with_attribute(KeyValue::new(
                "service.version",
                self.service_version.clone(),
            ))
            .build();

        Ok(SdkTracerProvider::builder()
            .with_span_processor(BatchSpanProcessor::builder(exporter).build())
            .with_resource(resource)
            .build())
    }
}

/// Owns the tracer provider installed by [`TracingConfig::init`].
#[must_use = "dropping the guard without shutdown can lose buffered spans"]
pub struct TracingGuard {
    provider: Option<SdkTracerProvider>,
}

impl TracingGuard {
    /// Whether spans are being exported over OTLP.
    pub fn is_exporting(&self) -> bool {
        self.provider.is_some()
    }

    /// Flush pending spans and stop the exporter.
    ///
    /// # Errors
    /// `TracingError::Shutdown` if the provider fails to flush.
    pub fn shutdown(self) -> Result<(), TracingError> {
        match self.provider {
            Some(provider) => provider
                .shutdown()
                .map_err(|e| TracingError::Shutdown(e.to_string())),
            None => Ok(()),
        }
    }
}

/// Errors from installing or tearing down tracing.
#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    #[error("Failed to initialize OpenTelemetry: {0}")]
    InitError(String),

    #[error("A global subscriber is already installed: {0}")]
    AlreadyInitialized(String),

    #[error("Failed to flush spans: {0}")]
    Shutdown(String),
}

/// Writes propagator fields into a request's headers.
struct HeaderInjector<'a>(&'a mut HeaderMap);

impl Injector for HeaderInjector<'_> {
    fn set(&mut self, key: &str, value: String) {
        if let (Ok(name), Ok(value)) = (
            HeaderName::from_bytes(key.as_bytes()),
            HeaderValue::from_str(&value),
        ) {
            self.0.insert(name, value);
        }
    }
}

/// Add the current span's W3C trace context to `headers`.
///
/// Without an OpenTelemetry layer the context is invalid and nothing is added.
pub fn inject_trace_context(headers: &mut HeaderMap) {
    let context = ::tracing::Span::current().context();
    TraceContextPropagator::new().inject_context(&context, &mut HeaderInjector(headers));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_methods() {
        let config = TracingConfig::new()
            .with_otlp_endpoint("http://localhost:4317")
            .with_service_name("gocd-sync")
            .with_service_version("1.2.3")
            .with_stdout(false);

        assert_eq!(config.otlp_endpoint.as_deref(), Some("http://localhost:4317"));
        assert_eq!(config.service_name, "gocd-sync");
        assert_eq!(config.service_version, "1.2.3");
        assert!(!config.enable_stdout);

        assert!(config.without_otlp().otlp_endpoint.is_none());
    }

    #[test]
    fn test_default_service_name() {
        assert_eq!(TracingConfig::default().service_name, "gocd-client");
    }

    #[test]
    fn test_inject_without_active_span_adds_nothing() {
        let mut headers = HeaderMap::new();
        inject_trace_context(&mut headers);
        assert!(headers.get("traceparent").is_none());
    }

    #[test]
    fn test_header_injector_skips_invalid_values() {
        let mut headers = HeaderMap::new();
        let mut injector = HeaderInjector(&mut headers);
        injector.set("traceparent", "00-abc-def-01".to_string());
        injector.set("tracestate", "bad\nvalue".to_string());

        assert_eq!(headers.get("traceparent").unwrap(), "00-abc-def-01");
        assert!(headers.get("tracestate").is_none());
    }

    #[test]
    fn test_guard_without_provider_shuts_down_cleanly() {
        let guard = TracingGuard { provider: None };
        assert!(!guard.is_exporting());
        assert!(guard.shutdown().is_ok());
    }
}
