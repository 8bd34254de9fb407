//! Provides utilities to initialize logging and OpenTelemetry tracing.
use std::env;

use opentelemetry::{trace::TracerProvider, KeyValue};
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{trace::SdkTracerProvider, Resource};
use tracing::*;
use tracing_subscriber::{
    layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

/// Environment variable holding the OTLP collector endpoint.
pub const OTLP_URL_ENVVAR: &str = "NOR_OTLP_URL";
/// Environment variable name for the service label, which is appended to the
/// whoami string.
pub const SVC_LABEL_ENVVAR: &str = "NOR_SVC_LABEL";
/// Environment variable enabling source file names in log lines when set to `1`.
pub const LOG_FILE_ENVVAR: &str = "LOG_FILE";
/// Environment variable enabling source line numbers in log lines when set to `1`.
pub const LOG_LINE_NUM_ENVVAR: &str = "LOG_LINE_NUM";

/// Filter directive used when `RUST_LOG` is not set.
const DEFAULT_DIRECTIVE: &str = "info";

/// Configuration for the logger.
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Identifies the service in logs and traces.
    whoami: String,

    /// The OpenTelemetry collector endpoint, if traces should be exported.
    otel_url: Option<String>,

    /// Directive applied when `RUST_LOG` is absent.
    default_directive: String,
}

impl LoggerConfig {
    /// Creates a new instance with whoami set and no trace export.
    pub fn new(whoami: String) -> Self {
        Self {
            whoami,
            otel_url: None,
            default_directive: DEFAULT_DIRECTIVE.to_owned(),
        }
    }

    /// Creates a new instance with the whoami string derived from `base` and the service label,
    /// picking up the OTLP endpoint from the environment.
    pub fn from_env(base: &str) -> Self {
        let mut config = Self::new(get_whoami_string(base));
        config.otel_url = get_otlp_url_from_env();
        config
    }

    /// Sets the OpenTelemetry endpoint.
    pub fn with_otlp_url(mut self, url: String) -> Self {
        self.otel_url = Some(url);
        self
    }

    /// Sets the filter directive used when `RUST_LOG` is absent.
    pub fn with_default_directive(mut self, directive: impl Into<String>) -> Self {
        self.default_directive = directive.into();
        self
    }

    /// Returns the whoami string.
    pub fn whoami(&self) -> &str {
        &self.whoami
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::from_env("(nor)")
    }
}

/// Initializes the global subscriber with the provided config.
///
/// # Panics
///
/// If the OTLP exporter cannot be built or a global subscriber is already set.
pub fn init(config: LoggerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_directive));

    let registry = tracing_subscriber::registry().with(stdout_layer().with_filter(filter));

    match &config.otel_url {
        Some(otel_url) => registry.with(otel_layer(&config.whoami, otel_url)).init(),
        None => registry.init(),
    }

    info!(whoami = %config.whoami, otel = config.otel_url.is_some(), "logging started");
}

/// Compact stdout output, optionally annotated with source locations.
fn stdout_layer() -> impl Layer<Registry> {
    let with_file = env::var(LOG_FILE_ENVVAR).is_ok_and(|v| v == "1");
    let with_line = env::var(LOG_LINE_NUM_ENVVAR).is_ok_and(|v| v == "1");

    tracing_subscriber::fmt::layer().compact().event_format(
        tracing_subscriber::fmt::format()
            .compact()
            .with_file(with_file)
            .with_line_number(with_line),
    )
}

/// Span export to an OTLP collector over gRPC.
fn otel_layer<S>(whoami: &str, otel_url: &str) -> impl Layer<S>
where
    S: Subscriber + for<'span> tracing_subscriber::registry::LookupSpan<'span>,
{
    let resource = Resource::builder()
        .with_attribute(KeyValue::new("service.name", whoami.to_owned()))
        .build();

    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(otel_url)
        .build()
        .expect("must be able to initialize exporter");

    let provider = SdkTracerProvider::builder()
        .with_resource(resource)
        .with_batch_exporter(exporter)
        .build();

    tracing_opentelemetry::layer().with_tracer(provider.tracer("nor"))
}

/// Gets the OTLP URL from the standard envvar.
pub fn get_otlp_url_from_env() -> Option<String> {
    env::var(OTLP_URL_ENVVAR).ok()
}

/// Gets the service label from the standard envvar, which should be included
/// in the whoami string.
pub fn get_service_label_from_env() -> Option<String> {
    env::var(SVC_LABEL_ENVVAR).ok()
}

/// Computes a standard whoami string.
pub fn get_whoami_string(base: &str) -> String {
    match get_service_label_from_env() {
        Some(label) => format!("{base}%{label}"),
        None => base.to_owned(),
    }
}
