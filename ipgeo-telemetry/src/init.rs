//! Telemetry initialization and configuration

use std::sync::OnceLock;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

type InitResult = Result<(), Box<dyn std::error::Error>>;

/// Outcome of the first install, replayed to every later caller.
static INIT: OnceLock<Result<(), String>> = OnceLock::new();

fn init_once(
    cell: &OnceLock<Result<(), String>>,
    install: impl FnOnce() -> InitResult,
) -> InitResult {
    cell.get_or_init(|| install().map_err(|e| e.to_string())).clone().map_err(Into::into)
}

/// Shape of the log lines written to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Plain,
    Json,
}

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub service_name: String,
    /// Filter directive used when `RUST_LOG` is not set.
    pub default_filter: String,
    pub format: LogFormat,
}

impl TelemetryConfig {
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            default_filter: "info".to_string(),
            format: LogFormat::Plain,
        }
    }

    pub fn with_default_filter(mut self, filter: impl Into<String>) -> Self {
        self.default_filter = filter.into();
        self
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }
}

/// Initialize console logging with the default configuration
///
/// Only the first call in a process installs a subscriber. Later calls
/// install nothing and return the first call's outcome, so a failed install
/// keeps failing.
///
/// # Example
/// ```
/// use ipgeo_telemetry::init_telemetry;
/// init_telemetry("ipgeo").expect("Failed to initialize telemetry");
/// ```
pub fn init_telemetry(service_name: &str) -> Result<(), Box<dyn std::error::Error>> {
    init_with_config(&TelemetryConfig::new(service_name))
}

/// Initialize console logging with an explicit configuration
pub fn init_with_config(config: &TelemetryConfig) -> InitResult {
    init_once(&INIT, || install_console(config))
}

fn env_filter(default_filter: &str) -> Result<EnvFilter, Box<dyn std::error::Error>> {
    Ok(EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_filter))?)
}

fn install_console(config: &TelemetryConfig) -> Result<(), Box<dyn std::error::Error>> {
    let registry = tracing_subscriber::registry().with(env_filter(&config.default_filter)?);

    match config.format {
        LogFormat::Plain => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_line_number(true),
            )
            .try_init()?,
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_current_span(true),
            )
            .try_init()?,
    }

    tracing::info!(service.name = %config.service_name, "Telemetry initialized");
    Ok(())
}

/// Initialize telemetry with OpenTelemetry OTLP span export
///
/// # Arguments
/// * `config` - Console logging configuration; its service name tags exported spans
/// * `endpoint` - OTLP collector endpoint (e.g., "http://localhost:4317")
///
/// Must be called from within a Tokio runtime.
#[cfg(feature = "otlp")]
pub fn init_with_otlp(
    config: &TelemetryConfig,
    endpoint: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    init_once(&INIT, || install_otlp(config, endpoint))
}

#[cfg(feature = "otlp")]
fn install_otlp(config: &TelemetryConfig, endpoint: &str) -> Result<(), Box<dyn std::error::Error>> {
    use opentelemetry_otlp::WithExportConfig;
    use tracing_opentelemetry::OpenTelemetryLayer;

    let tracer = opentelemetry_otlp::new_pipeline()
        .tracing()
        .with_exporter(opentelemetry_otlp::new_exporter().tonic().with_endpoint(endpoint))
        .with_trace_config(opentelemetry_sdk::trace::config().with_resource(
            opentelemetry_sdk::Resource::new(vec![opentelemetry::KeyValue::new(
                "service.name",
                config.service_name.clone(),
            )]),
        ))
        .install_batch(opentelemetry_sdk::runtime::Tokio)?;

    tracing_subscriber::registry()
        .with(env_filter(&config.default_filter)?)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(true)
                .with_line_number(true),
        )
        .with(OpenTelemetryLayer::new(tracer))
        .try_init()?;

    tracing::info!(
        service.name = %config.service_name,
        otlp.endpoint = endpoint,
        "Telemetry initialized with OpenTelemetry"
    );
    Ok(())
}

/// Flush pending spans and shut the exporter down
#[cfg(feature = "otlp")]
pub fn shutdown_telemetry() {
    opentelemetry::global::shutdown_tracer_provider();
}
