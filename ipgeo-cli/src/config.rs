use anyhow::{Context, Result};
use ipgeo_agent::{InstructionProfile, MemoryBinding, ModelId};
use ipgeo_telemetry::LogFormat;

/// Host settings read from the environment (after `.env` is loaded).
#[derive(Debug, Clone)]
pub struct Config {
    pub model: ModelId,
    pub profile: InstructionProfile,
    pub memory: MemoryBinding,
    pub log_format: LogFormat,
    #[cfg(feature = "otlp")]
    pub otlp_endpoint: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let model = match var("IPGEO_MODEL") {
            Some(id) => id.parse().context("IPGEO_MODEL")?,
            None => ModelId::default(),
        };
        let profile = match var("IPGEO_PROFILE") {
            Some(name) => name.parse().context("IPGEO_PROFILE")?,
            None => InstructionProfile::default(),
        };
        let memory = match var("IPGEO_MEMORY_URL") {
            Some(url) => url.parse().context("IPGEO_MEMORY_URL")?,
            None => MemoryBinding::default(),
        };
        let log_format = match var("IPGEO_LOG_JSON").as_deref().map(str::trim) {
            Some("1" | "true" | "yes") => LogFormat::Json,
            _ => LogFormat::Plain,
        };

        Ok(Self {
            model,
            profile,
            memory,
            log_format,
            #[cfg(feature = "otlp")]
            otlp_endpoint: var("OTEL_EXPORTER_OTLP_ENDPOINT").filter(|s| !s.is_empty()),
        })
    }
}
