//! # ipgeo-telemetry
//!
//! Structured logging for the IP geolocation agent, built on `tracing`.
//!
//! ## Features
//! - Console logging (plain or JSON lines) filtered through `RUST_LOG`
//! - Pre-configured spans for geolocation lookups and tool calls
//! - OTLP span export behind the `otlp` cargo feature
//!
//! ## Usage
//!
//! ```rust
//! use ipgeo_telemetry::{init_telemetry, info};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     init_telemetry("ipgeo")?;
//!     info!("ready");
//!     Ok(())
//! }
//! ```

pub mod init;
pub mod spans;

// Re-export tracing macros for convenience
pub use tracing::{Instrument, Span, debug, error, info, instrument, trace, warn};

pub use spans::*;

pub use init::{LogFormat, TelemetryConfig, init_telemetry, init_with_config};
#[cfg(feature = "otlp")]
pub use init::{init_with_otlp, shutdown_telemetry};
