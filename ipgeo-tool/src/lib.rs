//! # ipgeo-tool
//!
//! IP geolocation lookup for the agent runtime.
//!
//! ## Overview
//!
//! - [`GeoRecord`] - The validated shape of one lookup result
//! - [`IpGeoClient`] - One outbound `GET {base}/{ip}` per lookup, parsed and validated
//! - [`IpGeoTool`] - The `get-ip-geo` tool handed to the agent runtime
//!
//! Validation is all-or-nothing: a body that is missing or mistyping any
//! field fails with [`IpGeoError::SchemaValidation`] listing every offending
//! path, never with a partially filled record.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ipgeo_tool::IpGeoClient;
//!
//! # async fn run() -> ipgeo_core::Result<()> {
//! let client = IpGeoClient::ipwhois()?;
//! let record = client.lookup("8.8.8.8").await?;
//! println!("{} is in {}", record.ip, record.country);
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod geo_tool;
mod record;
mod schema;

pub use client::IpGeoClient;
pub use config::{IPWHOIS_API_BASE, IpGeoConfig};
pub use geo_tool::{GET_IP_GEO, GeoLookupArgs, IpGeoTool};
pub use ipgeo_core::{IpGeoError, Result, SchemaError, Tool, ToolContext};
pub use record::{Connection, Flag, GeoRecord, Timezone, parse_body};
pub use schema::generate_tool_schema;
