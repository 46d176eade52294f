//! # ipgeo-agent
//!
//! The `IPGeoAgent` identity handed to the hosting agent runtime.
//!
//! ## Overview
//!
//! - [`InstructionProfile`] - Selectable instruction texts (concise, narrative, playful)
//! - [`ModelId`] - The `provider/model` the runtime serves the agent with
//! - [`MemoryBinding`] - Location of the runtime's conversational memory store
//! - [`IpGeoAgent`] / [`IpGeoAgentBuilder`] - The agent definition and its builder
//! - [`AgentCard`] - Serializable description for the runtime
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ipgeo_agent::{InstructionProfile, ip_geo_agent};
//! use ipgeo_tool::IpGeoClient;
//!
//! # fn run() -> ipgeo_core::Result<()> {
//! let agent = ip_geo_agent(IpGeoClient::ipwhois()?, InstructionProfile::Narrative)?;
//! println!("{}", serde_json::to_string_pretty(&agent.card())?);
//! # Ok(())
//! # }
//! ```

mod agent;
mod instruction;
mod memory;
mod model;

pub use agent::{
    AGENT_NAME, AgentCard, IpGeoAgent, IpGeoAgentBuilder, ip_geo_agent, ip_geo_agent_builder,
};
pub use instruction::InstructionProfile;
pub use memory::{DEFAULT_MEMORY_URL, MemoryBinding};
pub use model::{DEFAULT_MODEL, ModelId};
