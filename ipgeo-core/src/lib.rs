//! # ipgeo-core
//!
//! Core traits and types shared by the IP geolocation agent crates.
//!
//! ## Overview
//!
//! - [`Tool`] / [`ToolContext`] - The seam through which the agent runtime invokes tools
//! - [`Agent`] - A named agent identity (instructions, model, tools, memory binding)
//! - [`AgentLoader`] - Resolve agents by name for a hosting runtime
//! - [`IpGeoError`] / [`Result`] - Unified error handling
//! - [`SchemaError`] - Every field violation found while validating an upstream payload
//!
//! ## Tool
//!
//! ```rust,ignore
//! #[async_trait]
//! pub trait Tool: Send + Sync {
//!     fn name(&self) -> &str;
//!     fn description(&self) -> &str;
//!     async fn execute(&self, ctx: Arc<dyn ToolContext>, args: Value) -> Result<Value>;
//! }
//! ```

pub mod agent;
pub mod agent_loader;
pub mod error;
pub mod schema;
pub mod tool;

pub use agent::Agent;
pub use agent_loader::{AgentLoader, SingleAgentLoader};
pub use error::{IpGeoError, Result};
pub use schema::{FieldViolation, JsonKind, SchemaError, ViolationKind};
pub use tool::{Tool, ToolContext, ToolDeclaration, ToolInvocation};
