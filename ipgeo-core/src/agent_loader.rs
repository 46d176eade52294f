use crate::{Agent, IpGeoError, Result};
use async_trait::async_trait;
use std::sync::Arc;

/// Trait for loading agents by name.
#[async_trait]
pub trait AgentLoader: Send + Sync {
    /// Load an agent by name. The empty name resolves to the root agent.
    async fn load_agent(&self, name: &str) -> Result<Arc<dyn Agent>>;

    /// List all available agent names.
    fn list_agents(&self) -> Vec<String>;

    /// Get the root (default) agent.
    fn root_agent(&self) -> Arc<dyn Agent>;
}

/// Loader for a runtime that hosts exactly one agent.
pub struct SingleAgentLoader {
    agent: Arc<dyn Agent>,
}

impl SingleAgentLoader {
    pub fn new(agent: Arc<dyn Agent>) -> Self {
        Self { agent }
    }
}

#[async_trait]
impl AgentLoader for SingleAgentLoader {
    async fn load_agent(&self, name: &str) -> Result<Arc<dyn Agent>> {
        if name.is_empty() || name == self.agent.name() {
            Ok(self.agent.clone())
        } else {
            Err(IpGeoError::Config(format!(
                "Cannot load agent '{}' - use empty string or '{}'",
                name,
                self.agent.name()
            )))
        }
    }

    fn list_agents(&self) -> Vec<String> {
        vec![self.agent.name().to_string()]
    }

    fn root_agent(&self) -> Arc<dyn Agent> {
        self.agent.clone()
    }
}
