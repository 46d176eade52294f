use crate::instruction::InstructionProfile;
use crate::memory::MemoryBinding;
use crate::model::ModelId;
use ipgeo_core::{Agent, IpGeoError, Result, Tool, ToolContext, ToolDeclaration};
use ipgeo_tool::{IpGeoClient, IpGeoTool};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// Name the runtime registers the agent under.
pub const AGENT_NAME: &str = "IPGeoAgent";

const AGENT_DESCRIPTION: &str =
    "Looks up where an IP address is located and explains it in plain language";

pub struct IpGeoAgent {
    name: String,
    description: String,
    model: ModelId,
    profile: InstructionProfile,
    tools: Vec<Arc<dyn Tool>>,
    memory: Option<MemoryBinding>,
    memory_url: Option<String>,
}

impl std::fmt::Debug for IpGeoAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IpGeoAgent")
            .field("name", &self.name)
            .field("model", &self.model.as_str())
            .field("profile", &self.profile)
            .field("tools", &self.tools.iter().map(|t| t.name()).collect::<Vec<_>>())
            .field("memory", &self.memory)
            .finish()
    }
}

impl IpGeoAgent {
    pub fn profile(&self) -> InstructionProfile {
        self.profile
    }

    pub fn model_id(&self) -> &ModelId {
        &self.model
    }

    pub fn memory(&self) -> Option<&MemoryBinding> {
        self.memory.as_ref()
    }

    /// Describe the agent for the hosting runtime.
    pub fn card(&self) -> AgentCard {
        AgentCard {
            name: self.name.clone(),
            description: self.description.clone(),
            model: self.model.to_string(),
            profile: self.profile,
            instructions: self.profile.instruction().to_string(),
            tools: self.tools.iter().map(|t| ToolDeclaration::from_tool(t.as_ref())).collect(),
            memory: self.memory_url.clone(),
        }
    }

    /// Dispatch a tool call the hosted model asked for.
    ///
    /// Failures are returned untouched; relaying them to the user is up to
    /// the runtime.
    pub async fn call_tool(
        &self,
        name: &str,
        ctx: Arc<dyn ToolContext>,
        args: Value,
    ) -> Result<Value> {
        let tool = self.find_tool(name).ok_or_else(|| {
            IpGeoError::Tool(format!("agent '{}' has no tool named '{}'", self.name, name))
        })?;

        debug!(
            agent = %self.name,
            tool = name,
            call_id = ctx.function_call_id(),
            "dispatching tool call"
        );
        tool.execute(ctx, args).await.inspect_err(|e| {
            warn!(agent = %self.name, tool = name, error = %e, "tool call failed");
        })
    }
}

impl Agent for IpGeoAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn model(&self) -> &str {
        self.model.as_str()
    }

    fn instruction(&self) -> &str {
        self.profile.instruction()
    }

    fn tools(&self) -> &[Arc<dyn Tool>] {
        &self.tools
    }

    fn memory_store(&self) -> Option<&str> {
        self.memory_url.as_deref()
    }
}

/// Serializable description of an agent as the runtime consumes it.
#[derive(Debug, Clone, Serialize)]
pub struct AgentCard {
    pub name: String,
    pub description: String,
    pub model: String,
    pub profile: InstructionProfile,
    pub instructions: String,
    pub tools: Vec<ToolDeclaration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<String>,
}

pub struct IpGeoAgentBuilder {
    name: String,
    description: Option<String>,
    model: Option<ModelId>,
    profile: InstructionProfile,
    tools: Vec<Arc<dyn Tool>>,
    memory: Option<MemoryBinding>,
}

impl IpGeoAgentBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            model: None,
            profile: InstructionProfile::default(),
            tools: Vec::new(),
            memory: None,
        }
    }

    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn model(mut self, model: ModelId) -> Self {
        self.model = Some(model);
        self
    }

    pub fn profile(mut self, profile: InstructionProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn tool(mut self, tool: Arc<dyn Tool>) -> Self {
        self.tools.push(tool);
        self
    }

    pub fn memory(mut self, memory: MemoryBinding) -> Self {
        self.memory = Some(memory);
        self
    }

    pub fn build(self) -> Result<IpGeoAgent> {
        if self.name.trim().is_empty() {
            return Err(IpGeoError::Agent("Agent name is required".to_string()));
        }
        let model = self.model.ok_or_else(|| IpGeoError::Agent("Model is required".to_string()))?;

        let mut seen = std::collections::HashSet::new();
        for tool in &self.tools {
            if !seen.insert(tool.name().to_string()) {
                return Err(IpGeoError::Agent(format!("Duplicate tool name: {}", tool.name())));
            }
        }

        Ok(IpGeoAgent {
            name: self.name,
            description: self.description.unwrap_or_default(),
            model,
            profile: self.profile,
            tools: self.tools,
            memory_url: self.memory.as_ref().map(MemoryBinding::url),
            memory: self.memory,
        })
    }
}

/// A builder preloaded with the canonical agent: default model and profile,
/// the `get-ip-geo` tool backed by `client`, and a file-backed memory store.
pub fn ip_geo_agent_builder(client: IpGeoClient) -> IpGeoAgentBuilder {
    IpGeoAgentBuilder::new(AGENT_NAME)
        .description(AGENT_DESCRIPTION)
        .model(ModelId::default())
        .tool(Arc::new(IpGeoTool::new(client)))
        .memory(MemoryBinding::default())
}

pub fn ip_geo_agent(client: IpGeoClient, profile: InstructionProfile) -> Result<IpGeoAgent> {
    ip_geo_agent_builder(client).profile(profile).build()
}
