use crate::Result;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;

    /// JSON schema of the arguments object the runtime must send.
    fn parameters_schema(&self) -> Option<Value> {
        None
    }

    /// JSON schema of a successful result.
    fn response_schema(&self) -> Option<Value> {
        None
    }

    async fn execute(&self, ctx: Arc<dyn ToolContext>, args: Value) -> Result<Value>;
}

pub trait ToolContext: Send + Sync {
    fn invocation_id(&self) -> &str;
    fn agent_name(&self) -> &str;
    fn function_call_id(&self) -> &str;
}

/// Context for a single tool call made by a host outside a model turn.
#[derive(Debug, Clone)]
pub struct ToolInvocation {
    invocation_id: String,
    agent_name: String,
    function_call_id: String,
}

impl ToolInvocation {
    pub fn new(agent_name: impl Into<String>) -> Self {
        Self {
            invocation_id: uuid::Uuid::new_v4().to_string(),
            agent_name: agent_name.into(),
            function_call_id: uuid::Uuid::new_v4().to_string(),
        }
    }

    pub fn with_invocation_id(mut self, invocation_id: impl Into<String>) -> Self {
        self.invocation_id = invocation_id.into();
        self
    }

    pub fn with_function_call_id(mut self, call_id: impl Into<String>) -> Self {
        self.function_call_id = call_id.into();
        self
    }
}

impl ToolContext for ToolInvocation {
    fn invocation_id(&self) -> &str {
        &self.invocation_id
    }

    fn agent_name(&self) -> &str {
        &self.agent_name
    }

    fn function_call_id(&self) -> &str {
        &self.function_call_id
    }
}

/// What the runtime needs to advertise a tool to the hosted model.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDeclaration {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<Value>,
}

impl ToolDeclaration {
    pub fn from_tool(tool: &dyn Tool) -> Self {
        Self {
            name: tool.name().to_string(),
            description: tool.description().to_string(),
            parameters: tool.parameters_schema(),
            response: tool.response_schema(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct EchoTool;

    #[async_trait]
    impl Tool for EchoTool {
        fn name(&self) -> &str {
            "echo"
        }

        fn description(&self) -> &str {
            "echoes its arguments"
        }

        fn parameters_schema(&self) -> Option<Value> {
            Some(json!({"type": "object"}))
        }

        async fn execute(&self, ctx: Arc<dyn ToolContext>, args: Value) -> Result<Value> {
            Ok(json!({"call": ctx.function_call_id(), "args": args}))
        }
    }

    #[test]
    fn test_tool_defaults() {
        let tool = EchoTool;
        assert_eq!(tool.name(), "echo");
        assert!(tool.response_schema().is_none());
    }

    #[tokio::test]
    async fn test_tool_execute_sees_context() {
        let ctx = Arc::new(ToolInvocation::new("agent").with_function_call_id("call-7"))
            as Arc<dyn ToolContext>;
        let result = EchoTool.execute(ctx, json!({"x": 1})).await.unwrap();
        assert_eq!(result, json!({"call": "call-7", "args": {"x": 1}}));
    }

    #[test]
    fn test_invocation_ids_are_fresh() {
        let a = ToolInvocation::new("agent");
        let b = ToolInvocation::new("agent");
        assert_ne!(a.function_call_id(), b.function_call_id());
        assert_eq!(a.agent_name(), "agent");
    }

    #[test]
    fn test_declaration_skips_missing_schemas() {
        let decl = ToolDeclaration::from_tool(&EchoTool);
        let value = serde_json::to_value(&decl).unwrap();
        assert_eq!(value["name"], "echo");
        assert_eq!(value["parameters"], json!({"type": "object"}));
        assert!(value.get("response").is_none());
    }
}
