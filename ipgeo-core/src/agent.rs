use crate::Tool;
use std::sync::Arc;

/// A named agent identity as handed to the hosting runtime.
///
/// The runtime owns the conversation loop; an agent only declares what the
/// hosted model is told, which model serves it, which tools it may call and
/// where its conversational memory lives.
pub trait Agent: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn model(&self) -> &str;
    fn instruction(&self) -> &str;
    fn tools(&self) -> &[Arc<dyn Tool>];

    /// URL of the external conversational memory store, if any.
    fn memory_store(&self) -> Option<&str> {
        None
    }

    fn find_tool(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools().iter().find(|tool| tool.name() == name).cloned()
    }
}
