//! Span helpers for geolocation operations

use tracing::Span;

/// Create a span for one outbound geolocation lookup
///
/// # Example
/// ```
/// use ipgeo_telemetry::geo_lookup_span;
/// let span = geo_lookup_span("8.8.8.8");
/// let _enter = span.enter();
/// ```
pub fn geo_lookup_span(ip: &str) -> Span {
    tracing::info_span!("geo.lookup", geo.ip = ip, otel.kind = "client")
}

/// Create a span for a tool invocation made by the agent runtime
///
/// # Example
/// ```
/// use ipgeo_telemetry::tool_execute_span;
/// let span = tool_execute_span("get-ip-geo", "call-1");
/// let _enter = span.enter();
/// ```
pub fn tool_execute_span(tool_name: &str, function_call_id: &str) -> Span {
    tracing::info_span!(
        "tool.execute",
        tool.name = tool_name,
        tool.call_id = function_call_id,
        agent.name = tracing::field::Empty,
        invocation.id = tracing::field::Empty,
        otel.kind = "internal"
    )
}

/// Record the agent that triggered the current operation
///
/// Only spans that declare `agent.name` and `invocation.id` keep the values.
pub fn add_agent_attributes(agent_name: &str, invocation_id: &str) {
    let span = Span::current();
    span.record("agent.name", agent_name);
    span.record("invocation.id", invocation_id);
}
