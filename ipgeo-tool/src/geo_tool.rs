use crate::client::IpGeoClient;
use crate::record::GeoRecord;
use crate::schema::generate_tool_schema;
use async_trait::async_trait;
use ipgeo_core::{IpGeoError, Result, Tool, ToolContext};
use ipgeo_telemetry::{add_agent_attributes, tool_execute_span};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::Instrument;

/// Tool id the agent runtime uses to call the lookup.
pub const GET_IP_GEO: &str = "get-ip-geo";

/// Arguments of the `get-ip-geo` tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GeoLookupArgs {
    /// IP Address
    pub location: String,
}

/// The `get-ip-geo` tool: one validated lookup per call.
pub struct IpGeoTool {
    client: IpGeoClient,
}

impl IpGeoTool {
    pub fn new(client: IpGeoClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &IpGeoClient {
        &self.client
    }
}

#[async_trait]
impl Tool for IpGeoTool {
    fn name(&self) -> &str {
        GET_IP_GEO
    }

    fn description(&self) -> &str {
        "Get Geolocation details of an IP Address"
    }

    fn parameters_schema(&self) -> Option<Value> {
        Some(generate_tool_schema::<GeoLookupArgs>())
    }

    fn response_schema(&self) -> Option<Value> {
        Some(generate_tool_schema::<GeoRecord>())
    }

    async fn execute(&self, ctx: Arc<dyn ToolContext>, args: Value) -> Result<Value> {
        let args: GeoLookupArgs = serde_json::from_value(args)
            .map_err(|e| IpGeoError::InvalidArguments(format!("{}: {}", GET_IP_GEO, e)))?;

        let span = tool_execute_span(GET_IP_GEO, ctx.function_call_id());
        span.in_scope(|| add_agent_attributes(ctx.agent_name(), ctx.invocation_id()));

        let record = self.client.lookup(&args.location).instrument(span).await?;

        Ok(serde_json::to_value(record)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_declaration() {
        let tool = IpGeoTool::new(IpGeoClient::ipwhois().unwrap());
        assert_eq!(tool.name(), "get-ip-geo");
        assert_eq!(tool.description(), "Get Geolocation details of an IP Address");

        let params = tool.parameters_schema().unwrap();
        assert_eq!(params["type"], "object");
        assert_eq!(params["properties"]["location"]["type"], "string");
        assert_eq!(params["properties"]["location"]["description"], "IP Address");
        assert_eq!(params["required"], serde_json::json!(["location"]));
    }

    #[test]
    fn test_response_schema_covers_record() {
        let tool = IpGeoTool::new(IpGeoClient::ipwhois().unwrap());
        let schema = tool.response_schema().unwrap();
        let props = &schema["properties"];

        for field in ["ip", "success", "type", "calling_code", "flag", "connection", "timezone"] {
            assert!(props[field].is_object(), "missing {field}");
        }
        assert_eq!(props["connection"]["properties"]["asn"]["type"], "integer");
        assert_eq!(props["timezone"]["properties"]["is_dst"]["type"], "boolean");
        assert_eq!(schema["required"].as_array().unwrap().len(), 20);
    }
}
