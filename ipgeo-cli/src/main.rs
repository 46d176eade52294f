mod cli;
mod config;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use ipgeo_agent::{AGENT_NAME, InstructionProfile, IpGeoAgent, ip_geo_agent_builder};
use ipgeo_core::ToolInvocation;
use ipgeo_telemetry::TelemetryConfig;
use ipgeo_tool::{GET_IP_GEO, IpGeoClient};
use std::sync::Arc;
use tracing::debug;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; the environment and defaults still apply.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    if let Err(e) = init_logging(&config) {
        eprintln!("Telemetry warning: {}", e);
    }

    let result = run(cli.command, &config).await;

    #[cfg(feature = "otlp")]
    if config.otlp_endpoint.is_some() {
        ipgeo_telemetry::shutdown_telemetry();
    }

    result
}

async fn run(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Lookup { ip, json } => {
            let record = IpGeoClient::ipwhois()?.lookup(&ip).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                println!("{}", record);
            }
        }
        Commands::Tool { args } => {
            let args: serde_json::Value =
                serde_json::from_str(&args).context("tool arguments must be a JSON object")?;
            let agent = build_agent(config, None)?;
            let ctx = Arc::new(ToolInvocation::new(AGENT_NAME));
            let value = agent.call_tool(GET_IP_GEO, ctx, args).await?;
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        Commands::Instructions { profile } => {
            println!("{}", profile.unwrap_or(config.profile).instruction());
        }
        Commands::Card { profile } => {
            let agent = build_agent(config, profile)?;
            println!("{}", serde_json::to_string_pretty(&agent.card())?);
        }
    }
    Ok(())
}

fn build_agent(config: &Config, profile: Option<InstructionProfile>) -> Result<IpGeoAgent> {
    let agent = ip_geo_agent_builder(IpGeoClient::ipwhois()?)
        .model(config.model.clone())
        .profile(profile.unwrap_or(config.profile))
        .memory(config.memory.clone())
        .build()?;
    debug!(model = %config.model, profile = %agent.profile(), "agent assembled");
    Ok(agent)
}

fn init_logging(config: &Config) -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Lookups log at info; the CLI only shows warnings unless RUST_LOG is set.
    let telemetry = TelemetryConfig::new("ipgeo")
        .with_default_filter("warn")
        .with_format(config.log_format);

    #[cfg(feature = "otlp")]
    if let Some(endpoint) = &config.otlp_endpoint {
        return ipgeo_telemetry::init_with_otlp(&telemetry, endpoint);
    }

    ipgeo_telemetry::init_with_config(&telemetry)
}
