use clap::{Parser, Subcommand};
use ipgeo_agent::InstructionProfile;

#[derive(Parser)]
#[command(name = "ipgeo")]
#[command(about = "IP geolocation agent host", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Look up the geolocation of an IP address
    Lookup {
        /// IP address to look up
        ip: String,

        /// Print the validated record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Call the get-ip-geo tool through the agent, as the runtime does
    Tool {
        /// Tool arguments as a JSON object, e.g. '{"location":"8.8.8.8"}'
        args: String,
    },

    /// Print the agent instructions
    Instructions {
        /// Instruction profile (concise, narrative, playful)
        #[arg(short, long)]
        profile: Option<InstructionProfile>,
    },

    /// Print the agent card as JSON
    Card {
        /// Instruction profile (concise, narrative, playful)
        #[arg(short, long)]
        profile: Option<InstructionProfile>,
    },
}
