pub mod check;
pub mod dial;
pub mod ranges;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "safedial")]
#[command(about = "A pre-connection address-safety gate.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Only dial literal IP addresses, never resolve names
    #[arg(long, global = true)]
    pub no_dns: bool,

    /// Reduce output, repeat for less (-qq)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Connect timeout per resolved address, in milliseconds
    #[arg(long, global = true, default_value_t = 10_000)]
    pub timeout_ms: u64,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ask the gate whether a resolved address may be dialed
    #[command(alias = "c")]
    Check {
        /// Network tag reported by the connector (tcp4 or tcp6)
        network: String,
        /// Literal host:port, e.g. 93.184.216.34:443 or [::1]:80
        address: String,
    },
    /// Resolve a host and connect to it through the gate
    #[command(alias = "d")]
    Dial {
        host: String,
        #[arg(short, long, default_value_t = 443)]
        port: u16,
        /// Only use IPv4 addresses
        #[arg(short = '4', long = "ipv4", conflicts_with = "ipv6")]
        ipv4: bool,
        /// Only use IPv6 addresses
        #[arg(short = '6', long = "ipv6")]
        ipv6: bool,
    },
    /// List the address tables the gate classifies against
    #[command(alias = "r")]
    Ranges,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
