mod commands;
mod terminal;

use std::process::ExitCode;
use std::time::Duration;

use commands::{CommandLine, Commands, check, dial, ranges};
use safedial_common::config::Config;
use safedial_core::Family;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.quiet);

    let cfg = Config {
        no_dns: commands.no_dns,
        quiet: commands.quiet,
        timeout: Duration::from_millis(commands.timeout_ms),
    };

    match commands.command {
        Commands::Check { network, address } => Ok(check::check(&network, &address)),
        Commands::Dial { host, port, ipv4, ipv6 } => {
            let family: Family = match (ipv4, ipv6) {
                (true, _) => Family::V4,
                (_, true) => Family::V6,
                _ => Family::Any,
            };
            print::header("dialing");
            dial::dial(&host, port, family, &cfg).await
        }
        Commands::Ranges => {
            ranges::ranges();
            print::end_of_program();
            Ok(ExitCode::SUCCESS)
        }
    }
}
