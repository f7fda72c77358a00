use std::process::ExitCode;

use safedial_common::config::Config;
use safedial_core::{Family, SafeDialer};
use tracing::{error, info};

use crate::terminal::print;

pub async fn dial(host: &str, port: u16, family: Family, cfg: &Config) -> anyhow::Result<ExitCode> {
    let dialer = SafeDialer::from_config(cfg).family(family);

    match dialer.connect(host, port).await {
        Ok(stream) => {
            info!("connected to {host}:{port}");
            print::aligned_line("peer", stream.peer_addr()?);
            print::aligned_line("local", stream.local_addr()?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!("{e}");
            Ok(ExitCode::FAILURE)
        }
    }
}
