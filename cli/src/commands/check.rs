use std::net::IpAddr;
use std::process::ExitCode;

use colored::*;
use safedial_core::gate::{classify, host_port};
use safedial_core::{AddressGate, GateError, Verdict};
use tracing::{error, info};

use crate::terminal::print;

pub fn check(network: &str, address: &str) -> ExitCode {
    match AddressGate.evaluate(network, address) {
        Verdict::Allow => {
            info!("{} {} {}", "allow".green().bold(), network, address);
            ExitCode::SUCCESS
        }
        Verdict::Deny(reason) => {
            error!("{} {} {}: {}", "deny".red().bold(), network, address, reason);
            if reason == GateError::UnsafeIp {
                explain(address);
            }
            ExitCode::FAILURE
        }
    }
}

/// Names the block an unsafe address fell into.
fn explain(address: &str) {
    let Some(ip) = host_port::split_host_port(address)
        .ok()
        .and_then(|(host, _)| host.parse::<IpAddr>().ok())
    else {
        return;
    };

    match ip.to_canonical() {
        IpAddr::V4(v4) => {
            if let Some(block) = classify::reserved_ipv4_block(v4) {
                print::aligned_line("block", block.range);
                print::aligned_line("purpose", block.purpose);
            }
        }
        IpAddr::V6(_) => {
            print::aligned_line("outside", classify::GLOBAL_UNICAST_IPV6);
            print::aligned_line("purpose", "not global unicast");
        }
    }
}
