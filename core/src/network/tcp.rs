//! # Gated TCP Connector
//!
//! [`SafeDialer`] resolves a host, then for each resolved address runs the
//! [`DialControl`] hook with the literal address *before* opening the socket.
//! Running the check on the resolved literal, not the hostname, is what
//! keeps DNS rebinding from slipping an internal address past the gate.
//!
//! A denial aborts the whole attempt; the dialer never falls back to another
//! address after the hook refuses one. Transport failures (refused, timed
//! out) move on to the next resolved address, which is gated in turn.

use std::fmt;
use std::io;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use safedial_common::config::{Config, DEFAULT_TIMEOUT};
use tokio::net::{self, TcpStream};
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::error::DialError;
use crate::gate::{self, AddressGate, DialControl};

/// Which address families the dialer may use, like `tcp`/`tcp4`/`tcp6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Family {
    #[default]
    Any,
    V4,
    V6,
}

impl Family {
    fn admits(self, addr: &SocketAddr) -> bool {
        match self {
            Family::Any => true,
            Family::V4 => addr.is_ipv4(),
            Family::V6 => addr.is_ipv6(),
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name: &str = match self {
            Family::Any => "IP",
            Family::V4 => "IPv4",
            Family::V6 => "IPv6",
        };
        f.write_str(name)
    }
}

pub struct SafeDialer<C = AddressGate> {
    control: C,
    family: Family,
    timeout: Duration,
    no_dns: bool,
}

impl SafeDialer<AddressGate> {
    pub fn new() -> Self {
        Self::with_control(AddressGate)
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new().timeout(cfg.timeout).no_dns(cfg.no_dns)
    }
}

impl Default for SafeDialer<AddressGate> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: DialControl> SafeDialer<C> {
    /// Uses `control` in place of the default [`AddressGate`].
    pub fn with_control(control: C) -> Self {
        Self {
            control,
            family: Family::Any,
            timeout: DEFAULT_TIMEOUT,
            no_dns: false,
        }
    }

    pub fn family(mut self, family: Family) -> Self {
        self.family = family;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// When set, `host` must be an IP literal and is never looked up.
    pub fn no_dns(mut self, no_dns: bool) -> Self {
        self.no_dns = no_dns;
        self
    }

    /// Resolves `host` and keeps the addresses of the configured family,
    /// in resolver order.
    pub async fn resolve(&self, host: &str, port: u16) -> Result<Vec<SocketAddr>, DialError> {
        let host: &str = host.trim_start_matches('[').trim_end_matches(']');

        let resolved: Vec<SocketAddr> = if self.no_dns {
            let ip: IpAddr = host.parse().map_err(|_| DialError::Resolve {
                host: host.to_string(),
                source: io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "name resolution disabled and host is not an IP address",
                ),
            })?;
            vec![SocketAddr::new(ip, port)]
        } else {
            net::lookup_host((host, port))
                .await
                .map_err(|source| DialError::Resolve {
                    host: host.to_string(),
                    source,
                })?
                .collect()
        };

        let addrs: Vec<SocketAddr> = resolved
            .into_iter()
            .filter(|addr| self.family.admits(addr))
            .collect();

        if addrs.is_empty() {
            debug!(host = %host, family = %self.family, "no matching addresses found");
            return Err(DialError::NoAddresses {
                host: host.to_string(),
                family: self.family,
            });
        }

        debug!(host = %host, count = addrs.len(), "resolved");
        Ok(addrs)
    }

    /// Resolves and connects, gating every address before its handshake.
    pub async fn connect(&self, host: &str, port: u16) -> Result<TcpStream, DialError> {
        let addrs: Vec<SocketAddr> = self.resolve(host, port).await?;
        self.connect_addrs(host, &addrs).await
    }

    async fn connect_addrs(&self, host: &str, addrs: &[SocketAddr]) -> Result<TcpStream, DialError> {
        let mut last_err: Option<DialError> = None;

        for &addr in addrs {
            if let Err(source) = self.control.control(gate::network_tag(&addr), &addr.to_string()) {
                warn!(host = %host, addr = %addr, reason = %source, "connection denied");
                return Err(DialError::Denied { addr, source });
            }

            match timeout(self.timeout, TcpStream::connect(addr)).await {
                Ok(Ok(stream)) => {
                    debug!(host = %host, addr = %addr, "connected");
                    return Ok(stream);
                }
                Ok(Err(source)) => {
                    debug!(addr = %addr, error = %source, "connect failed");
                    last_err = Some(DialError::Connect { addr, source });
                }
                Err(_elapsed) => {
                    debug!(addr = %addr, "connect timed out");
                    last_err = Some(DialError::Timeout {
                        addr,
                        timeout: self.timeout,
                    });
                }
            }
        }

        Err(last_err.unwrap_or_else(|| DialError::NoAddresses {
            host: host.to_string(),
            family: self.family,
        }))
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
