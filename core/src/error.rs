use std::io;
use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

use crate::network::tcp::Family;

/// Reasons the gate refuses a connection.
///
/// Checks run in declaration order and stop at the first failure, so a
/// caller only ever sees the earliest applicable reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum GateError {
    /// The transport is not TCP over IPv4 or IPv6.
    #[error("unsafe network type")]
    UnsafeNetwork,
    /// The address is not a well-formed `host:port` pair.
    #[error("invalid host/port pair in address")]
    InvalidAddress,
    /// The port is something other than exactly `80` or `443`.
    #[error("unsafe port number")]
    UnsafePort,
    /// The host is not a literal IP address.
    #[error("invalid IP address")]
    InvalidIp,
    /// The address is not publicly routable.
    #[error("unsafe IP address")]
    UnsafeIp,
}

#[derive(Debug, Error)]
pub enum DialError {
    #[error("lookup {host}: {source}")]
    Resolve {
        host: String,
        #[source]
        source: io::Error,
    },
    #[error("lookup {host}: no {family} addresses")]
    NoAddresses { host: String, family: Family },
    #[error("dial tcp {addr}: {source}")]
    Denied {
        addr: SocketAddr,
        #[source]
        source: GateError,
    },
    #[error("dial tcp {addr}: {source}")]
    Connect {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },
    #[error("dial tcp {addr}: i/o timeout after {timeout:?}")]
    Timeout { addr: SocketAddr, timeout: Duration },
}

impl DialError {
    /// The gate's verdict, when the failure was a denial rather than a
    /// resolution or transport error.
    pub fn denial(&self) -> Option<GateError> {
        match self {
            DialError::Denied { source, .. } => Some(*source),
            _ => None,
        }
    }
}
