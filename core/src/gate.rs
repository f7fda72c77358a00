//! The address gate: a pure, stateless predicate run after name resolution
//! and before the transport handshake.
//!
//! ## Order of checks
//!
//! 1. network tag is `tcp4` or `tcp6`, else [`GateError::UnsafeNetwork`]
//! 2. address splits into `host:port`, else [`GateError::InvalidAddress`]
//! 3. port is exactly `"80"` or `"443"`, else [`GateError::UnsafePort`]
//! 4. host is a literal IP address, else [`GateError::InvalidIp`]
//! 5. address is public, else [`GateError::UnsafeIp`]
//!
//! The first failing check decides the reason. The gate performs no I/O and
//! never logs; reporting a denial is the caller's job.

use std::net::{IpAddr, SocketAddr};

use crate::error::GateError;

pub mod classify;
pub mod host_port;

/// Network tag for TCP over IPv4.
pub const TCP4: &str = "tcp4";
/// Network tag for TCP over IPv6.
pub const TCP6: &str = "tcp6";

/// Ports are compared as text, so `"080"` or `"0x50"` never pass.
pub const ALLOWED_PORTS: [&str; 2] = ["80", "443"];

/// Outcome of a single gate evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Allow,
    Deny(GateError),
}

impl Verdict {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Verdict::Allow)
    }

    pub fn into_result(self) -> Result<(), GateError> {
        match self {
            Verdict::Allow => Ok(()),
            Verdict::Deny(reason) => Err(reason),
        }
    }
}

impl From<Result<(), GateError>> for Verdict {
    fn from(result: Result<(), GateError>) -> Self {
        match result {
            Ok(()) => Verdict::Allow,
            Err(reason) => Verdict::Deny(reason),
        }
    }
}

/// A pre-connect hook invoked with the network tag and the literal
/// `host:port` about to be dialed.
///
/// Returning an error must abort that connection attempt.
pub trait DialControl: Send + Sync {
    fn control(&self, network: &str, address: &str) -> Result<(), GateError>;
}

impl<F> DialControl for F
where
    F: Fn(&str, &str) -> Result<(), GateError> + Send + Sync,
{
    fn control(&self, network: &str, address: &str) -> Result<(), GateError> {
        self(network, address)
    }
}

/// Permits only TCP connections to ports 80 and 443 on public addresses.
///
/// The reserved-range tables it consults are immutable statics, so a single
/// gate (or any number of copies) can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AddressGate;

impl AddressGate {
    pub fn evaluate(&self, network: &str, address: &str) -> Verdict {
        self.check(network, address).into()
    }

    /// Same decision as [`AddressGate::evaluate`], shaped for `?`.
    pub fn check(&self, network: &str, address: &str) -> Result<(), GateError> {
        if !(network == TCP4 || network == TCP6) {
            return Err(GateError::UnsafeNetwork);
        }

        let (host, port) =
            host_port::split_host_port(address).map_err(|_| GateError::InvalidAddress)?;

        if !ALLOWED_PORTS.contains(&port) {
            return Err(GateError::UnsafePort);
        }

        let ip: IpAddr = host.parse().map_err(|_| GateError::InvalidIp)?;

        if !classify::is_public(ip) {
            return Err(GateError::UnsafeIp);
        }

        Ok(())
    }

    /// Checks an already-typed socket address.
    ///
    /// The tag and text form are derived from the address and fed through
    /// the same pipeline as [`AddressGate::check`].
    pub fn check_socket_addr(&self, addr: SocketAddr) -> Result<(), GateError> {
        self.check(network_tag(&addr), &addr.to_string())
    }
}

impl DialControl for AddressGate {
    fn control(&self, network: &str, address: &str) -> Result<(), GateError> {
        self.check(network, address)
    }
}

/// Evaluates `network` and `address` with the default gate.
pub fn evaluate(network: &str, address: &str) -> Verdict {
    AddressGate.evaluate(network, address)
}

/// The tag a connector would report for a TCP dial to `addr`.
pub fn network_tag(addr: &SocketAddr) -> &'static str {
    match addr {
        SocketAddr::V4(_) => TCP4,
        SocketAddr::V6(_) => TCP6,
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
