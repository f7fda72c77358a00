//! # CIDR Range Model
//!
//! A base address plus a prefix length, used for membership tests against
//! fixed tables of address blocks.
//!
//! Ranges can be built in `const` context so tables of them live in static,
//! immutable memory:
//!
//! ```
//! use safedial_common::network::range::IpRange;
//!
//! static LOOPBACK: IpRange = IpRange::v4(127, 0, 0, 0, 8);
//! assert!(LOOPBACK.contains("127.0.0.1".parse().unwrap()));
//! ```

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use pnet::ipnetwork::IpNetwork;
use thiserror::Error;

const IPV4_BITS: u8 = 32;
const IPV6_BITS: u8 = 128;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("Invalid prefix: {prefix} > {max}")]
    InvalidPrefix { prefix: u8, max: u8 },
    #[error("Invalid range '{input}': {reason}")]
    Parse { input: String, reason: String },
}

/// A CIDR block: every address sharing the first `prefix` bits of `base`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IpRange {
    base: IpAddr,
    prefix: u8,
}

impl IpRange {
    /// Builds an IPv4 block. Panics at compile time when used in a `const`
    /// or `static` initializer with a prefix above 32.
    pub const fn v4(a: u8, b: u8, c: u8, d: u8, prefix: u8) -> Self {
        assert!(prefix <= IPV4_BITS, "IPv4 prefix exceeds 32 bits");
        Self {
            base: IpAddr::V4(Ipv4Addr::new(a, b, c, d)),
            prefix,
        }
    }

    /// Builds an IPv6 block from its eight 16-bit segments.
    pub const fn v6(segments: [u16; 8], prefix: u8) -> Self {
        assert!(prefix <= IPV6_BITS, "IPv6 prefix exceeds 128 bits");
        let [a, b, c, d, e, f, g, h] = segments;
        Self {
            base: IpAddr::V6(Ipv6Addr::new(a, b, c, d, e, f, g, h)),
            prefix,
        }
    }

    /// Runtime constructor that validates the prefix against the address width.
    pub fn new(base: IpAddr, prefix: u8) -> Result<Self, RangeError> {
        let max: u8 = max_prefix(&base);
        if prefix > max {
            return Err(RangeError::InvalidPrefix { prefix, max });
        }
        Ok(Self { base, prefix })
    }

    pub fn base(&self) -> IpAddr {
        self.base
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    pub fn is_ipv4(&self) -> bool {
        self.base.is_ipv4()
    }

    /// Returns `true` if `addr` shares the first `prefix` bits of the base.
    ///
    /// Address families never mix: an IPv4 block does not contain any
    /// 16-byte address, including IPv4-mapped ones. Callers that want the
    /// mapped form treated as IPv4 must canonicalize first.
    pub fn contains(&self, addr: IpAddr) -> bool {
        match (self.base, addr) {
            (IpAddr::V4(base), IpAddr::V4(addr)) => {
                let mask: u32 = v4_mask(self.prefix);
                u32::from(base) & mask == u32::from(addr) & mask
            }
            (IpAddr::V6(base), IpAddr::V6(addr)) => {
                let mask: u128 = v6_mask(self.prefix);
                u128::from(base) & mask == u128::from(addr) & mask
            }
            _ => false,
        }
    }

    /// The lowest address of the block (base with host bits cleared).
    pub fn network(&self) -> IpAddr {
        match self.base {
            IpAddr::V4(base) => IpAddr::V4(Ipv4Addr::from(u32::from(base) & v4_mask(self.prefix))),
            IpAddr::V6(base) => IpAddr::V6(Ipv6Addr::from(u128::from(base) & v6_mask(self.prefix))),
        }
    }

    /// The highest address of the block (base with host bits set).
    pub fn last(&self) -> IpAddr {
        match self.base {
            IpAddr::V4(base) => {
                let mask: u32 = v4_mask(self.prefix);
                IpAddr::V4(Ipv4Addr::from((u32::from(base) & mask) | !mask))
            }
            IpAddr::V6(base) => {
                let mask: u128 = v6_mask(self.prefix);
                IpAddr::V6(Ipv6Addr::from((u128::from(base) & mask) | !mask))
            }
        }
    }
}

fn max_prefix(addr: &IpAddr) -> u8 {
    match addr {
        IpAddr::V4(_) => IPV4_BITS,
        IpAddr::V6(_) => IPV6_BITS,
    }
}

fn v4_mask(prefix: u8) -> u32 {
    if prefix == 0 {
        0
    } else {
        u32::MAX << (IPV4_BITS - prefix)
    }
}

fn v6_mask(prefix: u8) -> u128 {
    if prefix == 0 {
        0
    } else {
        u128::MAX << (IPV6_BITS - prefix)
    }
}

impl fmt::Display for IpRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.prefix)
    }
}

impl FromStr for IpRange {
    type Err = RangeError;

    /// Parses CIDR notation like "10.0.0.0/8" or "2000::/3".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let network: IpNetwork = s.parse::<IpNetwork>().map_err(|e| RangeError::Parse {
            input: s.to_string(),
            reason: e.to_string(),
        })?;
        IpRange::new(network.ip(), network.prefix())
    }
}

impl TryFrom<IpRange> for IpNetwork {
    type Error = RangeError;

    fn try_from(range: IpRange) -> Result<Self, Self::Error> {
        IpNetwork::new(range.base, range.prefix).map_err(|e| RangeError::Parse {
            input: range.to_string(),
            reason: e.to_string(),
        })
    }
}

impl From<IpNetwork> for IpRange {
    fn from(network: IpNetwork) -> Self {
        // IpNetwork already enforces the prefix bound for its family.
        Self {
            base: network.ip(),
            prefix: network.prefix(),
        }
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
