//! Public versus non-public address classification.
//!
//! IPv4 is a deny-list: everything is public except the reserved blocks
//! below. IPv6 is an allow-list: only global unicast (`2000::/3`) is public,
//! so unique-local, link-local, loopback, multicast and any special block
//! outside `2000::/3` are all refused without being named.
//!
//! IPv4-mapped IPv6 addresses (`::ffff:a.b.c.d`) are classified as the IPv4
//! address they carry.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use safedial_common::network::range::IpRange;

/// An IPv4 block that is never considered public.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservedBlock {
    pub range: IpRange,
    pub purpose: &'static str,
}

const fn reserved(range: IpRange, purpose: &'static str) -> ReservedBlock {
    ReservedBlock { range, purpose }
}

pub static RESERVED_IPV4: [ReservedBlock; 15] = [
    reserved(IpRange::v4(0, 0, 0, 0, 8), "current network"),
    reserved(IpRange::v4(10, 0, 0, 0, 8), "private"),
    reserved(IpRange::v4(100, 64, 0, 0, 10), "shared address space"),
    reserved(IpRange::v4(127, 0, 0, 0, 8), "loopback"),
    reserved(IpRange::v4(169, 254, 0, 0, 16), "link-local"),
    reserved(IpRange::v4(172, 16, 0, 0, 12), "private"),
    reserved(IpRange::v4(192, 0, 0, 0, 24), "IETF protocol assignments"),
    reserved(IpRange::v4(192, 0, 2, 0, 24), "documentation (TEST-NET-1)"),
    reserved(IpRange::v4(192, 88, 99, 0, 24), "6to4 relay anycast"),
    reserved(IpRange::v4(192, 168, 0, 0, 16), "private"),
    reserved(IpRange::v4(198, 18, 0, 0, 15), "benchmarking"),
    reserved(IpRange::v4(198, 51, 100, 0, 24), "documentation (TEST-NET-2)"),
    reserved(IpRange::v4(203, 0, 113, 0, 24), "documentation (TEST-NET-3)"),
    reserved(IpRange::v4(224, 0, 0, 0, 4), "multicast"),
    // Includes the limited broadcast address 255.255.255.255.
    reserved(IpRange::v4(240, 0, 0, 0, 4), "reserved"),
];

pub static GLOBAL_UNICAST_IPV6: IpRange = IpRange::v6([0x2000, 0, 0, 0, 0, 0, 0, 0], 3);

/// Returns `true` if `addr` is safe to connect to from a server-side fetcher.
pub fn is_public(addr: IpAddr) -> bool {
    match addr.to_canonical() {
        IpAddr::V4(v4) => !is_ipv4_reserved(v4),
        IpAddr::V6(v6) => is_ipv6_global_unicast(v6),
    }
}

pub fn is_ipv4_reserved(addr: Ipv4Addr) -> bool {
    reserved_ipv4_block(addr).is_some()
}

/// The first reserved block containing `addr`, if any.
pub fn reserved_ipv4_block(addr: Ipv4Addr) -> Option<&'static ReservedBlock> {
    RESERVED_IPV4
        .iter()
        .find(|block| block.range.contains(IpAddr::V4(addr)))
}

pub fn is_ipv6_global_unicast(addr: Ipv6Addr) -> bool {
    GLOBAL_UNICAST_IPV6.contains(IpAddr::V6(addr))
}
