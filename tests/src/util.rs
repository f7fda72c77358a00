use pnet::ipnetwork::{IpNetwork, Ipv4Network, Ipv6Network};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

pub fn v4(a: u8, b: u8, c: u8, d: u8, p: u8) -> IpNetwork {
    IpNetwork::V4(Ipv4Network::new(Ipv4Addr::new(a, b, c, d), p).unwrap())
}

pub fn v6(s: &str, p: u8) -> IpNetwork {
    IpNetwork::V6(Ipv6Network::new(s.parse::<Ipv6Addr>().unwrap(), p).unwrap())
}

/// Formats `ip` and `port` the way a connector hands them to the gate.
pub fn host_port(ip: IpAddr, port: u16) -> String {
    match ip {
        IpAddr::V4(v4) => format!("{v4}:{port}"),
        IpAddr::V6(v6) => format!("[{v6}]:{port}"),
    }
}

/// First, second, middle, second-to-last and last address of an IPv4 block.
pub fn v4_samples(net: Ipv4Network) -> Vec<Ipv4Addr> {
    let first: u32 = u32::from(net.network());
    let last: u32 = u32::from(net.broadcast());
    let mid: u32 = first + (last - first) / 2;
    vec![
        Ipv4Addr::from(first),
        Ipv4Addr::from(first.saturating_add(1).min(last)),
        Ipv4Addr::from(mid),
        Ipv4Addr::from(last.saturating_sub(1).max(first)),
        Ipv4Addr::from(last),
    ]
}
