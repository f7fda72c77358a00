use pnet::ipnetwork::IpNetwork;
use safedial_core::gate::classify::RESERVED_IPV4;
use safedial_core::{AddressGate, GateError};
use std::net::{IpAddr, Ipv4Addr};

use crate::util::{host_port, v4, v4_samples};

fn reserved_networks() -> Vec<IpNetwork> {
    vec![
        v4(0, 0, 0, 0, 8),
        v4(10, 0, 0, 0, 8),
        v4(100, 64, 0, 0, 10),
        v4(127, 0, 0, 0, 8),
        v4(169, 254, 0, 0, 16),
        v4(172, 16, 0, 0, 12),
        v4(192, 0, 0, 0, 24),
        v4(192, 0, 2, 0, 24),
        v4(192, 88, 99, 0, 24),
        v4(192, 168, 0, 0, 16),
        v4(198, 18, 0, 0, 15),
        v4(198, 51, 100, 0, 24),
        v4(203, 0, 113, 0, 24),
        v4(224, 0, 0, 0, 4),
        v4(240, 0, 0, 0, 4),
    ]
}

#[test]
fn table_matches_the_registry_blocks() {
    let table: Vec<IpNetwork> = RESERVED_IPV4
        .iter()
        .map(|block| IpNetwork::try_from(block.range).unwrap())
        .collect();
    assert_eq!(table, reserved_networks());
}

#[test]
fn every_reserved_block_is_unsafe_at_edges_and_inside() {
    for network in reserved_networks() {
        let IpNetwork::V4(net) = network else { unreachable!() };
        for addr in v4_samples(net) {
            for port in [80, 443] {
                let address: String = host_port(IpAddr::V4(addr), port);
                assert_eq!(
                    AddressGate.check("tcp4", &address),
                    Err(GateError::UnsafeIp),
                    "{address} in {net}"
                );
            }
        }
    }
}

#[test]
fn mapped_forms_of_reserved_blocks_are_unsafe() {
    for network in reserved_networks() {
        let IpNetwork::V4(net) = network else { unreachable!() };
        for addr in v4_samples(net) {
            let mapped: IpAddr = IpAddr::V6(addr.to_ipv6_mapped());
            assert_eq!(
                AddressGate.check("tcp6", &host_port(mapped, 443)),
                Err(GateError::UnsafeIp),
                "{mapped}"
            );
        }
    }
}

#[test]
fn addresses_just_outside_reserved_blocks_are_allowed() {
    let reserved = reserved_networks();
    let mut checked: usize = 0;

    for network in &reserved {
        let IpNetwork::V4(net) = network else { unreachable!() };
        let below: Option<u32> = u32::from(net.network()).checked_sub(1);
        let above: Option<u32> = u32::from(net.broadcast()).checked_add(1);

        for candidate in [below, above].into_iter().flatten().map(Ipv4Addr::from) {
            if reserved.iter().any(|n| n.contains(IpAddr::V4(candidate))) {
                continue;
            }
            for (network_tag, port) in [("tcp4", 80), ("tcp4", 443)] {
                let address: String = host_port(IpAddr::V4(candidate), port);
                assert_eq!(AddressGate.check(network_tag, &address), Ok(()), "{address}");
            }
            checked += 1;
        }
    }

    assert!(checked > 10, "only {checked} neighbouring addresses were public");
}

#[test]
fn sweep_agrees_with_ipnetwork() {
    let reserved = reserved_networks();
    // Walk the address space in coarse steps that land inside and between blocks.
    let mut raw: u32 = 0;
    loop {
        let addr: Ipv4Addr = Ipv4Addr::from(raw);
        let expected_unsafe: bool = reserved.iter().any(|n| n.contains(IpAddr::V4(addr)));
        let verdict = AddressGate.check("tcp4", &host_port(IpAddr::V4(addr), 443));
        if expected_unsafe {
            assert_eq!(verdict, Err(GateError::UnsafeIp), "{addr}");
        } else {
            assert_eq!(verdict, Ok(()), "{addr}");
        }

        match raw.checked_add(0x0001_3579) {
            Some(next) => raw = next,
            None => break,
        }
    }
}
