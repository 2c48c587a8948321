//! Host enumeration for a target block.
//!
//! Expansion walks the block in ascending order by incrementing the raw
//! byte representation of the address, so the same code serves 4-byte and
//! 16-byte families.

use std::net::IpAddr;

use ipnetwork::IpNetwork;

use crate::network::target::Target;

/// Adds one to a fixed-width big-endian byte value in place.
///
/// The carry starts at the least-significant byte and propagates leftward.
/// Returns `true` when the carry falls off the most significant byte,
/// i.e. the value wrapped around to zero.
pub fn increment(octets: &mut [u8]) -> bool {
    for byte in octets.iter_mut().rev() {
        *byte = byte.wrapping_add(1);
        if *byte != 0 {
            return false;
        }
    }
    true
}

/// Expands a target into its usable host addresses, in ascending order.
///
/// The walk starts at the network base (the specified address masked by the
/// prefix) and visits every member of the block. Blocks of two or fewer
/// addresses are returned whole; larger blocks lose their first (network)
/// and last (broadcast) entries.
pub fn expand(target: &Target) -> Vec<IpAddr> {
    let network = target.network();
    let base = match network {
        IpNetwork::V4(net) => IpAddr::V4(net.network()),
        IpNetwork::V6(net) => IpAddr::V6(net.network()),
    };

    let mut cursor = match base {
        IpAddr::V4(addr) => addr.octets().to_vec(),
        IpAddr::V6(addr) => addr.octets().to_vec(),
    };

    let mut hosts: Vec<IpAddr> = Vec::new();
    loop {
        let addr = addr_from_octets(&cursor);
        if !network.contains(addr) {
            break;
        }
        hosts.push(addr);
        if increment(&mut cursor) {
            // Wrapped past the top of the family; a /0 would otherwise
            // cycle back into the block forever.
            break;
        }
    }

    if hosts.len() <= 2 {
        return hosts;
    }
    let last = hosts.len() - 1;
    hosts.drain(1..last).collect()
}

fn addr_from_octets(octets: &[u8]) -> IpAddr {
    if octets.len() == 4 {
        let mut bytes = [0u8; 4];
        bytes.copy_from_slice(octets);
        IpAddr::from(bytes)
    } else {
        let mut bytes = [0u8; 16];
        bytes.copy_from_slice(octets);
        IpAddr::from(bytes)
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
