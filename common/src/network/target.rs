//! # Scan Target Model
//!
//! Parses the textual target specifications this tool accepts:
//! * A single IP address (e.g., `192.168.1.5`).
//! * A CIDR block (e.g., `192.168.1.0/24`).
//!
//! A bare address is shorthand for the most specific block of its family,
//! so `192.168.1.5` and `192.168.1.5/32` expand identically.

use std::net::{AddrParseError, IpAddr};
use std::str::FromStr;

use ipnetwork::{IpNetwork, IpNetworkError};
use thiserror::Error;

/// One parsed target specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    network: IpNetwork,
}

/// Why a specification could not be parsed. The offending input is carried
/// so the report names what the user actually typed.
#[derive(Debug, Error)]
pub enum TargetError {
    #[error("invalid address '{input}': {source}")]
    Address {
        input: String,
        source: AddrParseError,
    },
    #[error("invalid network '{input}': {source}")]
    Network {
        input: String,
        source: IpNetworkError,
    },
}

impl Target {
    /// The block this specification denotes.
    pub fn network(&self) -> IpNetwork {
        self.network
    }
}

impl FromStr for Target {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.contains('/') {
            let addr = s.parse::<IpAddr>().map_err(|source| TargetError::Address {
                input: s.to_string(),
                source,
            })?;
            let prefix = match addr {
                IpAddr::V4(_) => 32,
                IpAddr::V6(_) => 128,
            };
            let network =
                IpNetwork::new(addr, prefix).map_err(|source| TargetError::Network {
                    input: s.to_string(),
                    source,
                })?;
            return Ok(Self { network });
        }

        let network = s.parse::<IpNetwork>().map_err(|source| TargetError::Network {
            input: s.to_string(),
            source,
        })?;
        Ok(Self { network })
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
