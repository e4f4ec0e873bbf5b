// Copyright (c) 2025 - Cowboy AI, Inc.
//! Host Address Family Classification and the Single-Family Invariant

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::net::IpAddr;
use thiserror::Error;

/// Host address validation error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddressFamilyError {
    #[error("failed to parse {0} as a valid IP address")]
    UnparsableAddress(String),

    #[error("all hosts must be in the same IP family, but the host list mixes IPv4 and IPv6: {0:?}")]
    MixedFamilies(Vec<String>),
}

/// Address family of a single host address
///
/// A pure function of the address string. Unparsable input classifies as
/// `Invalid` rather than failing, so classification is total.
///
/// # Examples
///
/// ```rust
/// use cluster_apply::domain::AddressFamily;
///
/// assert_eq!(AddressFamily::classify("10.0.0.1"), AddressFamily::Ipv4);
/// assert_eq!(AddressFamily::classify("2001:db8::1"), AddressFamily::Ipv6);
/// assert_eq!(AddressFamily::classify("not-an-ip"), AddressFamily::Invalid);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AddressFamily {
    Ipv4,
    Ipv6,
    Invalid,
}

impl AddressFamily {
    /// Classify an address string by standard IP parsing
    pub fn classify(address: &str) -> Self {
        match address.parse::<IpAddr>() {
            Ok(IpAddr::V4(_)) => AddressFamily::Ipv4,
            Ok(IpAddr::V6(_)) => AddressFamily::Ipv6,
            Err(_) => AddressFamily::Invalid,
        }
    }

    /// Marker string for this family, as recorded in cluster environments
    pub fn marker(&self) -> &'static str {
        match self {
            AddressFamily::Ipv4 => "IPv4",
            AddressFamily::Ipv6 => "IPv6",
            AddressFamily::Invalid => "Invalid",
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.marker())
    }
}

/// Validate that every host address parses and that all hosts share one family
///
/// Hosts are scanned in order. The first unparsable address fails the scan
/// immediately with [`AddressFamilyError::UnparsableAddress`]; parse errors
/// therefore always take precedence over the mixed-family check. After a full
/// scan the observed families are reduced to a set, and a set holding more
/// than one family fails with [`AddressFamilyError::MixedFamilies`] naming the
/// full host list.
///
/// # Returns
/// The single family observed, or `None` for an empty host list.
pub fn validate_host_family(
    hosts: &[String],
) -> Result<Option<AddressFamily>, AddressFamilyError> {
    let mut observed = BTreeSet::new();

    for host in hosts {
        match AddressFamily::classify(host) {
            AddressFamily::Invalid => {
                return Err(AddressFamilyError::UnparsableAddress(host.clone()));
            }
            family => {
                observed.insert(family);
            }
        }
    }

    // Invariant: a host list spans exactly zero or one address family
    if observed.len() > 1 {
        return Err(AddressFamilyError::MixedFamilies(hosts.to_vec()));
    }

    Ok(observed.into_iter().next())
}
