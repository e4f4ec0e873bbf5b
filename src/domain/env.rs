// Copyright (c) 2025 - Cowboy AI, Inc.
//! Cluster Environment Defaulting
//!
//! Pure transformation of the cluster environment mapping. The only rule:
//! an all-IPv6 host list implies the host-IP-family entry, unless the caller
//! already set one. Explicit configuration always wins.

use std::collections::BTreeMap;

use crate::domain::AddressFamily;

/// Reserved environment key recording the host IP address family
pub const ENV_HOST_IP_FAMILY: &str = "HostIPFamily";

/// Apply the host-IP-family default to a cluster environment
///
/// # Rules
/// - Injects `HostIPFamily=IPv6` only when the observed family is IPv6 and no
///   entry for the key exists
/// - Never overwrites an existing entry
/// - Idempotent: re-applying to its own output is a no-op
pub fn with_family_default(
    mut env: BTreeMap<String, String>,
    observed: Option<AddressFamily>,
) -> BTreeMap<String, String> {
    if observed == Some(AddressFamily::Ipv6) && !env.contains_key(ENV_HOST_IP_FAMILY) {
        env.insert(
            ENV_HOST_IP_FAMILY.to_string(),
            AddressFamily::Ipv6.marker().to_string(),
        );
    }
    env
}
