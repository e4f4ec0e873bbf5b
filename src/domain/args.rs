// Copyright (c) 2025 - Cowboy AI, Inc.
//! Cluster Construction Arguments
//!
//! Turns raw caller input (host expressions, `K=V` environment entries) into a
//! [`ClusterSpec`]. Host expressions support comma-separated address lists and
//! inclusive IPv4 ranges:
//!
//! ```text
//! 10.0.0.1,10.0.0.2          list form
//! 10.0.0.1-10.0.0.4          range form, expanded in address order
//! ```
//!
//! Expansion performs no family validation; driver construction remains the
//! single gatekeeper for address invariants.

use std::net::Ipv4Addr;
use thiserror::Error;

use crate::domain::{ClusterSpec, HostEntry, ROLE_MASTER, ROLE_NODE};

/// Argument expansion error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArgsError {
    #[error("invalid IPv4 range {0}: both endpoints must be IPv4 addresses")]
    InvalidRange(String),

    #[error("invalid IPv4 range {0}: start address is after end address")]
    ReversedRange(String),

    #[error("invalid environment entry {0}: expected KEY=VALUE")]
    InvalidEnvEntry(String),
}

/// Raw arguments for building a cluster spec
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterArgs {
    pub cluster_name: String,
    pub image: String,

    /// Master host expression (list or range form)
    pub masters: String,

    /// Worker host expression (list or range form)
    pub nodes: String,

    /// Extra environment entries in `KEY=VALUE` form; later keys overwrite
    /// earlier ones
    pub custom_env: Vec<String>,
}

impl ClusterArgs {
    /// Expand these arguments into a cluster spec
    ///
    /// Masters precede nodes in the resulting host entry order.
    pub fn into_cluster_spec(self) -> Result<ClusterSpec, ArgsError> {
        let mut spec = ClusterSpec::new(self.cluster_name);
        spec.image = self.image;

        let masters = expand_host_expr(&self.masters)?;
        if !masters.is_empty() {
            spec.hosts.push(HostEntry::with_role(masters, ROLE_MASTER));
        }

        let nodes = expand_host_expr(&self.nodes)?;
        if !nodes.is_empty() {
            spec.hosts.push(HostEntry::with_role(nodes, ROLE_NODE));
        }

        for entry in &self.custom_env {
            let (key, value) = entry
                .split_once('=')
                .ok_or_else(|| ArgsError::InvalidEnvEntry(entry.clone()))?;
            if key.is_empty() {
                return Err(ArgsError::InvalidEnvEntry(entry.clone()));
            }
            spec.env.insert(key.to_string(), value.to_string());
        }

        Ok(spec)
    }
}

/// Expand a host expression into an ordered address list
///
/// Comma-separated parts are expanded independently. A part is treated as a
/// range only when the segment before `-` parses as an IPv4 address; a range
/// with an unparsable end is rejected, while any other part passes through
/// verbatim for the validator to judge.
pub fn expand_host_expr(expr: &str) -> Result<Vec<String>, ArgsError> {
    let mut addresses = Vec::new();

    for part in expr.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }

        match part.split_once('-') {
            Some((start, end)) => {
                if let Ok(start) = start.trim().parse::<Ipv4Addr>() {
                    addresses.extend(expand_ipv4_range(part, start, end)?);
                } else {
                    addresses.push(part.to_string());
                }
            }
            None => addresses.push(part.to_string()),
        }
    }

    Ok(addresses)
}

fn expand_ipv4_range(expr: &str, start: Ipv4Addr, end: &str) -> Result<Vec<String>, ArgsError> {
    let end: Ipv4Addr = end
        .trim()
        .parse()
        .map_err(|_| ArgsError::InvalidRange(expr.to_string()))?;

    let start: u32 = start.into();
    let end: u32 = end.into();
    if start > end {
        return Err(ArgsError::ReversedRange(expr.to_string()));
    }

    Ok((start..=end)
        .map(|ip| Ipv4Addr::from(ip).to_string())
        .collect())
}
