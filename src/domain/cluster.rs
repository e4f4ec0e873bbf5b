// Copyright (c) 2025 - Cowboy AI, Inc.
//! Declarative Cluster Specification
//!
//! The desired-state entity consumed by driver construction. The constructor
//! pipeline only reads the spec and conditionally appends to its environment
//! mapping; identity and host fields are never mutated here.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Annotation key recording the absolute path of the originating cluster file
pub const ANNOTATION_CLUSTERFILE_PATH: &str = "clusterfile.path";

/// Host role for control-plane members
pub const ROLE_MASTER: &str = "master";

/// Host role for worker members
pub const ROLE_NODE: &str = "node";

/// A group of hosts sharing the same roles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostEntry {
    /// One or more IP address literals
    pub addresses: Vec<String>,

    /// Roles assigned to every address in this entry
    #[serde(default)]
    pub roles: Vec<String>,
}

impl HostEntry {
    /// Create an entry from address strings and a single role
    pub fn with_role(addresses: Vec<String>, role: &str) -> Self {
        Self {
            addresses,
            roles: vec![role.to_string()],
        }
    }
}

/// Declarative description of a target cluster
///
/// Invariants enforced by driver construction (not by this type):
/// - `name` is non-empty
/// - every host address parses as IPv4 or IPv6
/// - all host addresses share one address family
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterSpec {
    /// Cluster identity
    pub name: String,

    /// Cluster image reference the driver prepares
    #[serde(default)]
    pub image: String,

    /// Ordered host entries
    #[serde(default)]
    pub hosts: Vec<HostEntry>,

    /// Cluster environment variables, keys unique
    #[serde(default)]
    pub env: BTreeMap<String, String>,

    /// Free-form metadata annotations
    #[serde(default)]
    pub annotations: BTreeMap<String, String>,
}

impl ClusterSpec {
    /// Create a named spec with no hosts, environment, or annotations
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: String::new(),
            hosts: Vec::new(),
            env: BTreeMap::new(),
            annotations: BTreeMap::new(),
        }
    }

    /// Flatten host entries into an ordered address list
    ///
    /// Transient view, recomputed on every call; entry order and per-entry
    /// address order are both preserved.
    pub fn host_address_list(&self) -> Vec<String> {
        self.hosts
            .iter()
            .flat_map(|entry| entry.addresses.iter().cloned())
            .collect()
    }

    /// Look up an annotation by key
    pub fn annotation(&self, key: &str) -> Option<&str> {
        self.annotations.get(key).map(String::as_str)
    }

    /// Set an annotation, replacing any existing value
    pub fn set_annotation(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.annotations.insert(key.into(), value.into());
    }
}
