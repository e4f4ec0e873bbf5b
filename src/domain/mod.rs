// Copyright (c) 2025 - Cowboy AI, Inc.
//! Cluster Domain Models
//!
//! Core domain concepts for driver construction: the declarative cluster
//! specification, host address family classification, and the pure
//! environment-defaulting rule.
//!
//! # Value Objects and Invariants
//!
//! - [`ClusterSpec`] - desired-state description of a target cluster
//! - [`AddressFamily`] - IPv4/IPv6/Invalid classification of one address
//! - [`validate_host_family`] - the single-family invariant over a host list
//! - [`with_family_default`] - host-IP-family environment defaulting
//! - [`ClusterArgs`] - raw input expansion into a cluster spec

pub mod address;
pub mod args;
pub mod cluster;
pub mod env;

pub use address::{validate_host_family, AddressFamily, AddressFamilyError};
pub use args::{expand_host_expr, ArgsError, ClusterArgs};
pub use cluster::{
    ClusterSpec, HostEntry, ANNOTATION_CLUSTERFILE_PATH, ROLE_MASTER, ROLE_NODE,
};
pub use env::{with_family_default, ENV_HOST_IP_FAMILY};
