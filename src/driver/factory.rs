// Copyright (c) 2025 - Cowboy AI, Inc.
//! Driver Factory
//!
//! Assembles a validated [`Applier`] from a cluster spec and injected
//! subsystems. Every step short-circuits; no step is retried, and all
//! failures are terminal for a single `build` call.
//!
//! # Construction Pipeline
//!
//! ```text
//! identity check → flatten hosts → family validation → env defaulting
//!                → subsystem acquisition → assembly
//! ```
//!
//! Validation runs before subsystem acquisition, so a spec that fails its
//! invariants never touches the image service, mounter, or store. A failure
//! between acquisitions releases already-acquired handles when their `Arc`s
//! drop on the early return.

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::clusterfile::ClusterFile;
use crate::domain::{validate_host_family, with_family_default, ClusterSpec};
use crate::driver::{Applier, ApplyMode};
use crate::errors::{DriverError, DriverResult};
use crate::subsystem::SubsystemProvider;

/// Factory for assembled apply drivers
///
/// Holds the injection seam for the three subsystems; one factory can build
/// any number of drivers.
pub struct DriverFactory<'a> {
    subsystems: &'a dyn SubsystemProvider,
}

impl<'a> DriverFactory<'a> {
    /// Create a factory over an injected subsystem provider
    pub fn new(subsystems: &'a dyn SubsystemProvider) -> Self {
        Self { subsystems }
    }

    /// Build a validated driver
    ///
    /// # Invariants guaranteed on success
    /// 1. `cluster.name` is non-empty
    /// 2. every host address parses as IPv4 or IPv6
    /// 3. the host list does not mix address families
    /// 4. an all-IPv6 host list implies the host-IP-family environment entry,
    ///    without overwriting an explicit one
    pub fn build(
        &self,
        mut cluster: ClusterSpec,
        action: &str,
        mode: ApplyMode,
        cluster_file: ClusterFile,
    ) -> DriverResult<Applier> {
        if cluster.name.is_empty() {
            return Err(DriverError::EmptyClusterName);
        }

        let hosts = cluster.host_address_list();
        let observed = validate_host_family(&hosts)?;
        debug!(
            cluster = %cluster.name,
            hosts = hosts.len(),
            family = ?observed,
            "host family validated"
        );

        let env = std::mem::take(&mut cluster.env);
        cluster.env = with_family_default(env, observed);

        let image_service = self.subsystems.image_service()?;
        let image_mounter = self.subsystems.image_mounter()?;
        let image_store = self.subsystems.image_store()?;

        let run_id = Uuid::now_v7();
        info!(
            %run_id,
            cluster = %cluster.name,
            action,
            mode = %mode,
            "apply driver assembled"
        );

        Ok(Applier {
            run_id,
            built_at: Utc::now(),
            apply_mode: mode,
            action: action.to_string(),
            cluster,
            cluster_file,
            image_service,
            image_mounter,
            image_store,
        })
    }
}
