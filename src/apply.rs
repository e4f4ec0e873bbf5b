// Copyright (c) 2025 - Cowboy AI, Inc.
//! Driver Construction Entry Points
//!
//! Two families of constructors:
//!
//! - **Path-based**: resolve a cluster file path (relative paths against the
//!   current working directory), load the spec, stamp the source path into
//!   its annotations when absent, then delegate to the factory.
//! - **Spec-based**: delegate an already-constructed spec directly to the
//!   factory.
//!
//! All four return the driver behind the [`ApplyDriver`] capability trait,
//! never as a concrete structure, and a descriptive error on every failure
//! path.

use std::path::Path;

use crate::clusterfile::{resolve_path, ClusterFile};
use crate::domain::{ClusterSpec, ANNOTATION_CLUSTERFILE_PATH};
use crate::driver::{ApplyDriver, ApplyMode, DriverFactory};
use crate::errors::DriverResult;
use crate::subsystem::SubsystemProvider;

/// Construct a driver from a cluster file with the default apply mode
pub fn new_applier_from_file(
    subsystems: &dyn SubsystemProvider,
    path: impl AsRef<Path>,
    action: &str,
) -> DriverResult<Box<dyn ApplyDriver>> {
    new_applier_from_file_with_mode(subsystems, path, action, ApplyMode::Apply)
}

/// Construct a driver from a cluster file with an explicit mode
pub fn new_applier_from_file_with_mode(
    subsystems: &dyn SubsystemProvider,
    path: impl AsRef<Path>,
    action: &str,
    mode: ApplyMode,
) -> DriverResult<Box<dyn ApplyDriver>> {
    let path = resolve_path(path)?;
    let cluster_file = ClusterFile::load_resolved(path.clone())?;

    let mut cluster = cluster_file.cluster().clone();
    if cluster.annotation(ANNOTATION_CLUSTERFILE_PATH).is_none() {
        cluster.set_annotation(ANNOTATION_CLUSTERFILE_PATH, path.display().to_string());
    }

    new_default_applier_with_mode(subsystems, cluster, action, mode, cluster_file)
}

/// Construct a driver from an in-memory spec with the default apply mode
pub fn new_default_applier(
    subsystems: &dyn SubsystemProvider,
    cluster: ClusterSpec,
    action: &str,
    cluster_file: ClusterFile,
) -> DriverResult<Box<dyn ApplyDriver>> {
    new_default_applier_with_mode(subsystems, cluster, action, ApplyMode::Apply, cluster_file)
}

/// Construct a driver from an in-memory spec with an explicit mode
///
/// No raw data passes this point unvalidated: the factory enforces every
/// cluster invariant before a driver is returned.
pub fn new_default_applier_with_mode(
    subsystems: &dyn SubsystemProvider,
    cluster: ClusterSpec,
    action: &str,
    mode: ApplyMode,
    cluster_file: ClusterFile,
) -> DriverResult<Box<dyn ApplyDriver>> {
    let factory = DriverFactory::new(subsystems);
    let applier = factory.build(cluster, action, mode, cluster_file)?;
    Ok(Box::new(applier))
}
