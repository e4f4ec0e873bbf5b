// Copyright (c) 2025 - Cowboy AI, Inc.
//! Assembled Apply Driver
//!
//! The output of driver construction: a validated cluster spec bound to the
//! three injected subsystems, exposed to callers behind the [`ApplyDriver`]
//! capability trait. Plan orchestration against remote hosts lives
//! downstream; the driver here prepares the cluster image (store lookup,
//! pull, mount) according to its apply mode.

use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::clusterfile::ClusterFile;
use crate::domain::ClusterSpec;
use crate::errors::DriverResult;
use crate::subsystem::{ImageMounter, ImageService, ImageStore};

/// Intent of a construction call
///
/// Known modes have fixed string forms; any other string converts losslessly
/// into `Custom` and passes through uninterpreted. Mode validation, if any,
/// belongs to downstream orchestration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ApplyMode {
    /// Standard cluster apply
    Apply,
    /// Load cluster images into the local store without applying
    LoadImage,
    /// Uninterpreted passthrough mode
    Custom(String),
}

impl ApplyMode {
    pub const APPLY: &'static str = "apply";
    pub const LOAD_IMAGE: &'static str = "loadImage";

    pub fn as_str(&self) -> &str {
        match self {
            ApplyMode::Apply => Self::APPLY,
            ApplyMode::LoadImage => Self::LOAD_IMAGE,
            ApplyMode::Custom(mode) => mode,
        }
    }
}

impl From<&str> for ApplyMode {
    fn from(mode: &str) -> Self {
        match mode {
            Self::APPLY => ApplyMode::Apply,
            Self::LOAD_IMAGE => ApplyMode::LoadImage,
            other => ApplyMode::Custom(other.to_string()),
        }
    }
}

impl fmt::Display for ApplyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Capability handle on an assembled, validated driver
///
/// Construction guarantees every driver behind this trait satisfies the
/// cluster invariants: non-empty identity, parseable single-family host
/// addresses, and the host-IP-family environment default.
pub trait ApplyDriver: Send + Sync + fmt::Debug {
    /// The validated (possibly environment-defaulted) cluster spec
    fn cluster(&self) -> &ClusterSpec;

    /// The cluster-file handle this driver was constructed from
    fn cluster_file(&self) -> &ClusterFile;

    /// The apply mode of this construction call
    fn apply_mode(&self) -> &ApplyMode;

    /// Prepare the cluster image per the apply mode
    fn apply(&self) -> DriverResult<()>;
}

/// Concrete assembled driver
pub struct Applier {
    pub(crate) run_id: Uuid,
    pub(crate) built_at: DateTime<Utc>,
    pub(crate) apply_mode: ApplyMode,
    pub(crate) action: String,
    pub(crate) cluster: ClusterSpec,
    pub(crate) cluster_file: ClusterFile,
    pub(crate) image_service: Arc<dyn ImageService>,
    pub(crate) image_mounter: Arc<dyn ImageMounter>,
    pub(crate) image_store: Arc<dyn ImageStore>,
}

impl Applier {
    /// Unique id of this construction, stamped at assembly
    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// Assembly timestamp
    pub fn built_at(&self) -> DateTime<Utc> {
        self.built_at
    }

    /// The action this driver was constructed for
    pub fn action(&self) -> &str {
        &self.action
    }
}

impl ApplyDriver for Applier {
    fn cluster(&self) -> &ClusterSpec {
        &self.cluster
    }

    fn cluster_file(&self) -> &ClusterFile {
        &self.cluster_file
    }

    fn apply_mode(&self) -> &ApplyMode {
        &self.apply_mode
    }

    fn apply(&self) -> DriverResult<()> {
        let image = &self.cluster.image;

        if !self.image_store.contains(image)? {
            debug!(run_id = %self.run_id, %image, "image absent from store, pulling");
            self.image_service.pull_if_not_exist(image)?;
        }

        if self.apply_mode == ApplyMode::LoadImage {
            info!(run_id = %self.run_id, %image, "image loaded, skipping apply");
            return Ok(());
        }

        let mount_point = self.image_mounter.mount(&self.cluster.name, image)?;
        info!(
            run_id = %self.run_id,
            cluster = %self.cluster.name,
            action = %self.action,
            mount_point = %mount_point.display(),
            "cluster image mounted"
        );

        Ok(())
    }
}

impl fmt::Debug for Applier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Applier")
            .field("run_id", &self.run_id)
            .field("built_at", &self.built_at)
            .field("apply_mode", &self.apply_mode)
            .field("action", &self.action)
            .field("cluster", &self.cluster.name)
            .finish_non_exhaustive()
    }
}
