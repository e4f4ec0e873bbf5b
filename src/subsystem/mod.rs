// Copyright (c) 2025 - Cowboy AI, Inc.
//! Injected Subsystem Interfaces
//!
//! The driver depends on three collaborators it does not construct itself: an
//! image service, an image mounter, and an image store. Their internals are
//! out of scope here; this module defines the capability traits the driver
//! programs against and the [`SubsystemProvider`] seam through which concrete
//! implementations are injected. No package-level singletons.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Which subsystem an error originated from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubsystemKind {
    ImageService,
    ImageMounter,
    ImageStore,
}

impl fmt::Display for SubsystemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SubsystemKind::ImageService => "image service",
            SubsystemKind::ImageMounter => "image mounter",
            SubsystemKind::ImageStore => "image store",
        };
        write!(f, "{}", name)
    }
}

/// Errors raised by injected subsystems
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubsystemError {
    /// Subsystem failed to initialize
    #[error("{subsystem} failed to initialize: {reason}")]
    Init {
        subsystem: SubsystemKind,
        reason: String,
    },

    /// Subsystem operation failed after initialization
    #[error("{subsystem} operation failed: {reason}")]
    Operation {
        subsystem: SubsystemKind,
        reason: String,
    },
}

impl SubsystemError {
    /// Tag an initialization failure with the subsystem it came from
    pub fn init(subsystem: SubsystemKind, reason: impl Into<String>) -> Self {
        SubsystemError::Init {
            subsystem,
            reason: reason.into(),
        }
    }

    pub fn operation(subsystem: SubsystemKind, reason: impl Into<String>) -> Self {
        SubsystemError::Operation {
            subsystem,
            reason: reason.into(),
        }
    }
}

/// Cluster image distribution operations
pub trait ImageService: Send + Sync {
    /// Pull the named cluster image unless it is already present locally
    fn pull_if_not_exist(&self, image_name: &str) -> Result<(), SubsystemError>;
}

/// Cluster image filesystem mounting
pub trait ImageMounter: Send + Sync {
    /// Mount the cluster image for the named cluster, returning the mount point
    fn mount(&self, cluster_name: &str, image_name: &str) -> Result<PathBuf, SubsystemError>;

    /// Unmount whatever is mounted for the named cluster
    fn unmount(&self, cluster_name: &str) -> Result<(), SubsystemError>;
}

/// Local cluster image store lookups
pub trait ImageStore: Send + Sync {
    /// Whether the store already holds the named image
    fn contains(&self, image_name: &str) -> Result<bool, SubsystemError>;
}

/// Injection seam for the three subsystems
///
/// Each acquisition may fail independently; failures carry the
/// [`SubsystemKind`] they came from. Returned handles are shared `Arc`s that
/// outlive the driver for the duration of an apply run.
pub trait SubsystemProvider: Send + Sync {
    fn image_service(&self) -> Result<Arc<dyn ImageService>, SubsystemError>;

    fn image_mounter(&self) -> Result<Arc<dyn ImageMounter>, SubsystemError>;

    fn image_store(&self) -> Result<Arc<dyn ImageStore>, SubsystemError>;
}
