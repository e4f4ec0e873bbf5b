//! Validated construction of cluster apply drivers
//!
//! This crate is the gatekeeping layer between a declarative cluster
//! specification and the driver handed to apply orchestration. Construction
//! enforces the cluster invariants up front: non-empty identity, a host list
//! whose addresses all parse and share one IP family, and the host-IP-family
//! environment default for all-IPv6 clusters. No invalid or
//! internally-contradictory spec ever reaches a driver.

pub mod apply;
pub mod clusterfile;
pub mod domain;
pub mod driver;
pub mod errors;
pub mod subsystem;

// Re-export commonly used types
pub use apply::{
    new_applier_from_file, new_applier_from_file_with_mode, new_default_applier,
    new_default_applier_with_mode,
};
pub use clusterfile::{ClusterFile, ClusterFileError};
pub use domain::{AddressFamily, AddressFamilyError, ClusterArgs, ClusterSpec, HostEntry};
pub use driver::{Applier, ApplyDriver, ApplyMode, DriverFactory};
pub use errors::{DriverError, DriverResult};
pub use subsystem::{
    ImageMounter, ImageService, ImageStore, SubsystemError, SubsystemKind, SubsystemProvider,
};
