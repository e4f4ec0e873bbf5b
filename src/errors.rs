//! Error types for driver construction

use thiserror::Error;

use crate::clusterfile::ClusterFileError;
use crate::domain::AddressFamilyError;
use crate::subsystem::SubsystemError;

/// Errors that can occur while constructing or running an apply driver
#[derive(Debug, Error)]
pub enum DriverError {
    /// Cluster identity invariant violated
    #[error("cluster name cannot be empty")]
    EmptyClusterName,

    /// Host address family validation failed
    #[error("host validation error: {0}")]
    Address(#[from] AddressFamilyError),

    /// An injected subsystem failed
    #[error("subsystem error: {0}")]
    Subsystem(#[from] SubsystemError),

    /// Cluster file resolution or loading failed
    #[error("cluster file error: {0}")]
    ClusterFile(#[from] ClusterFileError),
}

/// Result type for driver construction
pub type DriverResult<T> = Result<T, DriverError>;
