//! Cluster file loading and path resolution

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::domain::ClusterSpec;

/// Cluster file resolution and loading errors
#[derive(Debug, Error)]
pub enum ClusterFileError {
    /// Working-directory lookup failed while resolving a relative path
    #[error("failed to resolve working directory: {0}")]
    PathResolution(#[source] std::io::Error),

    /// Cluster file could not be read
    #[error("failed to read cluster file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Cluster file contents did not parse as a cluster spec
    #[error("failed to parse cluster file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Resolve a possibly-relative path against the current working directory
pub fn resolve_path(path: impl AsRef<Path>) -> Result<PathBuf, ClusterFileError> {
    let path = path.as_ref();
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }

    let cwd = std::env::current_dir().map_err(ClusterFileError::PathResolution)?;
    Ok(cwd.join(path))
}

/// Handle on a loaded cluster file
///
/// Carries the parsed cluster spec and, when loaded from disk, the absolute
/// source path. Spec-based construction wraps an in-memory spec with no path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterFile {
    cluster: ClusterSpec,
    path: Option<PathBuf>,
}

impl ClusterFile {
    /// Wrap an in-memory cluster spec with no backing file
    pub fn from_spec(cluster: ClusterSpec) -> Self {
        Self {
            cluster,
            path: None,
        }
    }

    /// Load and parse a cluster file
    ///
    /// Relative paths are resolved against the current working directory
    /// before reading.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ClusterFileError> {
        Self::load_resolved(resolve_path(path)?)
    }

    /// Load and parse a cluster file from an already-resolved absolute path
    pub fn load_resolved(path: PathBuf) -> Result<Self, ClusterFileError> {
        let raw = fs::read_to_string(&path).map_err(|source| ClusterFileError::Read {
            path: path.clone(),
            source,
        })?;

        let cluster: ClusterSpec =
            serde_json::from_str(&raw).map_err(|source| ClusterFileError::Parse {
                path: path.clone(),
                source,
            })?;

        debug!(path = %path.display(), cluster = %cluster.name, "loaded cluster file");

        Ok(Self {
            cluster,
            path: Some(path),
        })
    }

    /// The parsed cluster spec
    pub fn cluster(&self) -> &ClusterSpec {
        &self.cluster
    }

    /// Absolute source path, when loaded from disk
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
