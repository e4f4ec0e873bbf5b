// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for cluster-apply
//!
//! Provides deterministic cluster specs and an in-memory subsystem provider.
//! The mock provider counts acquisitions so tests can observe exactly when
//! construction touches a subsystem, and records pulls and mounts so apply
//! behavior is checkable without any real image machinery.

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use cluster_apply::domain::{HostEntry, ROLE_MASTER, ROLE_NODE};
use cluster_apply::{
    ClusterSpec, ImageMounter, ImageService, ImageStore, SubsystemError, SubsystemKind,
    SubsystemProvider,
};

pub const TEST_IMAGE: &str = "registry.example.com/cluster:v1";

/// Initialize tracing output for a test run; safe to call repeatedly
#[allow(dead_code)]
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Spec with two IPv4 masters and one IPv4 node
#[allow(dead_code)]
pub fn ipv4_cluster() -> ClusterSpec {
    let mut spec = ClusterSpec::new("ipv4-cluster");
    spec.image = TEST_IMAGE.to_string();
    spec.hosts = vec![
        HostEntry::with_role(vec!["10.0.0.1".into(), "10.0.0.2".into()], ROLE_MASTER),
        HostEntry::with_role(vec!["10.0.0.3".into()], ROLE_NODE),
    ];
    spec
}

/// Spec with two IPv6 masters
#[allow(dead_code)]
pub fn ipv6_cluster() -> ClusterSpec {
    let mut spec = ClusterSpec::new("ipv6-cluster");
    spec.image = TEST_IMAGE.to_string();
    spec.hosts = vec![HostEntry::with_role(
        vec!["2001:db8::1".into(), "2001:db8::2".into()],
        ROLE_MASTER,
    )];
    spec
}

/// Shared recording state behind the mock subsystems
#[derive(Default)]
struct MockState {
    store: Mutex<BTreeSet<String>>,
    pulled: Mutex<Vec<String>>,
    mounted: Mutex<Vec<(String, String)>>,
}

struct MockImageService {
    state: Arc<MockState>,
}

impl ImageService for MockImageService {
    fn pull_if_not_exist(&self, image_name: &str) -> Result<(), SubsystemError> {
        let mut store = self.state.store.lock().unwrap();
        if store.insert(image_name.to_string()) {
            self.state
                .pulled
                .lock()
                .unwrap()
                .push(image_name.to_string());
        }
        Ok(())
    }
}

struct MockImageMounter {
    state: Arc<MockState>,
}

impl ImageMounter for MockImageMounter {
    fn mount(&self, cluster_name: &str, image_name: &str) -> Result<PathBuf, SubsystemError> {
        self.state
            .mounted
            .lock()
            .unwrap()
            .push((cluster_name.to_string(), image_name.to_string()));
        Ok(PathBuf::from(format!("/var/lib/cluster/{cluster_name}/mnt")))
    }

    fn unmount(&self, cluster_name: &str) -> Result<(), SubsystemError> {
        let mut mounted = self.state.mounted.lock().unwrap();
        mounted.retain(|(name, _)| name != cluster_name);
        Ok(())
    }
}

struct MockImageStore {
    state: Arc<MockState>,
}

impl ImageStore for MockImageStore {
    fn contains(&self, image_name: &str) -> Result<bool, SubsystemError> {
        Ok(self.state.store.lock().unwrap().contains(image_name))
    }
}

/// In-memory subsystem provider with acquisition counting and failure injection
pub struct MockSubsystems {
    state: Arc<MockState>,
    acquisitions: AtomicUsize,
    fail_on: Option<SubsystemKind>,
}

#[allow(dead_code)]
impl MockSubsystems {
    pub fn new() -> Self {
        Self {
            state: Arc::new(MockState::default()),
            acquisitions: AtomicUsize::new(0),
            fail_on: None,
        }
    }

    /// Provider whose named subsystem fails to initialize
    pub fn failing(kind: SubsystemKind) -> Self {
        Self {
            fail_on: Some(kind),
            ..Self::new()
        }
    }

    /// Pre-populate the image store
    pub fn with_stored_image(self, image_name: &str) -> Self {
        self.state
            .store
            .lock()
            .unwrap()
            .insert(image_name.to_string());
        self
    }

    /// How many subsystem acquisitions construction has attempted
    pub fn acquisition_count(&self) -> usize {
        self.acquisitions.load(Ordering::SeqCst)
    }

    /// Images pulled through the image service, in order
    pub fn pulled_images(&self) -> Vec<String> {
        self.state.pulled.lock().unwrap().clone()
    }

    /// Currently mounted (cluster, image) pairs
    pub fn mounted(&self) -> Vec<(String, String)> {
        self.state.mounted.lock().unwrap().clone()
    }

    fn acquire(&self, kind: SubsystemKind) -> Result<(), SubsystemError> {
        self.acquisitions.fetch_add(1, Ordering::SeqCst);
        if self.fail_on == Some(kind) {
            return Err(SubsystemError::init(kind, "mock initialization failure"));
        }
        Ok(())
    }
}

impl Default for MockSubsystems {
    fn default() -> Self {
        Self::new()
    }
}

impl SubsystemProvider for MockSubsystems {
    fn image_service(&self) -> Result<Arc<dyn ImageService>, SubsystemError> {
        self.acquire(SubsystemKind::ImageService)?;
        Ok(Arc::new(MockImageService {
            state: Arc::clone(&self.state),
        }))
    }

    fn image_mounter(&self) -> Result<Arc<dyn ImageMounter>, SubsystemError> {
        self.acquire(SubsystemKind::ImageMounter)?;
        Ok(Arc::new(MockImageMounter {
            state: Arc::clone(&self.state),
        }))
    }

    fn image_store(&self) -> Result<Arc<dyn ImageStore>, SubsystemError> {
        self.acquire(SubsystemKind::ImageStore)?;
        Ok(Arc::new(MockImageStore {
            state: Arc::clone(&self.state),
        }))
    }
}
