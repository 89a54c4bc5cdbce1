//! Registry test utilities

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use gradle_bump::update::Updater;
use gradle_bump::version::cache::VersionFetcher;
use gradle_bump::version::error::RegistryError;
use gradle_bump::version::registry::{PrimaryRegistry, SecondaryRegistry};

fn strings(versions: Vec<&str>) -> Vec<String> {
    versions.into_iter().map(|v| v.to_string()).collect()
}

/// In-memory primary registry that counts module-map requests
#[derive(Default)]
pub struct FakePrimaryRegistry {
    groups: HashMap<String, HashMap<String, Vec<String>>>,
    pub module_requests: AtomicUsize,
}

impl FakePrimaryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_module(mut self, group: &str, artifact: &str, versions: Vec<&str>) -> Self {
        self.groups
            .entry(group.to_string())
            .or_default()
            .insert(artifact.to_string(), strings(versions));
        self
    }
}

#[async_trait]
impl PrimaryRegistry for FakePrimaryRegistry {
    async fn fetch_group_index(&self) -> Result<HashSet<String>, RegistryError> {
        Ok(self.groups.keys().cloned().collect())
    }

    async fn fetch_group_modules(
        &self,
        group: &str,
    ) -> Result<HashMap<String, Vec<String>>, RegistryError> {
        self.module_requests.fetch_add(1, Ordering::SeqCst);
        self.groups
            .get(group)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(group.to_string()))
    }
}

/// In-memory secondary registry that counts artifact requests
#[derive(Default)]
pub struct FakeSecondaryRegistry {
    artifacts: HashMap<(String, String), Vec<String>>,
    pub artifact_requests: AtomicUsize,
}

impl FakeSecondaryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_artifact(mut self, group: &str, artifact: &str, versions: Vec<&str>) -> Self {
        self.artifacts
            .insert((group.to_string(), artifact.to_string()), strings(versions));
        self
    }
}

#[async_trait]
impl SecondaryRegistry for FakeSecondaryRegistry {
    async fn fetch_artifact_versions(
        &self,
        group: &str,
        artifact: &str,
    ) -> Result<Vec<String>, RegistryError> {
        self.artifact_requests.fetch_add(1, Ordering::SeqCst);
        self.artifacts
            .get(&(group.to_string(), artifact.to_string()))
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(format!("{}:{}", group, artifact)))
    }
}

/// Create an updater bootstrapped from the given fake registries
pub async fn create_test_updater(
    primary: Arc<FakePrimaryRegistry>,
    secondary: Arc<FakeSecondaryRegistry>,
) -> Updater {
    Updater::new(VersionFetcher::bootstrap(primary, secondary).await)
}
