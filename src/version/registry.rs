//! Registry traits for fetching dependency versions from remote sources

use std::collections::{HashMap, HashSet};

#[cfg(test)]
use mockall::automock;

use crate::version::error::RegistryError;

/// Registry that publishes a group index and one module map per group
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait PrimaryRegistry: Send + Sync {
    /// Fetches the set of group identifiers the registry hosts
    async fn fetch_group_index(&self) -> Result<HashSet<String>, RegistryError>;

    /// Fetches every module of a group in a single request
    ///
    /// # Returns
    /// * `Ok(HashMap)` - artifact identifier to versions, oldest first
    /// * `Err(RegistryError)` - If the fetch fails
    async fn fetch_group_modules(
        &self,
        group: &str,
    ) -> Result<HashMap<String, Vec<String>>, RegistryError>;
}

/// Registry queried one (group, artifact) pair at a time
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait SecondaryRegistry: Send + Sync {
    /// Fetches all versions of an artifact, oldest first
    async fn fetch_artifact_versions(
        &self,
        group: &str,
        artifact: &str,
    ) -> Result<Vec<String>, RegistryError>;
}
