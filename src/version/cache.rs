//! Per-run registry cache with primary/secondary fallback
//!
//! The cache lives for a single run: it is filled lazily, only grows, and is
//! dropped when the run ends.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::version::error::RegistryError;
use crate::version::registry::{PrimaryRegistry, SecondaryRegistry};

#[derive(Debug, Clone, PartialEq, Eq)]
enum GroupEntry {
    /// Listed by the primary group index, module map not fetched yet
    Unresolved,
    /// Artifact identifier to versions, oldest first
    Resolved(HashMap<String, Vec<String>>),
}

/// Known groups, artifacts and versions gathered during one run
///
/// A group missing from the cache is unknown to the primary registry and is
/// only ever looked up through the secondary registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryCache {
    groups: HashMap<String, GroupEntry>,
}

impl RegistryCache {
    /// Creates a cache where every given group is known but unresolved
    pub fn with_known_groups(groups: impl IntoIterator<Item = String>) -> Self {
        Self {
            groups: groups
                .into_iter()
                .map(|group| (group, GroupEntry::Unresolved))
                .collect(),
        }
    }

    /// Returns true if the group is present, resolved or not
    pub fn is_known(&self, group: &str) -> bool {
        self.groups.contains_key(group)
    }

    /// Returns true if the group is known but its module map was not fetched yet
    pub fn is_unresolved(&self, group: &str) -> bool {
        matches!(self.groups.get(group), Some(GroupEntry::Unresolved))
    }

    /// Cached versions for an artifact, if it has been looked up
    pub fn versions(&self, group: &str, artifact: &str) -> Option<&[String]> {
        match self.groups.get(group) {
            Some(GroupEntry::Resolved(modules)) => modules.get(artifact).map(Vec::as_slice),
            _ => None,
        }
    }

    /// Stores a full module map for a group, replacing its unresolved marker
    pub fn store_group(&mut self, group: &str, modules: HashMap<String, Vec<String>>) {
        self.groups
            .insert(group.to_string(), GroupEntry::Resolved(modules));
    }

    /// Stores a single artifact, keeping any other artifacts cached under the group
    pub fn store_artifact(&mut self, group: &str, artifact: &str, versions: Vec<String>) {
        match self.groups.get_mut(group) {
            Some(GroupEntry::Resolved(modules)) => {
                modules.insert(artifact.to_string(), versions);
            }
            _ => {
                self.groups.insert(
                    group.to_string(),
                    GroupEntry::Resolved(HashMap::from([(artifact.to_string(), versions)])),
                );
            }
        }
    }
}

/// Looks up artifact versions through the cache, fetching on a miss
///
/// Every group is fetched from the primary registry at most once and every
/// (group, artifact) pair from the secondary registry at most once per run,
/// whether the fetch succeeds or not.
pub struct VersionFetcher {
    primary: Arc<dyn PrimaryRegistry>,
    secondary: Arc<dyn SecondaryRegistry>,
    cache: RegistryCache,
}

impl VersionFetcher {
    pub fn new(
        primary: Arc<dyn PrimaryRegistry>,
        secondary: Arc<dyn SecondaryRegistry>,
        cache: RegistryCache,
    ) -> Self {
        Self {
            primary,
            secondary,
            cache,
        }
    }

    /// Creates a fetcher seeded with the primary registry's group index
    ///
    /// A failed index fetch is logged and leaves every group unknown, so all
    /// lookups go through the secondary registry.
    pub async fn bootstrap(
        primary: Arc<dyn PrimaryRegistry>,
        secondary: Arc<dyn SecondaryRegistry>,
    ) -> Self {
        let cache = match primary.fetch_group_index().await {
            Ok(groups) => {
                info!("Primary registry hosts {} groups", groups.len());
                RegistryCache::with_known_groups(groups)
            }
            Err(e) => {
                warn!(
                    "Failed to fetch primary group index, using secondary registry only: {}",
                    e
                );
                RegistryCache::default()
            }
        };

        Self::new(primary, secondary, cache)
    }

    pub fn cache(&self) -> &RegistryCache {
        &self.cache
    }

    /// Returns the versions of an artifact, oldest first
    ///
    /// # Returns
    /// * `Ok(versions)` - Possibly empty when neither registry knows the artifact
    /// * `Err(RegistryError)` - The secondary lookup failed during this call
    pub async fn fetch_versions(
        &mut self,
        group: &str,
        artifact: &str,
    ) -> Result<Vec<String>, RegistryError> {
        if self.cache.is_unresolved(group) {
            let modules = match self.primary.fetch_group_modules(group).await {
                Ok(modules) => {
                    debug!("Fetched {} modules for {} from primary", modules.len(), group);
                    modules
                }
                Err(e) => {
                    warn!("Failed to fetch modules for {} from primary: {}", group, e);
                    HashMap::new()
                }
            };
            self.cache.store_group(group, modules);
        }

        if let Some(versions) = self.cache.versions(group, artifact) {
            return Ok(versions.to_vec());
        }

        if self.cache.is_known(group) {
            debug!("{}:{} missing from primary, trying secondary", group, artifact);
        } else {
            debug!("{} unknown to primary, trying secondary for {}", group, artifact);
        }
        match self.secondary.fetch_artifact_versions(group, artifact).await {
            Ok(versions) => {
                self.cache.store_artifact(group, artifact, versions.clone());
                Ok(versions)
            }
            Err(RegistryError::NotFound(_)) => {
                debug!("{}:{} not found in any registry", group, artifact);
                self.cache.store_artifact(group, artifact, Vec::new());
                Ok(Vec::new())
            }
            Err(e) => {
                self.cache.store_artifact(group, artifact, Vec::new());
                Err(e)
            }
        }
    }
}
