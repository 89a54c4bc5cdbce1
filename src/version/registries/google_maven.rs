//! Google Maven repository implementation
//!
//! The repository publishes a `master-index.xml` naming every hosted group and one
//! `group-index.xml` per group listing every artifact with its versions.

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use tracing::debug;

use crate::version::error::RegistryError;
use crate::version::registries::xml::root_children;
use crate::version::registries::{fetch_document, group_path, http_client};
use crate::version::registry::PrimaryRegistry;

/// Registry implementation for Google's Maven repository
pub struct GoogleMavenRegistry {
    client: reqwest::Client,
    base_url: String,
}

impl GoogleMavenRegistry {
    /// Creates a new GoogleMavenRegistry with a custom base URL
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            client: http_client(timeout),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait::async_trait]
impl PrimaryRegistry for GoogleMavenRegistry {
    async fn fetch_group_index(&self) -> Result<HashSet<String>, RegistryError> {
        let url = format!("{}/master-index.xml", self.base_url);
        let body = fetch_document(&self.client, &url, "master-index.xml").await?;

        let groups: HashSet<String> = root_children(&body)?
            .into_iter()
            .map(|child| child.name)
            .collect();

        debug!("Group index lists {} groups", groups.len());
        Ok(groups)
    }

    async fn fetch_group_modules(
        &self,
        group: &str,
    ) -> Result<HashMap<String, Vec<String>>, RegistryError> {
        let url = format!("{}/{}/group-index.xml", self.base_url, group_path(group));
        let body = fetch_document(&self.client, &url, group).await?;

        // Each module element carries its versions, comma-separated, in the first attribute
        let modules = root_children(&body)?
            .into_iter()
            .map(|child| {
                let versions = child
                    .first_attribute
                    .map(|list| split_versions(&list))
                    .unwrap_or_default();
                (child.name, versions)
            })
            .collect();

        Ok(modules)
    }
}

fn split_versions(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}
