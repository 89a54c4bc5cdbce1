//! Maven repository implementation based on `maven-metadata.xml`

use std::time::Duration;

use serde::Deserialize;

use crate::version::error::RegistryError;
use crate::version::registries::{fetch_document, group_path, http_client};
use crate::version::registry::SecondaryRegistry;

/// `maven-metadata.xml` published for each artifact
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct MavenMetadata {
    #[serde(rename = "groupId", default)]
    pub group_id: Option<String>,
    #[serde(rename = "artifactId", default)]
    pub artifact_id: Option<String>,
    #[serde(default)]
    pub versioning: Option<Versioning>,
}

impl MavenMetadata {
    pub fn parse(xml: &str) -> Result<Self, RegistryError> {
        Ok(quick_xml::de::from_str(xml)?)
    }

    /// Available versions, oldest first
    pub fn versions(&self) -> &[String] {
        self.versioning
            .as_ref()
            .map(|versioning| versioning.versions.items.as_slice())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Versioning {
    pub latest: Option<String>,
    pub release: Option<String>,
    #[serde(default)]
    pub versions: Versions,
    #[serde(rename = "lastUpdated")]
    pub last_updated: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Versions {
    #[serde(default, rename = "version")]
    pub items: Vec<String>,
}

/// Registry implementation for a plain Maven repository layout
pub struct MavenRepository {
    client: reqwest::Client,
    base_url: String,
}

impl MavenRepository {
    /// Creates a new MavenRepository with a custom base URL
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            client: http_client(timeout),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait::async_trait]
impl SecondaryRegistry for MavenRepository {
    async fn fetch_artifact_versions(
        &self,
        group: &str,
        artifact: &str,
    ) -> Result<Vec<String>, RegistryError> {
        let url = format!(
            "{}/{}/{}/maven-metadata.xml",
            self.base_url,
            group_path(group),
            artifact
        );
        let body = fetch_document(&self.client, &url, &format!("{}:{}", group, artifact)).await?;

        let metadata = MavenMetadata::parse(&body)?;
        Ok(metadata.versions().to_vec())
    }
}
