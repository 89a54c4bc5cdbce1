//! Registry implementations for fetching dependency versions

pub mod google_maven;
pub mod maven;
pub mod xml;

pub use google_maven::GoogleMavenRegistry;
pub use maven::MavenRepository;

use std::sync::Arc;
use std::time::Duration;

use tracing::warn;

use crate::config::RegistriesConfig;
use crate::version::cache::VersionFetcher;
use crate::version::error::RegistryError;

/// Create the fetcher for a run: Google Maven first, a Maven repository as fallback
pub async fn create_fetcher(config: &RegistriesConfig) -> VersionFetcher {
    let timeout = Duration::from_millis(config.timeout_ms);

    VersionFetcher::bootstrap(
        Arc::new(GoogleMavenRegistry::new(&config.primary, timeout)),
        Arc::new(MavenRepository::new(&config.secondary, timeout)),
    )
    .await
}

/// Builds the HTTP client shared by the registry implementations
fn http_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent("gradle-bump")
        .timeout(timeout)
        .build()
        .expect("Failed to create HTTP client")
}

/// Maven repositories lay groups out as directories: `androidx.core` -> `androidx/core`
fn group_path(group: &str) -> String {
    group.replace('.', "/")
}

/// GETs a document and returns its body, mapping 404/410 to `NotFound`
async fn fetch_document(
    client: &reqwest::Client,
    url: &str,
    subject: &str,
) -> Result<String, RegistryError> {
    let response = client.get(url).header("Accept", "*/*").send().await?;

    let status = response.status();

    if status == reqwest::StatusCode::NOT_FOUND || status == reqwest::StatusCode::GONE {
        return Err(RegistryError::NotFound(subject.to_string()));
    }

    if !status.is_success() {
        warn!("registry returned status {}: {}", status, url);
        return Err(RegistryError::InvalidResponse(format!(
            "Unexpected status: {}",
            status
        )));
    }

    response.text().await.map_err(|e| {
        warn!("Failed to read registry response from {}: {}", url, e);
        RegistryError::InvalidResponse(e.to_string())
    })
}
