//! Update coordinator
//!
//! Scans each build file, looks up available versions through the fetcher,
//! selects replacements and writes changed files back. Files and coordinates
//! are processed one at a time.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::scanner::{Coordinate, CoordinateScanner};
use crate::update::rewriter::{Rewrite, VersionChange, rewrite};
use crate::version::cache::VersionFetcher;
use crate::version::selector::select_version;

#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("Failed to read {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Skipping {}: not valid UTF-8: {}", .path.display(), .source)]
    Encoding {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Failed to write {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Changes applied (or, in a dry run, proposed) to one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChanges {
    pub path: PathBuf,
    pub changes: Vec<VersionChange>,
}

/// Outcome of processing a set of build files
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub files_scanned: usize,
    pub updated: Vec<FileChanges>,
    /// Files left untouched because they are not valid UTF-8
    pub skipped: Vec<PathBuf>,
    /// Files whose new content could not be written
    pub write_failures: Vec<PathBuf>,
}

impl RunSummary {
    pub fn change_count(&self) -> usize {
        self.updated.iter().map(|f| f.changes.len()).sum()
    }
}

/// Identical occurrences resolve to the same version
type SelectionKey = (String, String, String, Option<String>);

fn selection_key(coordinate: &Coordinate) -> SelectionKey {
    (
        coordinate.group.clone(),
        coordinate.artifact.clone(),
        coordinate.version.clone(),
        coordinate.constraint.clone(),
    )
}

pub struct Updater {
    scanner: CoordinateScanner,
    fetcher: VersionFetcher,
}

impl Updater {
    pub fn new(fetcher: VersionFetcher) -> Self {
        Self {
            scanner: CoordinateScanner::new(),
            fetcher,
        }
    }

    /// Rewrite every coordinate in `content` to its selected version
    pub async fn update_content(&mut self, content: &str) -> Rewrite {
        let coordinates = self.scanner.scan(content);

        let mut targets: HashMap<SelectionKey, String> = HashMap::new();
        for coordinate in &coordinates {
            let key = selection_key(coordinate);
            if targets.contains_key(&key) {
                continue;
            }
            let target = self.resolve(coordinate).await;
            targets.insert(key, target);
        }

        rewrite(content, &coordinates, |coordinate| {
            targets
                .get(&selection_key(coordinate))
                .cloned()
                .unwrap_or_else(|| coordinate.version.clone())
        })
    }

    /// Selected version for one coordinate; the current version when nothing is known
    async fn resolve(&mut self, coordinate: &Coordinate) -> String {
        match self
            .fetcher
            .fetch_versions(&coordinate.group, &coordinate.artifact)
            .await
        {
            Ok(versions) if versions.is_empty() => {
                debug!("No versions found for {}", coordinate.module());
                coordinate.version.clone()
            }
            Ok(versions) => select_version(
                &versions,
                &coordinate.version,
                coordinate.constraint.as_deref(),
            ),
            Err(e) => {
                warn!(
                    "Failed to fetch versions for {}: {}",
                    coordinate.module(),
                    e
                );
                coordinate.version.clone()
            }
        }
    }

    /// Update a single file in place
    ///
    /// Nothing is written when no version changed or when `dry_run` is set.
    pub async fn update_file(
        &mut self,
        path: &Path,
        dry_run: bool,
    ) -> Result<Vec<VersionChange>, UpdateError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| UpdateError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        let content = String::from_utf8(bytes).map_err(|source| UpdateError::Encoding {
            path: path.to_path_buf(),
            source,
        })?;

        let result = self.update_content(&content).await;
        for change in &result.changes {
            info!(
                "{}: {}:{} -> {}",
                path.display(),
                change.module,
                change.from,
                change.to
            );
        }

        if result.changed() && !dry_run {
            tokio::fs::write(path, &result.content)
                .await
                .map_err(|source| UpdateError::Write {
                    path: path.to_path_buf(),
                    source,
                })?;
        }

        Ok(result.changes)
    }

    /// Process files in order
    ///
    /// A read failure aborts the run. A file that is not valid UTF-8 or cannot
    /// be written is logged and recorded, and the remaining files are still
    /// processed.
    pub async fn run(
        &mut self,
        files: &[PathBuf],
        dry_run: bool,
    ) -> Result<RunSummary, UpdateError> {
        let mut summary = RunSummary::default();

        for path in files {
            debug!("Processing {}", path.display());
            summary.files_scanned += 1;

            match self.update_file(path, dry_run).await {
                Ok(changes) if changes.is_empty() => {}
                Ok(changes) => summary.updated.push(FileChanges {
                    path: path.clone(),
                    changes,
                }),
                Err(e @ UpdateError::Encoding { .. }) => {
                    warn!("{}", e);
                    summary.skipped.push(path.clone());
                }
                Err(e @ UpdateError::Write { .. }) => {
                    warn!("{}", e);
                    summary.write_failures.push(path.clone());
                }
                Err(e) => return Err(e),
            }
        }

        Ok(summary)
    }
}
