//! Build file discovery

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config::FilesConfig;

/// Collect build files under `root`, in file-name order
///
/// Directories named in `skip_dirs` are not descended into (the root itself is
/// always walked). Entries that cannot be read are logged and skipped.
pub fn find_build_files(root: &Path, config: &FilesConfig) -> Vec<PathBuf> {
    let files: Vec<PathBuf> = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_skipped_dir(entry, config))
        .filter_map(|entry| {
            entry
                .inspect_err(|e| warn!("Skipping unreadable path: {}", e))
                .ok()
        })
        .filter(|entry| entry.file_type().is_file() && is_build_file(entry, config))
        .map(DirEntry::into_path)
        .collect();

    debug!("Found {} build files under {}", files.len(), root.display());
    files
}

fn is_skipped_dir(entry: &DirEntry, config: &FilesConfig) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && config
            .skip_dirs
            .iter()
            .any(|name| entry.file_name() == name.as_str())
}

fn is_build_file(entry: &DirEntry, config: &FilesConfig) -> bool {
    config
        .names
        .iter()
        .any(|name| entry.file_name() == name.as_str())
}
