//! Update layer
//! - rewriter.rs: Applies selected versions to file content
//! - updater.rs: Drives scanning, version lookup and rewriting per file

pub mod rewriter;
pub mod updater;

pub use rewriter::{Rewrite, VersionChange, rewrite};
pub use updater::{FileChanges, RunSummary, UpdateError, Updater};
