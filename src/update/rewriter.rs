//! Applies replacement versions to build file content
//!
//! Replacement is position based: only the version span of each scanned
//! coordinate is rewritten, so the same text elsewhere in the file (an
//! unquoted mention, a different declaration) is left alone.

use tracing::warn;

use crate::scanner::types::Coordinate;

/// A single version bump applied to a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionChange {
    /// `group:artifact`
    pub module: String,
    pub from: String,
    pub to: String,
    /// Line number (0-indexed)
    pub line: usize,
}

/// Result of rewriting one file's content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub content: String,
    pub changes: Vec<VersionChange>,
}

impl Rewrite {
    /// Returns true if any version was replaced
    pub fn changed(&self) -> bool {
        !self.changes.is_empty()
    }
}

/// Rewrite `content`, replacing each coordinate's version with `resolve(coordinate)`.
///
/// `coordinates` must come from scanning `content` and be in source order.
/// `resolve` is called once per coordinate, in order. Coordinates whose span
/// no longer matches their version text are skipped.
pub fn rewrite<F>(content: &str, coordinates: &[Coordinate], mut resolve: F) -> Rewrite
where
    F: FnMut(&Coordinate) -> String,
{
    let mut output = String::with_capacity(content.len());
    let mut changes = Vec::new();
    let mut cursor = 0;

    for coordinate in coordinates {
        let target = resolve(coordinate);
        if target.is_empty() || target == coordinate.version {
            continue;
        }

        let span = content.get(coordinate.start_offset..coordinate.end_offset);
        if coordinate.start_offset < cursor || span != Some(coordinate.version.as_str()) {
            warn!(
                "Skipping {}: version span does not match content",
                coordinate.notation()
            );
            continue;
        }

        output.push_str(&content[cursor..coordinate.start_offset]);
        output.push_str(&target);
        cursor = coordinate.end_offset;

        changes.push(VersionChange {
            module: coordinate.module(),
            from: coordinate.version.clone(),
            to: target,
            line: coordinate.line,
        });
    }

    if changes.is_empty() {
        return Rewrite {
            content: content.to_string(),
            changes,
        };
    }

    output.push_str(&content[cursor..]);
    Rewrite {
        content: output,
        changes,
    }
}
