//! Replacement version selection
//!
//! Versions are expected in registry document order (oldest first, newest last).
//! No semantic sorting happens here: "latest" is whatever the registry lists last.

use tracing::{debug, warn};

use crate::version::constraint::Constraint;
use crate::version::semver::is_prerelease;

/// Pick the version that should replace `current`.
///
/// With a constraint, returns the last version satisfying it. Without one,
/// returns the last version, skipping pre-releases unless `current` is itself
/// a pre-release.
///
/// Falls back to `current` when the constraint is malformed, nothing satisfies
/// it, or every candidate was filtered out as a pre-release.
pub fn select_version(versions: &[String], current: &str, constraint: Option<&str>) -> String {
    let selected = match constraint {
        Some(expression) => match Constraint::parse(expression) {
            Ok(constraint) => {
                let found = versions.iter().rev().find(|v| constraint.satisfies(v));
                if found.is_none() {
                    debug!(
                        "no version of {} candidates satisfies '{}'",
                        versions.len(),
                        constraint
                    );
                }
                found
            }
            Err(e) => {
                warn!("constraint '{}' is invalid: {}", expression, e);
                None
            }
        },
        None => {
            let allow_prerelease = is_prerelease(current);
            versions
                .iter()
                .rev()
                .find(|v| allow_prerelease || !is_prerelease(v))
        }
    };

    selected.cloned().unwrap_or_else(|| current.to_string())
}
