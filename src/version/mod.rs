//! Version resolution layer
//!
//! Fetches available versions from remote registries, caches them for the
//! current run, and picks the version a coordinate should be rewritten to.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Primary    │────▶│   Fetcher   │────▶│  Selector   │
//! │  Registry   │     │   (cache)   │     │ (latest)    │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        ▲                   │                   │
//!        │                   ▼                   ▼
//!  group index        ┌─────────────┐     ┌─────────────┐
//!                     │  Secondary  │     │ Constraint  │
//!                     │  Registry   │     │ (ranges)    │
//!                     └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`cache`]: Per-run registry cache and primary/secondary fallback
//! - [`constraint`]: Version range expressions read from trailing comments
//! - [`selector`]: Picks the replacement version
//! - [`registry`]: Registry traits for fetching versions from remote sources
//! - [`registries`]: Concrete registry implementations (Google Maven, Maven repository)
//! - [`error`]: Error types for registry and constraint operations
//! - [`semver`]: Version parsing and the pre-release heuristic

pub mod cache;
pub mod constraint;
pub mod error;
pub mod registries;
pub mod registry;
pub mod selector;
pub mod semver;
