//! Scanning layer
//! - types.rs: Coordinate found in a build file
//! - gradle.rs: Gradle build script scanner

pub mod gradle;
pub mod types;

pub use gradle::CoordinateScanner;
pub use types::Coordinate;
