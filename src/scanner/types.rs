//! Common types for scanning

/// A dependency coordinate occurrence found in a build file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinate {
    /// Quote character delimiting the coordinate (`'` or `"`)
    pub quote: char,
    /// Group identifier (e.g., "com.google.code.gson")
    pub group: String,
    /// Artifact identifier (e.g., "gson")
    pub artifact: String,
    /// Version exactly as written (e.g., "2.8.0")
    pub version: String,
    /// Constraint expression from a trailing `//` comment on the same line
    pub constraint: Option<String>,
    /// Line number (0-indexed)
    pub line: usize,
    /// Byte offset of the version string in the source (start)
    pub start_offset: usize,
    /// Byte offset of the version string in the source (end)
    pub end_offset: usize,
}

impl Coordinate {
    /// `group:artifact`
    pub fn module(&self) -> String {
        format!("{}:{}", self.group, self.artifact)
    }

    /// `group:artifact:version`
    pub fn notation(&self) -> String {
        format!("{}:{}:{}", self.group, self.artifact, self.version)
    }
}
