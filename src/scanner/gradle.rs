//! Gradle build script scanner
//!
//! Extracts quoted `group:artifact:version` coordinates, line by line.
//!
//! Format examples:
//! - `implementation 'com.google.code.gson:gson:2.8.0'`
//! - `implementation("androidx.core:core:1.0.0")`
//! - `classpath "com.android.tools.build:gradle:3.0.0" // < 3.1` (constraint)
//! - `implementation 'com.example:widget:1.2.0@aar'` (extension is not part of the version)
//!
//! A literal is a coordinate only if it has exactly three `:`-separated parts, the
//! group and artifact use `[A-Za-z0-9._-]`, and the version starts with a digit and
//! uses `[A-Za-z0-9._+-]` without a trailing `+`. Interpolated (`$gsonVersion`),
//! dynamic (`1.+`, `latest.release`) and classifier forms are skipped.
//!
//! When only whitespace separates a coordinate's closing quote from `//`, the rest of
//! the line is the coordinate's constraint and no further coordinates are read from it.

use crate::scanner::types::Coordinate;

/// Scanner for Gradle build scripts
#[derive(Debug, Default, Clone, Copy)]
pub struct CoordinateScanner;

/// Byte layout of a coordinate literal
struct CoordinateParts<'a> {
    group: &'a str,
    artifact: &'a str,
    version: &'a str,
    /// Offset of the version within the literal
    version_offset: usize,
}

impl CoordinateScanner {
    pub fn new() -> Self {
        Self
    }

    /// Returns every coordinate occurrence, in source order
    pub fn scan(&self, content: &str) -> Vec<Coordinate> {
        let mut results = Vec::new();
        let mut line_start = 0;

        for (line_num, raw_line) in content.split_inclusive('\n').enumerate() {
            let line = raw_line.trim_end_matches(['\n', '\r']);
            scan_line(line, line_num, line_start, &mut results);
            line_start += raw_line.len();
        }

        results
    }
}

fn scan_line(line: &str, line_num: usize, line_start: usize, results: &mut Vec<Coordinate>) {
    let bytes = line.as_bytes();
    let mut pos = 0;

    while let Some(open) = find_quote(bytes, pos) {
        let quote = bytes[open];
        // Unterminated literal: nothing more to read on this line
        let Some(close) = find_closing_quote(bytes, open + 1, quote) else {
            break;
        };
        pos = close + 1;

        let Some(parts) = split_coordinate(&line[open + 1..close]) else {
            continue;
        };

        let comment = line[close + 1..].trim_start().strip_prefix("//");
        let constraint = comment
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string);

        let start_offset = line_start + open + 1 + parts.version_offset;
        results.push(Coordinate {
            quote: char::from(quote),
            group: parts.group.to_string(),
            artifact: parts.artifact.to_string(),
            version: parts.version.to_string(),
            constraint,
            line: line_num,
            start_offset,
            end_offset: start_offset + parts.version.len(),
        });

        if comment.is_some() {
            break;
        }
    }
}

fn find_quote(bytes: &[u8], from: usize) -> Option<usize> {
    bytes[from..]
        .iter()
        .position(|&b| b == b'\'' || b == b'"')
        .map(|p| from + p)
}

fn find_closing_quote(bytes: &[u8], from: usize, quote: u8) -> Option<usize> {
    let mut i = from;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == quote => return Some(i),
            _ => i += 1,
        }
    }
    None
}

fn split_coordinate(literal: &str) -> Option<CoordinateParts<'_>> {
    let mut parts = literal.split(':');
    let (group, artifact, tail) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let version = match tail.split_once('@') {
        Some((version, extension)) => {
            if extension.is_empty() || !extension.bytes().all(|b| b.is_ascii_alphanumeric()) {
                return None;
            }
            version
        }
        None => tail,
    };

    if !is_identifier(group) || !is_identifier(artifact) || !is_literal_version(version) {
        return None;
    }

    Some(CoordinateParts {
        group,
        artifact,
        version,
        version_offset: group.len() + artifact.len() + 2,
    })
}

fn is_identifier(s: &str) -> bool {
    !s.is_empty()
        && s
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'-'))
}

fn is_literal_version(s: &str) -> bool {
    s.starts_with(|c: char| c.is_ascii_digit())
        && !s.ends_with('+')
        && s
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'-' | b'+'))
}
