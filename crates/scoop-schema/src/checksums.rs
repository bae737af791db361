//! Parsing of `sha256sum`-style checksum files (`<hash> <filename>` per line).

use crate::hash::Sha256Hash;
use thiserror::Error;

/// One line of a checksums file: a digest and the filename it verifies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecksumEntry {
    /// Digest, copied verbatim from the first column.
    pub hash: Sha256Hash,
    /// Filename from the second column.
    pub filename: String,
}

/// Errors raised while looking up a checksum.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ChecksumError {
    /// No line carried a filename containing the platform marker.
    #[error("{marker} checksum not found")]
    NotFound {
        /// The marker that was searched for (e.g. `windows_amd64`).
        marker: String,
    },
}

impl ChecksumEntry {
    /// Parse a single checksum line.
    ///
    /// The line is split on whitespace and only accepted when it yields
    /// exactly two tokens. Anything else (blank lines, comments with spaces,
    /// BSD-style `SHA256 (file) = hash` lines) is skipped by returning `None`.
    pub fn parse_line(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        let (Some(hash), Some(filename), None) = (parts.next(), parts.next(), parts.next()) else {
            return None;
        };

        Some(Self {
            hash: Sha256Hash::new(hash),
            filename: filename.to_string(),
        })
    }

    /// Whether this entry's filename contains `marker`.
    pub fn matches_marker(&self, marker: &str) -> bool {
        self.filename.contains(marker)
    }
}

/// Lines of a checksums file.
///
/// `\n`, `\r\n` and a bare `\r` all end a line. The empty piece a `\r\n`
/// leaves behind never parses as an entry.
fn lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(['\n', '\r'])
}

/// All well-formed entries of a checksums file, in file order.
pub fn parse_checksums(text: &str) -> Vec<ChecksumEntry> {
    lines(text).filter_map(ChecksumEntry::parse_line).collect()
}

/// Find the first entry whose filename contains `marker`.
///
/// Scanning stops at the first qualifying line; later matches are ignored.
///
/// # Errors
///
/// Returns [`ChecksumError::NotFound`] if no line qualifies.
pub fn find_checksum(text: &str, marker: &str) -> Result<ChecksumEntry, ChecksumError> {
    lines(text)
        .filter_map(ChecksumEntry::parse_line)
        .find(|entry| entry.matches_marker(marker))
        .ok_or_else(|| ChecksumError::NotFound {
            marker: marker.to_string(),
        })
}
