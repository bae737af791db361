//! Domain-specific errors for manifest generation

use scoop_schema::{ChecksumError, Sha256Hash};
use thiserror::Error;

/// Errors raised while loading a package profile.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The profile file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The profile is not valid TOML or does not match the schema.
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Errors raised by [`crate::generate::generate`].
#[derive(Error, Debug)]
pub enum GenerateError {
    /// The checksums file has no line for the Windows archive.
    #[error(transparent)]
    ChecksumNotFound(#[from] ChecksumError),

    /// A local artifact was given and its digest differs from the published one.
    #[error("checksum mismatch for {artifact}: expected {expected}, got {actual}")]
    ChecksumMismatch {
        /// Path of the artifact that was hashed.
        artifact: String,
        /// Digest from the checksums file.
        expected: Sha256Hash,
        /// Digest computed from the artifact.
        actual: Sha256Hash,
    },

    /// Fetching a remote checksums file failed.
    #[error("Download failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Reading the checksums file or writing the manifest failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
