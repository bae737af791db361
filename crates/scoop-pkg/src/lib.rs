//! `scoop-pkg` - Scoop manifest generation for release pipelines.
//!
//! Reads the checksums file published with a release, picks the Windows
//! archive's digest and writes the Scoop application manifest that points
//! at the release asset.

pub mod config;
pub mod error;
pub mod generate;
pub mod source;

pub use config::PackageProfile;
pub use error::{ConfigError, GenerateError};
pub use generate::{GenerateRequest, Report, build_manifest, generate};
pub use source::{ChecksumSource, build_client};
