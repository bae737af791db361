//! Shared types and wire format for Scoop application manifests.
//!
//! The crate covers the data side of the manifest generator: the checksum
//! newtype, the release target naming, checksum-file parsing and the
//! manifest record with its exact JSON layout.

pub mod checksums;
pub mod hash;
pub mod manifest;
pub mod target;

// Re-exports
pub use checksums::{ChecksumEntry, ChecksumError, find_checksum, parse_checksums};
pub use hash::Sha256Hash;
pub use manifest::{AutoUpdate, CheckVer, Manifest};
pub use target::{ArchVariant, OsVariant, Target};
