//! SHA256 checksum newtype.

use sha2::{Digest, Sha256};
use std::io::Read;
use std::path::Path;

/// Number of hex characters shown by [`Sha256Hash::preview`].
const PREVIEW_LEN: usize = 16;

/// Newtype for a SHA256 hash string as published in a checksums file.
///
/// The digest is stored verbatim. No length or alphabet validation is done
/// here: the manifest carries whatever the release pipeline published and
/// Scoop verifies it at install time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Sha256Hash(String);

impl Sha256Hash {
    /// Create a new `Sha256Hash` without validation.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Compute the SHA256 of a file, streaming it in 64KB chunks.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be opened or read.
    pub fn compute_file(path: &Path) -> std::io::Result<Self> {
        let mut file = std::fs::File::open(path)?;
        let mut hasher = Sha256::new();
        let mut buffer = [0u8; 65536];

        loop {
            let bytes_read = file.read(&mut buffer)?;
            if bytes_read == 0 {
                break;
            }
            hasher.update(&buffer[..bytes_read]);
        }

        Ok(Self(hex::encode(hasher.finalize())))
    }

    /// The digest in Scoop's `algorithm:hex` notation.
    pub fn prefixed(&self) -> String {
        format!("sha256:{}", self.0)
    }

    /// First 16 characters of the digest, for console output.
    ///
    /// Shorter digests are returned whole.
    pub fn preview(&self) -> &str {
        match self.0.char_indices().nth(PREVIEW_LEN) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }

    /// Compare two digests ignoring hex case.
    pub fn matches(&self, other: &Sha256Hash) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }

    /// Return the inner hex string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Sha256Hash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Sha256Hash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
