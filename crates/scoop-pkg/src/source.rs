//! Where the checksums text comes from: a local file or a release asset URL.

use crate::error::GenerateError;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

/// Location of a checksums file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChecksumSource {
    /// A file on disk (the usual case in a release pipeline).
    Path(PathBuf),
    /// An `http://` or `https://` URL, e.g. a published release asset.
    Url(String),
}

impl ChecksumSource {
    /// Classify a command-line argument.
    pub fn from_arg(arg: &str) -> Self {
        if arg.starts_with("https://") || arg.starts_with("http://") {
            Self::Url(arg.to_string())
        } else {
            Self::Path(PathBuf::from(arg))
        }
    }

    /// Read the whole checksums text.
    ///
    /// # Errors
    ///
    /// Returns `GenerateError::Io` if a local file cannot be read, or
    /// `GenerateError::Fetch` if the request fails or the server answers
    /// with a non-success status.
    pub async fn load(&self, client: &reqwest::Client) -> Result<String, GenerateError> {
        match self {
            Self::Path(path) => {
                debug!(path = %path.display(), "reading checksums");
                Ok(std::fs::read_to_string(path)?)
            }
            Self::Url(url) => {
                debug!(%url, "fetching checksums");
                let resp = client.get(url).send().await?.error_for_status()?;
                Ok(resp.text().await?)
            }
        }
    }
}

impl std::fmt::Display for ChecksumSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{url}"),
        }
    }
}

/// HTTP client for remote checksum files.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialized.
pub fn build_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(concat!("update-scoop/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(60))
        .build()
}
