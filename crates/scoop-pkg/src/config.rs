//! Package profile: the per-project metadata baked into the manifest.

use crate::error::ConfigError;
use scoop_schema::Target;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Project metadata for the generated manifest.
///
/// Every field has a default, so a profile file only needs to list what
/// differs. Without a profile file the defaults describe fabbro.
///
/// ```toml
/// name = "fabbro"
/// repo = "charly-vibes/fabbro"
/// license = "MIT"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageProfile {
    /// Archive base name (`<name>_<version>_windows_amd64.zip`).
    pub name: String,
    /// One-line description shown by `scoop info`.
    pub description: String,
    /// Project homepage.
    pub homepage: String,
    /// SPDX license identifier.
    pub license: String,
    /// GitHub repository in `owner/repo` format.
    pub repo: String,
    /// Executable inside the archive.
    pub bin: String,
}

impl Default for PackageProfile {
    fn default() -> Self {
        Self {
            name: "fabbro".to_string(),
            description: "Local-first code review annotation tool with a terminal UI".to_string(),
            homepage: "https://github.com/charly-vibes/fabbro".to_string(),
            license: "MIT".to_string(),
            repo: "charly-vibes/fabbro".to_string(),
            bin: "fabbro.exe".to_string(),
        }
    }
}

impl PackageProfile {
    /// Parse a profile from TOML content.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the content is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a profile from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read, or
    /// `ConfigError::Parse` if it is invalid.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Repository URL, used for version checks.
    pub fn repo_url(&self) -> String {
        format!("https://github.com/{}", self.repo)
    }

    /// Download URL of the Windows archive for a release.
    pub fn release_url(&self, tag: &str, version: &str) -> String {
        format!(
            "{}/releases/download/{tag}/{}",
            self.repo_url(),
            Target::WINDOWS_AMD64.archive_name(&self.name, version)
        )
    }

    /// Autoupdate URL template with Scoop's `$version` left unexpanded.
    ///
    /// Assumes tags are the version prefixed with `v`.
    pub fn autoupdate_url(&self) -> String {
        self.release_url("v$version", "$version")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_release_url() {
        let profile = PackageProfile::default();
        assert_eq!(
            profile.release_url("v1.2.0", "1.2.0"),
            "https://github.com/charly-vibes/fabbro/releases/download/v1.2.0/fabbro_1.2.0_windows_amd64.zip"
        );
    }

    #[test]
    fn default_autoupdate_url() {
        assert_eq!(
            PackageProfile::default().autoupdate_url(),
            "https://github.com/charly-vibes/fabbro/releases/download/v$version/fabbro_$version_windows_amd64.zip"
        );
    }

    #[test]
    fn tag_and_version_are_independent() {
        let profile = PackageProfile::default();
        assert_eq!(
            profile.release_url("release-7", "7.0.0"),
            "https://github.com/charly-vibes/fabbro/releases/download/release-7/fabbro_7.0.0_windows_amd64.zip"
        );
    }

    #[test]
    fn partial_profile_keeps_defaults() {
        let profile = PackageProfile::parse(
            r#"
name = "ripgrep"
repo = "BurntSushi/ripgrep"
bin = "rg.exe"
"#,
        )
        .unwrap();

        assert_eq!(profile.name, "ripgrep");
        assert_eq!(profile.bin, "rg.exe");
        assert_eq!(profile.license, "MIT");
        assert_eq!(profile.repo_url(), "https://github.com/BurntSushi/ripgrep");
    }

    #[test]
    fn invalid_profile_is_parse_error() {
        let err = PackageProfile::parse("name = [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_profile_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = PackageProfile::from_file(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
