//! Manifest generation: checksums in, Scoop manifest out.

use crate::config::PackageProfile;
use crate::error::GenerateError;
use crate::source::ChecksumSource;
use scoop_schema::{
    AutoUpdate, CheckVer, Manifest, Sha256Hash, Target, find_checksum, parse_checksums,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Inputs for one manifest generation run.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// Where to write the manifest.
    pub output: PathBuf,
    /// Release version without prefix (e.g. `1.2.0`).
    pub version: String,
    /// Release tag the assets are published under (e.g. `v1.2.0`).
    pub tag: String,
    /// Checksums file listing the release archives.
    pub checksums: ChecksumSource,
    /// Project metadata.
    pub profile: PackageProfile,
    /// Optional local copy of the Windows archive to verify against the checksum.
    pub artifact: Option<PathBuf>,
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Path the manifest was written to.
    pub path: PathBuf,
    /// Version recorded in the manifest.
    pub version: String,
    /// Resolved download URL.
    pub url: String,
    /// Full archive checksum.
    pub hash: Sha256Hash,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Wrote {} (version {})", self.path.display(), self.version)?;
        writeln!(f, "  url: {}", self.url)?;
        write!(f, "  sha256: {}...", self.hash.preview())
    }
}

/// Assemble the manifest for a release.
pub fn build_manifest(
    profile: &PackageProfile,
    version: &str,
    tag: &str,
    hash: &Sha256Hash,
) -> Manifest {
    Manifest {
        version: version.to_string(),
        description: profile.description.clone(),
        homepage: profile.homepage.clone(),
        license: profile.license.clone(),
        url: profile.release_url(tag, version),
        hash: hash.prefixed(),
        bin: profile.bin.clone(),
        checkver: CheckVer {
            github: profile.repo_url(),
        },
        autoupdate: AutoUpdate {
            url: profile.autoupdate_url(),
        },
    }
}

/// Generate and write the manifest described by `request`.
///
/// All lookups and verification happen before the output path is touched,
/// so a failed run leaves any existing manifest unchanged.
///
/// # Errors
///
/// Returns `GenerateError::ChecksumNotFound` if no checksum line names the
/// Windows archive, `GenerateError::ChecksumMismatch` if a local artifact
/// does not match it, and I/O or fetch errors as they occur.
pub async fn generate(
    client: &reqwest::Client,
    request: &GenerateRequest,
) -> Result<Report, GenerateError> {
    let text = request.checksums.load(client).await?;
    let marker = Target::WINDOWS_AMD64.marker();

    for entry in parse_checksums(&text) {
        debug!(filename = %entry.filename, hash = %entry.hash, "checksum candidate");
    }

    let entry = find_checksum(&text, &marker)?;
    debug!(filename = %entry.filename, "selected checksum");

    if let Some(artifact) = &request.artifact {
        verify_artifact(artifact, &entry.hash)?;
    }

    let manifest = build_manifest(
        &request.profile,
        &request.version,
        &request.tag,
        &entry.hash,
    );
    manifest.write_to(&request.output)?;
    info!(path = %request.output.display(), version = %request.version, "manifest written");

    Ok(Report {
        path: request.output.clone(),
        version: request.version.clone(),
        url: manifest.url,
        hash: entry.hash,
    })
}

fn verify_artifact(artifact: &Path, expected: &Sha256Hash) -> Result<(), GenerateError> {
    let actual = Sha256Hash::compute_file(artifact)?;
    if !actual.matches(expected) {
        return Err(GenerateError::ChecksumMismatch {
            artifact: artifact.display().to_string(),
            expected: expected.clone(),
            actual,
        });
    }
    debug!(artifact = %artifact.display(), "artifact checksum verified");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::build_client;
    use std::fs;

    const CHECKSUMS: &str = "\
abc123 fabbro_1.2.0_windows_amd64.zip
def456 fabbro_1.2.0_linux_amd64.tar.gz
";

    fn request(dir: &Path, checksums: &str) -> GenerateRequest {
        let checksums_path = dir.join("checksums.txt");
        fs::write(&checksums_path, checksums).unwrap();

        GenerateRequest {
            output: dir.join("bucket").join("fabbro.json"),
            version: "1.2.0".to_string(),
            tag: "v1.2.0".to_string(),
            checksums: ChecksumSource::Path(checksums_path),
            profile: PackageProfile::default(),
            artifact: None,
        }
    }

    #[test]
    fn manifest_fields_follow_templates() {
        let manifest = build_manifest(
            &PackageProfile::default(),
            "1.2.0",
            "v1.2.0",
            &Sha256Hash::new("abc123"),
        );

        assert_eq!(manifest.hash, "sha256:abc123");
        assert_eq!(
            manifest.url,
            "https://github.com/charly-vibes/fabbro/releases/download/v1.2.0/fabbro_1.2.0_windows_amd64.zip"
        );
        assert_eq!(manifest.checkver.github, "https://github.com/charly-vibes/fabbro");
        assert_eq!(manifest.bin, "fabbro.exe");
    }

    #[tokio::test]
    async fn writes_manifest_for_windows_checksum() {
        let dir = tempfile::tempdir().unwrap();
        let req = request(dir.path(), CHECKSUMS);

        let report = generate(&build_client().unwrap(), &req).await.unwrap();
        assert_eq!(report.hash.as_str(), "abc123");

        let written: Manifest =
            serde_json::from_str(&fs::read_to_string(&req.output).unwrap()).unwrap();
        assert_eq!(written.hash, "sha256:abc123");
        assert_eq!(written.url, report.url);
    }

    #[tokio::test]
    async fn missing_checksum_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let req = request(dir.path(), "def456 fabbro_1.2.0_linux_amd64.tar.gz\n");

        let err = generate(&build_client().unwrap(), &req).await.unwrap_err();
        assert!(matches!(err, GenerateError::ChecksumNotFound(_)));
        assert!(!req.output.exists());
        assert!(!dir.path().join("bucket").exists());
    }

    #[tokio::test]
    async fn rerun_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let req = request(dir.path(), CHECKSUMS);
        let client = build_client().unwrap();

        generate(&client, &req).await.unwrap();
        let first = fs::read(&req.output).unwrap();
        generate(&client, &req).await.unwrap();
        assert_eq!(fs::read(&req.output).unwrap(), first);
    }

    #[tokio::test]
    async fn artifact_mismatch_leaves_existing_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let mut req = request(dir.path(), CHECKSUMS);

        let artifact = dir.path().join("fabbro_1.2.0_windows_amd64.zip");
        fs::write(&artifact, b"not the published archive").unwrap();
        req.artifact = Some(artifact);

        fs::create_dir_all(req.output.parent().unwrap()).unwrap();
        fs::write(&req.output, "previous").unwrap();

        let err = generate(&build_client().unwrap(), &req).await.unwrap_err();
        assert!(matches!(err, GenerateError::ChecksumMismatch { .. }));
        assert_eq!(fs::read_to_string(&req.output).unwrap(), "previous");
    }

    #[tokio::test]
    async fn matching_artifact_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = dir.path().join("fabbro_1.2.0_windows_amd64.zip");
        fs::write(&artifact, b"hello world").unwrap();

        let checksums = "B94D27B9934D3E08A52E52D7DA7DABFAC484EFE37A5380EE9088F7ACE2EFCDE9 fabbro_1.2.0_windows_amd64.zip\n";
        let mut req = request(dir.path(), checksums);
        req.artifact = Some(artifact);

        let report = generate(&build_client().unwrap(), &req).await.unwrap();
        assert_eq!(
            report.hash.prefixed(),
            "sha256:B94D27B9934D3E08A52E52D7DA7DABFAC484EFE37A5380EE9088F7ACE2EFCDE9"
        );
    }

    #[test]
    fn report_truncates_checksum() {
        let report = Report {
            path: PathBuf::from("bucket/fabbro.json"),
            version: "1.2.0".to_string(),
            url: "https://example.com/fabbro.zip".to_string(),
            hash: Sha256Hash::new("0123456789abcdef0123456789abcdef"),
        };
        assert_eq!(
            report.to_string(),
            "Wrote bucket/fabbro.json (version 1.2.0)\n  url: https://example.com/fabbro.zip\n  sha256: 0123456789abcdef..."
        );
    }
}
