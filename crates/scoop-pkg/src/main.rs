//! `update-scoop` - create or update the Scoop manifest for a release.
//!
//! Usage: `update-scoop <OUTPUT> <VERSION> <TAG> <CHECKSUMS>`

use anyhow::{Context, Result};
use clap::Parser;
use scoop_pkg::{ChecksumSource, GenerateRequest, PackageProfile, Report};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "update-scoop", version)]
#[command(about = "Create or update a Scoop manifest from a release checksums file", long_about = None)]
struct Cli {
    /// Path of the manifest to write (e.g. bucket/fabbro.json)
    output: PathBuf,
    /// Release version (e.g. 1.2.0)
    #[arg(value_name = "VERSION")]
    release_version: String,
    /// Release tag (e.g. v1.2.0)
    tag: String,
    /// Checksums file, as a local path or an http(s) URL
    checksums: String,

    /// TOML package profile overriding the built-in project metadata
    #[arg(long, env = "SCOOP_PROFILE")]
    profile: Option<PathBuf>,

    /// Local copy of the Windows archive to verify against the checksum
    #[arg(long)]
    artifact: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr; stdout carries only the summary.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("ERROR: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<Report> {
    let profile = match &cli.profile {
        Some(path) => PackageProfile::from_file(path)
            .with_context(|| format!("failed to load profile {}", path.display()))?,
        None => PackageProfile::default(),
    };

    let request = GenerateRequest {
        output: cli.output,
        version: cli.release_version,
        tag: cli.tag,
        checksums: ChecksumSource::from_arg(&cli.checksums),
        profile,
        artifact: cli.artifact,
    };

    let client = scoop_pkg::build_client()?;
    Ok(scoop_pkg::generate(&client, &request).await?)
}
