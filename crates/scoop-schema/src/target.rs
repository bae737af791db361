//! Release target naming.
//! Release archives follow the Go toolchain convention: `<name>_<version>_<os>_<arch>.<ext>`.

/// Operating system component of a release archive name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsVariant {
    /// Microsoft Windows.
    Windows,
    /// Linux-based operating systems.
    Linux,
    /// macOS, under its kernel name.
    Darwin,
}

/// CPU architecture component of a release archive name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchVariant {
    /// Intel/AMD 64-bit, the Go naming convention.
    Amd64,
    /// ARM 64-bit.
    Arm64,
}

/// An (os, arch) pair identifying one release archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    /// Operating system.
    pub os: OsVariant,
    /// CPU architecture.
    pub arch: ArchVariant,
}

impl Target {
    /// The only target Scoop installs from: 64-bit Windows.
    pub const WINDOWS_AMD64: Self = Self {
        os: OsVariant::Windows,
        arch: ArchVariant::Amd64,
    };

    /// Substring identifying this target in archive and checksum filenames
    /// (e.g. `windows_amd64`).
    pub fn marker(&self) -> String {
        format!("{}_{}", self.os.as_str(), self.arch.as_str())
    }

    /// Archive extension used for this target's release asset.
    pub fn archive_ext(&self) -> &'static str {
        match self.os {
            OsVariant::Windows => "zip",
            OsVariant::Linux | OsVariant::Darwin => "tar.gz",
        }
    }

    /// Full archive filename for `name` at `version`.
    ///
    /// `version` is inserted verbatim, so Scoop's `$version` placeholder can
    /// be passed to build an autoupdate template.
    pub fn archive_name(&self, name: &str, version: &str) -> String {
        format!("{name}_{version}_{}.{}", self.marker(), self.archive_ext())
    }
}

impl OsVariant {
    /// Lowercase name as used in archive filenames.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::Linux => "linux",
            Self::Darwin => "darwin",
        }
    }
}

impl ArchVariant {
    /// Lowercase name as used in archive filenames.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Amd64 => "amd64",
            Self::Arm64 => "arm64",
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.marker())
    }
}
