//! The Scoop manifest record and its JSON encoding.

use serde::{Deserialize, Serialize};
use serde_json::ser::{Formatter, PrettyFormatter};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// A Scoop application manifest.
///
/// Field order is the serialization order and must not change: downstream
/// tooling diffs the generated file against the bucket copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Release version without the tag prefix (e.g. `1.2.0`).
    pub version: String,
    /// One-line description shown by `scoop info`.
    pub description: String,
    /// Project homepage.
    pub homepage: String,
    /// SPDX license identifier.
    pub license: String,
    /// Download URL of the Windows archive.
    pub url: String,
    /// Archive checksum in `sha256:<hex>` notation.
    pub hash: String,
    /// Executable shimmed onto the user's PATH.
    pub bin: String,
    /// How Scoop discovers new versions.
    pub checkver: CheckVer,
    /// How Scoop rewrites the manifest for a new version.
    pub autoupdate: AutoUpdate,
}

/// Version discovery strategy: poll the GitHub releases of a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckVer {
    /// Repository URL whose latest release tag is the current version.
    pub github: String,
}

/// Autoupdate strategy: a download URL template using Scoop's `$version`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoUpdate {
    /// URL template; `$version` is expanded by Scoop, not by us.
    pub url: String,
}

impl Manifest {
    /// Serialize as pretty JSON with 4-space indentation and a trailing newline.
    ///
    /// Non-ASCII characters are written as `\uXXXX` escapes, so the output
    /// is identical to Python's `json.dump(..., indent=4)` which Scoop
    /// buckets are commonly maintained with.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        let mut buf = Vec::new();
        let formatter = AsciiFormatter(PrettyFormatter::with_indent(b"    "));
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        buf.push(b'\n');

        // ASCII only
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Write the manifest to `path`, replacing any existing file.
    ///
    /// Missing parent directories are created first.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if a directory cannot be created or the file
    /// cannot be written.
    pub fn write_to(&self, path: &Path) -> std::io::Result<()> {
        let json = self.to_pretty_json()?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, json)
    }
}

/// Pretty printer that escapes everything outside printable ASCII.
///
/// Characters above U+FFFF are written as UTF-16 surrogate pairs.
struct AsciiFormatter<'a>(PrettyFormatter<'a>);

impl Formatter for AsciiFormatter<'_> {
    fn write_string_fragment<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut start = 0;
        for (idx, c) in fragment.char_indices() {
            if (' '..='~').contains(&c) {
                continue;
            }
            writer.write_all(&fragment.as_bytes()[start..idx])?;
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = idx + c.len_utf8();
        }
        writer.write_all(&fragment.as_bytes()[start..])
    }

    fn begin_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_array(writer)
    }

    fn end_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.0.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_object(writer)
    }

    fn end_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.0.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_object_value(writer)
    }
}
