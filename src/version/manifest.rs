//! Cargo.toml version lookup and format-preserving update.
//!
//! The version is found through a TOML parse, not a text search, so version
//! strings in dependency tables are never matched.

use std::io::Write;
use std::path::{Path, PathBuf};

use semver::Version;
use toml_edit::{DocumentMut, Item, Value};
use tracing::debug;

use crate::error::VersionError;

use super::bump::parse_version_triple;

/// Which table holds the version declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionLocation {
    /// `[package] version = "..."`
    Package,
    /// `[workspace.package] version = "..."`, used when the package inherits
    /// its version or has none.
    WorkspacePackage,
}

impl std::fmt::Display for VersionLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VersionLocation::Package => write!(f, "[package]"),
            VersionLocation::WorkspacePackage => write!(f, "[workspace.package]"),
        }
    }
}

/// A parsed manifest with its current version.
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    doc: DocumentMut,
    location: VersionLocation,
    current_version: Version,
}

impl Manifest {
    /// Read and parse the manifest at `path`.
    pub fn load(path: &Path) -> Result<Self, VersionError> {
        if !path.exists() {
            return Err(VersionError::ManifestNotFound(path.to_path_buf()));
        }

        let content = read_file(path)?;
        Self::parse(path, &content)
    }

    /// Parse manifest text. `path` is kept for error messages and [`Manifest::save`].
    pub fn parse(path: &Path, content: &str) -> Result<Self, VersionError> {
        let doc = content
            .parse::<DocumentMut>()
            .map_err(|e| VersionError::InvalidManifest {
                path: path.to_path_buf(),
                reason: format!("Invalid TOML: {}", e),
            })?;

        let (location, raw) = locate_version(&doc)
            .ok_or_else(|| VersionError::VersionNotFound(path.to_path_buf()))?;
        let current_version = parse_version_triple(raw)?;

        debug!("Found version {} in {} of {}", current_version, location, path.display());

        Ok(Self {
            path: path.to_path_buf(),
            doc,
            location,
            current_version,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn location(&self) -> VersionLocation {
        self.location
    }

    pub fn current_version(&self) -> &Version {
        &self.current_version
    }

    /// Replace the version value in the document.
    ///
    /// Whitespace and any trailing comment around the value are kept.
    pub fn set_version(&mut self, new_version: &Version) -> Result<(), VersionError> {
        let path = self.path.clone();
        let value = self
            .version_item_mut()
            .and_then(Item::as_value_mut)
            .ok_or(VersionError::VersionNotFound(path))?;

        let decor = value.decor().clone();
        *value = Value::from(new_version.to_string());
        *value.decor_mut() = decor;

        self.current_version = new_version.clone();
        Ok(())
    }

    /// Render the document. Untouched parts round-trip byte for byte.
    pub fn render(&self) -> String {
        self.doc.to_string()
    }

    /// Atomically write the document back to its path.
    pub fn save(&self) -> Result<(), VersionError> {
        write_file_atomic(&self.path, &self.render())
    }

    fn version_item_mut(&mut self) -> Option<&mut Item> {
        match self.location {
            VersionLocation::Package => self.doc.get_mut("package")?.get_mut("version"),
            VersionLocation::WorkspacePackage => self
                .doc
                .get_mut("workspace")?
                .get_mut("package")?
                .get_mut("version"),
        }
    }
}

/// Find the version string, preferring `[package]` over `[workspace.package]`.
fn locate_version(doc: &DocumentMut) -> Option<(VersionLocation, &str)> {
    let package = doc
        .get("package")
        .and_then(|p| p.get("version"))
        .and_then(|v| v.as_str());

    if let Some(raw) = package {
        return Some((VersionLocation::Package, raw));
    }

    doc.get("workspace")
        .and_then(|w| w.get("package"))
        .and_then(|p| p.get("version"))
        .and_then(|v| v.as_str())
        .map(|raw| (VersionLocation::WorkspacePackage, raw))
}

fn read_file(path: &Path) -> Result<String, VersionError> {
    std::fs::read_to_string(path).map_err(|source| VersionError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })
}

/// Write through a temp file in the same directory, then rename over `path`.
fn write_file_atomic(path: &Path, content: &str) -> Result<(), VersionError> {
    let write_failed = |source: std::io::Error| VersionError::WriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(write_failed)?;
    tmp.write_all(content.as_bytes()).map_err(write_failed)?;
    tmp.as_file().sync_all().map_err(write_failed)?;
    tmp.persist(path).map_err(|e| write_failed(e.error))?;

    Ok(())
}
