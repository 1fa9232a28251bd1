//! Cargo.toml version bumping.

pub mod bump;
pub mod executor;
pub mod manifest;

use std::path::Path;

use semver::Version;

use crate::error::VersionError;

pub use bump::{apply_bump, parse_version_triple, BumpKind};
pub use executor::{commit_message, record_bump, GitCli, VcsExecutor};
pub use manifest::{Manifest, VersionLocation};

/// Default manifest path, relative to the current directory.
pub const DEFAULT_MANIFEST: &str = "Cargo.toml";

/// Read the current version from a manifest.
pub fn current_version(manifest_path: &Path) -> Result<Version, VersionError> {
    Manifest::load(manifest_path).map(|m| m.current_version().clone())
}

/// Bump the manifest version, write it back and commit the change.
///
/// Commit failures do not fail the bump. Prints and returns the new version.
pub fn update_version<E: VcsExecutor + ?Sized>(
    manifest_path: &Path,
    kind: BumpKind,
    executor: &E,
) -> Result<Version, VersionError> {
    let mut manifest = Manifest::load(manifest_path)?;
    let new_version = apply_bump(manifest.current_version(), kind)?;

    manifest.set_version(&new_version)?;
    manifest.save()?;

    record_bump(executor, manifest.path(), &new_version);

    println!("Version updated to {}", new_version);
    Ok(new_version)
}
