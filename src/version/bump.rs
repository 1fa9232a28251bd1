//! Bump kinds and semver arithmetic.

use std::fmt;
use std::str::FromStr;

use semver::Version;

use crate::error::VersionError;

/// Which version component to increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpKind {
    Major,
    Minor,
    Patch,
    /// Patch bump whose failures are reported and turned into exit code 1.
    Auto,
}

impl BumpKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BumpKind::Major => "major",
            BumpKind::Minor => "minor",
            BumpKind::Patch => "patch",
            BumpKind::Auto => "auto",
        }
    }
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BumpKind {
    type Err = VersionError;

    /// Case-insensitive: `"MINOR"` parses as [`BumpKind::Minor`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "major" => Ok(BumpKind::Major),
            "minor" => Ok(BumpKind::Minor),
            "patch" => Ok(BumpKind::Patch),
            "auto" => Ok(BumpKind::Auto),
            _ => Err(VersionError::InvalidBumpKind(s.to_string())),
        }
    }
}

/// Compute the next version. The input is never modified.
///
/// - major: `X.Y.Z` -> `(X+1).0.0`
/// - minor: `X.Y.Z` -> `X.(Y+1).0`
/// - patch and auto: `X.Y.Z` -> `X.Y.(Z+1)`
///
/// Fails with [`VersionError::Overflow`] when the bumped component is already `u64::MAX`.
pub fn apply_bump(current: &Version, kind: BumpKind) -> Result<Version, VersionError> {
    let overflow = || VersionError::Overflow {
        version: current.to_string(),
        kind: kind.to_string(),
    };

    let next = match kind {
        BumpKind::Major => Version::new(current.major.checked_add(1).ok_or_else(overflow)?, 0, 0),
        BumpKind::Minor => Version::new(
            current.major,
            current.minor.checked_add(1).ok_or_else(overflow)?,
            0,
        ),
        BumpKind::Patch | BumpKind::Auto => Version::new(
            current.major,
            current.minor,
            current.patch.checked_add(1).ok_or_else(overflow)?,
        ),
    };

    Ok(next)
}

/// Parse a plain `major.minor.patch` string.
///
/// Pre-release and build suffixes are rejected.
pub fn parse_version_triple(s: &str) -> Result<Version, VersionError> {
    let version = Version::parse(s).map_err(|e| VersionError::ParseFailed(s.to_string(), e))?;

    if !version.pre.is_empty() || !version.build.is_empty() {
        return Err(VersionError::NotATriple(s.to_string()));
    }

    Ok(version)
}
