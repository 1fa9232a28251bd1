//! Error types for realm-tools modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from the spreadsheet to CSV conversion.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Input file not found at {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Failed to open workbook: {0}")]
    Workbook(String),

    #[error("Worksheet '{0}' not found in workbook")]
    SheetNotFound(String),

    #[error("Workbook contains no worksheets")]
    NoWorksheets,

    #[error("Worksheet is empty: no header row")]
    EmptySheet,

    #[error("Row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConvertError {
    /// Whether this error happened while processing, as opposed to locating the input.
    pub fn is_processing_error(&self) -> bool {
        !matches!(self, ConvertError::InputNotFound(_))
    }
}

/// Errors from version operations.
#[derive(Error, Debug)]
pub enum VersionError {
    #[error("Cargo.toml not found")]
    ManifestNotFound(PathBuf),

    #[error("Version not found in Cargo.toml")]
    VersionNotFound(PathBuf),

    #[error("Invalid version type '{0}'. Use 'major', 'minor', or 'patch'")]
    InvalidBumpKind(String),

    #[error("Failed to parse version '{0}': {1}")]
    ParseFailed(String, #[source] semver::Error),

    #[error("Version '{0}' is not a plain major.minor.patch")]
    NotATriple(String),

    #[error("Cannot apply {kind} bump to {version}: component overflows")]
    Overflow { version: String, kind: String },

    #[error("Invalid manifest {}: {reason}", path.display())]
    InvalidManifest { path: PathBuf, reason: String },

    #[error("Failed to read {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from version-control commands.
///
/// These are reported but never abort a version bump.
#[derive(Error, Debug)]
pub enum VcsError {
    #[error("git executable not found in PATH")]
    NotInstalled,

    #[error("Failed to run git {operation}: {source}")]
    SpawnFailed {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("git {operation} failed: {stderr}")]
    CommandFailed { operation: String, stderr: String },
}
