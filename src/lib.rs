//! realm-tools - project utilities for the solar system data set and release housekeeping.
//!
//! # Overview
//!
//! - [`convert`] exports the solar system spreadsheet to CSV, keeping the first
//!   26 columns and renaming them to canonical snake_case names.
//! - [`version`] bumps the version in `Cargo.toml` and records the change with
//!   a git commit.

pub mod convert;
pub mod error;
pub mod logging;
pub mod version;

// Re-export commonly used types
pub use convert::{ColumnSelection, Dataset, COLUMN_MAPPING, MAX_COLUMNS};
pub use error::{ConvertError, VcsError, VersionError};
pub use version::BumpKind;
