//! Spreadsheet to CSV export for the solar system data set.
//!
//! Reads the first worksheet, keeps columns A-Z, renames headers through
//! [`COLUMN_MAPPING`] and writes a CSV file with a header row.

pub mod dataset;
pub mod mapping;
pub mod reader;
pub mod writer;

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ConvertError;

pub use dataset::{ColumnSelection, Dataset};
pub use mapping::{canonical_name, COLUMN_MAPPING, MAX_COLUMNS};
pub use reader::read_spreadsheet;
pub use writer::write_csv;

/// Spreadsheet location relative to the project root.
pub const DEFAULT_INPUT: &str = "data/solar_system_data 1.xlsx";

/// CSV location relative to the project root.
pub const DEFAULT_OUTPUT: &str = "data/solar_system_data.csv";

/// Configuration for one conversion run, derived from CLI flags.
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub sheet: Option<String>,
}

impl ConvertConfig {
    /// Default input and output paths under `root`.
    pub fn for_root(root: &Path) -> Self {
        Self {
            input: root.join(DEFAULT_INPUT),
            output: root.join(DEFAULT_OUTPUT),
            sheet: None,
        }
    }
}

/// Summary of a finished conversion.
#[derive(Debug, Clone)]
pub struct ConversionReport {
    pub rows: usize,
    pub columns: Vec<String>,
    pub selection: ColumnSelection,
    pub unmapped: Vec<String>,
}

/// Run the conversion, printing progress to stdout.
pub fn run_conversion(config: &ConvertConfig) -> Result<ConversionReport, ConvertError> {
    if !config.input.exists() {
        return Err(ConvertError::InputNotFound(config.input.clone()));
    }

    println!("Loading Excel file: {}", config.input.display());
    let mut dataset = read_spreadsheet(&config.input, config.sheet.as_deref())?;

    let (rows, cols) = dataset.shape();
    println!("Original columns: {}", format_list(dataset.headers()));
    println!("Data shape: ({}, {})", rows, cols);

    let selection = dataset.select_columns(MAX_COLUMNS);
    match selection {
        ColumnSelection::Short { available } => println!(
            "Warning: File has only {} columns, using all available columns",
            available
        ),
        ColumnSelection::Truncated { dropped } => {
            debug!("Dropped {} columns past column Z", dropped)
        }
        ColumnSelection::Full => {}
    }
    println!("Selected columns: {}", format_list(dataset.headers()));

    let unmapped = dataset.rename_headers();
    for header in &unmapped {
        println!(
            "Warning: No mapping found for column '{}', keeping original name",
            header
        );
    }

    println!("Exporting to CSV: {}", config.output.display());
    write_csv(&config.output, &dataset)?;

    let (rows, cols) = dataset.shape();
    println!("Successfully converted {} rows and {} columns", rows, cols);
    println!("Output file: {}", config.output.display());
    println!("Final columns: {}", format_list(dataset.headers()));

    Ok(ConversionReport {
        rows,
        columns: dataset.headers().to_vec(),
        selection,
        unmapped,
    })
}

/// Format headers as `['a', 'b']`.
fn format_list(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|item| format!("'{}'", item)).collect();
    format!("[{}]", quoted.join(", "))
}
