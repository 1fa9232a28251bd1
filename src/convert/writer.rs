//! CSV serialization of a [`Dataset`].

use std::io::Write;
use std::path::Path;

use crate::error::ConvertError;

use super::dataset::Dataset;

/// Write the dataset to `path` as CSV: a header row, then one line per record.
///
/// Existing files are overwritten. On failure whatever was already flushed
/// stays on disk.
pub fn write_csv(path: &Path, dataset: &Dataset) -> Result<(), ConvertError> {
    let writer = csv::Writer::from_path(path)?;
    write_records(writer, dataset)
}

/// Write the dataset as CSV into any writer.
pub fn write_csv_to<W: Write>(out: W, dataset: &Dataset) -> Result<(), ConvertError> {
    write_records(csv::Writer::from_writer(out), dataset)
}

fn write_records<W: Write>(mut writer: csv::Writer<W>, dataset: &Dataset) -> Result<(), ConvertError> {
    writer.write_record(dataset.headers())?;
    for row in dataset.rows() {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}
