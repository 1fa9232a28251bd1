//! Spreadsheet loading via calamine.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader};
use tracing::debug;

use crate::error::ConvertError;

use super::dataset::Dataset;

/// Load a worksheet into a [`Dataset`].
///
/// The first row of the used range is the header row. `sheet` selects a
/// worksheet by name; `None` reads the first one.
pub fn read_spreadsheet(path: &Path, sheet: Option<&str>) -> Result<Dataset, ConvertError> {
    if !path.exists() {
        return Err(ConvertError::InputNotFound(path.to_path_buf()));
    }

    let mut workbook =
        open_workbook_auto(path).map_err(|e| ConvertError::Workbook(e.to_string()))?;

    let range = match sheet {
        Some(name) => {
            if !workbook.sheet_names().iter().any(|s| s == name) {
                return Err(ConvertError::SheetNotFound(name.to_string()));
            }
            workbook
                .worksheet_range(name)
                .map_err(|e| ConvertError::Workbook(e.to_string()))?
        }
        None => workbook
            .worksheet_range_at(0)
            .ok_or(ConvertError::NoWorksheets)?
            .map_err(|e| ConvertError::Workbook(e.to_string()))?,
    };

    debug!(
        "Loaded range {}x{} from {}",
        range.height(),
        range.width(),
        path.display()
    );

    dataset_from_range(&range)
}

/// Build a dataset from a used range.
///
/// The used range starts at its first non-empty column, but column positions
/// count from column A: empty leading columns are kept as empty cells.
fn dataset_from_range(range: &Range<Data>) -> Result<Dataset, ConvertError> {
    let leading_cols = range.start().map_or(0, |(_, col)| col as usize);
    let render_row = |row: &[Data]| -> Vec<String> {
        std::iter::repeat_n(String::new(), leading_cols)
            .chain(row.iter().map(render_cell))
            .collect()
    };

    let mut rows = range.rows();
    let headers = render_row(rows.next().ok_or(ConvertError::EmptySheet)?);
    let records = rows.map(render_row).collect();

    Dataset::new(headers, records)
}

/// Render a cell as CSV text without reinterpreting its value.
pub fn render_cell(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => render_float(*f),
        Data::Bool(true) => "True".to_string(),
        Data::Bool(false) => "False".to_string(),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(ts) if !dt.is_duration() => ts.format("%Y-%m-%d %H:%M:%S").to_string(),
            _ => render_float(dt.as_f64()),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(e) => e.to_string(),
    }
}

/// Shortest round-trip form; whole values drop the fraction. Magnitudes of
/// at least 1e16 or below 1e-4 use scientific notation (`5.972e+24`, `1e-05`).
fn render_float(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        render_scientific(value)
    } else if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

fn render_scientific(value: f64) -> String {
    // `{:e}` yields the shortest mantissa with a bare exponent: `5.972e24`
    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{}e{}{:02}", mantissa, sign, exp.unsigned_abs())
            }
            Err(_) => formatted,
        },
        None => formatted,
    }
}
