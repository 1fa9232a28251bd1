//! In-memory table: one header row plus records of rendered cell text.

use std::collections::HashSet;

use crate::error::ConvertError;

use super::mapping::canonical_name;

/// Outcome of trimming a dataset to the exported column range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnSelection {
    /// The sheet had exactly the maximum number of columns.
    Full,
    /// Columns past the maximum were dropped.
    Truncated { dropped: usize },
    /// The sheet is narrower than the maximum; every column is kept.
    Short { available: usize },
}

/// A rectangular table. Every row has exactly `headers.len()` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Dataset {
    /// Build a dataset from a raw header row and records.
    ///
    /// Headers are normalized the way spreadsheet readers usually present them:
    /// a blank header at zero-based position `i` becomes `Unnamed: i`, and a
    /// repeated header gets a `.N` suffix (`A`, `A.1`, `A.2`).
    pub fn new(raw_headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, ConvertError> {
        let headers = normalize_headers(raw_headers);

        for (index, row) in rows.iter().enumerate() {
            if row.len() != headers.len() {
                return Err(ConvertError::RaggedRow {
                    row: index + 1,
                    found: row.len(),
                    expected: headers.len(),
                });
            }
        }

        Ok(Self { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// `(rows, columns)`, excluding the header row.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.headers.len())
    }

    /// Keep only the first `max` columns.
    pub fn select_columns(&mut self, max: usize) -> ColumnSelection {
        let width = self.headers.len();

        if width < max {
            return ColumnSelection::Short { available: width };
        }
        if width == max {
            return ColumnSelection::Full;
        }

        self.headers.truncate(max);
        for row in &mut self.rows {
            row.truncate(max);
        }

        ColumnSelection::Truncated {
            dropped: width - max,
        }
    }

    /// Replace headers with their canonical names.
    ///
    /// Returns the headers that had no mapping, in column order. Those keep
    /// their original text.
    pub fn rename_headers(&mut self) -> Vec<String> {
        let mut unmapped = Vec::new();

        for header in &mut self.headers {
            match canonical_name(header) {
                Some(name) => *header = name.to_string(),
                None => unmapped.push(header.clone()),
            }
        }

        unmapped
    }
}

fn normalize_headers(raw: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(raw.len());
    let mut headers = Vec::with_capacity(raw.len());

    for (position, header) in raw.into_iter().enumerate() {
        let base = if header.is_empty() {
            format!("Unnamed: {}", position)
        } else {
            header
        };

        let mut candidate = base.clone();
        let mut suffix = 0;
        while seen.contains(&candidate) {
            suffix += 1;
            candidate = format!("{}.{}", base, suffix);
        }

        seen.insert(candidate.clone());
        headers.push(candidate);
    }

    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn wide_dataset(width: usize, height: usize) -> Dataset {
        let headers = (0..width).map(|i| format!("col{}", i)).collect();
        let rows = (0..height)
            .map(|r| (0..width).map(|c| format!("{}:{}", r, c)).collect())
            .collect();
        Dataset::new(headers, rows).unwrap()
    }

    #[test]
    fn test_blank_headers_become_unnamed() {
        let ds = Dataset::new(strings(&["Body", "", "Type", ""]), vec![]).unwrap();
        assert_eq!(ds.headers(), &["Body", "Unnamed: 1", "Type", "Unnamed: 3"]);
    }

    #[test]
    fn test_whitespace_header_is_kept_verbatim() {
        let mut ds = Dataset::new(strings(&["Body", "  ", " M"]), vec![]).unwrap();
        assert_eq!(ds.headers(), &["Body", "  ", " M"]);
        assert_eq!(ds.rename_headers(), vec!["  ".to_string(), " M".to_string()]);
    }

    #[test]
    fn test_duplicate_headers_are_suffixed() {
        let ds = Dataset::new(strings(&["M", "M", "D", "M"]), vec![]).unwrap();
        assert_eq!(ds.headers(), &["M", "M.1", "D", "M.2"]);
    }

    #[test]
    fn test_duplicate_suffix_skips_existing_name() {
        let ds = Dataset::new(strings(&["A", "A.1", "A"]), vec![]).unwrap();
        assert_eq!(ds.headers(), &["A", "A.1", "A.2"]);
    }

    #[test]
    fn test_ragged_row_rejected() {
        let result = Dataset::new(strings(&["A", "B"]), vec![strings(&["1"])]);
        assert!(matches!(
            result,
            Err(ConvertError::RaggedRow {
                row: 1,
                found: 1,
                expected: 2
            })
        ));
    }

    #[test]
    fn test_select_truncates_wide_sheet() {
        let mut ds = wide_dataset(30, 3);
        let selection = ds.select_columns(26);

        assert_eq!(selection, ColumnSelection::Truncated { dropped: 4 });
        assert_eq!(ds.shape(), (3, 26));
        assert!(ds.rows().iter().all(|r| r.len() == 26));
        assert_eq!(ds.rows()[2][25], "2:25");
    }

    #[test]
    fn test_select_keeps_narrow_sheet() {
        let mut ds = wide_dataset(5, 2);
        let selection = ds.select_columns(26);

        assert_eq!(selection, ColumnSelection::Short { available: 5 });
        assert_eq!(ds.shape(), (2, 5));
    }

    #[test]
    fn test_select_exact_width_is_full() {
        let mut ds = wide_dataset(26, 1);
        assert_eq!(ds.select_columns(26), ColumnSelection::Full);
        assert_eq!(ds.shape(), (1, 26));
    }

    #[test]
    fn test_rename_reports_unmapped() {
        let mut ds = Dataset::new(
            strings(&["Body", "Moons", "SMA", ""]),
            vec![strings(&["Earth", "1", "1.0", "x"])],
        )
        .unwrap();

        let unmapped = ds.rename_headers();

        assert_eq!(
            ds.headers(),
            &["body", "Moons", "semi_major_axis", "Unnamed: 3"]
        );
        assert_eq!(unmapped, strings(&["Moons", "Unnamed: 3"]));
        assert_eq!(ds.rows()[0], strings(&["Earth", "1", "1.0", "x"]));
    }
}
