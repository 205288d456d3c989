//! Data models for SMAP Finder
//!
//! Core value types of the find pathway: canonical calendar dates, catalog
//! rows, and the ordered result table returned to callers.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;

use crate::constants::dates;
use crate::errors::FindError;

/// A calendar date with no time component
///
/// Always representable in the two textual forms the catalog protocol
/// needs: `YYYY-MM-DD` for comparison and display, and `YYYY.MM.DD` for
/// remote date-folder names. Created by [`crate::app::dates::normalize_dates`]
/// (or directly from a [`NaiveDate`]) and immutable thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CanonicalDate(NaiveDate);

impl CanonicalDate {
    /// The `YYYY-MM-DD` form used for storage and display
    pub fn iso(&self) -> String {
        self.0.format(dates::INPUT_FORMAT).to_string()
    }

    /// The `YYYY.MM.DD` form used as a remote path segment
    pub fn folder_name(&self) -> String {
        self.0.format(dates::FOLDER_FORMAT).to_string()
    }

    /// The underlying calendar date
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for CanonicalDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl FromStr for CanonicalDate {
    type Err = FindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), dates::INPUT_FORMAT)
            .map(Self)
            .map_err(|_| FindError::DateFormat {
                input: s.to_string(),
            })
    }
}

impl fmt::Display for CanonicalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.iso())
    }
}

/// One discovered file in the catalog
///
/// `name` is the logical product name (filename with the extension
/// stripped), and `ftp_dir` is the dataset+version path fragment relative
/// to the catalog root (e.g. `"SPL4SMGP.002/"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogRow {
    pub name: String,
    pub date: CanonicalDate,
    pub ftp_dir: String,
}

/// Ordered table of discovered files, one per logical product and date
///
/// Rows are grouped by date in the order dates were requested, and within
/// a date in listing order after deduplication.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CatalogTable {
    rows: Vec<CatalogRow>,
}

impl CatalogTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single row
    pub fn push(&mut self, row: CatalogRow) {
        self.rows.push(row);
    }

    /// Append all rows of another table, preserving their order
    pub fn append(&mut self, mut other: CatalogTable) {
        self.rows.append(&mut other.rows);
    }

    /// All rows in output order
    pub fn rows(&self) -> &[CatalogRow] {
        &self.rows
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the table as a JSON array of row objects
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Render the table as CSV with a header line
    pub fn to_csv(&self) -> String {
        let mut out = String::from("name,date,ftp_dir\n");
        for row in &self.rows {
            out.push_str(&format!("{},{},{}\n", row.name, row.date, row.ftp_dir));
        }
        out
    }
}

impl fmt::Display for CatalogTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name_width = self
            .rows
            .iter()
            .map(|r| r.name.len())
            .chain(std::iter::once("name".len()))
            .max()
            .unwrap_or(4);
        writeln!(f, "{:<name_width$}  {:<10}  {}", "name", "date", "ftp_dir")?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<name_width$}  {:<10}  {}",
                row.name,
                row.date.iso(),
                row.ftp_dir
            )?;
        }
        Ok(())
    }
}

impl IntoIterator for CatalogTable {
    type Item = CatalogRow;
    type IntoIter = std::vec::IntoIter<CatalogRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl FromIterator<CatalogRow> for CatalogTable {
    fn from_iter<T: IntoIterator<Item = CatalogRow>>(iter: T) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> CanonicalDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_canonical_date_two_forms() {
        let d = date("2015-03-31");
        assert_eq!(d.iso(), "2015-03-31");
        assert_eq!(d.folder_name(), "2015.03.31");
    }

    #[test]
    fn test_canonical_date_rejects_bad_input() {
        let result: Result<CanonicalDate, _> = "2015.03.31".parse();
        match result.unwrap_err() {
            FindError::DateFormat { input } => assert_eq!(input, "2015.03.31"),
            other => panic!("Expected DateFormat, got {:?}", other),
        }

        // Not a real calendar date
        assert!("2015-02-30".parse::<CanonicalDate>().is_err());
    }

    #[test]
    fn test_canonical_date_serializes_as_iso() {
        let d = date("2015-04-01");
        assert_eq!(serde_json::to_string(&d).unwrap(), "\"2015-04-01\"");
    }

    #[test]
    fn test_table_csv_and_display() {
        let mut table = CatalogTable::new();
        table.push(CatalogRow {
            name: "SMAP_L4_SM_gph_20150331T013000_Vv2030_001".to_string(),
            date: date("2015-03-31"),
            ftp_dir: "SPL4SMGP.002/".to_string(),
        });

        let csv = table.to_csv();
        assert!(csv.starts_with("name,date,ftp_dir\n"));
        assert!(csv.contains("SPL4SMGP.002/"));

        let rendered = table.to_string();
        assert!(rendered.contains("2015-03-31"));
    }

    #[test]
    fn test_table_append_preserves_order() {
        let mut first: CatalogTable = ["a", "b"]
            .into_iter()
            .map(|n| CatalogRow {
                name: n.to_string(),
                date: date("2015-03-31"),
                ftp_dir: "SPL4SMGP.002/".to_string(),
            })
            .collect();
        let second: CatalogTable = std::iter::once(CatalogRow {
            name: "c".to_string(),
            date: date("2015-04-01"),
            ftp_dir: "SPL4SMGP.002/".to_string(),
        })
        .collect();

        first.append(second);
        let names: Vec<&str> = first.rows().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }
}
