//! Directory-listing parsing
//!
//! Turns raw long-format listing text (first line a summary/total line,
//! subsequent lines whitespace-delimited columns) into entry names. Two
//! deliberately distinct strategies are kept side by side because they
//! encode different stability assumptions:
//!
//! - [`folder_names`] takes the fixed 9th column, since the top-level
//!   catalog listing format is stable;
//! - [`file_names`] locates the name column dynamically by content, since
//!   date-folder listings vary in column count depending on how the
//!   permission string is rendered.

use crate::constants::listing;
use crate::errors::{FindError, FindResult};

/// Whether the listing is the explicit empty-directory sentinel
///
/// True iff the only significant content is the literal line `total 0`,
/// which means the remote folder exists but holds nothing. Callers must
/// surface this as an error, not as an empty success.
pub fn is_empty_directory(lines: &[String]) -> bool {
    let mut significant = lines.iter().map(|l| l.trim()).filter(|l| !l.is_empty());
    matches!(
        (significant.next(), significant.next()),
        (Some(listing::EMPTY_DIR_SENTINEL), None)
    )
}

/// Extract folder names from a stable catalog listing
///
/// Skips the leading summary line and takes the fixed 9th
/// whitespace-delimited column of every remaining line.
///
/// # Errors
///
/// Returns [`FindError::ListingParse`] when a line has too few columns.
pub fn folder_names(path: &str, lines: &[String]) -> FindResult<Vec<String>> {
    lines
        .iter()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            line.split_whitespace()
                .nth(listing::FOLDER_NAME_COLUMN)
                .map(str::to_string)
                .ok_or_else(|| FindError::ListingParse {
                    path: path.to_string(),
                    reason: format!(
                        "line '{}' has fewer than {} columns",
                        line.trim(),
                        listing::FOLDER_NAME_COLUMN + 1
                    ),
                })
        })
        .collect()
}

/// Extract file names from a date-folder listing
///
/// The name column is located by finding, in the first data row, the column
/// whose value starts with `prefix`; that index is then applied to every
/// row. A listing with no data rows yields an empty result.
///
/// # Errors
///
/// Returns [`FindError::ListingParse`] when data rows are present but no
/// column matches the prefix, or when a later row lacks the located column.
pub fn file_names(path: &str, lines: &[String], prefix: &str) -> FindResult<Vec<String>> {
    let rows: Vec<Vec<&str>> = lines
        .iter()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.split_whitespace().collect())
        .collect();

    let Some(first) = rows.first() else {
        return Ok(Vec::new());
    };

    let column = first
        .iter()
        .position(|value| value.starts_with(prefix))
        .ok_or_else(|| FindError::ListingParse {
            path: path.to_string(),
            reason: format!("no column starting with '{}' in first row", prefix),
        })?;

    rows.iter()
        .map(|row| {
            row.get(column)
                .map(|name| name.to_string())
                .ok_or_else(|| FindError::ListingParse {
                    path: path.to_string(),
                    reason: format!("row has no column {}", column + 1),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_directory_sentinel() {
        assert!(is_empty_directory(&lines(&["total 0"])));
        assert!(is_empty_directory(&lines(&["total 0", "", "  "])));

        // A populated listing is not the sentinel
        assert!(!is_empty_directory(&lines(&[
            "total 8",
            "drwxr-xr-x 2 ftp ftp 4096 Mar 31 2015 SPL4SMGP.002",
        ])));
        assert!(!is_empty_directory(&lines(&[])));
    }

    #[test]
    fn test_folder_names_fixed_column() {
        let listing = lines(&[
            "total 16",
            "drwxr-xr-x 2 ftp ftp 4096 Mar 31 2015 SPL4SMGP.002",
            "drwxr-xr-x 2 ftp ftp 4096 Apr 01 2015 SPL3SMP.004",
        ]);
        let names = folder_names("/SAN/SMAP/", &listing).unwrap();
        assert_eq!(names, ["SPL4SMGP.002", "SPL3SMP.004"]);
    }

    #[test]
    fn test_folder_names_rejects_short_line() {
        let listing = lines(&["total 8", "drwxr-xr-x 2 ftp ftp"]);
        match folder_names("/SAN/SMAP/", &listing).unwrap_err() {
            FindError::ListingParse { path, .. } => assert_eq!(path, "/SAN/SMAP/"),
            other => panic!("Expected ListingParse, got {:?}", other),
        }
    }

    #[test]
    fn test_file_names_dynamic_column() {
        // Nine columns: name in the usual 9th position
        let listing = lines(&[
            "total 24",
            "-rw-r--r-- 1 ftp ftp 123 Mar 31 2015 SMAP_L4_SM_gph_20150331T013000_Vv2030_001.h5",
            "-rw-r--r-- 1 ftp ftp 456 Mar 31 2015 SMAP_L4_SM_gph_20150331T043000_Vv2030_001.h5",
        ]);
        let names = file_names("/p/", &listing, "SMAP").unwrap();
        assert_eq!(names.len(), 2);
        assert!(names[0].starts_with("SMAP_L4_SM_gph_20150331T013000"));
    }

    #[test]
    fn test_file_names_shifted_column() {
        // Permission string rendered with an extra group column shifts the
        // name to the 10th position; the prefix lookup still finds it.
        let listing = lines(&[
            "total 24",
            "-rw-r--r--+ 1 ftp ftp staff 123 Mar 31 2015 SMAP_L4_SM_gph_20150331T013000_Vv2030_001.h5",
            "-rw-r--r--+ 1 ftp ftp staff 456 Mar 31 2015 SMAP_L4_SM_gph_20150331T043000_Vv2030_001.h5",
        ]);
        let names = file_names("/p/", &listing, "SMAP").unwrap();
        assert_eq!(names.len(), 2);
        assert!(names[1].contains("20150331T043000"));
    }

    #[test]
    fn test_file_names_no_matching_column() {
        let listing = lines(&[
            "total 8",
            "-rw-r--r-- 1 ftp ftp 123 Mar 31 2015 readme.txt",
        ]);
        match file_names("/p/", &listing, "SMAP").unwrap_err() {
            FindError::ListingParse { reason, .. } => assert!(reason.contains("SMAP")),
            other => panic!("Expected ListingParse, got {:?}", other),
        }
    }

    #[test]
    fn test_file_names_summary_only_listing() {
        // Summary line but no data rows: an empty result, not an error
        let names = file_names("/p/", &lines(&["total 4"]), "SMAP").unwrap();
        assert!(names.is_empty());
    }
}
