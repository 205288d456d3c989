//! SMAP Finder Library
//!
//! A Rust library for discovering SMAP satellite data files on the NSIDC
//! archive. Given a dataset identifier, a version, and one or more dates,
//! it reports which files exist in the remote catalog without downloading
//! any payload data.

pub mod app;
pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;

// Re-export commonly used types for convenience
pub use errors::{AppError, Result};

#[cfg(test)]
mod tests {
    use super::*;
    use constants::*;

    #[test]
    fn test_constants_accessible() {
        assert_eq!(FTP_PORT, 21);
        assert_eq!(CATALOG_ROOT, "/SAN/SMAP/");
        assert_eq!(EMPTY_DIR_SENTINEL, "total 0");
    }

    #[test]
    fn test_error_types() {
        let find_error = errors::FindError::UnknownDataset {
            id: "SPL4SMGP".to_string(),
        };
        let app_error = AppError::Find(find_error);

        assert_eq!(app_error.category(), "find");
        assert!(!app_error.is_usage_error());
    }
}
