//! Core application logic for SMAP Finder
//!
//! This module contains the main application components: the data models,
//! date normalization, listing parsing, remote path construction, the FTP
//! listing transport, and the catalog finder that ties them together.
//!
//! # Examples
//!
//! ```rust,no_run
//! use smap_finder::app::{dates, CatalogFinder, FtpListingSource};
//! use smap_finder::config::CatalogConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let source = FtpListingSource::new(CatalogConfig::default());
//! let finder = CatalogFinder::new(source);
//!
//! let dates = dates::normalize_dates(["2015-03-31", "2015-04-01"])?;
//! let table = finder.find("SPL4SMGP", 2, &dates).await?;
//!
//! for row in table.rows() {
//!     println!("{} {} {}", row.name, row.date, row.ftp_dir);
//! }
//! # Ok(())
//! # }
//! ```

pub mod dates;
pub mod finder;
pub mod listing;
pub mod models;
pub mod paths;
pub mod transport;

// Re-export main public API
pub use finder::{CatalogFinder, FinderConfig};
pub use models::{CanonicalDate, CatalogRow, CatalogTable};
pub use paths::{dataset_version_folder, RemotePath};
pub use transport::{FtpListingSource, ListingSource};
