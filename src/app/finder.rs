//! Catalog discovery: the find pathway
//!
//! [`CatalogFinder`] runs, for each requested date, a three-stage
//! validation chain (dataset exists, version exists, date exists) followed
//! by file discovery inside the validated date folder, then aggregates one
//! [`CatalogRow`] per logical product into the final [`CatalogTable`].
//!
//! The first failure aborts the whole multi-date call; no partial table is
//! ever returned.

use std::collections::HashSet;

use futures::future::try_join_all;
use tracing::{debug, info};

use crate::app::listing;
use crate::app::models::{CanonicalDate, CatalogRow, CatalogTable};
use crate::app::paths::{dataset_version_folder, RemotePath};
use crate::app::transport::ListingSource;
use crate::constants::{ftp, listing as listing_constants};
use crate::errors::{FindError, FindResult};

/// Behavioural options for [`CatalogFinder`]
#[derive(Debug, Clone)]
pub struct FinderConfig {
    /// Base path of the remote catalog
    pub catalog_root: String,
    /// Validate dataset and version once per call instead of once per date.
    /// The default re-validates for every date, matching the remote catalog
    /// exactly as it is at each step.
    pub validate_once: bool,
    /// Process dates concurrently. Output order still follows the requested
    /// date order, and the first error fails the whole call.
    pub concurrent: bool,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            catalog_root: ftp::CATALOG_ROOT.to_string(),
            validate_once: false,
            concurrent: false,
        }
    }
}

/// Discovery client for a date-partitioned remote catalog
#[derive(Debug)]
pub struct CatalogFinder<S> {
    source: S,
    config: FinderConfig,
}

impl<S: ListingSource> CatalogFinder<S> {
    /// Create a finder over `source` with default options
    pub fn new(source: S) -> Self {
        Self::with_config(source, FinderConfig::default())
    }

    /// Create a finder over `source` with explicit options
    pub fn with_config(source: S, config: FinderConfig) -> Self {
        Self { source, config }
    }

    /// Determine which files exist for `id`/`version` on each of `dates`
    ///
    /// Rows are grouped by date in the order dates were requested, and
    /// within a date in listing order after deduplication.
    ///
    /// # Errors
    ///
    /// Returns the first [`FindError`] encountered; the whole call fails
    /// and no partial table is returned.
    pub async fn find(
        &self,
        id: &str,
        version: u32,
        dates: &[CanonicalDate],
    ) -> FindResult<CatalogTable> {
        info!(
            "Searching catalog for {} v{:03} across {} date(s)",
            id,
            version,
            dates.len()
        );

        if self.config.validate_once && !dates.is_empty() {
            self.validate_dataset(id).await?;
            self.validate_version(id, version).await?;
        }

        let table = if self.config.concurrent {
            let per_date = try_join_all(
                dates
                    .iter()
                    .map(|date| self.find_one_date(id, version, *date)),
            )
            .await?;
            // try_join_all yields results in input order, so assembly by
            // index keeps the requested date grouping.
            per_date.into_iter().flatten().collect()
        } else {
            let mut table = CatalogTable::new();
            for date in dates {
                table.append(self.find_one_date(id, version, *date).await?);
            }
            table
        };

        info!("Found {} file(s) for {}", table.len(), id);
        Ok(table)
    }

    /// Validate and discover a single date, returning its rows
    async fn find_one_date(
        &self,
        id: &str,
        version: u32,
        date: CanonicalDate,
    ) -> FindResult<CatalogTable> {
        let path = RemotePath::build(&self.config.catalog_root, id, version, date);

        if !self.config.validate_once {
            self.validate_dataset(id).await?;
            self.validate_version(id, version).await?;
        }
        self.validate_date(&path, id, version, date).await?;

        let names = self.discover_files(&path).await?;
        debug!("{} logical product(s) on {}", names.len(), date);

        Ok(names
            .into_iter()
            .map(|name| CatalogRow {
                name,
                date,
                ftp_dir: path.relative_dir(),
            })
            .collect())
    }

    /// Stage 1: the dataset id must appear in the catalog root, ignoring
    /// version suffixes on the listed folder names
    async fn validate_dataset(&self, id: &str) -> FindResult<()> {
        let root = &self.config.catalog_root;
        let lines = self.source.fetch_listing(root).await?;
        let names = listing::folder_names(root, &lines)?;

        if names.iter().any(|name| strip_version_suffix(name) == id) {
            debug!("Dataset '{}' present in catalog root", id);
            Ok(())
        } else {
            Err(FindError::UnknownDataset { id: id.to_string() })
        }
    }

    /// Stage 2: the exact versioned folder must be listed verbatim
    async fn validate_version(&self, id: &str, version: u32) -> FindResult<()> {
        let root = &self.config.catalog_root;
        let lines = self.source.fetch_listing(root).await?;
        let names = listing::folder_names(root, &lines)?;
        let folder = dataset_version_folder(id, version);

        if names.iter().any(|name| *name == folder) {
            debug!("Version folder '{}' present in catalog root", folder);
            Ok(())
        } else {
            Err(FindError::UnknownVersion {
                id: id.to_string(),
                version,
            })
        }
    }

    /// Stage 3: the dot-formatted date folder must exist under the
    /// dataset+version folder
    async fn validate_date(
        &self,
        path: &RemotePath,
        id: &str,
        version: u32,
        date: CanonicalDate,
    ) -> FindResult<()> {
        let version_dir = path.version_dir();
        let lines = self.source.fetch_listing(&version_dir).await?;
        let names = listing::folder_names(&version_dir, &lines)?;
        let folder = date.folder_name();

        if names.iter().any(|name| *name == folder) {
            debug!("Date folder '{}' present under {}", folder, version_dir);
            Ok(())
        } else {
            Err(FindError::DateNotAvailable {
                id: id.to_string(),
                version,
                date: date.iso(),
            })
        }
    }

    /// List a validated date folder and reduce it to logical product names:
    /// extensions stripped, duplicates collapsed in first-seen order
    async fn discover_files(&self, path: &RemotePath) -> FindResult<Vec<String>> {
        let date_dir = path.date_dir();
        let lines = self.source.fetch_listing(&date_dir).await?;

        if listing::is_empty_directory(&lines) {
            return Err(FindError::EmptyDirectory { path: date_dir });
        }

        let raw = listing::file_names(&date_dir, &lines, listing_constants::FILE_NAME_PREFIX)?;

        let mut seen = HashSet::new();
        let mut names = Vec::new();
        for file in raw {
            let logical = strip_extension(&file).to_string();
            if seen.insert(logical.clone()) {
                names.push(logical);
            }
        }
        Ok(names)
    }
}

/// Everything before the first `.`; multiple physical files sharing a stem
/// (data payload, metadata sidecar) collapse to one logical product
fn strip_extension(name: &str) -> &str {
    match name.find('.') {
        Some(index) => &name[..index],
        None => name,
    }
}

/// Drop a trailing `.NNN` version segment when present, e.g.
/// `"SPL4SMGP.002"` becomes `"SPL4SMGP"`
fn strip_version_suffix(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((stem, suffix))
            if !suffix.is_empty() && suffix.chars().all(|c| c.is_ascii_digit()) =>
        {
            stem
        }
        _ => name,
    }
}
