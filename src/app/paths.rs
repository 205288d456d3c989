//! Remote path construction
//!
//! Pure functions building the three levels of remote path: catalog root,
//! dataset+version folder, and date folder. No network access.

use crate::app::models::CanonicalDate;
use crate::constants::versions;

/// Folder name for a dataset version, e.g. `"SPL4SMGP.002"`
pub fn dataset_version_folder(id: &str, version: u32) -> String {
    format!("{}.{:0width$}", id, version, width = versions::FOLDER_WIDTH)
}

/// The remote location of one dataset version on one date
///
/// Built once per requested date and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemotePath {
    catalog_root: String,
    dataset_folder: String,
    date_folder: String,
}

impl RemotePath {
    /// Build the path triple for `id`, `version` and `date` under
    /// `catalog_root` (a trailing slash is added when missing)
    pub fn build(catalog_root: &str, id: &str, version: u32, date: CanonicalDate) -> Self {
        let catalog_root = if catalog_root.ends_with('/') {
            catalog_root.to_string()
        } else {
            format!("{}/", catalog_root)
        };
        Self {
            catalog_root,
            dataset_folder: dataset_version_folder(id, version),
            date_folder: date.folder_name(),
        }
    }

    /// The catalog root, always with a trailing slash
    pub fn catalog_root(&self) -> &str {
        &self.catalog_root
    }

    /// Absolute path of the dataset+version folder, trailing slash
    pub fn version_dir(&self) -> String {
        format!("{}{}/", self.catalog_root, self.dataset_folder)
    }

    /// Absolute path of the date folder, trailing slash
    pub fn date_dir(&self) -> String {
        format!(
            "{}{}/{}/",
            self.catalog_root, self.dataset_folder, self.date_folder
        )
    }

    /// The dataset+version fragment relative to the catalog root,
    /// trailing slash; this is the `ftp_dir` reported in results
    pub fn relative_dir(&self) -> String {
        format!("{}/", self.dataset_folder)
    }
}
