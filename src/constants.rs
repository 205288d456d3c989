//! Application constants for SMAP Finder
//!
//! This module centralizes all constants used throughout the application,
//! organized by functional domain for maintainability and clarity.

/// NSIDC FTP endpoint constants
pub mod ftp {
    /// NSIDC archive hostname
    pub const HOST: &str = "n5eil01u.ecs.nsidc.org";

    /// FTP control port
    pub const PORT: u16 = 21;

    /// Username for anonymous access
    pub const USERNAME: &str = "anonymous";

    /// Password for anonymous access (email by FTP convention)
    pub const PASSWORD: &str = "smap_finder@example.com";

    /// Base path of the SMAP catalog on the archive
    pub const CATALOG_ROOT: &str = "/SAN/SMAP/";
}

/// Directory-listing parsing constants
pub mod listing {
    /// Sole listing content that marks an existing but empty remote folder
    pub const EMPTY_DIR_SENTINEL: &str = "total 0";

    /// Zero-based index of the name column in the stable catalog listing
    /// format (the 9th whitespace-delimited column)
    pub const FOLDER_NAME_COLUMN: usize = 8;

    /// Prefix that identifies the filename column in date-folder listings,
    /// whose column count varies with permission-string rendering
    pub const FILE_NAME_PREFIX: &str = "SMAP";
}

/// Date formatting constants
pub mod dates {
    /// Accepted textual input format for dates
    pub const INPUT_FORMAT: &str = "%Y-%m-%d";

    /// Date format used for remote date-folder names
    pub const FOLDER_FORMAT: &str = "%Y.%m.%d";
}

/// Version folder naming
pub mod versions {
    /// Zero-padded width of the version segment in folder names
    /// (e.g. "SPL4SMGP.002")
    pub const FOLDER_WIDTH: usize = 3;
}

/// Logging and debugging constants
pub mod logging {
    /// Default log level
    pub const DEFAULT_LOG_LEVEL: &str = "warn";
}

// Re-export commonly used constants for convenience
pub use dates::{FOLDER_FORMAT as DATE_FOLDER_FORMAT, INPUT_FORMAT as DATE_INPUT_FORMAT};
pub use ftp::{CATALOG_ROOT, HOST as FTP_HOST, PORT as FTP_PORT};
pub use listing::{EMPTY_DIR_SENTINEL, FILE_NAME_PREFIX};
