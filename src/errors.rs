//! Error types for SMAP Finder
//!
//! This module defines the error taxonomy for all components of the
//! application. Every failure of the find pathway carries enough context
//! (dataset id, version, date, remote path) to diagnose without re-deriving
//! it, and all of them are terminal for the whole multi-date call.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised along the find pathway (validation, listing, discovery)
#[derive(Error, Debug)]
pub enum FindError {
    /// Date input could not be parsed as a calendar date
    #[error("Invalid date '{input}'. Dates must be given as YYYY-MM-DD")]
    DateFormat { input: String },

    /// Dataset id absent from the catalog-root listing
    #[error("Dataset '{id}' was not found in the catalog")]
    UnknownDataset { id: String },

    /// Exact versioned folder absent from the catalog-root listing
    #[error("Version {version} of dataset '{id}' was not found (no '{id}.{version:03}' folder in the catalog)")]
    UnknownVersion { id: String, version: u32 },

    /// Date folder absent under the dataset+version folder
    #[error("No data for dataset '{id}' version {version} on {date}")]
    DateNotAvailable {
        id: String,
        version: u32,
        date: String,
    },

    /// Remote folder exists but its listing is the empty-directory sentinel
    #[error("Remote directory {path} exists but contains no files")]
    EmptyDirectory { path: String },

    /// Malformed or unexpected listing text
    #[error("Could not parse listing of {path}: {reason}")]
    ListingParse { path: String, reason: String },

    /// Connection-level FTP failure not otherwise classified
    #[error("FTP transport error while listing {path}")]
    Transport {
        path: String,
        #[source]
        source: suppaftp::FtpError,
    },

    /// The blocking FTP task could not be joined
    #[error("FTP task failed while listing {path}")]
    TaskJoin {
        path: String,
        #[source]
        source: tokio::task::JoinError,
    },
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    /// Invalid configuration format
    #[error("Invalid configuration format")]
    InvalidFormat(#[from] toml::de::Error),

    /// I/O error reading the configuration file
    #[error("I/O error reading configuration")]
    Io(#[from] std::io::Error),

    /// Invalid configuration value
    #[error("Invalid configuration value for {field}: {value}. {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

/// Top-level application error that can represent any error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Find pathway error
    #[error(transparent)]
    Find(#[from] FindError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Generic I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Generic application error with context
    #[error("Application error: {message}")]
    Generic { message: String },
}

impl AppError {
    /// Create a generic application error with a message
    pub fn generic(message: impl Into<String>) -> Self {
        Self::Generic {
            message: message.into(),
        }
    }

    /// Get error category for logging and metrics
    pub fn category(&self) -> &'static str {
        match self {
            AppError::Find(_) => "find",
            AppError::Config(_) => "config",
            AppError::Io(_) => "io",
            AppError::Generic { .. } => "generic",
        }
    }

    /// Whether the error stems from user input rather than the remote side
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            AppError::Find(FindError::DateFormat { .. }) | AppError::Config(_)
        )
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;

/// Find pathway result type alias
pub type FindResult<T> = std::result::Result<T, FindError>;

/// Configuration result type alias
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
