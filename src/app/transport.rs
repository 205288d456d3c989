//! Listing transport for the NSIDC archive
//!
//! The [`ListingSource`] trait is the seam between the find pathway and the
//! network: given a remote path it yields the raw listing lines obtained
//! from one scoped connection. The production implementation speaks FTP via
//! `suppaftp`, running the blocking protocol calls on the tokio blocking
//! pool; tests substitute in-memory fixtures.

use suppaftp::FtpStream;
use tracing::{debug, warn};

use crate::config::CatalogConfig;
use crate::errors::{FindError, FindResult};

/// A transport capable of listing one remote directory per call
///
/// Each call is a scoped acquisition: the implementation opens whatever
/// connection it needs, reads all listing lines, and releases the
/// connection before returning, on every exit path.
#[allow(async_fn_in_trait)]
pub trait ListingSource {
    /// Fetch the raw listing lines for `path`
    async fn fetch_listing(&self, path: &str) -> FindResult<Vec<String>>;
}

/// FTP-backed listing source for the NSIDC archive
///
/// Connects anonymously, lists one directory, and quits. One connection
/// per fetch; nothing is reused across calls.
#[derive(Debug, Clone)]
pub struct FtpListingSource {
    config: CatalogConfig,
}

impl FtpListingSource {
    /// Create a source for the endpoint described by `config`
    pub fn new(config: CatalogConfig) -> Self {
        Self { config }
    }
}

impl ListingSource for FtpListingSource {
    async fn fetch_listing(&self, path: &str) -> FindResult<Vec<String>> {
        let config = self.config.clone();
        let owned_path = path.to_string();

        tokio::task::spawn_blocking(move || list_once(&config, &owned_path))
            .await
            .map_err(|source| FindError::TaskJoin {
                path: path.to_string(),
                source,
            })?
    }
}

/// One scoped FTP session: connect, login, LIST, quit
///
/// The connection is released on every exit path: explicitly via `quit`
/// after a LIST, and by dropping the stream on earlier failures.
fn list_once(config: &CatalogConfig, path: &str) -> FindResult<Vec<String>> {
    let transport_err = |source| FindError::Transport {
        path: path.to_string(),
        source,
    };

    debug!("Connecting to {}:{}", config.host, config.port);
    let mut ftp_stream = FtpStream::connect(format!("{}:{}", config.host, config.port))
        .map_err(transport_err)?;

    // Extended Passive Mode - better for NAT/firewall environments
    ftp_stream.set_mode(suppaftp::Mode::ExtendedPassive);

    debug!("Logging in as: {}", config.username);
    ftp_stream
        .login(&config.username, &config.password)
        .map_err(transport_err)?;

    debug!("Listing directory: {}", path);
    let result = ftp_stream.list(Some(path)).map_err(transport_err);

    if let Err(e) = ftp_stream.quit() {
        warn!("Failed to quit FTP session gracefully: {}", e);
    }

    let lines = result?;
    debug!("Received {} listing line(s) for {}", lines.len(), path);
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_uses_configured_endpoint() {
        let config = CatalogConfig::default();
        let source = FtpListingSource::new(config.clone());
        assert_eq!(source.config.host, config.host);
        assert_eq!(source.config.port, 21);
    }
}
