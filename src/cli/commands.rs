//! Command handlers for the SMAP Finder CLI
//!
//! Each handler wires configuration, the FTP listing source, and the
//! catalog finder together, then renders the result in the requested
//! format.

use anyhow::Context;
use tracing::info;

use crate::app::{dates, CatalogFinder, FinderConfig, FtpListingSource};
use crate::cli::args::{FindArgs, GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Handle the find command
pub async fn handle_find(global: &GlobalArgs, args: FindArgs) -> anyhow::Result<()> {
    args.validate().map_err(anyhow::Error::msg)?;

    let config = AppConfig::load(global.config.as_deref())
        .context("Failed to load configuration")?;

    let requested = dates::normalize_dates(&args.dates)?;
    info!(
        "Finding files for {} v{:03} on {} date(s)",
        args.id,
        args.version,
        requested.len()
    );

    let source = FtpListingSource::new(config.catalog.clone());
    let finder = CatalogFinder::with_config(
        source,
        FinderConfig {
            catalog_root: config.catalog.root.clone(),
            validate_once: args.validate_once,
            concurrent: args.concurrent,
        },
    );

    let table = finder.find(&args.id, args.version, &requested).await?;

    match args.format {
        OutputFormat::Table => print!("{}", table),
        OutputFormat::Json => println!("{}", table.to_json()?),
        OutputFormat::Csv => print!("{}", table.to_csv()),
    }

    Ok(())
}
