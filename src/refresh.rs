use chrono::Utc;
use std::io::{self, Write};
use tracing::{debug, warn};

use crate::kubernetes::{FetchError, ResourceSource};
use crate::types::RefreshConfig;
use crate::ui::{screen, table};

/// Fetch, project and print once, then keep going every interval in watch
/// mode. Watch mode only ends when the process is stopped.
pub async fn run<S, W>(source: &S, config: &RefreshConfig, out: &mut W) -> io::Result<()>
where
    S: ResourceSource,
    W: Write,
{
    loop {
        tick(source, config, out).await?;

        if !config.watch {
            return Ok(());
        }

        screen::clear(out)?;
        writeln!(out, "{}", screen::banner(config))?;
        out.flush()?;

        debug!("Sleeping {:?} before next refresh", config.interval);
        tokio::time::sleep(config.interval).await;
    }
}

/// A single fetch-project-render cycle. Fetch failures are printed in
/// place of the table; only write errors are returned.
pub async fn tick<S, W>(source: &S, config: &RefreshConfig, out: &mut W) -> io::Result<()>
where
    S: ResourceSource,
    W: Write,
{
    match source.fetch(config.kind, &config.namespace).await {
        Ok(list) => {
            let rows = list.rows(Utc::now());
            out.write_all(table::render(list.kind(), &rows).as_bytes())?;
        }
        Err(e) => {
            match &e {
                FetchError::Api { code, message } => {
                    warn!("Failed to list {} ({}): {}", config.kind, code, message)
                }
                FetchError::Other(err) => warn!("Failed to list {}: {:#}", config.kind, err),
            }
            writeln!(out, "Error: {}", e.display_message())?;
        }
    }
    out.flush()
}
