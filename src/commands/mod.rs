use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::io::{self, Write};

use crate::{
    github::GetReleases,
    ledger::{AppendOutcome, append_rows, write_csv},
    report::{OutputRow, collect_rows, timestamp},
    runtime::Runtime,
};

pub mod config;

use config::{Config, TrackConfig};

/// What one run observed and recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub releases_seen: usize,
    pub rows: Vec<OutputRow>,
    /// `None` for a dry run.
    pub appended: Option<AppendOutcome>,
}

/// Fetch, filter, and append, printing the outcome to stdout.
#[tracing::instrument(skip(runtime, options))]
pub async fn track<R: Runtime>(runtime: R, options: TrackConfig) -> Result<RunSummary> {
    let config = Config::new(runtime, &options)?;
    let mut stdout = io::stdout();
    run(&options, &config, &mut stdout).await
}

#[tracing::instrument(skip(options, config, out))]
pub async fn run<R: Runtime, G: GetReleases, W: Write>(
    options: &TrackConfig,
    config: &Config<R, G>,
    out: &mut W,
) -> Result<RunSummary> {
    let date = timestamp(config.runtime.now());
    debug!("Snapshot time {}", date);

    let releases = config.github.get_releases(&options.repo).await?;
    let rows = collect_rows(&releases, &options.version_filter, &date);

    if rows.is_empty() {
        warn!(
            "No assets of {} match '{}' ({} release(s) checked)",
            options.repo,
            options.version_filter,
            releases.len()
        );
    } else {
        info!(
            "{} asset(s) of {} match '{}'",
            rows.len(),
            options.repo,
            options.version_filter
        );
    }

    if options.dry_run {
        write_csv(&mut *out, true, &rows).context("Failed to print rows")?;
        return Ok(RunSummary {
            releases_seen: releases.len(),
            rows,
            appended: None,
        });
    }

    let outcome = append_rows(&config.runtime, &options.csv_path, &rows)?;
    writeln!(
        out,
        "Appended {} row(s) for {} to {}",
        outcome.rows_written,
        options.repo,
        options.csv_path.display()
    )?;

    Ok(RunSummary {
        releases_seen: releases.len(),
        rows,
        appended: Some(outcome),
    })
}
