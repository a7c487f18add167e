//! The append-only CSV file that accumulates download counts across runs.

use log::{debug, info};
use std::io::Write;
use std::path::Path;

use crate::error::TrackError;
use crate::report::OutputRow;
use crate::runtime::Runtime;

pub const HEADER: [&str; 4] = ["Date", "Release", "Asset", "Downloads"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppendOutcome {
    pub rows_written: usize,
    pub header_written: bool,
}

/// Appends `rows` to the CSV at `path`.
///
/// The header goes in first only when the file did not exist before this
/// call. Rows are never deduplicated against earlier runs.
#[tracing::instrument(skip(runtime, rows))]
pub fn append_rows<R: Runtime>(
    runtime: &R,
    path: &Path,
    rows: &[OutputRow],
) -> Result<AppendOutcome, TrackError> {
    let header = !runtime.exists(path);
    if header {
        info!("Creating {} with header", path.display());
    }

    let file = runtime
        .open_append(path)
        .map_err(|source| TrackError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    write_csv(file, header, rows).map_err(|source| TrackError::Csv {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Appended {} row(s) to {}", rows.len(), path.display());
    Ok(AppendOutcome {
        rows_written: rows.len(),
        header_written: header,
    })
}

/// Writes rows as CSV, optionally preceded by the header, and flushes.
///
/// Takes the writer by value so it is dropped (and a file closed) before
/// returning, on success or failure.
pub fn write_csv<W: Write>(writer: W, header: bool, rows: &[OutputRow]) -> Result<(), csv::Error> {
    let mut csv = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);

    if header {
        csv.write_record(HEADER)?;
    }
    for row in rows {
        csv.serialize(row)?;
    }
    csv.flush()?;
    Ok(())
}
