//! CSV export.

use std::fs;
use std::path::Path;

use csv::{Terminator, WriterBuilder};
use tracing::info;

use super::{cells, COLUMNS};
use crate::data::MetricsTable;
use crate::error::{Error, Result};

/// Output file name used by the command-line tool.
pub const DEFAULT_OUTPUT_FILE: &str = "qos_metrics.csv";

/// Render the table as CSV: a header row, then one row per flow.
pub fn to_csv(table: &MetricsTable) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(COLUMNS)?;
    for row in &table.rows {
        writer.write_record(cells(row))?;
    }

    writer.into_inner().map_err(|e| Error::Io(e.into_error()))
}

/// Write the table as CSV to `path`, replacing any existing file.
///
/// The whole document is rendered before the file is touched, so a failure
/// never leaves a partial file behind.
pub fn write_csv(table: &MetricsTable, path: &Path) -> Result<()> {
    let bytes = to_csv(table)?;
    fs::write(path, bytes)?;
    info!(path = %path.display(), rows = table.len(), "wrote CSV report");
    Ok(())
}
