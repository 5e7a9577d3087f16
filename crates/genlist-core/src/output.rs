//! Writing assembled lists as CSV.

use std::path::Path;

use csv::{QuoteStyle, Terminator, WriterBuilder};
use tracing::info;

use crate::error::{CombineError, Result};

/// An assembled list that can be written as a table.
pub trait GeneTable {
    fn header(&self) -> Vec<&'static str>;

    /// Data rows in output order.
    fn rows(&self) -> Vec<Vec<String>>;

    fn is_empty(&self) -> bool;
}

/// Writes `table` to `path` (header line plus one line per record).
///
/// An empty table writes nothing and returns `Ok(false)`.
pub fn write_table(table: &impl GeneTable, path: &Path) -> Result<bool> {
    if table.is_empty() {
        info!(path = %path.display(), "no records, output not written");
        return Ok(false);
    }

    let write_error = |source: csv::Error| CombineError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .quote_style(QuoteStyle::Never)
        .from_path(path)
        .map_err(write_error)?;
    writer.write_record(table.header()).map_err(write_error)?;
    let rows = table.rows();
    for row in &rows {
        writer.write_record(row).map_err(write_error)?;
    }
    writer
        .flush()
        .map_err(|e| write_error(csv::Error::from(e)))?;

    info!(path = %path.display(), rows = rows.len(), "wrote gene list");
    Ok(true)
}
