//! CSV writer for extracted entity records.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::types::EntityRecord;

/// Write records as a CSV file, overwriting any existing file at `path`.
///
/// The header row is always written, even when there are no records, then
/// one row per record in the order given. No row-level validation.
///
/// # Arguments
/// * `records` - Records to serialize
/// * `path` - Destination file path
///
/// # Returns
/// The path written to
pub fn write_csv(records: &[EntityRecord], path: &Path) -> Result<PathBuf> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    writer.write_record(EntityRecord::HEADERS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    tracing::info!(path = %path.display(), rows = records.len(), "Saved CSV");
    Ok(path.to_path_buf())
}
