//! Local JSON dump of the generated catalog.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{info, instrument};

use catalog_indexer_shared::WellnessRecord;

use crate::errors::CatalogError;

/// Where the catalog is written when no path is configured.
pub const DEFAULT_DUMP_PATH: &str = "/tmp/items.json";

/// Write `records` to `path` as a pretty-printed JSON array.
///
/// An existing file is overwritten.
#[instrument(skip(records), fields(path = %path.display(), records = records.len()))]
pub fn write_catalog(path: &Path, records: &[WellnessRecord]) -> Result<(), CatalogError> {
    let file = File::create(path).map_err(|e| {
        CatalogError::dump(format!("Failed to create {}: {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, records).map_err(|e| {
        CatalogError::dump(format!("Failed to serialize catalog: {}", e))
    })?;
    writer.flush().map_err(|e| {
        CatalogError::dump(format!("Failed to write {}: {}", path.display(), e))
    })?;

    info!("Saved catalog dump");
    Ok(())
}
