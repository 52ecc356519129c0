//! CSV serialization of the assembled run records.

use std::path::Path;

use crate::error::Result;
use crate::models::RunRecord;

/// Write all records to `path`, overwriting any existing file.
///
/// The header row is written even when there are no records. Quoting
/// follows the usual CSV rules: a field is wrapped in double quotes when it
/// contains a comma, a quote or a newline, with internal quotes doubled.
pub fn export_to_csv(path: &Path, records: &[RunRecord]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(path)?;

    writer.write_record(RunRecord::CSV_HEADER)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(())
}
