//! CSV row serializer.
//!
//! Writes one row per record, one field per attribute, in the order the
//! attributes first appeared within that record. Records with different
//! attribute subsets produce rows of different widths, so the writer runs in
//! flexible mode. No header row is emitted.

use std::io::Write;
use std::path::Path;

use crate::error::CsvResult;
use crate::models::Record;

/// Serialize records to CSV, one row per record.
///
/// Fields containing the delimiter, quotes, or line breaks (merged
/// multi-values) are quoted per standard CSV rules; embedded quotes are
/// doubled. The sink is flushed after the last row, and any write error
/// aborts immediately.
pub fn write_csv<W: Write>(out: W, records: &[Record]) -> CsvResult<()> {
    let mut writer = csv::WriterBuilder::new().flexible(true).from_writer(out);

    for record in records {
        writer.write_record(record.values())?;
    }
    writer.flush()?;

    Ok(())
}

/// Create `path` and serialize records into it.
pub fn write_csv_file<P: AsRef<Path>>(path: P, records: &[Record]) -> CsvResult<()> {
    let file = std::fs::File::create(path.as_ref())?;
    write_csv(file, records)
}
