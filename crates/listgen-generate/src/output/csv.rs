use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use listgen_core::FieldId;

use crate::model::GeneratedRow;

/// UTF-8 byte order mark written ahead of the header so spreadsheet tools
/// pick the right encoding.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Render rows to an in-memory CSV document: BOM, label header, then one
/// record per row in column order.
pub fn rows_to_csv(rows: &[GeneratedRow]) -> Result<Vec<u8>, csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(UTF8_BOM.to_vec());

    writer.write_record(FieldId::ALL.map(FieldId::label))?;
    for row in rows {
        writer.write_record(row.values())?;
    }

    writer
        .into_inner()
        .map_err(|err| csv::Error::from(err.into_error()))
}

/// Write the CSV document for `rows` to `writer`. Returns the number of bytes
/// written.
pub fn write_rows_csv<W: Write>(mut writer: W, rows: &[GeneratedRow]) -> Result<u64, csv::Error> {
    let document = rows_to_csv(rows)?;
    writer.write_all(&document)?;
    writer.flush()?;
    Ok(document.len() as u64)
}

/// Write rows to a CSV file at `path`, replacing any existing file.
pub fn write_rows_csv_file(path: &Path, rows: &[GeneratedRow]) -> Result<u64, csv::Error> {
    let writer = BufWriter::new(File::create(path)?);
    write_rows_csv(writer, rows)
}
