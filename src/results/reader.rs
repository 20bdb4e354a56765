use crate::error::Result;
use crate::results::ResultRow;
use csv::{ReaderBuilder, StringRecord};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

fn builder(has_headers: bool) -> ReaderBuilder {
    let mut b = ReaderBuilder::new();
    b.delimiter(b'\t').quoting(false).has_headers(has_headers);
    b
}

/// Reads a tab-separated result file whose first line names the columns.
pub fn read_rows<P: AsRef<Path>>(path: P) -> Result<Vec<ResultRow>> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "reading result rows");
    rows_from_reader(std::fs::File::open(path)?)
}

pub fn rows_from_reader<R: Read>(reader: R) -> Result<Vec<ResultRow>> {
    let mut rdr = builder(true).from_reader(reader);
    let mut rows = Vec::new();
    for record in rdr.deserialize::<HashMap<String, String>>() {
        rows.push(ResultRow::new(record?));
    }
    tracing::info!(rows = rows.len(), "loaded result rows");
    Ok(rows)
}

/// Reads a tab-separated file without a header line.
///
/// Records may have different lengths.
pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<String>>> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "reading raw records");
    records_from_reader(std::fs::File::open(path)?)
}

pub fn records_from_reader<R: Read>(reader: R) -> Result<Vec<Vec<String>>> {
    let mut rdr = builder(false).flexible(true).from_reader(reader);
    let mut out = Vec::new();
    for record in rdr.records() {
        let record: StringRecord = record?;
        out.push(record.iter().map(str::to_string).collect());
    }
    Ok(out)
}
