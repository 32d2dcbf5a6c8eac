//! CSV decoder.
//!
//! The first record is the header row. Records may be ragged: short rows are
//! padded with missing values, and fields past the header width are ignored.
//! Non-UTF-8 bytes are replaced rather than rejected.

use crate::headers::column_names;
use crate::{SourceError, TableDecoder};
use roster_core::{Cell, RawTable};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub struct CsvDecoder;

impl TableDecoder for CsvDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<RawTable, SourceError> {
        let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(bytes);

        let mut records = reader.byte_records();
        let header = match records.next() {
            Some(record) => record?,
            None => return Err(SourceError::EmptySheet),
        };
        let headers = column_names(header.iter().map(|f| String::from_utf8_lossy(f)), 0);

        let mut rows = Vec::new();
        for record in records {
            let record = record?;
            let row: Vec<Cell> = record
                .iter()
                .take(headers.len())
                .map(|field| Cell::text(String::from_utf8_lossy(field).into_owned()))
                .collect();
            rows.push(row);
        }

        Ok(RawTable::from_rows(headers, rows))
    }
}
