//! Excel decoder (`.xlsx` and legacy `.xls`) built on calamine.
//!
//! Only the first worksheet is read. The first row of its used range is the
//! header row; placeholder names for blank header cells use the absolute
//! column position, so a name in column C is always `Unnamed: 2` no matter
//! where the used range starts.

use crate::headers::column_names;
use crate::{SourceError, TableDecoder};
use calamine::{Data, DataType, Range, Reader, Xls, Xlsx};
use chrono::{NaiveDateTime, Timelike};
use roster_core::{Cell, RawTable, TableFormat};
use std::io::{Cursor, Read, Seek};

pub struct SpreadsheetDecoder {
    format: TableFormat,
}

impl SpreadsheetDecoder {
    pub fn new(format: TableFormat) -> Self {
        Self { format }
    }
}

impl TableDecoder for SpreadsheetDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<RawTable, SourceError> {
        let cursor = Cursor::new(bytes.to_vec());
        let range = match self.format {
            TableFormat::Xls => first_sheet(Xls::new(cursor).map_err(calamine::Error::from)?)?,
            _ => first_sheet(Xlsx::new(cursor).map_err(calamine::Error::from)?)?,
        };
        range_to_table(&range)
    }
}

fn first_sheet<RS, R>(mut workbook: R) -> Result<Range<Data>, SourceError>
where
    RS: Read + Seek,
    R: Reader<RS>,
    R::Error: Into<calamine::Error>,
{
    match workbook.worksheet_range_at(0) {
        Some(range) => range.map_err(|e| SourceError::Spreadsheet(e.into())),
        None => Err(SourceError::EmptySheet),
    }
}

/// Convert a worksheet range into a raw table, first row as headers.
pub fn range_to_table(range: &Range<Data>) -> Result<RawTable, SourceError> {
    let Some((_, start_col)) = range.start() else {
        return Err(SourceError::EmptySheet);
    };
    let mut rows = range.rows();
    let header = rows.next().ok_or(SourceError::EmptySheet)?;
    let headers = column_names(
        header.iter().map(|data| cell_from_data(data).to_string()),
        start_col as usize,
    );

    let body: Vec<Vec<Cell>> = rows
        .map(|row| row.iter().map(cell_from_data).collect())
        .collect();

    Ok(RawTable::from_rows(headers, body))
}

/// Map one calamine cell to a roster [`Cell`].
pub fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Float(f) => Cell::Number(*f),
        Data::String(s) => Cell::text(s.clone()),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(_) => match data.as_datetime() {
            Some(dt) => Cell::Text(format_datetime(dt)),
            None => data.as_f64().map(Cell::Number).unwrap_or_default(),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::text(s.clone()),
        Data::Error(_) | Data::Empty => Cell::Empty,
    }
}

fn format_datetime(dt: NaiveDateTime) -> String {
    if dt.time().num_seconds_from_midnight() == 0 {
        dt.format("%Y-%m-%d").to_string()
    } else {
        dt.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
