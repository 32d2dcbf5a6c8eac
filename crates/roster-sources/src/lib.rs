//! roster-sources: decoders that turn an uploaded file into a [`RawTable`].
//!
//! The file name picks the decoder (`.csv`, `.xlsx`, `.xls`); the bytes are
//! decoded into named columns. Blank header cells get positional placeholder
//! names (`Unnamed: N`) so the normalizer's column layout can find them.
//! [`text::extract`] covers roster listings pasted as plain text.

pub mod delimited;
pub mod headers;
pub mod spreadsheet;
pub mod text;

use roster_core::{RawTable, TableFormat};
use std::path::{Path, PathBuf};

/// Errors raised while reading or decoding a source file.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("unsupported file format {extension:?} for {file_name:?}: expected .xlsx, .xls or .csv")]
    UnsupportedFormat { file_name: String, extension: String },
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid spreadsheet: {0}")]
    Spreadsheet(#[from] calamine::Error),
    #[error("no data: the sheet has no header row")]
    EmptySheet,
}

/// Trait implemented by each file-format decoder.
pub trait TableDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<RawTable, SourceError>;
}

/// The decoder for a recognised format.
pub fn decoder_for(format: TableFormat) -> Box<dyn TableDecoder> {
    match format {
        TableFormat::Csv => Box::new(delimited::CsvDecoder),
        TableFormat::Xlsx | TableFormat::Xls => Box::new(spreadsheet::SpreadsheetDecoder::new(format)),
    }
}

/// Decode `bytes`, choosing the format from `file_name`.
pub fn load(file_name: &str, bytes: &[u8]) -> Result<RawTable, SourceError> {
    let format = TableFormat::from_file_name(file_name).ok_or_else(|| {
        SourceError::UnsupportedFormat {
            file_name: file_name.to_string(),
            extension: TableFormat::extension_of(file_name).to_string(),
        }
    })?;
    let table = decoder_for(format).decode(bytes)?;
    tracing::debug!(
        file_name,
        %format,
        columns = table.columns().len(),
        rows = table.row_count(),
        "decoded table"
    );
    Ok(table)
}

/// Read and decode the file at `path`. The format check runs before the
/// file is read.
pub fn load_path(path: &Path) -> Result<RawTable, SourceError> {
    let file_name = path.to_string_lossy();
    if TableFormat::from_file_name(&file_name).is_none() {
        return load(&file_name, &[]);
    }
    let bytes = std::fs::read(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load(&file_name, &bytes)
}
