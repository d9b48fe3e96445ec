//! Tabular sheet representation and the spreadsheet codec seam.
//!
//! The crate maps ledger records to and from rows of cells; encoding those
//! rows into an actual workbook file (and back) is the codec's job, behind
//! the [`SheetCodec`] trait.

pub mod dates;
pub mod export;
pub mod import;

use chrono::NaiveDate;
use thiserror::Error;

/// A single spreadsheet cell as a codec reports or accepts it.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    Date(NaiveDate),
}

impl Cell {
    /// Numeric value of a number cell or a numeric string cell.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(value) => Some(*value),
            Cell::Text(text) => text.trim().parse().ok(),
            _ => None,
        }
    }

    /// Text rendering of a text or number cell; `None` for empty and date
    /// cells.
    pub fn to_text(&self) -> Option<String> {
        match self {
            Cell::Text(text) => Some(text.clone()),
            Cell::Number(value) => Some(format!("{}", value)),
            _ => None,
        }
    }
}

pub type Row = Vec<Cell>;

/// Number-format override pinned to one cell. Coordinates are zero-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellStyle {
    pub row: usize,
    pub col: usize,
    pub number_format: String,
}

/// One sheet ready for a codec: header plus data rows, style overrides, and
/// the names the download should carry.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetDoc {
    pub sheet_name: String,
    pub file_name: String,
    pub rows: Vec<Row>,
    pub styles: Vec<CellStyle>,
}

/// Errors surfaced by sheet codecs.
#[derive(Debug, Error)]
pub enum SheetError {
    #[error("bad sheet data: {0}")]
    Codec(String),
}

/// Binary workbook codec boundary. Implementations live outside this crate;
/// the file format itself is never touched here.
pub trait SheetCodec {
    /// Decodes workbook bytes into the first sheet's rows, trailing blank
    /// rows dropped.
    fn parse(&self, bytes: &[u8]) -> Result<Vec<Row>, SheetError>;

    /// Encodes a sheet into workbook bytes, honoring the style overrides.
    fn build(&self, doc: &SheetDoc) -> Result<Vec<u8>, SheetError>;
}
