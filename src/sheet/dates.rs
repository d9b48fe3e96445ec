//! Heuristic parsing of spreadsheet date cells.

use chrono::{Duration, NaiveDate};

use super::Cell;

/// Excel's 1900 date system pretends 1900-02-29 existed (serial 60).
const PHANTOM_LEAP_SERIAL: i64 = 60;

/// Interprets a cell as a calendar date.
///
/// Accepts a native date cell, a `d/m/yyyy` text cell, or a numeric
/// 1900-system date serial. Everything else is unparseable (`None`);
/// callers drop the affected row contribution rather than failing the
/// whole import.
pub fn parse_date_cell(cell: &Cell) -> Option<NaiveDate> {
    match cell {
        Cell::Date(date) => Some(*date),
        Cell::Text(text) => parse_dmy(text),
        Cell::Number(serial) => decode_serial(*serial),
        Cell::Empty => None,
    }
}

/// Parses `d/m/yyyy` or `dd/mm/yyyy`, the shape the export writes.
pub fn parse_dmy(text: &str) -> Option<NaiveDate> {
    let mut parts = text.trim().split('/');
    let day = parts.next()?.trim().parse::<u32>().ok()?;
    let month = parts.next()?.trim().parse::<u32>().ok()?;
    let year = parts.next()?.trim().parse::<i32>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Decodes an Excel 1900-system date serial. Serial 1 is 1900-01-01;
/// serials past the phantom leap day run one ahead of the real calendar,
/// and serial 60 itself names a day that never happened.
pub fn decode_serial(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || serial < 1.0 {
        return None;
    }
    let days = serial.trunc() as i64;
    if days == PHANTOM_LEAP_SERIAL {
        return None;
    }
    let days = if days > PHANTOM_LEAP_SERIAL {
        days - 1
    } else {
        days
    };
    NaiveDate::from_ymd_opt(1899, 12, 31)
        .and_then(|epoch| epoch.checked_add_signed(Duration::days(days)))
}
