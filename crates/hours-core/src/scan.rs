//! Locating the next day header.

use chrono::NaiveDate;

use crate::error::ParseError;
use crate::line::Line;

/// Row that ends all day data.
pub const TERMINAL_MARKER: &str = "GRAND TOTAL";

/// Row standing in for a calendar day without entries.
pub const NO_ENTRIES_MARKER: &str = "[No entries]";

/// The placeholder plus its two framing blank rows.
const NO_ENTRIES_SPAN: usize = 3;

const DATE_FORMAT: &str = "%A, %d %B %Y";

/// A day header found by [`scan_day`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayHeader {
    pub date: NaiveDate,
    /// Index of the date line; the day's entries start right after it.
    pub index: usize,
}

/// Finds the day header at or after `cursor`.
///
/// Blank separators and `[No entries]` placeholders are skipped. Returns
/// `Ok(None)` once the terminal marker or the end of input is reached.
pub fn scan_day(lines: &[Line], cursor: usize, year: i32) -> Result<Option<DayHeader>, ParseError> {
    match lines.get(cursor) {
        None => return Ok(None),
        Some(line) if line.is_empty() => return Ok(None),
        Some(_) => {}
    }

    let mut index = cursor;
    while let Some(next) = lines.get(index + 1) {
        if next.is_empty() {
            index += 1;
        } else if next.is(NO_ENTRIES_MARKER) {
            tracing::trace!(line = index + 2, "skipping day without entries");
            index += NO_ENTRIES_SPAN;
        } else if next.is(TERMINAL_MARKER) {
            return Ok(None);
        } else {
            break;
        }
    }

    let Some(line) = lines.get(index) else {
        return Ok(None);
    };
    if line.is(TERMINAL_MARKER) {
        return Ok(None);
    }
    let Some(label) = line.kind() else {
        if index + 1 >= lines.len() {
            return Ok(None);
        }
        return Err(ParseError::format(index, "expected a day header, found a blank row"));
    };

    let date = parse_date(label, year).map_err(|err| {
        ParseError::format(index, format!("invalid day header {label:?}: {err}"))
    })?;
    Ok(Some(DayHeader { date, index }))
}

/// Parses `"<Weekday>, <day> <Month>"` in the given year.
pub fn parse_date(label: &str, year: i32) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(&format!("{label} {year}"), DATE_FORMAT)
}
