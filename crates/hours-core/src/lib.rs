//! Parser for Hours timesheet exports.
//!
//! An export groups entries by day. This crate walks the tokenized rows and
//! produces one [`DayRecord`] per day with its start, finish, pause and total:
//! - Scanning: finding day headers between blank rows and placeholders
//! - Aggregation: folding a day's entries, optionally for one project
//! - Driving: advancing from one day block to the next until `GRAND TOTAL`

mod aggregate;
mod day;
mod document;
mod error;
pub mod line;
pub mod scan;
mod source;
pub mod time;

pub use aggregate::{Aggregate, Entry, SUBTOTAL_MARKER, SkippedEntry, Span, aggregate_entries};
pub use day::{Day, DayRecord, assemble};
pub use document::{ParseOptions, ParseReport, parse, parse_lines};
pub use error::{EntryError, ParseError, TimeFormatError};
pub use line::{Line, parse_year, read_lines};
pub use scan::{DayHeader, NO_ENTRIES_MARKER, TERMINAL_MARKER, scan_day};
pub use source::InputSource;
pub use time::{parse_time, to_duration};
