//! Driving the day-by-day parse over a whole export.

use chrono::NaiveDate;

use crate::aggregate::{SkippedEntry, aggregate_entries};
use crate::day::{Day, DayRecord, assemble};
use crate::error::ParseError;
use crate::line::{Line, parse_year, read_lines};
use crate::scan::scan_day;
use crate::source::InputSource;

/// Index of the first day header: title, period and column rows come first.
const FIRST_DAY_LINE: usize = 3;

/// Rows between a day's `Total` row and the next day header, counting the `Total` row.
const DAY_GAP: usize = 2;

/// Settings for a single parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Only aggregate entries whose project equals this exactly.
    pub project: Option<String>,
    /// Log skipped entries at `warn` instead of `debug`.
    pub verbose: bool,
}

impl ParseOptions {
    pub fn for_project(project: impl Into<String>) -> Self {
        Self {
            project: Some(project.into()),
            ..Self::default()
        }
    }
}

/// Everything a parse produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseReport {
    pub year: i32,
    /// Day records in input order.
    pub days: Vec<DayRecord>,
    /// Entry rows that could not be parsed.
    pub skipped_entries: Vec<SkippedEntry>,
    /// Days without a usable entry: none matched the project filter or every
    /// matching row was malformed.
    pub empty_days: Vec<NaiveDate>,
}

/// Parses an export into one record per day.
///
/// Access to the source is checked before anything is read.
pub fn parse(source: InputSource, options: &ParseOptions) -> Result<ParseReport, ParseError> {
    let origin = source.origin();
    let reader = source.open()?;
    let lines = read_lines(reader, &origin)?;
    parse_lines(&lines, options)
}

/// Parses an already tokenized export.
pub fn parse_lines(lines: &[Line], options: &ParseOptions) -> Result<ParseReport, ParseError> {
    let year = parse_year(lines)?;
    let mut report = ParseReport {
        year,
        days: Vec::new(),
        skipped_entries: Vec::new(),
        empty_days: Vec::new(),
    };

    let mut cursor = FIRST_DAY_LINE;
    while let Some(header) = scan_day(lines, cursor, year)? {
        let aggregate = aggregate_entries(lines, header.index + 1, options)?;
        let day = assemble(cursor, header, &aggregate);
        report.skipped_entries.extend(aggregate.skipped);
        cursor += day.lines() + DAY_GAP;

        match day {
            Day::Record(record) => {
                tracing::trace!(date = %record.date, total = ?record.total, "parsed day");
                report.days.push(record);
            }
            Day::Empty { date, .. } => {
                if options.verbose {
                    tracing::warn!(%date, project = ?options.project, "no usable entries");
                } else {
                    tracing::debug!(%date, project = ?options.project, "no usable entries");
                }
                report.empty_days.push(date);
            }
        }
    }

    tracing::debug!(
        year,
        days = report.days.len(),
        skipped = report.skipped_entries.len(),
        "parsed export"
    );
    Ok(report)
}
