//! Folding a day's entry rows into start, finish and pause.

use chrono::{NaiveTime, TimeDelta};

use crate::document::ParseOptions;
use crate::error::{EntryError, ParseError};
use crate::line::Line;
use crate::time::{parse_time, to_duration};

/// Row closing a day block.
pub const SUBTOTAL_MARKER: &str = "Total";

/// One project/start/finish row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<'a> {
    pub project: &'a str,
    pub start: NaiveTime,
    pub finish: NaiveTime,
}

impl<'a> Entry<'a> {
    pub fn from_line(line: &'a Line) -> Result<Self, EntryError> {
        let project = line.field(0).ok_or(EntryError::MissingField("project"))?;
        let start = time_field(line, 1, "start")?;
        let finish = time_field(line, 2, "finish")?;
        Ok(Self {
            project,
            start,
            finish,
        })
    }
}

fn time_field(line: &Line, index: usize, name: &'static str) -> Result<NaiveTime, EntryError> {
    let value = line.field(index).ok_or(EntryError::MissingField(name))?;
    parse_time(value).map_err(|source| EntryError::InvalidTime {
        value: value.to_string(),
        source,
    })
}

/// An entry row that was left out of its day's totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    /// 1-based line number in the export.
    pub line: usize,
    pub row: Line,
    pub reason: EntryError,
}

/// First start and last finish of the retained entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: NaiveTime,
    pub finish: NaiveTime,
}

/// Result of folding one day block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregate {
    /// `None` when no entry matched the project filter.
    pub span: Option<Span>,
    pub pause: TimeDelta,
    /// Rows consumed, including the closing `Total` row.
    pub consumed: usize,
    pub skipped: Vec<SkippedEntry>,
}

/// Aggregates the entries starting at `first` up to the next `Total` row.
///
/// Entries are folded in input order: the gap between one retained entry's
/// finish and the next one's start is added to the pause. Rows that fail to
/// parse are recorded in [`Aggregate::skipped`] and otherwise ignored.
pub fn aggregate_entries(
    lines: &[Line],
    first: usize,
    options: &ParseOptions,
) -> Result<Aggregate, ParseError> {
    let mut span: Option<Span> = None;
    let mut pause = TimeDelta::zero();
    let mut skipped = Vec::new();

    let mut index = first;
    loop {
        let Some(line) = lines.get(index) else {
            return Err(ParseError::format(
                first.saturating_sub(1),
                format!("day block is not closed by a {SUBTOTAL_MARKER:?} row"),
            ));
        };
        if line.is(SUBTOTAL_MARKER) {
            break;
        }
        index += 1;

        if options
            .project
            .as_deref()
            .is_some_and(|project| line.kind() != Some(project))
        {
            continue;
        }

        let entry = match Entry::from_line(line) {
            Ok(entry) => entry,
            Err(reason) => {
                let skip = SkippedEntry {
                    line: index,
                    row: line.clone(),
                    reason,
                };
                report_skipped(&skip, options.verbose);
                skipped.push(skip);
                continue;
            }
        };

        if entry.finish < entry.start {
            tracing::debug!(line = index, ?entry, "entry finishes before it starts");
        }

        span = Some(match span {
            None => Span {
                start: entry.start,
                finish: entry.finish,
            },
            Some(current) => {
                pause += to_duration(entry.start) - to_duration(current.finish);
                Span {
                    start: current.start,
                    finish: entry.finish,
                }
            }
        });
    }

    Ok(Aggregate {
        span,
        pause,
        consumed: index - first + 1,
        skipped,
    })
}

fn report_skipped(skip: &SkippedEntry, verbose: bool) {
    if verbose {
        tracing::warn!(line = skip.line, row = ?skip.row.fields(), reason = %skip.reason, "could not parse entry");
    } else {
        tracing::debug!(line = skip.line, row = ?skip.row.fields(), reason = %skip.reason, "could not parse entry");
    }
}
