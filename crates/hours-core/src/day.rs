//! Per-day output records.

use chrono::{NaiveDate, NaiveTime, TimeDelta};

use crate::aggregate::Aggregate;
use crate::scan::DayHeader;
use crate::time::to_duration;

/// One row of the flattened timesheet.
///
/// `total == (finish - start) - pause` at minute granularity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub finish: NaiveTime,
    pub pause: TimeDelta,
    pub total: TimeDelta,
    /// Rows from the scan cursor up to, not including, the `Total` row.
    pub lines: usize,
}

/// Outcome of assembling one day block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Day {
    Record(DayRecord),
    /// No entry matched the project filter.
    Empty { date: NaiveDate, lines: usize },
}

impl Day {
    /// Rows the driver has to advance past before the inter-day gap.
    pub const fn lines(&self) -> usize {
        match self {
            Self::Record(record) => record.lines,
            Self::Empty { lines, .. } => *lines,
        }
    }
}

/// Combines a scanned header and its aggregate into a [`Day`].
///
/// `cursor` is where scanning began, so skipped placeholder rows count toward
/// [`DayRecord::lines`].
pub fn assemble(cursor: usize, header: DayHeader, aggregate: &Aggregate) -> Day {
    let lines = header.index - cursor + aggregate.consumed;
    let Some(span) = aggregate.span else {
        return Day::Empty {
            date: header.date,
            lines,
        };
    };

    let total = to_duration(span.finish) - to_duration(span.start) - aggregate.pause;
    Day::Record(DayRecord {
        date: header.date,
        start: span.start,
        finish: span.finish,
        pause: aggregate.pause,
        total,
        lines,
    })
}
