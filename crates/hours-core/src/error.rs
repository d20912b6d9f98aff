//! Error types for export parsing.

use std::io;

use thiserror::Error;

/// Fatal parse errors. Either kind aborts the whole document.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The input could not be opened or read.
    #[error("cannot read {origin}: {source}")]
    Access {
        origin: String,
        #[source]
        source: io::Error,
    },
    /// A structural line does not have the expected shape.
    #[error("line {line}: {message}")]
    Format { line: usize, message: String },
}

impl ParseError {
    pub(crate) fn format(index: usize, message: impl Into<String>) -> Self {
        // Reported line numbers are 1-based.
        Self::Format {
            line: index + 1,
            message: message.into(),
        }
    }
}

/// Why a single entry row was skipped.
///
/// These never abort a day; they end up in [`crate::ParseReport::skipped_entries`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    #[error("missing {0} field")]
    MissingField(&'static str),
    #[error("invalid time {value:?}")]
    InvalidTime {
        value: String,
        #[source]
        source: TimeFormatError,
    },
}

/// A clock-time string that is not `HH:MM`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeFormatError {
    #[error("expected HH:MM")]
    Shape,
    #[error("hour or minute out of range")]
    OutOfRange,
}
