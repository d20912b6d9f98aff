//! Tokenized export rows and the header-year extractor.

use std::io::{self, BufRead};

use csv::{ReaderBuilder, StringRecord};

use crate::error::ParseError;

/// Index of the header row carrying the report period.
const YEAR_LINE: usize = 1;

/// One input row split on the field delimiter.
///
/// A physically empty row has zero fields; blank separators are significant in
/// the export layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    fields: Vec<String>,
}

impl Line {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    /// The row-kind discriminator (field 0).
    pub fn kind(&self) -> Option<&str> {
        self.field(0)
    }

    /// Whether field 0 is exactly `marker`.
    pub fn is(&self, marker: &str) -> bool {
        self.kind() == Some(marker)
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

/// Reads every row of `reader` into a [`Line`].
///
/// Rows are tokenized one at a time because the `csv` reader drops empty
/// records, while the export uses them as separators.
pub fn read_lines<R: BufRead>(reader: R, origin: &str) -> Result<Vec<Line>, ParseError> {
    let mut lines = Vec::new();
    let mut record = StringRecord::new();

    for (idx, raw) in reader.lines().enumerate() {
        let raw = raw.map_err(|source| {
            if source.kind() == io::ErrorKind::InvalidData {
                ParseError::format(idx, "row is not valid UTF-8")
            } else {
                ParseError::Access {
                    origin: origin.to_string(),
                    source,
                }
            }
        })?;
        if raw.is_empty() {
            lines.push(Line::default());
            continue;
        }

        let mut row = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(raw.as_bytes());
        let found = row
            .read_record(&mut record)
            .map_err(|err| ParseError::format(idx, format!("malformed row: {err}")))?;
        lines.push(if found {
            Line::new(&record)
        } else {
            Line::default()
        });
    }

    tracing::debug!(origin, count = lines.len(), "tokenized export");
    Ok(lines)
}

/// Extracts the report year: the third space-separated token of line 1.
pub fn parse_year(lines: &[Line]) -> Result<i32, ParseError> {
    let header = lines
        .get(YEAR_LINE)
        .and_then(Line::kind)
        .ok_or_else(|| ParseError::format(YEAR_LINE, "missing report header"))?;

    let token = header
        .split(' ')
        .nth(2)
        .ok_or_else(|| ParseError::format(YEAR_LINE, format!("no year in header {header:?}")))?;

    token.parse().map_err(|_| {
        ParseError::format(YEAR_LINE, format!("year {token:?} is not a number"))
    })
}
