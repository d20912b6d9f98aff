//! Rendering day records as CSV or JSON.

use std::io::Write;

use anyhow::{Context, Result};
use chrono::{NaiveTime, TimeDelta};
use clap::ValueEnum;
use hours_core::DayRecord;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Serialize, Serializer};

/// An output column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Date,
    Start,
    Finish,
    Pause,
    Total,
}

impl Field {
    pub const ALL: [Self; 5] = [Self::Date, Self::Start, Self::Finish, Self::Pause, Self::Total];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Start => "start",
            Self::Finish => "finish",
            Self::Pause => "pause",
            Self::Total => "total",
        }
    }

    pub fn render(self, record: &DayRecord) -> String {
        match self {
            Self::Date => record.date.format("%Y-%m-%d").to_string(),
            Self::Start => format_time(record.start),
            Self::Finish => format_time(record.finish),
            Self::Pause => format_duration(record.pause),
            Self::Total => format_duration(record.total),
        }
    }
}

fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Formats a duration as `H:MM`, with a leading `-` when negative.
pub fn format_duration(duration: TimeDelta) -> String {
    let minutes = duration.num_minutes();
    let sign = if minutes < 0 { "-" } else { "" };
    let minutes = minutes.unsigned_abs();
    format!("{sign}{}:{:02}", minutes / 60, minutes % 60)
}

/// Writes `days` as CSV with only the selected `fields`.
pub fn write_csv<W: Write>(writer: W, days: &[DayRecord], fields: &[Field], header: bool) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    if header {
        csv.write_record(fields.iter().map(|field| field.name()))
            .context("failed to write CSV header")?;
    }
    for day in days {
        csv.write_record(fields.iter().map(|field| field.render(day)))
            .with_context(|| format!("failed to write row for {}", day.date))?;
    }
    csv.flush().context("failed to flush CSV output")?;
    Ok(())
}

/// Writes `days` as a pretty-printed JSON array of objects.
pub fn write_json<W: Write>(mut writer: W, days: &[DayRecord], fields: &[Field]) -> Result<()> {
    let rows = Rows { days, fields };
    serde_json::to_writer_pretty(&mut writer, &rows).context("failed to write JSON output")?;
    writeln!(writer)?;
    Ok(())
}

struct Rows<'a> {
    days: &'a [DayRecord],
    fields: &'a [Field],
}

impl Serialize for Rows<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.days.len()))?;
        for day in self.days {
            seq.serialize_element(&Row {
                day,
                fields: self.fields,
            })?;
        }
        seq.end()
    }
}

/// One record as a map, in field order.
struct Row<'a> {
    day: &'a DayRecord,
    fields: &'a [Field],
}

impl Serialize for Row<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for field in self.fields {
            map.serialize_entry(field.name(), &field.render(self.day))?;
        }
        map.end()
    }
}
