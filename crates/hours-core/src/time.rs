//! Clock-time parsing at minute precision.

use chrono::{NaiveTime, TimeDelta, Timelike};

use crate::error::TimeFormatError;

/// Parses a zero-padded 24-hour `HH:MM` string.
pub fn parse_time(s: &str) -> Result<NaiveTime, TimeFormatError> {
    let bytes = s.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return Err(TimeFormatError::Shape);
    }
    let digits = [bytes[0], bytes[1], bytes[3], bytes[4]];
    if !digits.iter().all(u8::is_ascii_digit) {
        return Err(TimeFormatError::Shape);
    }
    let [h1, h0, m1, m0] = digits.map(|b| u32::from(b - b'0'));
    NaiveTime::from_hms_opt(h1 * 10 + h0, m1 * 10 + m0, 0).ok_or(TimeFormatError::OutOfRange)
}

/// Elapsed time since midnight, truncated to whole minutes.
///
/// Subtracting two of these gives a signed duration, so a finish before its
/// start comes out negative.
pub fn to_duration(t: NaiveTime) -> TimeDelta {
    TimeDelta::minutes(i64::from(t.hour() * 60 + t.minute()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn parses_zero_padded_times() {
        assert_eq!(parse_time("09:05"), Ok(hm(9, 5)));
        assert_eq!(parse_time("00:00"), Ok(hm(0, 0)));
        assert_eq!(parse_time("23:59"), Ok(hm(23, 59)));
    }

    #[test]
    fn rejects_wrong_shape() {
        for input in ["9:05", "09:5", "0905", "09:05:00", "", "ab:cd", " 9:05", "09-05"] {
            assert_eq!(parse_time(input), Err(TimeFormatError::Shape), "{input:?}");
        }
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(parse_time("24:00"), Err(TimeFormatError::OutOfRange));
        assert_eq!(parse_time("12:60"), Err(TimeFormatError::OutOfRange));
    }

    #[test]
    fn duration_counts_minutes_since_midnight() {
        assert_eq!(to_duration(hm(0, 0)), TimeDelta::zero());
        assert_eq!(to_duration(hm(9, 30)), TimeDelta::minutes(570));
    }

    #[test]
    fn duration_difference_can_be_negative() {
        let diff = to_duration(hm(8, 0)) - to_duration(hm(9, 15));
        assert_eq!(diff, TimeDelta::minutes(-75));
    }
}
