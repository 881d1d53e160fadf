//! Resolution of the transaction window a round-up covers.

use chrono::{Datelike, Days, NaiveDate, NaiveTime};

use crate::constants::ROUND_UP_WINDOW_DAYS;
use crate::{Error, Result};

const MAX_YEAR: i32 = 9999;
const DATE_FORMAT: &str = "%Y-%m-%d";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Inclusive window of transactions rounded up in one request.
///
/// The window starts on the requested date and ends exactly seven days later,
/// both at midnight UTC. No weekday snapping is done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// Start of the window, e.g. `2023-10-20T00:00:00.000Z`.
    pub fn start_timestamp(&self) -> String {
        render_timestamp(self.start)
    }

    /// End of the window, e.g. `2023-10-27T00:00:00.000Z`.
    pub fn end_timestamp(&self) -> String {
        render_timestamp(self.end)
    }
}

/// Parses a `YYYY-MM-DD` date and derives its round-up window.
///
/// # Errors
///
/// Returns [`Error::DateFormat`] when the input is not a zero-padded
/// `YYYY-MM-DD` calendar date, or when the window would end past year 9999.
pub fn resolve_window(date: &str) -> Result<DateWindow> {
    let start = parse_date(date)?;
    let end = start
        .checked_add_days(Days::new(ROUND_UP_WINDOW_DAYS as u64))
        .filter(|end| end.year() <= MAX_YEAR)
        .ok_or_else(|| Error::DateFormat(date.to_string()))?;
    Ok(DateWindow { start, end })
}

fn parse_date(date: &str) -> Result<NaiveDate> {
    let segments: Vec<&str> = date.split('-').collect();
    let well_formed = segments.len() == 3
        && segments
            .iter()
            .zip([4usize, 2, 2])
            .all(|(segment, width)| {
                segment.len() == width && segment.bytes().all(|b| b.is_ascii_digit())
            });
    if !well_formed {
        return Err(Error::DateFormat(date.to_string()));
    }
    NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|_| Error::DateFormat(date.to_string()))
}

fn render_timestamp(date: NaiveDate) -> String {
    date.and_time(NaiveTime::MIN)
        .and_utc()
        .format(TIMESTAMP_FORMAT)
        .to_string()
}
