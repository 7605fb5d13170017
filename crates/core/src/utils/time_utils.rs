use chrono::{DateTime, Days, NaiveDate, Utc};

use crate::constants::MILLIS_PER_DAY;

/// Today's calendar date in UTC.
///
/// Only services call this; every date-derived calculation takes the date
/// as an explicit argument instead.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Whole days from `from` to `to`, rounded up.
///
/// Partial days count as a full day in the direction of positive infinity,
/// so a span of -3.5 days yields -3 and 3.5 days yields 4.
pub fn ceil_days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    let millis = (to - from).num_milliseconds();
    let whole = millis / MILLIS_PER_DAY;
    if millis % MILLIS_PER_DAY > 0 {
        whole + 1
    } else {
        whole
    }
}

/// Adds calendar days to a date. Returns `None` on overflow.
pub fn add_calendar_days(date: NaiveDate, days: u32) -> Option<NaiveDate> {
    date.checked_add_days(Days::new(u64::from(days)))
}
