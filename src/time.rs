use chrono::{DateTime, Datelike, NaiveDateTime, TimeDelta, Timelike, Utc};

pub fn hour_fraction<T: Timelike>(ts: &T) -> f64 {
    let seconds = ts.second() as f64 + ts.nanosecond() as f64 * 1e-9;
    ts.hour() as f64 + ts.minute() as f64 / 60.0 + seconds / 3600.0
}

/// The month enters un-decremented (January contributes `30.6001 * 2`), so this is not a
/// Julian day and it steps backwards at the turn of the year.
pub fn continuous_time<T: Datelike + Timelike>(ts: &T) -> f64 {
    let year = ts.year() as f64;
    let month = ts.month() as f64;
    let day = ts.day() as f64;

    (365.25 * (year - 2000.0)).floor() + (30.6001 * (month + 1.0)).floor()
        - (0.01 * year).floor()
        + day
        + 0.0416667 * hour_fraction(ts)
        - 21958.0
}

pub fn time_range(start: NaiveDateTime, step: TimeDelta, periods: usize) -> Option<Vec<NaiveDateTime>> {
    let mut series = Vec::with_capacity(periods);
    let mut current = start;
    for i in 0..periods {
        if i > 0 {
            current = current.checked_add_signed(step)?;
        }
        series.push(current);
    }
    Some(series)
}

pub fn from_unix_seconds(secs: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
}
