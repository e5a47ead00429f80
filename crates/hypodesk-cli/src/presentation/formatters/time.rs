use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Table date format, e.g. `30-Oct-25`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d-%b-%y").to_string()
}

pub fn format_optional_date(date: Option<NaiveDate>) -> String {
    date.map(format_date).unwrap_or_else(|| "-".to_string())
}

/// Last-updated column: the calendar date of the timestamp, `-` when unknown.
pub fn format_updated(ts: Option<NaiveDateTime>) -> String {
    format_optional_date(ts.map(|ts| ts.date()))
}

/// "Last login" stamp in local time.
pub fn format_login(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&chrono::Local)
        .format("%d-%b-%y %H:%M")
        .to_string()
}
