use chrono::{Local, NaiveDate, NaiveDateTime};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Wall-clock "now" in the local time zone.
pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Date sent to the backend status check (`YYYY-MM-DD`).
pub fn to_backend_date(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// Long human date, e.g. `Monday, October 19, 2026`.
pub fn format_long(d: NaiveDate) -> String {
    d.format("%A, %B %-d, %Y").to_string()
}
