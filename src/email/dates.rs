//! Alert timestamp normalization.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Formats with a time component, tried first.
const DATETIME_FORMATS: &[&str] = &["%b %d, %Y, %H:%M"];

/// Date-only formats, tried in order; matches land on midnight. The DD/MM
/// variant sits before MM/DD, so an ambiguous value like 05/03/2025 reads as
/// 5 March.
const DATE_FORMATS: &[&str] = &["%d-%m-%Y", "%Y-%m-%d", "%d/%m/%Y", "%m/%d/%Y"];

/// Parse an extracted date capture into a timestamp.
///
/// Unparsable input (including empty) falls back to the current local time, so
/// the record survives with an imprecise date instead of being dropped. This
/// trades date precision for record availability; callers that need to detect
/// the fallback can compare against wall-clock bounds.
pub fn parse_date(text: &str) -> NaiveDateTime {
    let text = text.trim();

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, fmt) {
            return dt;
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, fmt) {
            return date.and_time(NaiveTime::MIN);
        }
    }

    log::debug!("unparsable date {text:?}, falling back to current time");
    Local::now().naive_local()
}
