/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application
use chrono::{DateTime, NaiveDate, NaiveTime, SecondsFormat, Utc};

/// Format ISO datetime string to YYYY-MM-DD HH:MM:SS format
/// Example: "2024-03-15T14:02:26.123Z" -> "2024-03-15 14:02:26"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(datetime_str) {
        return dt.with_timezone(&Utc).format("%Y-%m-%d %H:%M:%S").to_string();
    }
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        let time = time_part.split('.').next().unwrap_or(time_part);
        return format!("{} {}", date_part, time.trim_end_matches('Z'));
    }
    datetime_str.to_string()
}

/// Format optional timestamp, "-" when absent
pub fn format_timestamp(timestamp: Option<&str>) -> String {
    match timestamp {
        Some(ts) if !ts.is_empty() => format_datetime(ts),
        _ => "-".to_string(),
    }
}

/// Parse value of `<input type="date">` ("YYYY-MM-DD"); empty -> None
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Start of day in UTC: "2024-01-01T00:00:00.000Z"
pub fn day_start_iso(date: NaiveDate) -> String {
    to_iso_millis(date.and_time(NaiveTime::MIN))
}

/// Inclusive end of day in UTC: "2024-01-31T23:59:59.999Z"
pub fn day_end_iso(date: NaiveDate) -> String {
    let end = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
    to_iso_millis(date.and_time(end))
}

fn to_iso_millis(naive: chrono::NaiveDateTime) -> String {
    naive
        .and_utc()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}
