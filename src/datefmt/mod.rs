use chrono::{DateTime, Datelike, NaiveDateTime, Utc};
use thiserror::Error;

/// Raised when a shipment date can't be parsed
#[derive(Debug, Error)]
#[error("unparseable timestamp: {0:?}")]
pub struct FormatError(pub String);

/// Render a machine-readable timestamp in the long form used in replies,
/// e.g. "Monday, January 2nd 2023, 3:04:05 PM".
///
/// Accepts RFC 3339 (offsets are normalized to UTC), a naive
/// `YYYY-MM-DDTHH:MM:SS` (assumed UTC), and integer epoch values. Output is
/// fixed to UTC with English month and weekday names, so a given input
/// always renders the same string.
pub fn format_shipment_date(input: &str) -> Result<String, FormatError> {
    let dt = parse_timestamp(input)?;
    let day = dt.day();
    Ok(format!(
        "{}, {} {}{} {}, {}",
        dt.format("%A"),
        dt.format("%B"),
        day,
        ordinal_suffix(day),
        dt.format("%Y"),
        dt.format("%-I:%M:%S %p"),
    ))
}

fn parse_timestamp(input: &str) -> Result<DateTime<Utc>, FormatError> {
    let trimmed = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt.and_utc());
    }

    if let Ok(epoch) = trimmed.parse::<i64>() {
        // Millisecond epochs run 13 digits; second epochs stay under 12
        // until the year 5138.
        let dt = if epoch.abs() >= 100_000_000_000 {
            DateTime::from_timestamp_millis(epoch)
        } else {
            DateTime::from_timestamp(epoch, 0)
        };
        return dt.ok_or_else(|| FormatError(input.to_string()));
    }

    Err(FormatError(input.to_string()))
}

fn ordinal_suffix(day: u32) -> &'static str {
    match day {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}
