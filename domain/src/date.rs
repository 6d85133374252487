use chrono::{DateTime, NaiveDateTime};

const DISPLAY_FORMAT: &str = "%b %-d, %Y, %I:%M %p";
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Formats a `created_at` timestamp as e.g. `Jan 5, 2024, 03:07 PM`.
///
/// Accepts RFC 3339 and naive ISO-8601 (what the API emits). Missing values
/// render empty and anything unparseable is shown verbatim.
pub fn format_date_added(created_at: Option<&str>) -> String {
    let Some(raw) = created_at.map(str::trim).filter(|s| !s.is_empty()) else {
        return String::new();
    };

    if let Ok(date_time) = DateTime::parse_from_rfc3339(raw) {
        return date_time.format(DISPLAY_FORMAT).to_string();
    }

    parse_naive(raw)
        .map(|date_time| date_time.format(DISPLAY_FORMAT).to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Milliseconds since the epoch for a `created_at` timestamp, for ordering.
/// Offsets are applied; naive timestamps are taken as UTC.
pub fn created_at_millis(created_at: &str) -> Option<i64> {
    let raw = created_at.trim();
    if let Ok(date_time) = DateTime::parse_from_rfc3339(raw) {
        return Some(date_time.timestamp_millis());
    }
    parse_naive(raw).map(|date_time| date_time.and_utc().timestamp_millis())
}

fn parse_naive(raw: &str) -> Option<NaiveDateTime> {
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naive_iso_timestamp() {
        assert_eq!(
            format_date_added(Some("2024-01-05T15:07:00")),
            "Jan 5, 2024, 03:07 PM"
        );
        assert_eq!(
            format_date_added(Some("2024-11-20T09:30:12.123456")),
            "Nov 20, 2024, 09:30 AM"
        );
    }

    #[test]
    fn test_rfc3339_keeps_its_offset() {
        assert_eq!(
            format_date_added(Some("2024-03-01T23:59:00+02:00")),
            "Mar 1, 2024, 11:59 PM"
        );
        assert_eq!(
            format_date_added(Some("2024-03-01T00:15:00Z")),
            "Mar 1, 2024, 12:15 AM"
        );
    }

    #[test]
    fn test_created_at_millis_orders_across_formats() {
        let naive = created_at_millis("2024-03-01T22:00:00").unwrap();
        let with_offset = created_at_millis("2024-03-01T23:59:00+02:00").unwrap();
        let utc = created_at_millis("2024-03-01T21:59:00Z").unwrap();

        // 23:59+02:00 is 21:59 UTC, which is before 22:00 naive
        assert_eq!(with_offset, utc);
        assert!(with_offset < naive);
        assert_eq!(created_at_millis("yesterday"), None);
    }

    #[test]
    fn test_missing_and_invalid() {
        assert_eq!(format_date_added(None), "");
        assert_eq!(format_date_added(Some("  ")), "");
        assert_eq!(format_date_added(Some("yesterday")), "yesterday");
    }
}
