//! DateTime rendering utilities.

use chrono::{DateTime, Utc};

/// Fixed textual form used when a timestamp is rendered for export.
pub const UTC_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Renders a timestamp in the normalized UTC display form.
///
/// Sub-second precision is dropped.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use tally_domain::common::format_utc;
///
/// let dt = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
/// assert_eq!(format_utc(dt), "2024-01-15 10:30:00 UTC");
/// ```
pub fn format_utc(dt: DateTime<Utc>) -> String {
    dt.format(UTC_DISPLAY_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};

    #[test]
    fn test_format_utc_normalizes_offset() {
        let offset = FixedOffset::east_opt(5 * 3600).unwrap();
        let local = offset.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(
            format_utc(local.with_timezone(&Utc)),
            "2024-01-15 05:30:00 UTC"
        );
    }

    #[test]
    fn test_format_utc_drops_subseconds() {
        let dt = Utc.timestamp_opt(1_700_000_000, 999_000_000).unwrap();
        assert_eq!(format_utc(dt), "2023-11-14 22:13:20 UTC");
    }
}
