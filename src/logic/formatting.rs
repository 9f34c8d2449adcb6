//! Formatting and display logic
//!
//! Pure functions for formatting data for human-readable display.

use chrono::{DateTime, NaiveDateTime};

/// Format a byte count for a config card
///
/// Below 1 KiB the exact count is shown; below 1 MiB one-decimal KB;
/// everything else one-decimal MB (no GB step, config files are small).
///
/// # Examples
/// ```
/// use sandtui::logic::formatting::format_bytes;
///
/// assert_eq!(format_bytes(500), "500 B");
/// assert_eq!(format_bytes(2048), "2.0 KB");
/// assert_eq!(format_bytes(3145728), "3.0 MB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes < KB {
        format!("{} B", bytes)
    } else if bytes < MB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    }
}

/// Format the backend's modification timestamp for display
///
/// The backend sends naive local ISO-8601 (`2024-03-01T10:15:30.123456`);
/// RFC 3339 with an offset is accepted too. Anything unparseable is shown
/// as received.
///
/// # Examples
/// ```
/// use sandtui::logic::formatting::format_modified;
///
/// assert_eq!(format_modified("2024-03-01T10:15:30.123456"), "2024-03-01 10:15:30");
/// assert_eq!(format_modified("yesterday"), "yesterday");
/// ```
pub fn format_modified(raw: &str) -> String {
    const DISPLAY: &str = "%Y-%m-%d %H:%M:%S";

    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return naive.format(DISPLAY).to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(DISPLAY).to_string();
    }

    raw.to_string()
}
