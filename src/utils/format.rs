//! Formatting utilities for file sizes and dates.

use chrono::{DateTime, Utc};

const SIZE_UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Format a byte count with 1024-based units (e.g., "1.5 KB", "2 MB").
///
/// One decimal at most; a trailing ".0" is dropped.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut exponent = 0;
    let mut scaled = bytes;
    while scaled >= 1024 && exponent < SIZE_UNITS.len() - 1 {
        scaled /= 1024;
        exponent += 1;
    }

    let value = bytes as f64 / 1024f64.powi(exponent as i32);
    let rounded = format!("{value:.1}");
    let trimmed = rounded.strip_suffix(".0").unwrap_or(&rounded);
    format!("{} {}", trimmed, SIZE_UNITS[exponent])
}

/// Format a timestamp as ISO date (YYYY-MM-DD).
pub fn format_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(500), "500 B");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1_024_000), "1000 KB");
        assert_eq!(format_size(2_048_000), "2 MB");
        assert_eq!(format_size(4_194_304), "4 MB");
    }

    #[test]
    fn test_format_size_caps_at_gb() {
        assert_eq!(format_size(2 * 1024 * 1024 * 1024 * 1024), "2048 GB");
    }

    #[test]
    fn test_format_date() {
        let ts: DateTime<Utc> = "2024-02-20T10:00:00Z".parse().unwrap();
        assert_eq!(format_date(&ts), "2024-02-20");
    }
}
