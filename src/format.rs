/// Display formatting for card metadata
use chrono::{DateTime, TimeZone};
use std::fmt::Display;

const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Human-readable size using 1024-based units.
///
/// Values under 10 in KB/MB/GB keep one decimal place (trailing `.0`
/// dropped), everything else is rounded to a whole number.
/// Zero, negative and non-finite input render as "0 B".
pub fn format_bytes(bytes: f64) -> String {
    if !bytes.is_finite() || bytes <= 0.0 {
        return "0 B".to_string();
    }

    let mut value = bytes;
    let mut exponent = 0;
    while value >= 1024.0 && exponent < UNITS.len() - 1 {
        value /= 1024.0;
        exponent += 1;
    }

    let rendered = if exponent > 0 && value < 10.0 {
        let rounded = (value * 10.0).round() / 10.0;
        if rounded.fract() == 0.0 {
            format!("{}", rounded as u64)
        } else {
            format!("{:.1}", rounded)
        }
    } else {
        format!("{}", value.round() as u64)
    };

    format!("{} {}", rendered, UNITS[exponent])
}

/// Short time-of-day stamp, e.g. "14:05"
pub fn format_time_of_day<Tz>(timestamp: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    timestamp.format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_format_bytes_table() {
        assert_eq!(format_bytes(0.0), "0 B");
        assert_eq!(format_bytes(512.0), "512 B");
        assert_eq!(format_bytes(1023.0), "1023 B");
        assert_eq!(format_bytes(1024.0), "1 KB");
        assert_eq!(format_bytes(1536.0), "1.5 KB");
        assert_eq!(format_bytes(10240.0), "10 KB");
        assert_eq!(format_bytes(1024.0 * 1024.0 * 2.25), "2.3 MB");
        assert_eq!(format_bytes(1024.0 * 1024.0 * 512.0), "512 MB");
        assert_eq!(format_bytes(1024f64.powi(3) * 3.0), "3 GB");
    }

    #[test]
    fn test_format_bytes_caps_at_gb() {
        assert_eq!(format_bytes(1024f64.powi(4)), "1024 GB");
    }

    #[test]
    fn test_format_bytes_invalid_input() {
        assert_eq!(format_bytes(-1.0), "0 B");
        assert_eq!(format_bytes(f64::NAN), "0 B");
        assert_eq!(format_bytes(f64::INFINITY), "0 B");
    }

    #[test]
    fn test_format_time_of_day() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 9, 7, 4, 59).unwrap();
        assert_eq!(format_time_of_day(&ts), "07:04");
    }
}
