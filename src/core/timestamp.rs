//! Date and time rendering for log line headers
//!
//! Renders the `DATE`, `TIME` and `MICROSECONDS` parts of a line header in the
//! fixed layout `2009/01/23 01:23:23.123123 `. The time zone is local unless
//! `UTC` is requested.

use super::flags::Flags;
use chrono::{DateTime, Local, Utc};
use std::fmt::Write;

/// Instant a log line was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    #[must_use]
    pub fn now() -> Self {
        Timestamp(Utc::now())
    }

    #[must_use]
    pub fn from_datetime(datetime: DateTime<Utc>) -> Self {
        Timestamp(datetime)
    }

    /// Append the date/time header components selected by `flags` to `buf`.
    ///
    /// Each rendered component is followed by a single space. Nothing is
    /// written when no date or time flag is set.
    pub fn render(&self, flags: Flags, buf: &mut String) {
        if !flags.has_timestamp() {
            return;
        }

        if flags.contains(Flags::UTC) {
            Self::render_in(&self.0, flags, buf);
        } else {
            Self::render_in(&self.0.with_timezone(&Local), flags, buf);
        }
    }

    fn render_in<Tz>(datetime: &DateTime<Tz>, flags: Flags, buf: &mut String)
    where
        Tz: chrono::TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        // Writing into a String cannot fail.
        if flags.contains(Flags::DATE) {
            let _ = write!(buf, "{} ", datetime.format("%Y/%m/%d"));
        }
        if flags.contains(Flags::TIME) || flags.contains(Flags::MICROSECONDS) {
            let _ = write!(buf, "{}", datetime.format("%H:%M:%S"));
            if flags.contains(Flags::MICROSECONDS) {
                let _ = write!(buf, "{}", datetime.format(".%6f"));
            }
            buf.push(' ');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_timestamp() -> Timestamp {
        // 2025-01-08 10:30:45.123456 UTC
        let datetime = Utc
            .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
            + chrono::Duration::microseconds(123456);
        Timestamp::from_datetime(datetime)
    }

    fn render(flags: Flags) -> String {
        let mut buf = String::new();
        fixed_timestamp().render(flags | Flags::UTC, &mut buf);
        buf
    }

    #[test]
    fn test_no_flags_renders_nothing() {
        assert_eq!(render(Flags::NONE), "");
        assert_eq!(render(Flags::SHORT_FILE), "");
    }

    #[test]
    fn test_date() {
        assert_eq!(render(Flags::DATE), "2025/01/08 ");
    }

    #[test]
    fn test_time() {
        assert_eq!(render(Flags::TIME), "10:30:45 ");
    }

    #[test]
    fn test_microseconds_implies_time() {
        assert_eq!(render(Flags::MICROSECONDS), "10:30:45.123456 ");
        assert_eq!(render(Flags::TIME | Flags::MICROSECONDS), "10:30:45.123456 ");
    }

    #[test]
    fn test_date_and_time() {
        assert_eq!(
            render(Flags::DATE | Flags::TIME | Flags::MICROSECONDS),
            "2025/01/08 10:30:45.123456 "
        );
    }

    #[test]
    fn test_utc_flag_alone_renders_nothing() {
        let mut buf = String::new();
        fixed_timestamp().render(Flags::UTC, &mut buf);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_local_time_layout() {
        let mut buf = String::new();
        Timestamp::now().render(Flags::STD, &mut buf);

        // "YYYY/MM/DD HH:MM:SS "
        assert_eq!(buf.len(), 20);
        assert_eq!(&buf[4..5], "/");
        assert_eq!(&buf[10..11], " ");
        assert_eq!(&buf[13..14], ":");
        assert!(buf.ends_with(' '));
    }
}
