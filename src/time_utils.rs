// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time parsing and formatting.

use chrono::{DateTime, Datelike, NaiveDateTime, SecondsFormat, Utc, Weekday};

/// Twitter archive format: "Sat Sep 29 20:37:36 +0000 2018".
const TWITTER_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";
const NAIVE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Day labels indexed by days since Sunday.
pub const DAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Parse a post's `created_at` field.
///
/// Returns `None` for anything unparseable; callers omit date-dependent fields.
pub fn parse_created_at(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    DateTime::parse_from_str(raw, TWITTER_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, NAIVE_FORMAT)
                .ok()
                .map(|naive| naive.and_utc())
        })
}

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Long form used in summaries: "Monday, January 18, 2021".
pub fn format_long_date(date: DateTime<Utc>) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Short weekday label ("Sun".."Sat").
pub fn day_label(date: DateTime<Utc>) -> &'static str {
    DAY_LABELS[date.weekday().num_days_from_sunday() as usize]
}

pub fn is_weekend(date: DateTime<Utc>) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_twitter_format() {
        let parsed = parse_created_at("Sat Sep 29 20:37:36 +0000 2018").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2018, 9, 29, 20, 37, 36).unwrap());
    }

    #[test]
    fn test_parse_twitter_format_with_offset() {
        let parsed = parse_created_at("Mon Jan 18 08:00:00 -0500 2021").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2021, 1, 18, 13, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_rfc3339_and_naive() {
        assert_eq!(
            parse_created_at("2018-09-29T20:37:36Z"),
            Some(Utc.with_ymd_and_hms(2018, 9, 29, 20, 37, 36).unwrap())
        );
        assert_eq!(
            parse_created_at("2018-09-29 20:37:36"),
            Some(Utc.with_ymd_and_hms(2018, 9, 29, 20, 37, 36).unwrap())
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(parse_created_at(""), None);
        assert_eq!(parse_created_at("not a date"), None);
        assert_eq!(parse_created_at("Sat Sep 99 20:37:36 +0000 2018"), None);
    }

    #[test]
    fn test_formatting() {
        let date = Utc.with_ymd_and_hms(2021, 1, 18, 10, 30, 0).unwrap();
        assert_eq!(format_utc_rfc3339(date), "2021-01-18T10:30:00Z");
        assert_eq!(format_long_date(date), "Monday, January 18, 2021");
        assert_eq!(day_label(date), "Mon");
        assert!(!is_weekend(date));

        let sunday = Utc.with_ymd_and_hms(2021, 1, 17, 10, 30, 0).unwrap();
        assert_eq!(day_label(sunday), "Sun");
        assert!(is_weekend(sunday));
    }
}
