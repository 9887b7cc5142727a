use chrono::{NaiveDateTime, ParseResult};

/// Export timestamp layout: `1/2/24, 10:30 AM`
pub const TIMESTAMP_FORMAT: &str = "%m/%d/%y, %I:%M %p";

/// Narrow no-break space some locales put between the minutes and the meridiem
pub const NARROW_NBSP: char = '\u{202f}';

/// Replace the narrow no-break space with a regular space
pub fn normalize_spaces(raw: &str) -> String {
    raw.replace(NARROW_NBSP, " ")
}

/// Parse a boundary match such as `"1/2/24, 10:30 AM - "` into a timestamp
///
/// The trailing dash separator is removed before parsing, whatever whitespace surrounds
/// it (a tab or a no-break space is as valid as a plain space). Parsing is strict: an
/// out-of-range hour or an impossible date is an error.
pub fn parse_stamp(raw: &str) -> ParseResult<NaiveDateTime> {
    let normalized = normalize_spaces(raw);
    let stamp = normalized.trim_end();
    let stamp = stamp.strip_suffix('-').map_or(stamp, str::trim_end);
    NaiveDateTime::parse_from_str(stamp.trim_start(), TIMESTAMP_FORMAT)
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};

    use super::*;

    #[test]
    fn test_parse_stamp_single_digit_fields() {
        let ts = parse_stamp("1/2/24, 9:05 AM - ").unwrap();
        assert_eq!((ts.year(), ts.month(), ts.day()), (2024, 1, 2));
        assert_eq!((ts.hour(), ts.minute()), (9, 5));
    }

    #[test]
    fn test_parse_stamp_pm_and_noon() {
        assert_eq!(parse_stamp("12/31/23, 11:59 PM - ").unwrap().hour(), 23);
        assert_eq!(parse_stamp("12/31/23, 12:00 PM - ").unwrap().hour(), 12);
        assert_eq!(parse_stamp("12/31/23, 12:00 AM - ").unwrap().hour(), 0);
    }

    #[test]
    fn test_parse_stamp_narrow_nbsp() {
        let ts = parse_stamp("3/14/24, 3:15\u{202f}PM - ").unwrap();
        assert_eq!(ts.hour(), 15);
    }

    #[test]
    fn test_parse_stamp_any_whitespace_around_separator() {
        let ts = parse_stamp("1/2/24, 10:30 AM -\u{a0}").unwrap();
        assert_eq!((ts.hour(), ts.minute()), (10, 30));
        let ts = parse_stamp("1/2/24, 10:31 AM\t- ").unwrap();
        assert_eq!((ts.hour(), ts.minute()), (10, 31));
    }

    #[test]
    fn test_parse_stamp_without_separator() {
        assert_eq!(parse_stamp("1/2/24, 10:30 PM").unwrap().hour(), 22);
    }

    #[test]
    fn test_parse_stamp_rejects_24_hour_value() {
        assert!(parse_stamp("1/2/24, 13:30 PM - ").is_err());
    }

    #[test]
    fn test_parse_stamp_rejects_impossible_date() {
        assert!(parse_stamp("2/30/24, 10:00 AM - ").is_err());
        assert!(parse_stamp("13/1/24, 10:00 AM - ").is_err());
    }

    #[test]
    fn test_normalize_spaces() {
        assert_eq!(normalize_spaces("10:30\u{202f}AM"), "10:30 AM");
        assert_eq!(normalize_spaces("no change"), "no change");
    }
}
