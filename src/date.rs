//! Calendar date recognition for cell values.
//!
//! A cell is a date when it matches one of the accepted grammars and names a real calendar day:
//! * `M/d/yyyy`, `M-d-yyyy`, `M.d.yyyy` and the same with a two digit year, where `00`-`29`
//!   are years of the 2000s and `30`-`99` years of the 1900s
//! * `yyyy-M-d`, `yyyy/M/d`, `yyyy.M.d`, optionally followed by an ISO 8601 time which is
//!   discarded
//! * `January 5, 1990`, `Jan 5 1990`, `5 January 1990` and similar English month name forms
//!
//! Recognized dates are rendered as `M/d/yyyy` without zero padding.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

const CANONICAL_FORMAT: &str = "%-m/%-d/%Y";

const MONTH_NAME_FORMATS: [&str; 4] = ["%B %d, %Y", "%B %d %Y", "%d %B %Y", "%d %B, %Y"];

static MONTH_DAY_YEAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{1,2})([/.\-])(\d{1,2})([/.\-])(\d{4}|\d{2})$").unwrap()
});

static YEAR_MONTH_DAY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(\d{4})([/.\-])(\d{1,2})([/.\-])(\d{1,2})(?:T\d{2}:\d{2}(?::\d{2}(?:\.\d+)?)?(?:Z|[+\-]\d{2}:?\d{2})?)?$",
    )
    .unwrap()
});

static MONTH_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)[a-z]{3,9}").unwrap());

/// Parse `value` as a calendar date. Returns `None` when the value is plain text.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use record_merger::date::parse;
/// assert_eq!(parse("01/01/1990"), NaiveDate::from_ymd_opt(1990, 1, 1));
/// assert_eq!(parse("Blue"), None);
/// ```
pub fn parse(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Some(captures) = MONTH_DAY_YEAR.captures(value) {
        // mixed separators such as 1/1-1990 are not dates
        if captures[2] != captures[4] {
            return None;
        }
        let month = captures[1].parse::<u32>().ok()?;
        let day = captures[3].parse::<u32>().ok()?;
        let year = expand_year(&captures[5])?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    if let Some(captures) = YEAR_MONTH_DAY.captures(value) {
        if captures[2] != captures[4] {
            return None;
        }
        let year = captures[1].parse::<i32>().ok()?;
        let month = captures[3].parse::<u32>().ok()?;
        let day = captures[5].parse::<u32>().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    if MONTH_NAME.is_match(value) {
        return MONTH_NAME_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(value, format).ok());
    }

    None
}

/// Rewrite `value` to the canonical date rendering if it is a date, otherwise return it as is.
///
/// Normalizing an already canonical value returns the same value.
pub fn normalize(value: &str) -> String {
    match parse(value) {
        Some(date) => render(&date),
        None => value.to_string(),
    }
}

/// Render a date as `M/d/yyyy`.
pub fn render(date: &NaiveDate) -> String {
    date.format(CANONICAL_FORMAT).to_string()
}

fn expand_year(year: &str) -> Option<i32> {
    let value = year.parse::<i32>().ok()?;
    if year.len() == 2 {
        if value < 30 {
            Some(2000 + value)
        } else {
            Some(1900 + value)
        }
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::date::{normalize, parse};

    #[test]
    fn test_month_day_year() {
        assert_eq!(parse("01/01/1990"), NaiveDate::from_ymd_opt(1990, 1, 1));
        assert_eq!(parse("1-1-1990"), NaiveDate::from_ymd_opt(1990, 1, 1));
        assert_eq!(parse("12.12.1985"), NaiveDate::from_ymd_opt(1985, 12, 12));
        assert_eq!(parse(" 11/01/1986 "), NaiveDate::from_ymd_opt(1986, 11, 1));
    }

    #[test]
    fn test_two_digit_year() {
        assert_eq!(parse("5/5/93"), NaiveDate::from_ymd_opt(1993, 5, 5));
        assert_eq!(parse("5/5/29"), NaiveDate::from_ymd_opt(2029, 5, 5));
        assert_eq!(parse("5/5/30"), NaiveDate::from_ymd_opt(1930, 5, 5));
    }

    #[test]
    fn test_year_month_day() {
        assert_eq!(parse("1990-01-02"), NaiveDate::from_ymd_opt(1990, 1, 2));
        assert_eq!(parse("1990/1/2"), NaiveDate::from_ymd_opt(1990, 1, 2));
        assert_eq!(parse("1990-01-02T10:30:00Z"), NaiveDate::from_ymd_opt(1990, 1, 2));
        assert_eq!(parse("1990-01-02T10:30+02:00"), NaiveDate::from_ymd_opt(1990, 1, 2));
    }

    #[test]
    fn test_month_names() {
        assert_eq!(parse("January 5, 1990"), NaiveDate::from_ymd_opt(1990, 1, 5));
        assert_eq!(parse("Jan 5 1990"), NaiveDate::from_ymd_opt(1990, 1, 5));
        assert_eq!(parse("5 March 1990"), NaiveDate::from_ymd_opt(1990, 3, 5));
    }

    #[test]
    fn test_not_dates() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("Blue"), None);
        assert_eq!(parse("johnsmith@example.com"), None);
        assert_eq!(parse("1990"), None);
        assert_eq!(parse("12/12"), None);
        assert_eq!(parse("2/30/1990"), None);
        assert_eq!(parse("13/1/1990"), None);
        assert_eq!(parse("1/1-1990"), None);
        assert_eq!(parse("1.5"), None);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("01/01/1990"), "1/1/1990");
        assert_eq!(normalize("11/01/1986"), "11/1/1986");
        assert_eq!(normalize("1985-12-12"), "12/12/1985");
        assert_eq!(normalize("Purple"), "Purple");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for value in ["01/01/1990", "1-1-1990", "1985-12-12", "Jan 5 1990", "5/5/93", "Teal", ""] {
            let once = normalize(value);
            assert_eq!(normalize(&once), once, "value: {value}");
        }
    }
}
