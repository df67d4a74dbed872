//! Lenient date/time input, normalized to the `YYYY-MM-DD` / `HH:MM` form format.

use anyhow::Result;
use eventdesk_core::event::{DATE_FORMAT, TIME_FORMAT, parse_date, parse_time};

/// Expand common abbreviations that fuzzydate doesn't handle.
fn expand_abbreviations(input: &str) -> String {
    let abbrevs = [
        ("mon", "monday"),
        ("tue", "tuesday"),
        ("tues", "tuesday"),
        ("wed", "wednesday"),
        ("thu", "thursday"),
        ("thur", "thursday"),
        ("thurs", "thursday"),
        ("fri", "friday"),
        ("sat", "saturday"),
        ("sun", "sunday"),
        ("jan", "january"),
        ("feb", "february"),
        ("mar", "march"),
        ("apr", "april"),
        ("jun", "june"),
        ("jul", "july"),
        ("aug", "august"),
        ("sep", "september"),
        ("sept", "september"),
        ("oct", "october"),
        ("nov", "november"),
        ("dec", "december"),
    ];

    input
        .to_lowercase()
        .split_whitespace()
        .map(|word| {
            abbrevs
                .iter()
                .find(|(abbr, _)| *abbr == word)
                .map(|(_, full)| *full)
                .unwrap_or(word)
                .to_string()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a date typed into the form: `YYYY-MM-DD`, or a phrase like
/// "tomorrow" or "next fri". Returns the date as `YYYY-MM-DD`.
pub fn parse_date_input(input: &str) -> Result<String> {
    let input = input.trim();
    if input.is_empty() {
        anyhow::bail!("Date is required");
    }

    if let Ok(date) = parse_date(input) {
        return Ok(date.format(DATE_FORMAT).to_string());
    }

    let expanded = expand_abbreviations(input);
    let dt = fuzzydate::parse(&expanded)
        .map_err(|_| anyhow::anyhow!("Could not parse date: \"{}\"", input))?;

    Ok(dt.date().format(DATE_FORMAT).to_string())
}

/// Parse a time typed into the form: `HH:MM` (24-hour), or `3pm` / `9:30 am`
/// style. Returns the time as `HH:MM`.
pub fn parse_time_input(input: &str) -> Result<String> {
    let input = input.trim();
    if input.is_empty() {
        anyhow::bail!("Time is required");
    }

    if let Ok(time) = parse_time(input) {
        return Ok(time.format(TIME_FORMAT).to_string());
    }

    if has_am_pm(input) {
        let dt = fuzzydate::parse(&format!("today {}", input.to_lowercase()))
            .map_err(|_| anyhow::anyhow!("Could not parse time: \"{}\"", input))?;
        return Ok(dt.time().format(TIME_FORMAT).to_string());
    }

    anyhow::bail!("Could not parse time: \"{}\". Use HH:MM, e.g. 14:30", input)
}

/// Check for am/pm patterns like "6pm", "6 pm", "11am", "9:30am".
fn has_am_pm(input: &str) -> bool {
    let lower = input.to_lowercase();
    let bytes = lower.as_bytes();

    for (i, &b) in bytes.iter().enumerate() {
        if (b == b'a' || b == b'p') && i + 1 < bytes.len() && bytes[i + 1] == b'm' {
            if i > 0 && bytes[i - 1].is_ascii_digit() {
                return true;
            }
            if i > 1 && bytes[i - 1] == b' ' && bytes[i - 2].is_ascii_digit() {
                return true;
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Local, NaiveDate};

    // --- expand_abbreviations ---

    #[test]
    fn expand_day_abbreviations() {
        assert_eq!(expand_abbreviations("sat"), "saturday");
        assert_eq!(expand_abbreviations("next fri"), "next friday");
        assert_eq!(expand_abbreviations("tues"), "tuesday");
    }

    #[test]
    fn expand_month_abbreviations() {
        assert_eq!(expand_abbreviations("jan 20"), "january 20");
        assert_eq!(expand_abbreviations("sept 5"), "september 5");
    }

    #[test]
    fn expand_preserves_non_abbreviations() {
        assert_eq!(expand_abbreviations("tomorrow"), "tomorrow");
    }

    // --- parse_date_input ---

    #[test]
    fn iso_dates_pass_through() {
        assert_eq!(parse_date_input("2024-04-20").unwrap(), "2024-04-20");
        assert_eq!(parse_date_input("  2024-05-01 ").unwrap(), "2024-05-01");
    }

    #[test]
    fn natural_dates_are_normalized() {
        let today = Local::now().date_naive();
        let parsed = parse_date_input("tomorrow").unwrap();
        let parsed = NaiveDate::parse_from_str(&parsed, DATE_FORMAT).unwrap();

        // Loose bounds: the run may straddle midnight
        assert!(parsed > today - Duration::days(1) && parsed <= today + Duration::days(2));
    }

    #[test]
    fn invalid_dates_are_rejected() {
        assert!(parse_date_input("").is_err());
        assert!(parse_date_input("not a date at all xyz").is_err());
    }

    // --- parse_time_input ---

    #[test]
    fn twenty_four_hour_times() {
        assert_eq!(parse_time_input("14:00").unwrap(), "14:00");
        assert_eq!(parse_time_input("09:05").unwrap(), "09:05");
    }

    #[test]
    fn am_pm_times() {
        assert_eq!(parse_time_input("3pm").unwrap(), "15:00");
        assert_eq!(parse_time_input("11am").unwrap(), "11:00");
    }

    #[test]
    fn invalid_times_are_rejected() {
        assert!(parse_time_input("").is_err());
        assert!(parse_time_input("noonish").is_err());
        assert!(parse_time_input("25:00").is_err());
    }

    #[test]
    fn am_pm_detection() {
        assert!(has_am_pm("6pm"));
        assert!(has_am_pm("6 PM"));
        assert!(has_am_pm("9:30am"));
        assert!(!has_am_pm("camp"));
        assert!(!has_am_pm("14:00"));
    }
}
