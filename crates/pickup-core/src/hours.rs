//! Store-hours parsing and 12-hour time formatting.
//!
//! The store selector publishes one closing-times line per day of the week
//! (0 = Sunday), e.g. `"Closing at 5:30pm"` or `"Opening at 9am"`. The widget
//! turns today's line into the short `"Closes at 5:30pm"` form shown next to
//! each store.

use chrono::{Datelike, Local};

/// Convert a 24-hour `"HH:MM"` time into 12-hour form.
///
/// Minutes are omitted when exactly `:00`; the `am`/`pm` suffix is lowercase.
/// Returns `None` when the input is not two colon-separated integers.
pub fn format_time_12h(time: &str) -> Option<String> {
    let (hour_str, minute_str) = time.split_once(':')?;
    let hour: u32 = hour_str.trim().parse().ok()?;
    let minute: u32 = minute_str.trim().parse().ok()?;

    let ampm = if hour >= 12 { "pm" } else { "am" };
    let hour12 = if hour % 12 == 0 { 12 } else { hour % 12 };

    if minute == 0 {
        Some(format!("{hour12}{ampm}"))
    } else {
        Some(format!("{hour12}:{minute:02}{ampm}"))
    }
}

/// Today's day-of-week index, 0 = Sunday.
pub fn today_index() -> usize {
    Local::now().weekday().num_days_from_sunday() as usize
}

/// Build the hours text for a store from its per-day closing-times lines.
///
/// Picks the line for `today` (0 = Sunday), matches
/// `(closing|opening) at H[:MM](am|pm)` case-insensitively, and returns
/// `"Closes at …"` or `"Opens at …"`. Returns an empty string when the line
/// or the pattern is absent; this never fails.
pub fn store_hours_text(day_entries: &[String], today: usize) -> String {
    let Some(entry) = day_entries.get(today) else {
        return String::new();
    };
    let text = entry.trim().to_lowercase();

    let (verb, at) = if let Some(idx) = text.find("closing at ") {
        ("Closes", idx + "closing at ".len())
    } else if let Some(idx) = text.find("opening at ") {
        ("Opens", idx + "opening at ".len())
    } else {
        return String::new();
    };

    match parse_clock(&text[at..]) {
        Some(time) => format!("{verb} at {time}"),
        None => String::new(),
    }
}

/// Parse a leading `H[:MM](am|pm)` clock token, returning it normalized.
fn parse_clock(s: &str) -> Option<String> {
    let bytes = s.as_bytes();
    let mut pos = 0;

    while pos < bytes.len() && pos < 2 && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    if pos == 0 {
        return None;
    }
    let hour = &s[..pos];

    let minutes = if bytes.get(pos) == Some(&b':') {
        let start = pos;
        pos += 1;
        for _ in 0..2 {
            if !bytes.get(pos).is_some_and(u8::is_ascii_digit) {
                return None;
            }
            pos += 1;
        }
        &s[start..pos]
    } else {
        ""
    };

    let suffix = s.get(pos..pos + 2)?;
    if suffix != "am" && suffix != "pm" {
        return None;
    }

    Some(format!("{hour}{minutes}{suffix}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn week(line: &str) -> Vec<String> {
        vec![line.to_string(); 7]
    }

    #[test]
    fn test_format_time_on_the_hour() {
        assert_eq!(format_time_12h("09:00").as_deref(), Some("9am"));
        assert_eq!(format_time_12h("17:00").as_deref(), Some("5pm"));
    }

    #[test]
    fn test_format_time_with_minutes() {
        assert_eq!(format_time_12h("13:05").as_deref(), Some("1:05pm"));
        assert_eq!(format_time_12h("09:30").as_deref(), Some("9:30am"));
    }

    #[test]
    fn test_format_time_noon_and_midnight() {
        assert_eq!(format_time_12h("00:00").as_deref(), Some("12am"));
        assert_eq!(format_time_12h("12:00").as_deref(), Some("12pm"));
    }

    #[test]
    fn test_format_time_malformed() {
        assert_eq!(format_time_12h("nine"), None);
        assert_eq!(format_time_12h("9"), None);
        assert_eq!(format_time_12h("x:30"), None);
    }

    #[test]
    fn test_hours_text_closing() {
        assert_eq!(
            store_hours_text(&week("Closing at 5:30pm"), 3),
            "Closes at 5:30pm"
        );
    }

    #[test]
    fn test_hours_text_opening() {
        assert_eq!(store_hours_text(&week("Opening at 9am"), 0), "Opens at 9am");
    }

    #[test]
    fn test_hours_text_case_insensitive() {
        assert_eq!(
            store_hours_text(&week("CLOSING AT 6PM"), 1),
            "Closes at 6pm"
        );
    }

    #[test]
    fn test_hours_text_missing_day() {
        let entries = vec!["Closing at 5pm".to_string()];
        assert_eq!(store_hours_text(&entries, 4), "");
    }

    #[test]
    fn test_hours_text_unparseable() {
        assert_eq!(store_hours_text(&week("Closed today"), 2), "");
        assert_eq!(store_hours_text(&week("closing at noon"), 2), "");
    }
}
