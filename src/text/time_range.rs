//! Explicit time-range extraction.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `H:MM` or `HH.MM`, a separator (`-`, en/em dash, `/`, `a`, `al`), then another
    /// time, optionally suffixed with `h`, `hs`, `hr` or `hrs`.
    static ref RE_TIME_RANGE: Regex = Regex::new(
        r"(?i)\b(\d{1,2})[:.](\d{2})\s*(?:-|–|—|/|al?)\s*(\d{1,2})[:.](\d{2})(?:h(?:s|rs?)?)?\b"
    )
    .unwrap();
}

/// A shift's start and end, normalized to `HH:MM`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeRange {
    /// Start time
    pub start: String,
    /// End time (may be earlier than start for overnight shifts)
    pub end: String,
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

fn clock(hours: &str, minutes: &str) -> Option<String> {
    let h: u32 = hours.parse().ok()?;
    let m: u32 = minutes.parse().ok()?;
    if h > 24 || m > 59 {
        return None;
    }
    Some(format!("{:02}:{:02}", h, m))
}

/// Find the first valid time range in `text`.
///
/// The minute separator may be `:` or `.`; both are normalized to `:` and
/// hours are zero-padded.
///
/// # Examples
///
/// ```
/// use roster_oxide::text::find_time_range;
///
/// let range = find_time_range("09.00a17.00").unwrap();
/// assert_eq!(range.start, "09:00");
/// assert_eq!(range.end, "17:00");
/// assert_eq!(range.to_string(), "09:00-17:00");
/// ```
pub fn find_time_range(text: &str) -> Option<TimeRange> {
    RE_TIME_RANGE.captures_iter(text).find_map(|caps| {
        let start = clock(&caps[1], &caps[2])?;
        let end = clock(&caps[3], &caps[4])?;
        Some(TimeRange { start, end })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(text: &str) -> Option<(String, String)> {
        find_time_range(text).map(|r| (r.start, r.end))
    }

    #[test]
    fn test_hyphen_separator() {
        assert_eq!(range("09:00-17:00"), Some(("09:00".into(), "17:00".into())));
    }

    #[test]
    fn test_dot_minutes_and_letter_separator() {
        assert_eq!(range("09.00a17.00"), Some(("09:00".into(), "17:00".into())));
        assert_eq!(range("DE 22.00 A 06.00"), Some(("22:00".into(), "06:00".into())));
        assert_eq!(range("de 8:30 al 15:00"), Some(("08:30".into(), "15:00".into())));
    }

    #[test]
    fn test_spaced_and_dashes() {
        assert_eq!(range("G.C. SOTO 20:00 – 08:00"), Some(("20:00".into(), "08:00".into())));
        assert_eq!(range("7:00 / 15:00"), Some(("07:00".into(), "15:00".into())));
    }

    #[test]
    fn test_hour_suffix() {
        assert_eq!(range("G.C. SOTO 07:00-15:00h"), Some(("07:00".into(), "15:00".into())));
        assert_eq!(range("22.00 a 06.00 hrs."), Some(("22:00".into(), "06:00".into())));
        assert_eq!(range("07:00-15:00horas"), None);
    }

    #[test]
    fn test_no_range() {
        assert_eq!(range("G.C. SOTO"), None);
        assert_eq!(range("09:00"), None);
        assert_eq!(range("SERVICIO DE 7 A 15"), None);
    }

    #[test]
    fn test_invalid_clock_skipped() {
        assert_eq!(range("99:00-17:00 07:00-15:00"), Some(("07:00".into(), "15:00".into())));
        assert_eq!(range("10:75-11:00"), None);
    }

    #[test]
    fn test_display() {
        let r = TimeRange {
            start: "20:00".into(),
            end: "08:00".into(),
        };
        assert_eq!(r.to_string(), "20:00-08:00");
    }
}
