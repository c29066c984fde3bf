//! Roster date recognition.
//!
//! Rosters print their date in the header as a long-form Spanish date,
//! e.g. "JUEVES, 11 DE DICIEMBRE DE 2025".

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `<day> DE <month> DE <year>`; "DEL" is accepted before the year.
    static ref RE_LONG_DATE: Regex = Regex::new(
        r"(?i)\b(\d{1,2})\s+DE\s+(ENERO|FEBRERO|MARZO|ABRIL|MAYO|JUNIO|JULIO|AGOSTO|SEPTIEMBRE|SETIEMBRE|OCTUBRE|NOVIEMBRE|DICIEMBRE)\s+DEL?\s+(\d{4})\b"
    )
    .unwrap();
}

fn month_number(name: &str) -> Option<u32> {
    let month = match name.to_uppercase().as_str() {
        "ENERO" => 1,
        "FEBRERO" => 2,
        "MARZO" => 3,
        "ABRIL" => 4,
        "MAYO" => 5,
        "JUNIO" => 6,
        "JULIO" => 7,
        "AGOSTO" => 8,
        "SEPTIEMBRE" | "SETIEMBRE" => 9,
        "OCTUBRE" => 10,
        "NOVIEMBRE" => 11,
        "DICIEMBRE" => 12,
        _ => return None,
    };
    Some(month)
}

/// Whether `text` contains a long-form roster date, valid or not.
pub fn has_roster_date(text: &str) -> bool {
    RE_LONG_DATE.is_match(text)
}

/// Parse the first long-form date in `text`.
///
/// Returns `None` when there is no match or the matched day does not exist
/// in that month.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use roster_oxide::layout::parse_roster_date;
///
/// assert_eq!(
///     parse_roster_date("11 DE DICIEMBRE DE 2025"),
///     NaiveDate::from_ymd_opt(2025, 12, 11)
/// );
/// assert_eq!(parse_roster_date("31 DE FEBRERO DE 2025"), None);
/// ```
pub fn parse_roster_date(text: &str) -> Option<NaiveDate> {
    let caps = RE_LONG_DATE.captures(text)?;
    let day: u32 = caps[1].parse().ok()?;
    let month = month_number(&caps[2])?;
    let year: i32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}
