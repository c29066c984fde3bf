//! Case/accent folding and name matching.
//!
//! Roster photos come back from OCR in mixed case with accents that are
//! dropped or misread at random, so every comparison in the engine is done on
//! folded text: upper case with acute, grave, circumflex and diaeresis marks
//! removed. `Ñ` is kept because it is a distinct letter in Spanish.

use lazy_static::lazy_static;
use regex::Regex;

use crate::config::NameMatch;

lazy_static! {
    /// "Dª" (doña) read as "DI", "Dl", "D1" or "D I"
    static ref RE_HONORIFIC_MISREAD: Regex = Regex::new(r"\bD[ \t]*[Il1|][ \t]").unwrap();
}

/// Upper-case `text` and strip accent marks from vowels.
///
/// Folding maps one character to one character for Spanish text, so character
/// offsets in the folded string line up with the original.
///
/// # Examples
///
/// ```
/// use roster_oxide::text::fold_upper;
///
/// assert_eq!(fold_upper("García Muñoz"), "GARCIA MUÑOZ");
/// assert_eq!(fold_upper("Subdelegación"), "SUBDELEGACION");
/// ```
pub fn fold_upper(text: &str) -> String {
    text.chars()
        .flat_map(char::to_uppercase)
        .map(|c| match c {
            'Á' | 'À' | 'Â' | 'Ä' => 'A',
            'É' | 'È' | 'Ê' | 'Ë' => 'E',
            'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
            'Ó' | 'Ò' | 'Ô' | 'Ö' => 'O',
            'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
            other => other,
        })
        .collect()
}

/// First keyword (in list order) contained in already-folded `folded_text`.
pub fn find_keyword<'a>(folded_text: &str, keywords: &'a [String]) -> Option<&'a str> {
    keywords
        .iter()
        .find(|k| {
            let k = fold_upper(k.trim());
            !k.is_empty() && folded_text.contains(&k)
        })
        .map(String::as_str)
}

/// Locate `name` inside `text`, returning the character offset of the match in `text`.
///
/// Matching is case- and accent-insensitive. A blank name never matches.
///
/// # Examples
///
/// ```
/// use roster_oxide::config::NameMatch;
/// use roster_oxide::text::find_name;
///
/// assert_eq!(find_name("G.C. Pérez Ruiz", "perez", NameMatch::Substring), Some(5));
/// assert_eq!(find_name("G.C. RUIZA", "RUIZ", NameMatch::Substring), Some(5));
/// assert_eq!(find_name("G.C. RUIZA", "RUIZ", NameMatch::Token), None);
/// ```
pub fn find_name(text: &str, name: &str, mode: NameMatch) -> Option<usize> {
    let needle = fold_upper(name.trim());
    if needle.is_empty() {
        return None;
    }
    let haystack = fold_upper(text);

    match mode {
        NameMatch::Substring => haystack
            .find(&needle)
            .map(|byte_idx| haystack[..byte_idx].chars().count()),
        NameMatch::Token => {
            let wanted: Vec<&str> = tokens(&needle).into_iter().map(|(_, t)| t).collect();
            if wanted.is_empty() {
                return None;
            }
            tokens(&haystack)
                .windows(wanted.len())
                .find(|run| run.iter().zip(&wanted).all(|((_, got), want)| got == want))
                .map(|run| run[0].0)
        },
    }
}

/// Alphanumeric runs with their character offsets.
fn tokens(text: &str) -> Vec<(usize, &str)> {
    let mut out = Vec::new();
    let mut start: Option<(usize, usize)> = None;

    for (char_idx, (byte_idx, c)) in text.char_indices().enumerate() {
        if c.is_alphanumeric() {
            if start.is_none() {
                start = Some((char_idx, byte_idx));
            }
        } else if let Some((ci, bi)) = start.take() {
            out.push((ci, &text[bi..byte_idx]));
        }
    }
    if let Some((ci, bi)) = start {
        out.push((ci, &text[bi..]));
    }

    out
}

/// Repair the honorific "Dª" where OCR read the ordinal indicator as `I`, `l`, `1` or `|`.
///
/// # Examples
///
/// ```
/// use roster_oxide::text::repair_honorific;
///
/// assert_eq!(repair_honorific("DI ANA SOTO"), "Dª ANA SOTO");
/// assert_eq!(repair_honorific("DIAZ"), "DIAZ");
/// ```
pub fn repair_honorific(text: &str) -> String {
    RE_HONORIFIC_MISREAD.replace_all(text, "Dª ").into_owned()
}
