//! Target line lookup.
//!
//! Lines are scanned in document order and the first one mentioning the name
//! wins; later occurrences are never considered.

use crate::config::NameMatch;
use crate::geometry::Line;
use crate::text::find_name;

/// The line that mentions the queried name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetMatch<'a> {
    /// Index of the line in the page
    pub index: usize,
    /// The matched line
    pub line: &'a Line,
    /// Character offset of the name inside the line text
    pub char_offset: usize,
}

/// First `(line index, char offset)` whose text mentions `name`.
pub fn locate_in_texts<'a, I>(texts: I, name: &str, mode: NameMatch) -> Option<(usize, usize)>
where
    I: IntoIterator<Item = &'a str>,
{
    texts
        .into_iter()
        .enumerate()
        .find_map(|(idx, text)| find_name(text, name, mode).map(|offset| (idx, offset)))
}

/// First line on the page mentioning `name`.
pub fn locate_target<'a>(lines: &'a [Line], name: &str, mode: NameMatch) -> Option<TargetMatch<'a>> {
    let (index, char_offset) = locate_in_texts(lines.iter().map(Line::text), name, mode)?;
    Some(TargetMatch {
        index,
        line: &lines[index],
        char_offset,
    })
}
