//! Colleague detection by spatial proximity.
//!
//! People on the same shift are listed in the same column a few rows above or
//! below each other, so a colleague is any other name-like line in the
//! target's column within a fixed vertical window. The window never crosses
//! the overflow boundary: main-grid and overflow names are separate lists.

use crate::config::RosterConfig;
use crate::geometry::Line;
use crate::layout::{classify_line, ColumnBucket, SectionContext};
use crate::text::{find_keyword, fold_upper};

/// Text of lines that share the target's column and sit near it, in document order.
///
/// Never returns an empty list: with no colleague the configured placeholder
/// is the single entry.
pub fn find_colleagues(
    lines: &[Line],
    target_index: usize,
    bucket: ColumnBucket,
    page_max_x: f32,
    section: &SectionContext,
    config: &RosterConfig,
) -> Vec<String> {
    let Some(target) = lines.get(target_index) else {
        return vec![config.placeholders.no_colleagues.clone()];
    };

    let target_in_overflow = section.is_overflow(target);
    let colleagues: Vec<String> = lines
        .iter()
        .enumerate()
        .filter(|(idx, line)| *idx != target_index && line.text() != target.text())
        .map(|(_, line)| line)
        .filter(|line| section.is_overflow(line) == target_in_overflow)
        .filter(|line| is_name_like(line, config))
        .filter(|line| classify_line(line, page_max_x, &config.column) == Some(bucket))
        .filter(|line| (line.min_top() - target.min_top()).abs() < config.vertical_window)
        .map(|line| line.text().to_string())
        .collect();

    log::debug!("{} colleague(s) near '{}' in {} column", colleagues.len(), target.text(), bucket);

    if colleagues.is_empty() {
        vec![config.placeholders.no_colleagues.clone()]
    } else {
        colleagues
    }
}

/// Long enough to be a name and not a column header, label or service header.
fn is_name_like(line: &Line, config: &RosterConfig) -> bool {
    let text = line.text().trim();
    if text.chars().count() < config.min_colleague_chars {
        return false;
    }
    let folded = fold_upper(text);
    find_keyword(&folded, &config.colleague_denylist).is_none()
        && find_keyword(&folded, &config.service_keywords).is_none()
}
