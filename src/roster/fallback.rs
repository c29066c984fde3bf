//! Text-only matching for OCR output without bounding boxes.
//!
//! Without pixel positions the column is approximated from where the name
//! starts inside its text line, which only works when the OCR kept a table row
//! on one line. Colleagues are not attempted; the caller gets the surrounding
//! lines to check by hand.

use chrono::NaiveDate;

use crate::config::RosterConfig;
use crate::layout::{classify_ratio, parse_roster_date, ColumnBucket};
use crate::roster::locator::locate_in_texts;
use crate::roster::shift::{LabelSource, ResolvedShift};
use crate::roster::ShiftResult;
use crate::text::fold_upper;

/// Lines shown on each side of the match in `raw_context`.
const CONTEXT_LINES: usize = 2;

/// Roster date printed within the first `header_chars` characters of the text.
pub fn text_header_date(full_text: &str, header_chars: usize) -> Option<NaiveDate> {
    let header: String = full_text.chars().take(header_chars).collect();
    parse_roster_date(&header)
}

/// Analyze plain OCR text.
///
/// `date` is the roster date already decided by the caller.
pub fn match_text_only(
    full_text: &str,
    name: &str,
    date: NaiveDate,
    config: &RosterConfig,
) -> ShiftResult {
    let target_name = name.trim().to_uppercase();
    let lines: Vec<&str> = full_text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let Some((index, char_offset)) =
        locate_in_texts(lines.iter().copied(), name, config.name_match)
    else {
        log::info!("'{}' not found in text-only OCR output", target_name);
        return ShiftResult::not_found(date, target_name, config);
    };
    let line = lines[index];
    log::info!("'{}' found on text line {}: '{}'", target_name, index, line);

    let resolved = match keyword_label(line, config) {
        Some(label) => ResolvedShift::with_time_from(label, LabelSource::Keyword, line),
        None => {
            let bucket = position_bucket(line, char_offset, config);
            let label = config.shift_labels.for_bucket(bucket).to_string();
            ResolvedShift::with_time_from(label, LabelSource::Column, line)
        },
    };
    let (start_time, end_time) = resolved.times(config);

    let first = index.saturating_sub(CONTEXT_LINES);
    let last = (index + CONTEXT_LINES).min(lines.len() - 1);

    ShiftResult {
        found: true,
        date,
        target_name,
        shift: resolved.label,
        start_time,
        end_time,
        colleagues: vec![config.placeholders.text_only_colleagues.clone()],
        raw_context: lines[first..=last].join("\n"),
    }
}

/// First configured shift label written on the line.
///
/// OCR often drops the tilde, so `MANANA` also counts as `MAÑANA`.
fn keyword_label(line: &str, config: &RosterConfig) -> Option<String> {
    let folded = fold_upper(line);
    config
        .shift_labels
        .all()
        .into_iter()
        .find(|label| {
            let wanted = fold_upper(label.trim());
            !wanted.is_empty()
                && (folded.contains(&wanted) || folded.contains(&wanted.replace('Ñ', "N")))
        })
        .map(str::to_string)
}

/// Column guessed from the name's character position within the line.
fn position_bucket(line: &str, char_offset: usize, config: &RosterConfig) -> ColumnBucket {
    let len = line.chars().count().max(1);
    classify_ratio(char_offset as f32 / len as f32, &config.column)
}
