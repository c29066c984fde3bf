//! Shift label resolution.
//!
//! The label comes from the target's column, or from the overflow service
//! when the target sits below the overflow boundary. An explicit time range on
//! the target line is always extracted, but it only replaces the label when
//! the label is the generic column name: an overflow service is more specific
//! than a bare time range and is kept.

use crate::config::RosterConfig;
use crate::geometry::Line;
use crate::layout::{ColumnBucket, SectionContext};
use crate::text::{find_time_range, TimeRange};

/// How a shift label was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelSource {
    /// Generic column label picked by position
    Column,
    /// Shift keyword written on the line itself
    Keyword,
    /// Overflow service assignment
    Overflow,
}

/// A resolved shift label plus the explicit time range, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedShift {
    /// Final shift label
    pub label: String,
    /// Where the label came from
    pub source: LabelSource,
    /// Time range written on the target line
    pub time: Option<TimeRange>,
}

impl ResolvedShift {
    /// Combine a label with the time range found in `text`.
    ///
    /// The time range overwrites the label only for [`LabelSource::Column`].
    pub fn with_time_from(label: String, source: LabelSource, text: &str) -> Self {
        let time = find_time_range(text);
        let label = match (&time, source) {
            (Some(range), LabelSource::Column) => range.to_string(),
            _ => label,
        };
        Self {
            label,
            source,
            time,
        }
    }

    /// `(start, end)`, using the time placeholder when no range was found.
    pub fn times(&self, config: &RosterConfig) -> (String, String) {
        match &self.time {
            Some(range) => (range.start.clone(), range.end.clone()),
            None => (config.placeholders.time.clone(), config.placeholders.time.clone()),
        }
    }
}

/// Resolve the shift of a target line already assigned to `bucket`.
pub fn resolve_shift(
    target: &Line,
    bucket: ColumnBucket,
    section: &SectionContext,
    config: &RosterConfig,
) -> ResolvedShift {
    let (label, source) = if section.is_overflow(target) {
        let service = section
            .service_for(bucket)
            .unwrap_or(config.placeholders.service.as_str());
        (format!("{} {}", config.overflow_prefix, service), LabelSource::Overflow)
    } else {
        (config.shift_labels.for_bucket(bucket).to_string(), LabelSource::Column)
    };

    let resolved = ResolvedShift::with_time_from(label, source, target.text());
    log::debug!(
        "Shift for '{}': {:?} from {:?}, time={:?}",
        target.text(),
        resolved.label,
        resolved.source,
        resolved.time
    );
    resolved
}
