//! Fixed-ratio column classification.
//!
//! A roster page is assumed to be split into three shift columns of roughly
//! equal width. A line belongs to the column its horizontal center falls into,
//! measured as a fraction of the page width.

use std::fmt;

use crate::config::ColumnThresholds;
use crate::geometry::Line;

/// One of the three horizontal zones of a roster page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColumnBucket {
    /// Left column
    Left,
    /// Middle column
    Mid,
    /// Right column
    Right,
}

impl fmt::Display for ColumnBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Left => "left",
            Self::Mid => "mid",
            Self::Right => "right",
        };
        f.write_str(name)
    }
}

/// Three-way split of a ratio in `[0, 1]`.
///
/// Shared by the pixel classifier and the text-only matcher, which feeds it
/// character positions instead.
///
/// # Examples
///
/// ```
/// use roster_oxide::config::ColumnThresholds;
/// use roster_oxide::layout::{classify_ratio, ColumnBucket};
///
/// let t = ColumnThresholds::default();
/// assert_eq!(classify_ratio(0.2, &t), ColumnBucket::Left);
/// assert_eq!(classify_ratio(0.35, &t), ColumnBucket::Mid);
/// assert_eq!(classify_ratio(0.9, &t), ColumnBucket::Right);
/// ```
pub fn classify_ratio(ratio: f32, thresholds: &ColumnThresholds) -> ColumnBucket {
    if ratio < thresholds.left_split {
        ColumnBucket::Left
    } else if ratio < thresholds.right_split {
        ColumnBucket::Mid
    } else {
        ColumnBucket::Right
    }
}

/// `center_x / page_max_x`, or `None` when the page has no usable width.
pub fn column_ratio(line: &Line, page_max_x: f32) -> Option<f32> {
    if !page_max_x.is_finite() || page_max_x <= 0.0 {
        return None;
    }
    Some(line.center_x() / page_max_x)
}

/// Column bucket of a line.
///
/// Returns `None` for degenerate geometry (`page_max_x == 0`); callers must
/// route to text-only analysis instead.
pub fn classify_line(
    line: &Line,
    page_max_x: f32,
    thresholds: &ColumnThresholds,
) -> Option<ColumnBucket> {
    column_ratio(line, page_max_x).map(|ratio| classify_ratio(ratio, thresholds))
}
