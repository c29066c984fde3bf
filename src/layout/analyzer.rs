//! Page-level layout analysis.
//!
//! One pass over the page collects everything later stages need:
//! - `page_max_x`, the reference width for column ratios
//! - the roster date from the header zone (first match wins)
//! - the overflow boundary and the service header of each overflow column
//!   (last match wins per column)

use chrono::NaiveDate;
use indexmap::IndexMap;

use crate::config::RosterConfig;
use crate::geometry::{Line, Page};
use crate::layout::column::{classify_line, ColumnBucket};
use crate::layout::date::{has_roster_date, parse_roster_date};
use crate::text::{find_keyword, fold_upper};

/// Where the overflow section starts and which service each of its columns lists.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionContext {
    /// Top of the overflow marker line; `f32::INFINITY` when the page has none
    pub overflow_boundary_y: f32,
    /// Service name per column of the overflow section
    pub header_by_bucket: IndexMap<ColumnBucket, String>,
}

impl Default for SectionContext {
    fn default() -> Self {
        Self {
            overflow_boundary_y: f32::INFINITY,
            header_by_bucket: IndexMap::new(),
        }
    }
}

impl SectionContext {
    /// Whether an overflow marker was found.
    pub fn has_overflow(&self) -> bool {
        self.overflow_boundary_y.is_finite()
    }

    /// Whether `line` sits strictly below the overflow boundary.
    pub fn is_overflow(&self, line: &Line) -> bool {
        line.min_top() > self.overflow_boundary_y
    }

    /// Service header bound to a column, if any.
    pub fn service_for(&self, bucket: ColumnBucket) -> Option<&str> {
        self.header_by_bucket.get(&bucket).map(String::as_str)
    }
}

/// Result of [`analyze_layout`].
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutAnalysis {
    /// Rightmost word edge on the page
    pub page_max_x: f32,
    /// Roster date from the header, if one was printed and readable
    pub date: Option<NaiveDate>,
    /// Overflow section context
    pub section: SectionContext,
}

impl LayoutAnalysis {
    /// Whether the page carries usable pixel geometry.
    pub fn has_geometry(&self) -> bool {
        self.page_max_x.is_finite() && self.page_max_x > 0.0
    }
}

/// Analyze the layout of a roster page.
pub fn analyze_layout(page: &Page, config: &RosterConfig) -> LayoutAnalysis {
    let lines = page.lines();
    let page_max_x = page.max_x();
    let date = detect_date(lines, config);
    let section = detect_overflow_section(lines, page_max_x, config);

    log::debug!(
        "Layout: {} lines, page_max_x={:.1}, date={:?}, overflow_y={}, services={:?}",
        lines.len(),
        page_max_x,
        date,
        section.overflow_boundary_y,
        section.header_by_bucket
    );

    LayoutAnalysis {
        page_max_x,
        date,
        section,
    }
}

/// First header-zone line carrying a long-form date decides the roster date.
fn detect_date(lines: &[Line], config: &RosterConfig) -> Option<NaiveDate> {
    let line = lines
        .iter()
        .filter(|l| l.min_top() < config.header_zone_max_top)
        .find(|l| has_roster_date(l.text()))?;

    let date = parse_roster_date(line.text());
    if date.is_none() {
        log::debug!("Header date '{}' is not a real calendar day", line.text());
    }
    date
}

fn detect_overflow_section(
    lines: &[Line],
    page_max_x: f32,
    config: &RosterConfig,
) -> SectionContext {
    let mut section = SectionContext::default();

    let marker = lines
        .iter()
        .enumerate()
        .find(|(_, l)| find_keyword(&fold_upper(l.text()), &config.overflow_markers).is_some());

    let Some((marker_idx, marker_line)) = marker else {
        return section;
    };
    section.overflow_boundary_y = marker_line.min_top();

    let header_floor = section.overflow_boundary_y - config.overflow_header_slack;
    for (idx, line) in lines.iter().enumerate() {
        if idx == marker_idx || line.min_top() < header_floor {
            continue;
        }
        let Some(service) = find_keyword(&fold_upper(line.text()), &config.service_keywords)
        else {
            continue;
        };
        let Some(bucket) = classify_line(line, page_max_x, &config.column) else {
            continue;
        };

        if let Some(previous) = section.header_by_bucket.insert(bucket, service.to_string()) {
            log::debug!("Overflow header for {} column: '{}' replaces '{}'", bucket, service, previous);
        }
    }

    section
}
