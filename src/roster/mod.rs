//! Shift lookup pipeline.
//!
//! ```text
//! Page ─▶ layout analysis ─▶ PageView ─┬─ Geometric ─▶ locate ─▶ shift + colleagues ─▶ ShiftResult
//!                                      └─ TextOnly  ─▶ locate ─▶ text matcher       ─▶ ShiftResult
//! ```
//!
//! The page is classified once. Both paths share date handling and target
//! lookup but derive the shift and colleagues differently.
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use roster_oxide::geometry::{Line, Page, Word};
//! use roster_oxide::roster::RosterScanner;
//!
//! let page = Page::new(
//!     vec![
//!         Line::new(vec![Word::new("11 DE DICIEMBRE DE 2025", 300.0, 20.0, 400.0, 30.0)]).unwrap(),
//!         Line::new(vec![Word::new("G.C. SOTO", 100.0, 300.0, 100.0, 20.0)]).unwrap(),
//!         Line::new(vec![Word::new("G.C. VERA", 850.0, 300.0, 100.0, 20.0)]).unwrap(),
//!     ],
//!     "11 DE DICIEMBRE DE 2025\nG.C. SOTO\nG.C. VERA",
//! );
//!
//! let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
//! let result = RosterScanner::default().scan(&page, "Soto", today);
//! assert!(result.found);
//! assert_eq!(result.shift, "MAÑANA");
//! assert_eq!(result.date.to_string(), "2025-12-11");
//! ```

pub mod colleagues;
pub mod fallback;
pub mod locator;
pub mod result;
pub mod shift;

use std::borrow::Cow;

use chrono::NaiveDate;

use crate::config::RosterConfig;
use crate::geometry::Page;
use crate::layout::{analyze_layout, classify_ratio, LayoutAnalysis};

pub use colleagues::find_colleagues;
pub use fallback::{match_text_only, text_header_date};
pub use locator::{locate_in_texts, locate_target, TargetMatch};
pub use result::ShiftResult;
pub use shift::{resolve_shift, LabelSource, ResolvedShift};

/// Characters at the start of plain OCR text searched for the roster date.
const TEXT_HEADER_CHARS: usize = 500;

/// How a page will be analyzed, decided once per scan.
#[derive(Debug)]
enum PageView<'a> {
    /// Pixel boxes are available
    Geometric {
        page: &'a Page,
        layout: LayoutAnalysis,
    },
    /// No usable boxes; work from plain text
    TextOnly { text: Cow<'a, str> },
}

impl<'a> PageView<'a> {
    fn classify(page: &'a Page, config: &RosterConfig) -> Self {
        let layout = analyze_layout(page, config);
        if layout.has_geometry() {
            return PageView::Geometric { page, layout };
        }

        if page.lines().is_empty() {
            log::warn!("OCR page has no word boxes, using text-only matching");
        } else {
            log::warn!(
                "OCR page has {} lines but zero width, using text-only matching",
                page.lines().len()
            );
        }

        let text = if page.full_text().trim().is_empty() {
            Cow::Owned(
                page.lines()
                    .iter()
                    .map(|l| l.text())
                    .collect::<Vec<_>>()
                    .join("\n"),
            )
        } else {
            Cow::Borrowed(page.full_text())
        };
        PageView::TextOnly { text }
    }
}

/// Locates a person on a roster page and works out their shift.
///
/// The scanner holds only configuration, so one instance can serve any number
/// of pages, from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct RosterScanner {
    config: RosterConfig,
}

impl RosterScanner {
    /// Create a scanner with the given configuration.
    pub fn new(config: RosterConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    /// Scan `page` for `name`.
    ///
    /// `fallback_date` is reported when the page header carries no readable
    /// date; the engine never makes one up.
    pub fn scan(&self, page: &Page, name: &str, fallback_date: NaiveDate) -> ShiftResult {
        match PageView::classify(page, &self.config) {
            PageView::Geometric { page, layout } => {
                self.scan_geometric(page, &layout, name, fallback_date)
            },
            PageView::TextOnly { text } => {
                let date = text_header_date(&text, TEXT_HEADER_CHARS).unwrap_or(fallback_date);
                match_text_only(&text, name, date, &self.config)
            },
        }
    }

    /// Scan using today's local date as the fallback date.
    pub fn scan_today(&self, page: &Page, name: &str) -> ShiftResult {
        self.scan(page, name, chrono::Local::now().date_naive())
    }

    fn scan_geometric(
        &self,
        page: &Page,
        layout: &LayoutAnalysis,
        name: &str,
        fallback_date: NaiveDate,
    ) -> ShiftResult {
        let config = &self.config;
        let date = layout.date.unwrap_or(fallback_date);
        let target_name = name.trim().to_uppercase();

        let Some(target) = locate_target(page.lines(), name, config.name_match) else {
            log::info!("'{}' not found among {} lines", target_name, page.lines().len());
            return ShiftResult::not_found(date, target_name, config);
        };

        // Geometric pages have a positive, finite page_max_x
        let ratio = target.line.center_x() / layout.page_max_x;
        let bucket = classify_ratio(ratio, &config.column);

        log::info!(
            "'{}' found at y={:.0} in {} column (ratio {:.2})",
            target_name,
            target.line.min_top(),
            bucket,
            ratio
        );

        let resolved = resolve_shift(target.line, bucket, &layout.section, config);
        let (start_time, end_time) = resolved.times(config);
        let colleagues = find_colleagues(
            page.lines(),
            target.index,
            bucket,
            layout.page_max_x,
            &layout.section,
            config,
        );

        let section = match resolved.source {
            LabelSource::Overflow => "overflow",
            _ => "main grid",
        };
        let raw_context = format!(
            "line: {}\ncolumn: {} (ratio {:.2})\nsection: {}",
            target.line.text(),
            bucket,
            ratio,
            section
        );

        ShiftResult {
            found: true,
            date,
            target_name,
            shift: resolved.label,
            start_time,
            end_time,
            colleagues,
            raw_context,
        }
    }
}

/// Scan `page` for `name` with the given configuration.
pub fn find_user_shift(
    page: &Page,
    name: &str,
    config: &RosterConfig,
    fallback_date: NaiveDate,
) -> ShiftResult {
    RosterScanner::new(config.clone()).scan(page, name, fallback_date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Line, Word};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 3).unwrap()
    }

    fn line(text: &str, center_x: f32, top: f32) -> Line {
        Line::new(vec![Word::new(text, center_x - 50.0, top, 100.0, 20.0)]).unwrap()
    }

    fn roster() -> Page {
        let lines = vec![
            Line::new(vec![Word::new("CUADRANTE", 0.0, 10.0, 1000.0, 30.0)]).unwrap(),
            line("MAÑANA", 170.0, 100.0),
            line("TARDE", 500.0, 100.0),
            line("NOCHE", 830.0, 100.0),
            line("G.C. ALBA", 170.0, 150.0),
            line("G.C. BRAVO", 500.0, 150.0),
            line("G.C. SOTO", 830.0, 150.0),
            line("CABO LEON", 170.0, 190.0),
        ];
        let text = lines.iter().map(|l| l.text().to_string()).collect::<Vec<_>>().join("\n");
        Page::new(lines, text)
    }

    #[test]
    fn test_geometric_scan() {
        let result = RosterScanner::default().scan(&roster(), "alba", date());
        assert!(result.found);
        assert_eq!(result.date, date());
        assert_eq!(result.target_name, "ALBA");
        assert_eq!(result.shift, "MAÑANA");
        assert_eq!(result.start_time, "--:--");
        assert_eq!(result.colleagues, vec!["CABO LEON".to_string()]);
        assert!(result.raw_context.contains("G.C. ALBA"));
        assert!(result.raw_context.contains("main grid"));
    }

    #[test]
    fn test_geometric_not_found() {
        let result = RosterScanner::default().scan(&roster(), "PEREZ", date());
        assert!(!result.found);
        assert_eq!(result.shift, "--");
    }

    #[test]
    fn test_text_only_page_dispatch() {
        let page = Page::from_text("G.C. ALBA   G.C. BRAVO   G.C. SOTO");
        let result = RosterScanner::default().scan(&page, "SOTO", date());
        assert!(result.found);
        assert_eq!(result.shift, "NOCHE");
        assert_eq!(result.colleagues, vec![RosterConfig::default().placeholders.text_only_colleagues]);
    }

    #[test]
    fn test_zero_width_geometry_falls_back_to_line_text() {
        let lines = vec![Line::new(vec![Word::new("G.C. SOTO", 0.0, 100.0, 0.0, 20.0)]).unwrap()];
        let page = Page::new(lines, "");
        let result = RosterScanner::default().scan(&page, "SOTO", date());
        assert!(result.found);
        assert_eq!(result.raw_context, "G.C. SOTO");
    }

    #[test]
    fn test_text_only_header_date() {
        let page = Page::from_text("1 DE ABRIL DE 2025\nG.C. SOTO");
        let result = RosterScanner::default().scan(&page, "SOTO", date());
        assert_eq!(result.date, NaiveDate::from_ymd_opt(2025, 4, 1).unwrap());
    }

    #[test]
    fn test_find_user_shift_matches_scanner() {
        let config = RosterConfig::default();
        assert_eq!(
            find_user_shift(&roster(), "BRAVO", &config, date()),
            RosterScanner::new(config).scan(&roster(), "BRAVO", date())
        );
    }

    #[test]
    fn test_scanner_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RosterScanner>();
    }
}
