//! Layout analysis for photographed duty rosters.
//!
//! This module recovers the structure a roster photo has lost:
//! - Page width and the three shift columns (fixed ratio buckets)
//! - The roster date printed in the page header
//! - The overflow ("salientes") section and its per-column service headers

pub mod analyzer;
pub mod column;
pub mod date;

// Re-export main types
pub use analyzer::{analyze_layout, LayoutAnalysis, SectionContext};
pub use column::{classify_line, classify_ratio, column_ratio, ColumnBucket};
pub use date::{has_roster_date, parse_roster_date};
