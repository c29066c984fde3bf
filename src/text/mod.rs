//! Text normalization for noisy roster OCR.
//!
//! - Case and accent folding for keyword and name matching
//! - Repair of common honorific misreads
//! - Explicit time-range extraction (`07:00-15:00`, `22.00 a 06.00`)

pub mod normalize;
pub mod time_range;

pub use normalize::{find_keyword, find_name, fold_upper, repair_honorific};
pub use time_range::{find_time_range, TimeRange};
