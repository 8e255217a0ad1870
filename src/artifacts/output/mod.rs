//! Diff report formatters
//!
//! Renders computed diffs into human-readable reports:
//!
//! - `normal_two_way`: classic normal diff between two files
//! - `normal_three_way`: diff3 normal report with per-file sections
//!
//! Both stream the source files against the diff items, so a report can be
//! regenerated only by printing it again from the start.

pub mod normal_three_way;
pub mod normal_two_way;
