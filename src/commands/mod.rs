//! User-facing command implementations
//!
//! Each file implements one `Comparer` operation:
//!
//! - `diff`: two-way normal diff report
//! - `diff3`: three-way diff3 normal report
//! - `merge`: two-way merge with conflict markers
//! - `merge3`: three-way merge against a common base

pub mod diff;
pub mod diff3;
pub mod merge;
pub mod merge3;
