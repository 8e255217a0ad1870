//! Orchestration components
//!
//! This module contains the coordination layer around the diff/merge core:
//!
//! - `comparer`: high-level operations and output writer ownership
//! - `workspace`: filesystem access and line-source loading

pub mod comparer;
pub mod workspace;
