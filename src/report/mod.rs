//! Reporting utilities: terminal summaries and script-friendly message lists.

pub mod format;

pub use format::*;
