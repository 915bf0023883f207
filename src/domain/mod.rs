//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - input records (`DailyRecord`, `Payload`)
//! - the accumulating pipeline result (`StateRecord`)
//! - fixed alert/recommendation thresholds and texts
//! - run configuration (`RunConfig`, `InputFormat`)

pub mod types;

pub use types::*;
