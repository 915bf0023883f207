//! Input/output helpers.
//!
//! - JSON/CSV payload ingest + field validation (`ingest`)
//! - result exports (JSON/CSV) (`export`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;
