//! `biz-metrics` library crate.
//!
//! The binary (`bizm`) is a thin wrapper around this library so that:
//!
//! - the metric pipeline is testable without spawning processes
//! - callers can run `pipeline::run` on in-memory records and skip file I/O
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod pipeline;
pub mod report;

pub use domain::{DailyRecord, Payload, StateRecord};
pub use error::{AppError, MetricsError};
pub use pipeline::run;
