//! Infrastructure layer: SQLite persistence and crash reporting.

pub mod persistence;
pub mod reporting;
