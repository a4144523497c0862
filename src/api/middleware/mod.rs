pub mod cors;
pub mod reporting;
pub mod tracing;
