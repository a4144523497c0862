//! Crash reporting for unhandled server errors.
//!
//! Provides a [`CrashReporter`] trait with two implementations:
//! - [`HttpReporter`] - Posts crash events to a configured DSN endpoint
//! - [`NoopReporter`] - No-op implementation when reporting is disabled
//!
//! The reporter is selected once at startup; request handling never branches
//! on whether reporting is enabled.

mod http_reporter;
mod noop_reporter;
mod service;

pub use http_reporter::HttpReporter;
pub use noop_reporter::NoopReporter;
pub use service::{CrashEvent, CrashReporter};
