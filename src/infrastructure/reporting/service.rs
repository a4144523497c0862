//! Crash reporter trait and event shape.

use serde::Serialize;

/// A server-error event worth forwarding to an external collector.
#[derive(Debug, Clone, Serialize)]
pub struct CrashEvent {
    pub method: String,
    pub path: String,
    pub status: u16,
    pub service: &'static str,
    pub version: &'static str,
}

impl CrashEvent {
    /// Builds an event for a failed request.
    pub fn new(method: String, path: String, status: u16) -> Self {
        Self {
            method,
            path,
            status,
            service: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Capability interface for external crash reporting.
///
/// `capture` must not block request handling: implementations either do
/// nothing or hand the event off to a background task.
pub trait CrashReporter: Send + Sync {
    fn capture(&self, event: CrashEvent);
}
