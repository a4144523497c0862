//! No-op reporter used when crash reporting is disabled.

use super::service::{CrashEvent, CrashReporter};
use tracing::debug;

/// A crash reporter that discards every event.
///
/// Selected at startup when no DSN is configured or the configured DSN is
/// malformed. Server errors are still logged through tracing as usual.
pub struct NoopReporter;

impl NoopReporter {
    /// Creates a new NoopReporter instance.
    pub fn new() -> Self {
        debug!("Using NoopReporter (crash reporting disabled)");
        Self
    }
}

impl Default for NoopReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl CrashReporter for NoopReporter {
    fn capture(&self, _event: CrashEvent) {}
}
