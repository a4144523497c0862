use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::SqliteLinkRepository;
use crate::infrastructure::reporting::CrashReporter;

/// Shared application state injected into every handler.
///
/// Constructed once in [`crate::server::run`] (or by test helpers) and
/// cloned per request. All fields are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<SqliteLinkRepository>>,
    /// Public base address used when building `short_url` fields.
    pub base_url: String,
    pub reporter: Arc<dyn CrashReporter>,
}
