//! Repository trait for short link data access.

use crate::domain::entities::{Link, LinkPatch, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing short links.
///
/// Provides CRUD operations over link records, lookups by id and short name,
/// and offset-based listing in insertion (id) order.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteLinkRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Creates a new link with a freshly assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short name is already taken by a
    /// live record. Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its primary key.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Link>, AppError>;

    /// Finds a link by its short name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_short_name(&self, short_name: &str) -> Result<Option<Link>, AppError>;

    /// Lists up to `limit` links starting at `offset`, in id order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Link>, AppError>;

    /// Counts all live links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Partially updates a link.
    ///
    /// Only fields present in [`LinkPatch`] are modified; `None` fields keep
    /// their prior value. Returns `Ok(None)` if no link has that id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the new short name is already taken
    /// by a different record. Returns [`AppError::Internal`] on database
    /// errors.
    async fn update(&self, id: i64, patch: LinkPatch) -> Result<Option<Link>, AppError>;

    /// Permanently deletes a link.
    ///
    /// Returns `Ok(true)` if the link was found and removed, `Ok(false)` if
    /// no link has that id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
