//! Link store orchestration: CRUD, redirect resolution, and listing.

use std::sync::Arc;

use crate::domain::entities::{Link, LinkPatch, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use serde_json::json;

/// Service providing authoritative CRUD and listing over link records.
///
/// Uniqueness of short names is not pre-checked here: the storage layer's
/// unique constraint is the single source of truth, and constraint
/// violations arrive as [`AppError::Conflict`]. This keeps check-then-write
/// atomic under concurrent writers.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Creates a new link with a freshly assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short name is already taken.
    pub async fn create_link(&self, new_link: NewLink) -> Result<Link, AppError> {
        self.link_repository.create(new_link).await
    }

    /// Retrieves a link by its id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has that id.
    pub async fn get_link(&self, id: i64) -> Result<Link, AppError> {
        self.link_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Link not found", json!({ "id": id })))
    }

    /// Resolves a short name to its stored link, for redirection.
    ///
    /// Read-only; the HTTP layer turns the result into a temporary redirect.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the short name is unknown.
    pub async fn resolve_short_name(&self, short_name: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_short_name(short_name)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short link not found", json!({ "short_name": short_name }))
            })
    }

    /// Partially updates a link; unsupplied fields keep their prior value.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has that id.
    /// Returns [`AppError::Conflict`] if the new short name belongs to a
    /// different record.
    pub async fn update_link(&self, id: i64, patch: LinkPatch) -> Result<Link, AppError> {
        self.link_repository
            .update(id, patch)
            .await?
            .ok_or_else(|| AppError::not_found("Link not found", json!({ "id": id })))
    }

    /// Permanently deletes a link.
    ///
    /// Returns `Ok(true)` when a record was removed, `Ok(false)` when the id
    /// was unknown.
    pub async fn delete_link(&self, id: i64) -> Result<bool, AppError> {
        self.link_repository.delete(id).await
    }

    /// Lists links for the requested window and reports the total count.
    ///
    /// - `window` is an inclusive `(start, end)` pair; `None` means the full
    ///   set starting at 0.
    /// - A `start` at or past the total yields an empty page with the true
    ///   total.
    /// - `end` is clamped to the last existing index.
    pub async fn list_links(
        &self,
        window: Option<(i64, i64)>,
    ) -> Result<(Vec<Link>, i64), AppError> {
        let total = self.link_repository.count().await?;

        if total == 0 {
            return Ok((Vec::new(), 0));
        }

        let Some((start, end)) = window else {
            let items = self.link_repository.list(0, total).await?;
            return Ok((items, total));
        };

        if start >= total {
            return Ok((Vec::new(), total));
        }

        let end = end.min(total - 1);
        let items = self.link_repository.list(start, end - start + 1).await?;

        Ok((items, total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use chrono::Utc;

    fn test_link(id: i64, short_name: &str, url: &str) -> Link {
        Link {
            id,
            original_url: url.to_string(),
            short_name: short_name.to_string(),
            created_at: Utc::now().naive_utc(),
        }
    }

    #[tokio::test]
    async fn test_create_link_delegates_to_repository() {
        let mut mock_repo = MockLinkRepository::new();

        let created = test_link(1, "exmpl", "https://example.com");
        mock_repo
            .expect_create()
            .withf(|new_link| new_link.short_name == "exmpl")
            .times(1)
            .returning(move |_| Ok(created.clone()));

        let service = LinkService::new(Arc::new(mock_repo));

        let link = service
            .create_link(NewLink {
                original_url: "https://example.com".to_string(),
                short_name: "exmpl".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(link.id, 1);
        assert_eq!(link.short_name, "exmpl");
    }

    #[tokio::test]
    async fn test_get_link_maps_missing_row_to_not_found() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = LinkService::new(Arc::new(mock_repo));
        let result = service.get_link(42).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_resolve_short_name_success() {
        let mut mock_repo = MockLinkRepository::new();

        let link = test_link(7, "goo", "https://google.com");
        mock_repo
            .expect_find_by_short_name()
            .withf(|name| name == "goo")
            .times(1)
            .returning(move |_| Ok(Some(link.clone())));

        let service = LinkService::new(Arc::new(mock_repo));
        let resolved = service.resolve_short_name("goo").await.unwrap();

        assert_eq!(resolved.original_url, "https://google.com");
    }

    #[tokio::test]
    async fn test_resolve_unknown_short_name_is_not_found() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_find_by_short_name()
            .times(1)
            .returning(|_| Ok(None));

        let service = LinkService::new(Arc::new(mock_repo));
        let result = service.resolve_short_name("ghost").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_missing_link_is_not_found() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_update().times(1).returning(|_, _| Ok(None));

        let service = LinkService::new(Arc::new(mock_repo));
        let result = service.update_link(99, LinkPatch::default()).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_links_empty_store() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_count().times(1).returning(|| Ok(0));
        mock_repo.expect_list().times(0);

        let service = LinkService::new(Arc::new(mock_repo));
        let (items, total) = service.list_links(Some((0, 9))).await.unwrap();

        assert!(items.is_empty());
        assert_eq!(total, 0);
    }

    #[tokio::test]
    async fn test_list_links_full_listing_without_window() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_count().times(1).returning(|| Ok(3));
        mock_repo
            .expect_list()
            .withf(|offset, limit| *offset == 0 && *limit == 3)
            .times(1)
            .returning(|_, _| {
                Ok(vec![
                    test_link(1, "a", "https://a.example"),
                    test_link(2, "b", "https://b.example"),
                    test_link(3, "c", "https://c.example"),
                ])
            });

        let service = LinkService::new(Arc::new(mock_repo));
        let (items, total) = service.list_links(None).await.unwrap();

        assert_eq!(items.len(), 3);
        assert_eq!(total, 3);
    }

    #[tokio::test]
    async fn test_list_links_window_clamps_end_to_total() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_count().times(1).returning(|| Ok(11));
        // [8,30] with 11 records must fetch indices 8..=10.
        mock_repo
            .expect_list()
            .withf(|offset, limit| *offset == 8 && *limit == 3)
            .times(1)
            .returning(|_, _| {
                Ok(vec![
                    test_link(9, "i", "https://i.example"),
                    test_link(10, "j", "https://j.example"),
                    test_link(11, "k", "https://k.example"),
                ])
            });

        let service = LinkService::new(Arc::new(mock_repo));
        let (items, total) = service.list_links(Some((8, 30))).await.unwrap();

        assert_eq!(items.len(), 3);
        assert_eq!(total, 11);
    }

    #[tokio::test]
    async fn test_list_links_start_beyond_total_is_empty_page() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_count().times(1).returning(|| Ok(5));
        mock_repo.expect_list().times(0);

        let service = LinkService::new(Arc::new(mock_repo));
        let (items, total) = service.list_links(Some((5, 9))).await.unwrap();

        assert!(items.is_empty());
        assert_eq!(total, 5);
    }
}
