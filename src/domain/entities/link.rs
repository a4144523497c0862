//! Link entity representing a short name → original URL mapping.

use chrono::NaiveDateTime;

/// A stored short link.
///
/// `id` is assigned by the store on creation and never reused or mutated.
/// `short_name` is unique across all live records and serves as the lookup
/// key for redirection.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub id: i64,
    pub original_url: String,
    pub short_name: String,
    pub created_at: NaiveDateTime,
}

/// Input data for creating a new link.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub original_url: String,
    pub short_name: String,
}

/// Partial update for an existing link.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct LinkPatch {
    pub original_url: Option<String>,
    pub short_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_link_fields() {
        let now = Utc::now().naive_utc();
        let link = Link {
            id: 1,
            original_url: "https://example.com".to_string(),
            short_name: "exmpl".to_string(),
            created_at: now,
        };

        assert_eq!(link.id, 1);
        assert_eq!(link.original_url, "https://example.com");
        assert_eq!(link.short_name, "exmpl");
        assert_eq!(link.created_at, now);
    }

    #[test]
    fn test_default_patch_changes_nothing() {
        let patch = LinkPatch::default();
        assert!(patch.original_url.is_none());
        assert!(patch.short_name.is_none());
    }
}
