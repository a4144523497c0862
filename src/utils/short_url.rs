//! Short URL construction.

/// Composes the public short URL for a short name.
///
/// Joins the base address (trailing `/` trimmed) with the fixed `/r/` path
/// segment. An empty base address yields the short name alone.
pub fn build_short_url(base_url: &str, short_name: &str) -> String {
    let base = base_url.trim_end_matches('/');

    if base.is_empty() {
        return short_name.to_string();
    }

    format!("{base}/r/{short_name}")
}
