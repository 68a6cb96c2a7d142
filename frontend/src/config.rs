/// Configuration for the frontend application

/// Listing endpoint queried when the mount element carries no override.
/// - Local development: the default `/api/v1/posts/`
/// - Other deployments: set `POST_TABLE_LIST_URL` at build time
pub const POST_LIST_URL: &str = match option_env!("POST_TABLE_LIST_URL") {
    Some(url) => url,
    None => "/api/v1/posts/",
};

/// Element id the post table is rendered into.
pub const POST_TABLE_MOUNT_ID: &str = "post_table";

/// Element id the click toggle demo is rendered into.
pub const CLICK_TOGGLE_MOUNT_ID: &str = "click_toggle";

/// Attribute on the table's mount element that overrides [`POST_LIST_URL`].
pub const URL_ATTRIBUTE: &str = "data-url";

/// Pick the endpoint for one mount: the page-provided value when it is
/// non-blank, otherwise the build-time default.
pub fn resolve_list_url(page_value: Option<String>) -> String {
    page_value
        .map(|raw| raw.trim().to_string())
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| POST_LIST_URL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_value_overrides_default() {
        assert_eq!(resolve_list_url(Some(" /api/v1/posts/?page=2 ".into())), "/api/v1/posts/?page=2");
    }

    #[test]
    fn blank_or_missing_falls_back() {
        assert_eq!(resolve_list_url(None), POST_LIST_URL);
        assert_eq!(resolve_list_url(Some("   ".into())), POST_LIST_URL);
    }
}
