//! Decoding of the listing endpoint's HTTP response.

use crate::{FetchError, PostListResponse};

/// The only status code treated as success.
pub const SUCCESS_STATUS: u16 = 200;

/// Turn a raw response into a post page.
///
/// The body is not looked at unless the status is [`SUCCESS_STATUS`].
///
/// # Errors
///
/// [`FetchError::Status`] for any other status code and
/// [`FetchError::Decode`] when the body is not a `{ "results": [...] }`
/// object of well-formed posts.
pub fn decode_post_list(
    status: u16,
    reason: &str,
    body: &str,
) -> Result<PostListResponse, FetchError> {
    if status != SUCCESS_STATUS {
        tracing::warn!(status, reason, "post list request rejected");
        return Err(FetchError::Status {
            code: status,
            reason: reason.to_string(),
        });
    }

    let page: PostListResponse = serde_json::from_str(body).map_err(|e| {
        tracing::warn!(error = %e, "post list body is not valid JSON");
        FetchError::Decode(e.to_string())
    })?;

    tracing::debug!(results = page.results.len(), count = ?page.count, "decoded post list");
    Ok(page)
}
