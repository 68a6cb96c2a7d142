#[cfg(not(feature = "mock"))]
use gloo_net::http::Request;
use post_table_shared::{FetchError, PostListResponse};

#[cfg(feature = "mock")]
use crate::models;

/// 请求文章列表：一次 GET，非 200 视为失败且不解析正文
pub async fn fetch_posts(url: &str) -> Result<PostListResponse, FetchError> {
    #[cfg(feature = "mock")]
    {
        let _ = url;
        return Ok(PostListResponse {
            count: None,
            next: None,
            previous: None,
            results: models::mock_posts(),
        });
    }

    #[cfg(not(feature = "mock"))]
    {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| network_error(&e))?;

        let status = response.status();
        let reason = response.status_text();
        if status != post_table_shared::SUCCESS_STATUS {
            return post_table_shared::decode_post_list(status, &reason, "");
        }

        let body = response
            .text()
            .await
            .map_err(|e| network_error(&e))?;

        post_table_shared::decode_post_list(status, &reason, &body)
    }
}

/// Network failures keep the error's display text, not its debug dump.
#[cfg(any(test, not(feature = "mock")))]
fn network_error(error: &impl std::fmt::Display) -> FetchError {
    FetchError::Network(error.to_string())
}
