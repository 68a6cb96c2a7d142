//! Wire models and pure projections shared by the post table front-end.
//!
//! Nothing in this crate touches the browser, so every piece of logic the
//! UI depends on can be exercised with plain `cargo test`.

use serde::{Deserialize, Serialize};

pub mod error;
pub mod lazy_add;
pub mod row;
pub mod wire;

pub use error::FetchError;
pub use lazy_add::{lazy_add, LazyAddError};
pub use row::{join_tags, post_link, PostRow, Thumbnail};
pub use wire::{decode_post_list, SUCCESS_STATUS};

// 列表接口返回的单篇文章
/// A single content record returned by the listing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Primary key, unique per post.
    pub id: i64,
    /// Display title.
    pub title: String,
    /// URL-safe identifier used to build the detail link.
    pub slug: String,
    /// Short teaser text.
    pub summary: String,
    /// Tag values in the order the server lists them.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Optional hero image; the server sends `null` or omits it when unset.
    #[serde(default)]
    pub hero_image: Option<HeroImage>,
}

/// Rendition URLs of a post's hero image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeroImage {
    /// Small rendition used in the table.
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Original upload.
    #[serde(default)]
    pub full_size: Option<String>,
}

impl Post {
    /// Thumbnail URL, if one is set and non-empty.
    pub fn thumbnail_url(&self) -> Option<&str> {
        self.hero_image
            .as_ref()
            .and_then(|image| image.thumbnail.as_deref())
            .filter(|url| !url.trim().is_empty())
    }
}

// 分页列表响应：`count`/`next`/`previous` 由分页器附带，可能缺省
/// Body of a successful listing response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostListResponse {
    /// Posts on this page, in server order.
    pub results: Vec<Post>,
    /// Total number of posts across all pages, when paginated.
    #[serde(default)]
    pub count: Option<u64>,
    /// URL of the next page.
    #[serde(default)]
    pub next: Option<String>,
    /// URL of the previous page.
    #[serde(default)]
    pub previous: Option<String>,
}
