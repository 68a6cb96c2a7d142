//! Per-post projection into the cells of one table row.

use crate::Post;

/// Path prefix of a post's detail page.
pub const POST_LINK_PREFIX: &str = "/post/";
/// Path suffix of a post's detail page.
pub const POST_LINK_SUFFIX: &str = "/";
/// Separator placed between tag values.
pub const TAG_SEPARATOR: &str = ", ";

/// What the image cell shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Thumbnail {
    /// An image at this URL.
    Image(String),
    /// No usable thumbnail; the cell shows a dash.
    Placeholder,
}

impl Thumbnail {
    /// Text shown in place of a missing image.
    pub const PLACEHOLDER_TEXT: &'static str = "-";
}

/// Cell values of one data row, derived from a [`Post`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRow {
    /// Post id, used as the row key.
    pub id: i64,
    /// Title cell.
    pub title: String,
    /// Image cell.
    pub thumbnail: Thumbnail,
    /// Tags cell, already joined.
    pub tags: String,
    /// Slug cell.
    pub slug: String,
    /// Summary cell.
    pub summary: String,
    /// Target of the link cell.
    pub link: String,
}

impl From<&Post> for PostRow {
    fn from(post: &Post) -> Self {
        let thumbnail = match post.thumbnail_url() {
            Some(url) => Thumbnail::Image(url.to_string()),
            None => Thumbnail::Placeholder,
        };

        PostRow {
            id: post.id,
            title: post.title.clone(),
            thumbnail,
            tags: join_tags(&post.tags),
            slug: post.slug.clone(),
            summary: post.summary.clone(),
            link: post_link(&post.slug),
        }
    }
}

/// Join tag values with [`TAG_SEPARATOR`], keeping their order.
pub fn join_tags(tags: &[String]) -> String {
    tags.join(TAG_SEPARATOR)
}

/// Detail page path for a slug: `/post/<slug>/`.
pub fn post_link(slug: &str) -> String {
    format!("{POST_LINK_PREFIX}{slug}{POST_LINK_SUFFIX}")
}
