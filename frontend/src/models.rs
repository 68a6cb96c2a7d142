// 离线演示数据，仅在 `mock` feature 下编译
use post_table_shared::{HeroImage, Post};

// =============== Mock 数据 ===============

/// 返回 6 篇示例文章，其中部分带缩略图。
pub fn mock_posts() -> Vec<Post> {
    let topics = [
        ("Getting Started with Django", &["django", "python"][..]),
        ("Class Based Views", &["django", "views"][..]),
        ("Promises Explained", &["javascript", "async"][..]),
        ("Rendering Tables", &["frontend"][..]),
        ("Caching Pages", &["django", "performance", "cache"][..]),
        ("Token Authentication", &[][..]),
    ];

    topics
        .iter()
        .enumerate()
        .map(|(idx, (title, tags))| {
            let id = idx as i64 + 1;
            let slug = title.to_lowercase().replace(' ', "-");
            let hero_image = (id % 2 == 0).then(|| HeroImage {
                thumbnail: Some(format!("/media/hero_images/{slug}-thumb.jpg")),
                full_size: Some(format!("/media/hero_images/{slug}.jpg")),
            });
            Post {
                id,
                title: title.to_string(),
                summary: format!("A short introduction to {}.", title.to_lowercase()),
                tags: tags.iter().map(|t| t.to_string()).collect(),
                slug,
                hero_image,
            }
        })
        .collect()
}
