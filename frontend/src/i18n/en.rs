pub mod post_table {
    pub const HEADERS: [&str; 6] = ["Title", "Image", "Tags", "Slug", "Summary", "Link"];
    pub const LOADING: &str = "Loading…";
    pub const NO_RESULTS: &str = "No results found.";
    pub const LINK_LABEL: &str = "View";
    pub const CAPTION_TEMPLATE: &str = "Showing {} of {} posts";
}

pub mod click_toggle {
    pub const IDLE: &str = "Click Me";
    pub const CLICKED: &str = "Button was clicked";
}

pub mod error_banner {
    pub const TITLE: &str = "Could not load posts";
    pub const CLOSE_ARIA: &str = "Dismiss error";
}

pub mod lazy_add_demo {
    pub const RESOLVED_PREFIX: &str = "Resolved with data ";
    pub const REJECTED_PREFIX: &str = "Rejected with message ";
}
