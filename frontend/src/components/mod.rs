// Reusable components live here.

pub mod click_toggle;
pub mod error_banner;
pub mod post_row;
pub mod post_table;
