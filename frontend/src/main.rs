//! Browser front-end that lists posts in a table, plus a small click demo.
//!
//! Each widget is rendered into the page element the host reserves for it.

mod api;
mod components;
mod config;
mod demo;
mod hooks;
mod i18n;
mod loader;
#[cfg(feature = "mock")]
mod models;
mod mount;
mod view;

use components::{
    click_toggle::ClickToggle,
    post_table::{PostTable, PostTableProps},
};
use mount::MountPoint;
use wasm_bindgen::JsValue;

fn mount_post_table(mount: MountPoint) {
    let url = config::resolve_list_url(mount.attribute(config::URL_ATTRIBUTE));
    yew::Renderer::<PostTable>::with_root_and_props(
        mount.into_element(),
        PostTableProps {
            url: url.into(),
            surface_errors: false,
        },
    )
    .render();
}

fn main() {
    demo::spawn_lazy_add_demo();

    // 页面可以只放其中一个挂载点
    match MountPoint::by_id(config::POST_TABLE_MOUNT_ID) {
        Ok(mount) => mount_post_table(mount),
        Err(e) => web_sys::console::warn_1(&JsValue::from_str(&format!("Post table not mounted: {}", e))),
    }

    match MountPoint::by_id(config::CLICK_TOGGLE_MOUNT_ID) {
        Ok(mount) => {
            yew::Renderer::<ClickToggle>::with_root(mount.into_element()).render();
        },
        Err(e) => web_sys::console::warn_1(&JsValue::from_str(&format!("Click toggle not mounted: {}", e))),
    }
}
