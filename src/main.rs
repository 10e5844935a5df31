mod app;
mod boot;
mod config;
mod contact_form;
mod details;
mod gallery;
mod head;
mod media_panel;
mod viewport;

use phuket_condo_core::{page_meta, product_json_ld, LISTING, PHOTOS, SITE};

/// Head tags are cosmetic for the running page; failures are logged and the
/// app still mounts.
fn install_head() {
    if let Err(err) = head::apply_page_meta(&page_meta(&SITE)) {
        gloo::console::warn!("page meta not applied", err);
    }
    if let Err(err) = head::install_json_ld(&product_json_ld(&LISTING, &SITE, PHOTOS)) {
        gloo::console::warn!("json-ld not installed", err);
    }
    if let Some(container_id) = config::gtm_id() {
        if let Err(err) = head::install_tag_manager(&container_id) {
            gloo::console::warn!("tag manager not installed", err);
        }
    }
}

fn main() {
    install_head();
    if web_sys::window().and_then(|window| window.document()).is_none() {
        boot::fail("document unavailable");
        return;
    }
    yew::Renderer::<app::App>::new().render();
}
