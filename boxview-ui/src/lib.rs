pub mod api;
mod app;
pub mod browser;
pub mod components;
pub mod hooks;
pub mod rendering;

pub use app::App;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount_to_body(App);
}
