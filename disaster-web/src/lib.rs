#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod api;
pub mod app;
pub mod assets;
pub mod components;
pub mod dom;
pub mod i18n;
pub mod pages;
pub mod paths;
pub mod polling;
pub mod router;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        dom::console_error(&format!("logger init failed: {err}"));
    }
    // Apply the saved locale to <html lang> before the first render
    crate::i18n::set_lang(&crate::i18n::current_lang());
    log::info!("Disaster.io client starting, backend {}", paths::client_config().api_base);
    yew::Renderer::<app::App>::new().render();
}
