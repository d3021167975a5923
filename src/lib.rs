pub mod config;
pub mod error;
pub mod form;
pub mod lists;
pub mod persistence;
pub mod portfolio_state;
pub mod preview;
pub mod resume_state;
pub mod types;

// 3D stage
pub mod gpu;
pub mod scene;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
pub mod components;
#[cfg(target_arch = "wasm32")]
mod portfolio_editor;
#[cfg(target_arch = "wasm32")]
mod portfolio_view;
#[cfg(target_arch = "wasm32")]
mod resume_editor;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn run_app() {
    let config = config::AppConfig::from_document();
    wasm_logger::init(wasm_logger::Config::new(config.log_level));
    log::info!("Starting {:?} page", config.page);

    let root: web_sys::Element = gloo_utils::document()
        .get_element_by_id("app")
        .unwrap_or_else(|| gloo_utils::body().into());
    yew::Renderer::<app::App>::with_root_and_props(root, app::AppProps { config }).render();
}
