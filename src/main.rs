mod activity;
mod api;
mod app;
mod classifier;
mod components;
mod config;
mod error;
mod format;
mod models;
mod progress;
mod state;
mod sync;

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    log::info!("mission tracker talking to {}", config::API_BASE_URL);
    yew::Renderer::<app::App>::new().render();
}
