//! Taskboard Frontend Entry Point

mod api;
mod app;
mod browser;
mod components;
mod config;
mod context;
mod models;
mod resource;
mod route;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    // Fails only if a logger is already installed
    let _ = browser_logger::init(browser_logger::parse_level(&config.log_level));
    log::info!("Starting taskboard (api: {:?})", config.api_base_url);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
