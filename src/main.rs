//! Library Organizer Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod store;

use app::App;
use leptos::prelude::*;
use library_core::LibraryConfig;

const APP_NAME: &str = "library-organizer";

fn main() {
    console_error_panic_hook::set_once();

    let loaded = config::read_config();
    let config = match &loaded {
        Ok(Some(config)) => config.clone(),
        _ => LibraryConfig::default(),
    };

    if let Err(err) = rolling_logger::init_logger(APP_NAME, config.log_capacity, config.level_filter()) {
        web_sys::console::warn_1(&format!("[APP] Logger not installed: {}", err).into());
    }

    match loaded {
        Ok(Some(_)) => log::info!("[APP] Loaded config for user {}", config.user_id),
        Ok(None) => log::debug!("[APP] No config block, using defaults"),
        Err(err) => log::warn!("[APP] Ignoring malformed config: {}", err),
    }

    mount_to_body(move || view! { <App config=config /> });
}
