#![allow(warnings)]
//! Menu Admin Frontend Entry Point

mod adapters;
mod app;
mod commands;
mod components;
mod config;
mod context;
mod error;
mod form;
mod icons;
mod logger;
mod models;
mod rewards;
mod routes;
mod settings;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::from_window();
    logger::init(config.level_filter());
    log::info!("[APP] starting, toasts last {} ms", config.toast_duration_ms);
    mount_to_body(move || view! { <App config=config.clone() /> });
}
