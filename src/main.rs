//! AmiiBox Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod dom;
mod lifecycle;
mod models;
mod routes;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
    mount_to_body(App);
}
