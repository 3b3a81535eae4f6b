mod api;
mod app;
mod cancel;
mod catalog;
mod components;
mod config;
mod error;
mod logging;
mod models;
mod pages;
mod profile;
mod rating;

use app::App;

fn main() {
    logging::init();
    leptos::mount::mount_to_body(App);
}
