//! Chrome Notes Extension Entry Point

mod chrome;
mod surface;
mod context;
mod store;
mod components;
mod app;
mod background;
mod content;

use app::App;
use components::{OptionsPage, RoughNotes};
use leptos::prelude::*;
use surface::Surface;

fn main() {
    console_error_panic_hook::set_once();
    if rolling_logger::init_logger("ChromeNotes", log::LevelFilter::Info).is_err() {
        web_sys::console::warn_1(&"logger already installed".into());
    }

    let surface = Surface::detect();
    log::info!("starting {:?} surface", surface);
    match surface {
        Surface::Popup => mount_to_body(App),
        Surface::Options => mount_to_body(OptionsPage),
        Surface::RoughNotes => mount_to_body(RoughNotes),
        Surface::Background => background::start(),
        Surface::Content => content::start(),
    }
}
