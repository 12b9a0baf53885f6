// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use nirf_scrape::{config::state::GuiState, gui};
use eframe::egui::ViewportBuilder;

fn main() {
    if let Err(e) = nirf_scrape::log::init() {
        eprintln!("Logging disabled: {e}");
    }

    let size = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("NIRF Rankings")
            .with_inner_size([size.window_w as f32, size.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
