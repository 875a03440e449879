// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::ViewportBuilder;
use htec_map::config::state::GuiState;
use htec_map::gui;

fn main() {
    let gui_defaults = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([
                gui_defaults.window_w as f32,
                gui_defaults.window_h as f32,
            ])
            .with_min_inner_size([760.0, 520.0]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
