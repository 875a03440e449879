// src/gui/components/export_bar.rs

use eframe::egui;

use crate::{
    config::options::ExportFormat,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(2.0);
    ui.horizontal(|ui| {
        ui.checkbox(&mut app.state.gui.show_table, "Show table");

        ui.separator();

        {
            let export = &mut app.state.options.export;

            let prev_fmt = export.format;
            ui.label("Format:");
            ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
            ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");
            if export.format != prev_fmt {
                logf!("UI: export format → {:?}", export.format);
                if !app.out_path_dirty {
                    app.out_path_text = export.out_path().to_string_lossy().into_owned();
                }
            }

            ui.checkbox(&mut export.include_headers, "Headers");
        }

        ui.separator();

        let edit = egui::TextEdit::singleline(&mut app.out_path_text)
            .desired_width(220.0)
            .hint_text("output file");
        if ui.add(edit).changed() {
            app.out_path_dirty = true;
        }

        let can_export = !app.row_ix.is_empty();
        if ui.add_enabled(can_export, egui::Button::new("Export")).clicked() {
            actions::export(app);
        }
        if ui.add_enabled(can_export, egui::Button::new("Copy")).clicked() {
            let ctx = ui.ctx().clone();
            actions::copy(app, &ctx);
        }

        ui.separator();
        ui.label(&app.status);
    });
    ui.add_space(2.0);
}
