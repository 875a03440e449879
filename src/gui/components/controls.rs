// src/gui/components/controls.rs
//
// Selection controls: year slider + level/sex/unit selectors + fetch
// button. Any change reruns the (memoized) selector immediately.

use eframe::egui;

use crate::{
    config::consts::{DATASET_CODE, YEAR_MAX, YEAR_MIN},
    domain::{Level, Sex, Unit},
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(4.0);
    ui.heading("Employment in high-tech sectors by NUTS region and sex");
    ui.label(format!(
        "Source: Eurostat {DATASET_CODE} (NACE Rev. 2, from 2008 onwards)"
    ));
    ui.add_space(4.0);

    let mut changed = false;
    let mut do_fetch = false;

    {
        let view = &mut app.state.options.view;

        ui.horizontal(|ui| {
            ui.label("Year:");
            changed |= ui
                .add(egui::Slider::new(&mut view.year, YEAR_MIN..=YEAR_MAX))
                .changed();
        });

        ui.horizontal(|ui| {
            ui.label("Level:");
            for level in Level::ALL {
                changed |= ui
                    .selectable_value(&mut view.level, level, level.label())
                    .changed();
            }

            ui.separator();

            ui.label("Sex:");
            for sex in Sex::ALL {
                changed |= ui
                    .selectable_value(&mut view.sex, sex, sex.label())
                    .changed();
            }

            ui.separator();

            ui.label("Unit:");
            for unit in Unit::ALL {
                changed |= ui
                    .selectable_value(&mut view.unit, unit, unit.short_label())
                    .on_hover_text(
                        "Unit of measure: Thousand (Abs.) or Percentage of total employment (Rel.)",
                    )
                    .changed();
            }

            ui.separator();

            do_fetch = ui
                .button("Fetch data")
                .on_hover_text("Re-download from Eurostat")
                .clicked();
        });
    }

    if do_fetch {
        actions::fetch(app, true);
    }

    if changed {
        let sel = app.state.options.view.selection();
        logf!("UI: selection changed → {:?}", sel);
        app.rebuild_view();
        if app.row_ix.is_empty() {
            app.status("No data for this selection");
        } else {
            app.status(format!("{} region(s)", app.row_ix.len()));
        }
    }

    ui.add_space(4.0);
}
