// src/gui/components/data_table.rs
//
// The optional raw-table view: currently selected rows, descending by
// value (row_ix is already in that order). Purely a view.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;
use crate::select::SelectionView;

const COL_WIDTHS: [f32; 6] = [50.0, 70.0, 70.0, 70.0, 60.0, 260.0];
// Year and Value read better centered; the rest left-aligned.
const CENTERED: [bool; 6] = [true, false, false, true, true, false];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let headers = SelectionView::headers();
    let view = app.current_view();

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .max_scroll_height(220.0)
        .id_salt("selection_table");
    for w in COL_WIDTHS {
        table = table.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
    }

    table
        .header(24.0, |mut header| {
            for (ci, h) in headers.iter().enumerate() {
                header.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                    let label = RichText::new(h).strong();
                    if CENTERED[ci] {
                        ui.centered_and_justified(|ui| ui.label(label));
                    } else {
                        ui.with_layout(Layout::left_to_right(Align::Center), |ui| ui.label(label));
                    }
                });
            }
        })
        .body(|body| {
            body.rows(20.0, view.len(), |mut row| {
                let Some(obs) = view.get(row.index()) else {
                    return;
                };
                let cells = [
                    obs.year.to_string(),
                    s!(obs.sex.label()),
                    s!(obs.unit.label()),
                    obs.value.map(|v| v.to_string()).unwrap_or_else(|| s!(":")),
                    obs.geo.clone(),
                    obs.location.clone(),
                ];
                for (ci, cell) in cells.into_iter().enumerate() {
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                        if CENTERED[ci] {
                            ui.centered_and_justified(|ui| ui.label(cell));
                        } else {
                            ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                                ui.label(cell)
                            });
                        }
                    });
                }
            });
        });
}
