// src/gui/actions.rs
//
// Button entrypoints. Fetch runs synchronously on the UI thread — five
// blocking requests against cached-by-default sources; the original app
// blocks the same way.

use std::fs;

use eframe::egui;

use crate::{csv, gui::app::App, select::SelectionView, store};

/// (Re-)fetch the remote documents and rebuild the observation set.
/// `refresh` bypasses the disk cache.
pub fn fetch(app: &mut App, refresh: bool) {
    logf!("Fetch: begin (refresh={refresh})");
    app.status("Fetching…");

    match store::load(refresh) {
        Ok(data) => {
            logf!(
                "Fetch: OK observations={} boundaries={}",
                data.observations.len(),
                data.boundaries.len()
            );
            app.install_data(data);
            app.status("Ready");
        }
        Err(e) => {
            loge!("Fetch: error: {e}");
            app.status(format!("Error: {e}"));
        }
    }
}

/// Export the currently selected rows (table order) to CSV/TSV.
pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        logf!(
            "Export: out path set → {}",
            app.state.options.export.out_path().display()
        );
        app.out_path_dirty = false;
    }

    if app.row_ix.is_empty() {
        logd!("Export: clicked, but the selection is empty");
        app.status("Nothing to export");
        return;
    }

    let export = &app.state.options.export;
    let path = export.out_path();

    let view = app.current_view();
    let headers = export.include_headers.then(SelectionView::headers);
    let contents = csv::rows_to_string(&view.to_owned_rows(), &headers, export.format.delim());

    let result = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(fs::create_dir_all)
        .unwrap_or(Ok(()))
        .and_then(|_| fs::write(&path, contents));

    match result {
        Ok(()) => {
            logf!("Export: OK rows={} → {}", app.row_ix.len(), path.display());
            app.status(format!("Exported {} row(s) → {}", app.row_ix.len(), path.display()));
        }
        Err(e) => {
            loge!("Export: error: {e}");
            app.status(format!("Export error: {e}"));
        }
    }
}

/// Copy the currently selected rows to the clipboard.
pub fn copy(app: &mut App, ctx: &egui::Context) {
    if app.row_ix.is_empty() {
        app.status("Nothing to copy");
        return;
    }

    let export = &app.state.options.export;
    let view = app.current_view();
    let headers = export.include_headers.then(SelectionView::headers);
    let text = csv::rows_to_string(&view.to_owned_rows(), &headers, export.format.delim());

    ctx.copy_text(text);
    logf!("Copy: {} row(s) → clipboard", app.row_ix.len());
    app.status(format!("Copied {} row(s)", app.row_ix.len()));
}
