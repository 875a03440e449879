// src/gui/app.rs
use std::collections::HashMap;
use std::error::Error;

use eframe::egui;

use crate::{
    config::state::AppState,
    select::{SelectionCache, SelectionView},
    store::{self, LoadedData},
};

use super::components;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "High-Tech Employment Map",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // canonical data, immutable between fetches
    pub data: LoadedData,
    /// lon/lat bbox of the merged boundary set, fixed per fetch
    pub map_bbox: Option<([f64; 2], [f64; 2])>,

    // memoized selection results + the materialized current view
    pub view_cache: SelectionCache,
    /// Indices into `data.observations` for the current selection,
    /// descending by value (table order).
    pub row_ix: Vec<usize>,
    /// geo → value for the current selection (map fill lookup)
    pub value_by_geo: HashMap<String, Option<f64>>,
    /// min/max of present values in the current selection (color ramp)
    pub value_range: Option<(f64, f64)>,

    // output text field UX (maps <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    pub status: String,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let out_path_text = state.options.export.out_path().to_string_lossy().into();

        let mut app = Self {
            state,
            data: LoadedData::default(),
            map_bbox: None,
            view_cache: SelectionCache::new(),
            row_ix: Vec::new(),
            value_by_geo: HashMap::new(),
            value_range: None,
            out_path_text,
            out_path_dirty: false,
            status: s!("Loading…"),
        };

        // Cache-or-fetch at startup, like the original app. On failure the
        // window still opens; the user can retry via the Fetch button.
        match store::load(false) {
            Ok(data) => {
                app.install_data(data);
                app.status = s!("Ready");
            }
            Err(e) => {
                loge!("Init: load failed: {e}");
                app.status = format!("Error: {e} — use “Fetch data” to retry");
            }
        }

        logf!(
            "Init: observations={}, boundaries={}",
            app.data.observations.len(),
            app.data.boundaries.len()
        );
        app
    }

    /// Swap in freshly loaded data and invalidate everything derived.
    pub fn install_data(&mut self, data: LoadedData) {
        self.map_bbox = crate::specs::boundaries::bounding_box(&data.boundaries);
        self.data = data;
        self.view_cache.clear();
        self.rebuild_view();
    }

    /// Recompute the current view from the selection (memoized).
    pub fn rebuild_view(&mut self) {
        let sel = self.state.options.view.selection();
        let ix = self
            .view_cache
            .get_or_select(&self.data.observations, sel)
            .to_vec();

        let mut view = SelectionView::from_indices(&self.data.observations, ix);
        view.sort_by_value_desc();

        self.value_by_geo = view
            .iter()
            .map(|o| (o.geo.clone(), o.value))
            .collect();
        let present: Vec<f64> = view.iter().filter_map(|o| o.value).collect();
        self.value_range = match (
            present.iter().cloned().reduce(f64::min),
            present.iter().cloned().reduce(f64::max),
        ) {
            (Some(lo), Some(hi)) => Some((lo, hi)),
            _ => None,
        };

        self.row_ix = view.row_ix;
        logd!(
            "View: {:?} → {} rows, range {:?}",
            sel,
            self.row_ix.len(),
            self.value_range
        );
    }

    /// The current view as a borrow-checked SelectionView.
    pub fn current_view(&self) -> SelectionView<'_> {
        SelectionView::from_indices(&self.data.observations, self.row_ix.clone())
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            components::controls::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("table").show(ctx, |ui| {
            components::export_bar::draw(ui, self);
            if self.state.gui.show_table {
                ui.separator();
                components::data_table::draw(ui, self);
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::map_canvas::draw(ui, self);
        });
    }
}
