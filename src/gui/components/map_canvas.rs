// src/gui/components/map_canvas.rs
//
// The choropleth itself. Boundaries for the selected administrative level
// are projected with a plain equirectangular projection and filled with a
// value-mapped color ramp; hovering a region shows location, geo code and
// value. Regions with no data point for the current selection get a
// neutral fill.

use eframe::egui::{self, Color32, Pos2, Rect, Sense, Vec2};
use eframe::egui::epaint::{PathShape, PathStroke, Shape};

use crate::domain::Unit;
use crate::gui::app::App;
use crate::specs::boundaries::Boundary;

// The merged boundary set includes overseas territories which would blow
// the data bbox up to the whole Atlantic; clamp the viewport to Europe.
const EUROPE_MIN: [f64; 2] = [-11.0, 34.0];
const EUROPE_MAX: [f64; 2] = [34.5, 71.5];

const FILL_LOW: Color32 = Color32::from_rgb(0xFF, 0xF3, 0xB0);
const FILL_HIGH: Color32 = Color32::from_rgb(0xB3, 0x1D, 0x2B);
const FILL_NO_DATA: Color32 = Color32::from_rgb(0x3A, 0x3A, 0x3A);
const OUTLINE: Color32 = Color32::from_gray(0x90);

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let size = ui.available_size();
    let (rect, resp) = ui.allocate_exact_size(size, Sense::hover());
    let painter = ui.painter().with_clip_rect(rect);

    if app.data.boundaries.is_empty() {
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "No boundary data",
            egui::FontId::proportional(16.0),
            ui.visuals().weak_text_color(),
        );
        return;
    }

    let proj = Projector::new(viewport(app), rect);
    let geo_len = app.state.options.view.level.geo_len();
    let unit = app.state.options.view.unit;

    // Paint every region of the selected level; matched regions get the
    // value color, the rest stay neutral.
    for b in &app.data.boundaries {
        if b.id.len() != geo_len {
            continue;
        }
        let fill = match app.value_by_geo.get(&b.id) {
            Some(&Some(v)) => ramp(v, app.value_range),
            _ => FILL_NO_DATA,
        };
        for ring in &b.rings {
            let points: Vec<Pos2> = ring.iter().map(|p| proj.to_screen(p)).collect();
            if points.len() < 3 {
                continue;
            }
            // epaint's fill tessellation assumes mostly-convex paths; at
            // 1:20M the artifacts on jagged coastlines are acceptable.
            painter.add(Shape::Path(PathShape {
                points,
                closed: true,
                fill,
                stroke: PathStroke::new(0.6, OUTLINE),
            }));
        }
    }

    draw_legend(&painter, rect, app.value_range, unit);

    // Hover: inverse-project the pointer and hit-test the region rings.
    if let Some(pos) = resp.hover_pos() {
        let lonlat = proj.to_geo(pos);
        if let Some(b) = hit_test(&app.data.boundaries, geo_len, lonlat) {
            let value = app.value_by_geo.get(&b.id).copied().flatten();
            let name = b.name.clone();
            let geo = b.id.clone();
            resp.on_hover_ui(|ui| {
                ui.strong(name);
                ui.label(format!("NUTS: {geo}"));
                match value {
                    Some(v) => ui.label(format!("Value: {v} ({})", unit.label())),
                    None => ui.label("No data"),
                };
            });
        }
    }
}

fn viewport(app: &App) -> ([f64; 2], [f64; 2]) {
    // Data bbox clamped into the European frame.
    let (min, max) = app.map_bbox.unwrap_or((EUROPE_MIN, EUROPE_MAX));
    (
        [min[0].max(EUROPE_MIN[0]), min[1].max(EUROPE_MIN[1])],
        [max[0].min(EUROPE_MAX[0]), max[1].min(EUROPE_MAX[1])],
    )
}

/// Equirectangular projection fitted to `rect`, aspect preserved.
struct Projector {
    mid_lon: f64,
    mid_lat: f64,
    cos_lat: f64,
    scale: f64, // screen px per degree latitude
    center: Pos2,
}

impl Projector {
    fn new((min, max): ([f64; 2], [f64; 2]), rect: Rect) -> Self {
        let mid_lon = (min[0] + max[0]) / 2.0;
        let mid_lat = (min[1] + max[1]) / 2.0;
        let cos_lat = mid_lat.to_radians().cos();

        let span_x = (max[0] - min[0]).max(1e-9) * cos_lat;
        let span_y = (max[1] - min[1]).max(1e-9);
        let scale = (f64::from(rect.width()) / span_x).min(f64::from(rect.height()) / span_y);

        Self {
            mid_lon,
            mid_lat,
            cos_lat,
            scale,
            center: rect.center(),
        }
    }

    fn to_screen(&self, p: &[f64; 2]) -> Pos2 {
        let x = (p[0] - self.mid_lon) * self.cos_lat * self.scale;
        let y = (p[1] - self.mid_lat) * self.scale;
        self.center + Vec2::new(x as f32, -(y as f32))
    }

    fn to_geo(&self, pos: Pos2) -> [f64; 2] {
        let dx = f64::from(pos.x - self.center.x);
        let dy = f64::from(self.center.y - pos.y);
        [
            self.mid_lon + dx / (self.scale * self.cos_lat),
            self.mid_lat + dy / self.scale,
        ]
    }
}

/// Linear two-color ramp over the selection's value range.
fn ramp(value: f64, range: Option<(f64, f64)>) -> Color32 {
    let t = match range {
        Some((lo, hi)) if hi > lo => ((value - lo) / (hi - lo)).clamp(0.0, 1.0) as f32,
        _ => 0.5,
    };
    let lerp = |a: u8, b: u8| -> u8 { (f32::from(a) + (f32::from(b) - f32::from(a)) * t) as u8 };
    Color32::from_rgb(
        lerp(FILL_LOW.r(), FILL_HIGH.r()),
        lerp(FILL_LOW.g(), FILL_HIGH.g()),
        lerp(FILL_LOW.b(), FILL_HIGH.b()),
    )
}

fn draw_legend(painter: &egui::Painter, rect: Rect, range: Option<(f64, f64)>, unit: Unit) {
    let Some((lo, hi)) = range else { return };

    let steps = 24;
    let bar = Rect::from_min_size(
        rect.left_bottom() + Vec2::new(12.0, -26.0),
        Vec2::new(120.0, 10.0),
    );
    for i in 0..steps {
        let t0 = i as f32 / steps as f32;
        let t1 = (i + 1) as f32 / steps as f32;
        let seg = Rect::from_min_max(
            Pos2::new(bar.min.x + bar.width() * t0, bar.min.y),
            Pos2::new(bar.min.x + bar.width() * t1, bar.max.y),
        );
        let v = lo + (hi - lo) * f64::from((t0 + t1) / 2.0);
        painter.rect_filled(seg, 0.0, ramp(v, range));
    }
    painter.text(
        bar.left_top() + Vec2::new(0.0, -4.0),
        egui::Align2::LEFT_BOTTOM,
        format!("{lo:.1} – {hi:.1} {}", unit.label()),
        egui::FontId::proportional(11.0),
        painter.ctx().style().visuals.text_color(),
    );
}

/// Ray-cast point-in-polygon over the outer rings of the given level.
fn hit_test<'a>(boundaries: &'a [Boundary], geo_len: usize, p: [f64; 2]) -> Option<&'a Boundary> {
    boundaries
        .iter()
        .filter(|b| b.id.len() == geo_len)
        .find(|b| b.rings.iter().any(|ring| ring_contains(ring, p)))
}

fn ring_contains(ring: &[[f64; 2]], p: [f64; 2]) -> bool {
    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let (a, b) = (ring[i], ring[j]);
        if (a[1] > p[1]) != (b[1] > p[1]) {
            let x = a[0] + (p[1] - a[1]) / (b[1] - a[1]) * (b[0] - a[0]);
            if p[0] < x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
