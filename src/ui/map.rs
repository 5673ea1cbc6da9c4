//! Location map canvas.
//!
//! Paints the well position on a small equirectangular map: graticule,
//! one marker with a hover popup, and the feature overlay ring. Zoom and
//! pan are view state only; the map is recomputed from the well each
//! frame.

use eframe::egui::{self, Align2, Color32, FontId, Painter, Rect, Sense, Stroke};
use geo_types::Coord;

use crate::app::LasViewApp;
use crate::geo::{MapProjection, WellFeature};
use crate::state::NoticeKind;
use crate::ui::icons::draw_map_pin;
use crate::ui::notice::inline_notice;

const MAP_HEIGHT: f32 = 320.0;
const MARKER_SIZE: f32 = 20.0;

impl LasViewApp {
    /// Render the location stage: the map when a position exists,
    /// otherwise the warning notice (a normal branch, not an error).
    pub fn render_location_map(&mut self, ui: &mut egui::Ui) {
        let Some(loaded) = &self.well else {
            return;
        };

        let Some(feature) = WellFeature::from_well(&loaded.well) else {
            inline_notice(ui, NoticeKind::Warning, "Location information not available.");
            return;
        };

        let width = ui.available_width();
        let (response, painter) =
            ui.allocate_painter(egui::vec2(width, MAP_HEIGHT), Sense::click_and_drag());
        let rect = response.rect;

        // View interactions: drag pans, pinch/scroll zooms, double-click resets
        if response.dragged() {
            self.map_pan += response.drag_delta();
        }
        if response.hovered() {
            let zoom_delta = ui.input(|i| i.zoom_delta());
            if zoom_delta != 1.0 {
                self.map_zoom = (self.map_zoom * zoom_delta).clamp(0.25, 16.0);
            }
        }
        if response.double_clicked() {
            self.reset_map_view();
        }

        let mut projection = MapProjection::new(feature.point.y(), feature.point.x());
        projection.update(self.map_zoom, self.map_pan, rect);

        let painter = painter.with_clip_rect(rect);

        // Background and frame
        painter.rect_filled(rect, 4, Color32::from_rgb(26, 33, 41));
        draw_graticule(&painter, &projection, rect);

        let marker_pos = projection.geo_to_screen(Coord {
            x: feature.point.x(),
            y: feature.point.y(),
        });

        // Feature overlay: a ring around the well position
        painter.circle_stroke(
            marker_pos,
            MARKER_SIZE * 0.9,
            Stroke::new(1.5, Color32::from_rgb(253, 193, 73)),
        );

        // Marker pin with the well name alongside
        draw_map_pin(&painter, marker_pos, MARKER_SIZE, Color32::from_rgb(71, 108, 155));
        painter.text(
            egui::pos2(marker_pos.x + MARKER_SIZE * 0.8, marker_pos.y - MARKER_SIZE),
            Align2::LEFT_BOTTOM,
            &feature.well_name,
            FontId::proportional(12.0),
            Color32::LIGHT_GRAY,
        );

        // Marker popup on hover
        if let Some(hover) = response.hover_pos() {
            if hover.distance(marker_pos) < MARKER_SIZE * 1.5 {
                draw_popup(&painter, marker_pos, &feature.popup_text());
            }
        }

        // Scale hint bottom-left
        let span = projection.span_deg / projection.zoom as f64;
        painter.text(
            egui::pos2(rect.left() + 8.0, rect.bottom() - 6.0),
            Align2::LEFT_BOTTOM,
            format!("{:.3}° across", span),
            FontId::proportional(10.0),
            Color32::GRAY,
        );

        painter.rect_stroke(
            rect,
            4,
            Stroke::new(1.0, Color32::from_rgb(70, 70, 70)),
            egui::StrokeKind::Inside,
        );
    }
}

/// Draw lat/lon grid lines with labels at a step that suits the zoom.
fn draw_graticule(painter: &Painter, projection: &MapProjection, rect: Rect) {
    let step = graticule_step(projection.deg_per_pixel());
    let stroke = Stroke::new(0.5, Color32::from_rgb(50, 60, 70));
    let label_color = Color32::from_rgb(110, 120, 130);

    let top_left = projection.screen_to_geo(rect.left_top());
    let bottom_right = projection.screen_to_geo(rect.right_bottom());

    // Longitude lines (vertical)
    let mut lon = (top_left.x / step).floor() * step;
    while lon <= bottom_right.x {
        let pos = projection.geo_to_screen(Coord { x: lon, y: projection.center_lat });
        painter.line_segment(
            [
                egui::pos2(pos.x, rect.top()),
                egui::pos2(pos.x, rect.bottom()),
            ],
            stroke,
        );
        painter.text(
            egui::pos2(pos.x + 2.0, rect.top() + 2.0),
            Align2::LEFT_TOP,
            format!("{:.3}", lon),
            FontId::proportional(9.0),
            label_color,
        );
        lon += step;
    }

    // Latitude lines (horizontal); screen Y grows southward
    let mut lat = (bottom_right.y / step).floor() * step;
    while lat <= top_left.y {
        let pos = projection.geo_to_screen(Coord { x: projection.center_lon, y: lat });
        painter.line_segment(
            [
                egui::pos2(rect.left(), pos.y),
                egui::pos2(rect.right(), pos.y),
            ],
            stroke,
        );
        painter.text(
            egui::pos2(rect.left() + 2.0, pos.y + 2.0),
            Align2::LEFT_TOP,
            format!("{:.3}", lat),
            FontId::proportional(9.0),
            label_color,
        );
        lat += step;
    }
}

/// Pick a 1/2/5-series graticule step targeting ~90px between lines
fn graticule_step(deg_per_pixel: f64) -> f64 {
    let target = deg_per_pixel * 90.0;
    let magnitude = 10f64.powf(target.log10().floor());
    let normalized = target / magnitude;
    let factor = if normalized < 1.5 {
        1.0
    } else if normalized < 3.5 {
        2.0
    } else if normalized < 7.5 {
        5.0
    } else {
        10.0
    };
    factor * magnitude
}

/// Small popup box next to the marker showing county/state
fn draw_popup(painter: &Painter, marker_pos: egui::Pos2, text: &str) {
    let galley = painter.layout_no_wrap(
        text.to_string(),
        FontId::proportional(12.0),
        Color32::from_rgb(25, 25, 25),
    );

    let padding = egui::vec2(8.0, 6.0);
    let origin = egui::pos2(
        marker_pos.x + MARKER_SIZE,
        marker_pos.y - MARKER_SIZE * 2.0 - galley.size().y,
    );
    let bg_rect = Rect::from_min_size(origin, galley.size() + padding * 2.0);

    painter.rect_filled(bg_rect, 4, Color32::from_rgb(246, 247, 235));
    painter.galley(origin + padding, galley, Color32::from_rgb(25, 25, 25));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graticule_step_series() {
        // ~0.08 deg over 400px: a few hundredths of a degree per line
        assert_eq!(graticule_step(0.0002), 0.02);
        assert_eq!(graticule_step(0.00011), 0.01);
        assert_eq!(graticule_step(0.0005), 0.05);
        assert_eq!(graticule_step(0.001), 0.1);
    }
}
