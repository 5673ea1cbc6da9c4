//! Map projection and coordinate transformation.
//!
//! Converts between geographic coordinates (lat/lon) and screen
//! coordinates for the location map canvas.

use eframe::egui::{Pos2, Rect, Vec2};
use geo_types::Coord;

use crate::state::MAP_SPAN_DEG;

/// Equirectangular projection centred on the well position.
///
/// Adequate for the town-scale span the location map shows; no tiles,
/// no Mercator math beyond a cosine latitude correction.
#[derive(Debug, Clone)]
pub struct MapProjection {
    /// Center latitude of the view (well position)
    pub center_lat: f64,
    /// Center longitude of the view (well position)
    pub center_lon: f64,
    /// Visible span in degrees at zoom 1.0
    pub span_deg: f64,
    /// Current zoom level
    pub zoom: f32,
    /// Pan offset in screen pixels
    pub pan_offset: Vec2,
    /// Screen rectangle for the canvas
    pub screen_rect: Rect,
}

impl MapProjection {
    /// Creates a new projection centred on a well position.
    pub fn new(center_lat: f64, center_lon: f64) -> Self {
        Self {
            center_lat,
            center_lon,
            span_deg: MAP_SPAN_DEG,
            zoom: 1.0,
            pan_offset: Vec2::ZERO,
            screen_rect: Rect::from_min_size(Pos2::ZERO, Vec2::new(800.0, 400.0)),
        }
    }

    /// Updates the projection with current view state.
    pub fn update(&mut self, zoom: f32, pan_offset: Vec2, screen_rect: Rect) {
        self.zoom = zoom;
        self.pan_offset = pan_offset;
        self.screen_rect = screen_rect;
    }

    /// Converts geographic coordinates (lon, lat) to screen position.
    pub fn geo_to_screen(&self, coord: Coord<f64>) -> Pos2 {
        let effective_span = self.span_deg / self.zoom as f64;

        let rel_lon = coord.x - self.center_lon;
        let rel_lat = coord.y - self.center_lat;

        // Latitude correction keeps east-west distances honest
        let lat_correction = self.center_lat.to_radians().cos();
        let corrected_lon = rel_lon * lat_correction;

        let norm_x = corrected_lon / effective_span;
        // Screen Y increases downward
        let norm_y = -rel_lat / effective_span;

        let center = self.screen_rect.center() + self.pan_offset;
        let half_size = self.screen_rect.size().min_elem() / 2.0;

        Pos2::new(
            center.x + (norm_x as f32) * half_size,
            center.y + (norm_y as f32) * half_size,
        )
    }

    /// Converts screen position to geographic coordinates (lon, lat).
    pub fn screen_to_geo(&self, pos: Pos2) -> Coord<f64> {
        let effective_span = self.span_deg / self.zoom as f64;

        let center = self.screen_rect.center() + self.pan_offset;
        let half_size = self.screen_rect.size().min_elem() / 2.0;

        let norm_x = ((pos.x - center.x) / half_size) as f64;
        let norm_y = ((pos.y - center.y) / half_size) as f64;

        let lat_correction = self.center_lat.to_radians().cos();
        let lon = self.center_lon + (norm_x * effective_span) / lat_correction;
        let lat = self.center_lat - norm_y * effective_span;

        Coord { x: lon, y: lat }
    }

    /// Degrees per screen pixel at the current zoom, for graticule spacing
    pub fn deg_per_pixel(&self) -> f64 {
        let half_size = self.screen_rect.size().min_elem() as f64 / 2.0;
        if half_size <= 0.0 {
            return f64::EPSILON;
        }
        (self.span_deg / self.zoom as f64) / half_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_maps_to_rect_center() {
        let mut projection = MapProjection::new(38.539, -98.705);
        projection.update(
            1.0,
            Vec2::ZERO,
            Rect::from_min_size(Pos2::new(100.0, 50.0), Vec2::new(600.0, 400.0)),
        );

        let pos = projection.geo_to_screen(Coord {
            x: -98.705,
            y: 38.539,
        });
        let center = projection.screen_rect.center();
        assert!((pos.x - center.x).abs() < 1e-3);
        assert!((pos.y - center.y).abs() < 1e-3);
    }

    #[test]
    fn test_round_trip() {
        let mut projection = MapProjection::new(38.539, -98.705);
        projection.update(
            2.0,
            Vec2::new(15.0, -8.0),
            Rect::from_min_size(Pos2::ZERO, Vec2::new(640.0, 360.0)),
        );

        let coord = Coord {
            x: -98.71,
            y: 38.55,
        };
        let back = projection.screen_to_geo(projection.geo_to_screen(coord));
        assert!((back.x - coord.x).abs() < 1e-6);
        assert!((back.y - coord.y).abs() < 1e-6);
    }

    #[test]
    fn test_north_is_up() {
        let projection = MapProjection::new(38.539, -98.705);
        let north = projection.geo_to_screen(Coord {
            x: -98.705,
            y: 38.549,
        });
        let south = projection.geo_to_screen(Coord {
            x: -98.705,
            y: 38.529,
        });
        assert!(north.y < south.y);
    }
}
