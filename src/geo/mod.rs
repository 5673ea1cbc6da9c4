//! Geographic feature construction and map projection.

pub mod projection;

pub use projection::MapProjection;

use geo_types::Point;

use crate::parsers::Well;

/// Ephemeral geographic record for the well marker.
///
/// Built fresh each frame from the parsed well, only when a surface
/// position exists; never stored.
#[derive(Clone, Debug, PartialEq)]
pub struct WellFeature {
    pub well_name: String,
    pub county: Option<String>,
    pub state: Option<String>,
    /// Surface position as (lon, lat)
    pub point: Point<f64>,
}

impl WellFeature {
    /// Builds the feature when `location.position` is present.
    pub fn from_well(well: &Well) -> Option<Self> {
        let position = well.location.position?;
        Some(Self {
            well_name: well.header.display_name().to_string(),
            county: well.location.county.clone(),
            state: well.location.state.clone(),
            point: Point::new(position.longitude, position.latitude),
        })
    }

    /// Marker popup text, mirroring the header fields the map shows
    pub fn popup_text(&self) -> String {
        format!(
            "County: {}, State: {}",
            self.county.as_deref().unwrap_or("unknown"),
            self.state.as_deref().unwrap_or("unknown"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::{Position, Well};

    #[test]
    fn test_feature_requires_position() {
        let mut well = Well::default();
        well.header.name = "SMITH 1-12".to_string();
        well.location.county = Some("BARTON".to_string());
        assert!(WellFeature::from_well(&well).is_none());

        well.location.position = Some(Position {
            latitude: 38.5,
            longitude: -98.7,
        });
        let feature = WellFeature::from_well(&well).unwrap();
        assert_eq!(feature.well_name, "SMITH 1-12");
        assert_eq!(feature.point.x(), -98.7);
        assert_eq!(feature.point.y(), 38.5);
    }

    #[test]
    fn test_popup_text() {
        let feature = WellFeature {
            well_name: "SMITH 1-12".to_string(),
            county: Some("BARTON".to_string()),
            state: Some("KANSAS".to_string()),
            point: Point::new(-98.7, 38.5),
        };
        assert_eq!(feature.popup_text(), "County: BARTON, State: KANSAS");
    }
}
