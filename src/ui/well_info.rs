//! Header and location text panes.

use eframe::egui;

use crate::app::LasViewApp;
use crate::state::LoadedWell;

impl LasViewApp {
    /// Render the "Well information" section: header fields and the
    /// structured location, plus a raw serialized view for inspection.
    pub fn render_well_overview(&mut self, ui: &mut egui::Ui) {
        let Some(loaded) = &self.well else {
            return;
        };

        ui.heading("Well information");
        ui.add_space(6.0);

        Self::render_header_grid(ui, loaded);

        ui.add_space(6.0);

        ui.collapsing("Raw header", |ui| {
            match serde_json::to_string_pretty(&loaded.well.header) {
                Ok(json) => {
                    ui.label(egui::RichText::new(json).monospace().small());
                }
                Err(e) => {
                    ui.label(format!("serialization failed: {}", e));
                }
            }
        });
    }

    fn render_header_grid(ui: &mut egui::Ui, loaded: &LoadedWell) {
        let header = &loaded.well.header;
        let location = &loaded.well.location;

        let rows: Vec<(&str, String)> = vec![
            ("Well", header.display_name().to_string()),
            ("Company", header.company.clone().unwrap_or_default()),
            ("Field", header.field.clone().unwrap_or_default()),
            ("Location", header.location.clone().unwrap_or_default()),
            ("County", location.county.clone().unwrap_or_default()),
            ("State", location.state.clone().unwrap_or_default()),
            ("UWI", header.uwi.clone().unwrap_or_default()),
            ("API", header.api.clone().unwrap_or_default()),
            (
                "Service company",
                header.service_company.clone().unwrap_or_default(),
            ),
            ("Log date", header.log_date.clone().unwrap_or_default()),
            (
                "Position",
                location
                    .position
                    .map(|p| format!("{:.5}, {:.5}", p.latitude, p.longitude))
                    .unwrap_or_default(),
            ),
        ];

        egui::Grid::new("well_header_grid")
            .num_columns(2)
            .spacing([24.0, 4.0])
            .show(ui, |ui| {
                for (label, value) in rows {
                    // Blank fields stay out of the pane entirely
                    if value.is_empty() {
                        continue;
                    }
                    ui.label(
                        egui::RichText::new(label)
                            .small()
                            .color(egui::Color32::GRAY),
                    );
                    ui.label(egui::RichText::new(value).strong());
                    ui.end_row();
                }
            });
    }
}
