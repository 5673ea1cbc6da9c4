//! Sidebar UI rendering - file source panel and open/drop controls.

use eframe::egui;

use crate::app::LasViewApp;
use crate::state::LoadingState;
use crate::ui::icons::draw_upload_icon;

impl LasViewApp {
    /// Render the left sidebar with the current source and open controls
    pub fn render_sidebar(&mut self, ui: &mut egui::Ui) {
        ui.heading("LAS file");
        ui.separator();

        // Show loading indicator
        if let LoadingState::Loading(filename) = &self.loading_state {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(format!("Loading {}...", filename));
            });
            ui.separator();
        }

        let is_loading = matches!(self.loading_state, LoadingState::Loading(_));

        if let Some(loaded) = &self.well {
            ui.label(egui::RichText::new(loaded.source.display_name()).strong());

            let origin = if loaded.source.is_default() {
                "bundled default"
            } else {
                "uploaded"
            };
            let mut info = format!(
                "{} | {} curves | {} samples",
                origin,
                loaded.well.curves.len(),
                loaded.well.sample_count()
            );
            if let Some((start, stop)) = loaded.well.depth_range() {
                let unit = loaded
                    .well
                    .depth_curve()
                    .map(|c| c.unit.clone())
                    .unwrap_or_default();
                info.push_str(&format!(" | {:.1}-{:.1} {}", start, stop, unit));
            }
            ui.label(
                egui::RichText::new(info)
                    .small()
                    .color(egui::Color32::GRAY),
            );

            ui.add_space(10.0);
            ui.separator();
            ui.add_space(5.0);

            ui.add_enabled_ui(!is_loading, |ui| {
                if ui.button("Open another file").clicked() {
                    self.open_file_dialog();
                }
            });

            ui.add_space(5.0);
            ui.label(
                egui::RichText::new("You can also drop a .las file anywhere in the window.")
                    .small()
                    .color(egui::Color32::GRAY),
            );
        } else if !is_loading {
            self.render_drop_zone(ui);
        }
    }

    /// Render the drop zone shown when no well is loaded
    fn render_drop_zone(&mut self, ui: &mut egui::Ui) {
        let primary_color = egui::Color32::from_rgb(113, 120, 78); // Olive green
        let card_bg = egui::Color32::from_rgb(45, 45, 45);
        let text_gray = egui::Color32::from_rgb(150, 150, 150);

        ui.add_space(20.0);

        egui::Frame::new()
            .fill(card_bg)
            .corner_radius(12)
            .inner_margin(20)
            .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(70, 70, 70)))
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    let icon_size = 32.0;
                    let (icon_rect, _) = ui
                        .allocate_exact_size(egui::vec2(icon_size, icon_size), egui::Sense::hover());
                    draw_upload_icon(ui, icon_rect.center(), icon_size, primary_color);

                    ui.add_space(12.0);

                    if ui.button("Select a file").clicked() {
                        self.open_file_dialog();
                    }

                    ui.add_space(12.0);

                    ui.label(egui::RichText::new("or").color(text_gray).size(12.0));

                    ui.add_space(8.0);

                    ui.label(
                        egui::RichText::new("Drop a LAS file here")
                            .color(egui::Color32::LIGHT_GRAY)
                            .size(13.0),
                    );
                });
            });
    }
}
