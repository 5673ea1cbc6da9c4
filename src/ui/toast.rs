//! Toast notification system for user feedback.

use eframe::egui;

use crate::app::LasViewApp;

impl LasViewApp {
    /// Render toast notifications in the bottom right corner
    pub fn render_toast(&mut self, ctx: &egui::Context) {
        if let Some((message, time, kind)) = &self.toast_message {
            if time.elapsed().as_secs() < 3 {
                let margin = 20.0;

                let bg = kind.color();
                let fg = kind.text_color();

                egui::Area::new(egui::Id::new("toast"))
                    .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-margin, -margin))
                    .order(egui::Order::Foreground)
                    .show(ctx, |ui| {
                        egui::Frame::new()
                            .fill(egui::Color32::from_rgb(bg[0], bg[1], bg[2]))
                            .corner_radius(8)
                            .inner_margin(egui::Margin::symmetric(16, 12))
                            .show(ui, |ui| {
                                ui.label(
                                    egui::RichText::new(message)
                                        .color(egui::Color32::from_rgb(fg[0], fg[1], fg[2]))
                                        .size(14.0),
                                );
                            });
                    });
            } else {
                self.toast_message = None;
            }
        }
    }
}
