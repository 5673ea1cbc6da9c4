//! Curve selection panel - the multi-select control for the track plot.

use eframe::egui;

use crate::app::LasViewApp;

impl LasViewApp {
    /// Render the curve multi-select panel.
    ///
    /// The list is populated from the parsed well's curve mnemonics in
    /// file order, so the selectable set always matches the curves the
    /// parser produced.
    pub fn render_curve_selection(&mut self, ui: &mut egui::Ui) {
        ui.heading("Curves");
        ui.separator();

        let Some(loaded) = &self.well else {
            ui.centered_and_justified(|ui| {
                ui.label(
                    egui::RichText::new("Load a LAS file to list its curves")
                        .italics()
                        .color(egui::Color32::GRAY),
                );
            });
            return;
        };

        ui.label(format!(
            "Selected: {} / {}",
            self.selected_curves.len(),
            loaded.well.curves.len()
        ));

        ui.separator();

        // Collect labels upfront; toggling mutates self
        let entries: Vec<(String, String)> = loaded
            .well
            .curves
            .iter()
            .map(|c| (c.mnemonic.clone(), c.display_label()))
            .collect();

        let mut curve_to_toggle: Option<String> = None;

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.set_width(ui.available_width());

                for (mnemonic, label) in &entries {
                    let is_selected = self.selected_curves.iter().any(|m| m == mnemonic);

                    let label_text = if is_selected {
                        format!("[*] {}", label)
                    } else {
                        format!("[ ] {}", label)
                    };

                    if ui.selectable_label(is_selected, label_text).clicked() {
                        curve_to_toggle = Some(mnemonic.clone());
                    }
                }
            });

        if let Some(mnemonic) = curve_to_toggle {
            self.toggle_curve(&mnemonic);
        }
    }
}
