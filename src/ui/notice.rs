//! Inline notice boxes for normal skip branches and error messages.

use eframe::egui;

use crate::state::NoticeKind;

/// Draw a kind-coloured notice box in the flow of the page.
///
/// Used for the non-error skip branches (missing location, empty curve
/// selection) and for surfacing parse failures.
pub fn inline_notice(ui: &mut egui::Ui, kind: NoticeKind, message: &str) {
    let bg = kind.color();
    let fg = kind.text_color();

    egui::Frame::new()
        .fill(egui::Color32::from_rgb(bg[0], bg[1], bg[2]))
        .corner_radius(6)
        .inner_margin(egui::Margin::symmetric(12, 8))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(message)
                    .color(egui::Color32::from_rgb(fg[0], fg[1], fg[2]))
                    .size(14.0),
            );
        });
}
