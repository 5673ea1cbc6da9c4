//! Custom icon drawing utilities.

use eframe::egui;

/// Draw an upload icon (tray with an upward arrow)
pub fn draw_upload_icon(ui: &mut egui::Ui, center: egui::Pos2, size: f32, color: egui::Color32) {
    let painter = ui.painter();
    let stroke = egui::Stroke::new(2.0, color);
    let half = size / 2.0;

    // Tray
    let tray_y = center.y + half * 0.7;
    painter.line_segment(
        [
            egui::pos2(center.x - half * 0.8, tray_y),
            egui::pos2(center.x + half * 0.8, tray_y),
        ],
        stroke,
    );
    painter.line_segment(
        [
            egui::pos2(center.x - half * 0.8, tray_y),
            egui::pos2(center.x - half * 0.8, tray_y - half * 0.35),
        ],
        stroke,
    );
    painter.line_segment(
        [
            egui::pos2(center.x + half * 0.8, tray_y),
            egui::pos2(center.x + half * 0.8, tray_y - half * 0.35),
        ],
        stroke,
    );

    // Arrow shaft
    let arrow_top = egui::pos2(center.x, center.y - half * 0.8);
    let arrow_bottom = egui::pos2(center.x, center.y + half * 0.3);
    painter.line_segment([arrow_bottom, arrow_top], stroke);

    // Arrow head
    let head = half * 0.4;
    painter.line_segment(
        [arrow_top, egui::pos2(arrow_top.x - head, arrow_top.y + head)],
        stroke,
    );
    painter.line_segment(
        [arrow_top, egui::pos2(arrow_top.x + head, arrow_top.y + head)],
        stroke,
    );
}

/// Draw a map pin anchored at `tip` (the geographic position on screen)
pub fn draw_map_pin(painter: &egui::Painter, tip: egui::Pos2, size: f32, color: egui::Color32) {
    let head_radius = size * 0.35;
    let head_center = egui::pos2(tip.x, tip.y - size * 0.75);

    // Stem from head to the anchored tip
    painter.line_segment(
        [egui::pos2(tip.x, head_center.y + head_radius), tip],
        egui::Stroke::new(size * 0.18, color),
    );

    // Head with a hollow centre
    painter.circle_filled(head_center, head_radius, color);
    painter.circle_filled(
        head_center,
        head_radius * 0.4,
        egui::Color32::from_rgb(25, 25, 25),
    );
}
