//! Curve plot rendering and per-curve info blocks.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::app::LasViewApp;
use crate::parsers::Curve;
use crate::state::{CHART_COLORS, CURVE_DUMP_SAMPLES};

impl LasViewApp {
    /// Render the resume plot: every curve in the file, no selection needed.
    pub fn render_resume_plot(&mut self, ui: &mut egui::Ui) {
        let Some(loaded) = &self.well else {
            return;
        };

        let depth: Vec<f64> = loaded
            .well
            .depth_curve()
            .map(|c| c.samples.clone())
            .unwrap_or_default();

        // All curves except the depth index itself
        let series: Vec<(String, usize, Vec<[f64; 2]>)> = loaded
            .well
            .curves
            .iter()
            .skip(1)
            .enumerate()
            .map(|(i, curve)| (curve.display_label(), i, normalize_points(&depth, &curve.samples)))
            .collect();

        let depth_label = axis_label(loaded.well.depth_curve());

        draw_curve_plot(ui, "resume_plot", &depth_label, &series);
    }

    /// Render the selective plot: exactly the selected curves, in
    /// selection order. Only called with a non-empty selection.
    pub fn render_track_plot(&mut self, ui: &mut egui::Ui) {
        let Some(loaded) = &self.well else {
            return;
        };

        let depth: Vec<f64> = loaded
            .well
            .depth_curve()
            .map(|c| c.samples.clone())
            .unwrap_or_default();

        let series: Vec<(String, usize, Vec<[f64; 2]>)> = self
            .selected_curves
            .iter()
            .enumerate()
            .filter_map(|(i, mnemonic)| {
                loaded
                    .well
                    .curve(mnemonic)
                    .map(|curve| (curve.display_label(), i, normalize_points(&depth, &curve.samples)))
            })
            .collect();

        let depth_label = axis_label(loaded.well.depth_curve());

        draw_curve_plot(ui, "track_plot", &depth_label, &series);
    }

    /// Render one info block per selected curve: identity, stats, and a
    /// small-format dump of the leading samples.
    pub fn render_curve_info(&mut self, ui: &mut egui::Ui) {
        let Some(loaded) = &self.well else {
            return;
        };

        let curves: Vec<(usize, Curve)> = self
            .selected_curves
            .iter()
            .enumerate()
            .filter_map(|(i, mnemonic)| loaded.well.curve(mnemonic).map(|c| (i, c.clone())))
            .collect();

        for (i, curve) in curves {
            let color = CHART_COLORS[i % CHART_COLORS.len()];
            let color32 = egui::Color32::from_rgb(color[0], color[1], color[2]);

            egui::Frame::new()
                .fill(egui::Color32::from_rgb(40, 40, 40))
                .stroke(egui::Stroke::new(2.0, color32))
                .corner_radius(5)
                .inner_margin(10)
                .show(ui, |ui| {
                    ui.label(
                        egui::RichText::new(format!("Curve '{}'", curve.mnemonic))
                            .strong()
                            .color(color32),
                    );

                    let mut detail = curve.kind.describe().to_string();
                    if !curve.unit.is_empty() {
                        detail.push_str(&format!(" [{}]", curve.unit));
                    }
                    if !curve.description.is_empty() {
                        detail.push_str(&format!(" | {}", curve.description));
                    }
                    ui.label(
                        egui::RichText::new(detail)
                            .small()
                            .color(egui::Color32::GRAY),
                    );

                    let mut stats = format!(
                        "{} samples ({} valid)",
                        curve.samples.len(),
                        curve.valid_count()
                    );
                    if let Some((lo, hi)) = curve.value_range() {
                        stats.push_str(&format!(" | range {:.4} to {:.4}", lo, hi));
                    }
                    ui.label(
                        egui::RichText::new(stats)
                            .small()
                            .color(egui::Color32::GRAY),
                    );

                    ui.label(
                        egui::RichText::new(sample_dump(&curve.samples))
                            .monospace()
                            .small(),
                    );
                });

            ui.add_space(5.0);
        }
    }
}

/// Shared plot body for the resume and track plots
fn draw_curve_plot(
    ui: &mut egui::Ui,
    id: &str,
    depth_label: &str,
    series: &[(String, usize, Vec<[f64; 2]>)],
) {
    Plot::new(id.to_string())
        .legend(Legend::default())
        .height(280.0)
        .x_axis_label(depth_label.to_string())
        .y_axis_label("")
        .show_axes([true, false]) // Y is normalized 0-1, hide its axis
        .show(ui, |plot_ui| {
            for (name, color_index, points) in series {
                if points.is_empty() {
                    continue;
                }
                let color = CHART_COLORS[color_index % CHART_COLORS.len()];
                plot_ui.line(
                    Line::new(name.clone(), PlotPoints::from(points.clone()))
                        .color(egui::Color32::from_rgb(color[0], color[1], color[2]))
                        .width(1.5),
                );
            }
        });
}

/// X axis caption for the depth index curve
fn axis_label(depth_curve: Option<&Curve>) -> String {
    match depth_curve {
        Some(c) if !c.unit.is_empty() => format!("Depth ({})", c.unit),
        _ => "Depth".to_string(),
    }
}

/// Pair depth with samples and normalize values to 0-1 so all curves
/// overlay on a shared axis. NULL (NaN) samples are dropped.
fn normalize_points(depth: &[f64], samples: &[f64]) -> Vec<[f64; 2]> {
    let paired: Vec<[f64; 2]> = depth
        .iter()
        .zip(samples.iter())
        .filter(|(d, v)| !d.is_nan() && !v.is_nan())
        .map(|(d, v)| [*d, *v])
        .collect();

    if paired.is_empty() {
        return paired;
    }

    let mut min_y = f64::MAX;
    let mut max_y = f64::MIN;
    for point in &paired {
        min_y = min_y.min(point[1]);
        max_y = max_y.max(point[1]);
    }

    let range = max_y - min_y;
    if range.abs() < f64::EPSILON {
        // All values are the same, put at 0.5
        return paired.iter().map(|p| [p[0], 0.5]).collect();
    }

    paired
        .iter()
        .map(|p| [p[0], (p[1] - min_y) / range])
        .collect()
}

/// Leading samples as compact text
fn sample_dump(samples: &[f64]) -> String {
    let shown: Vec<String> = samples
        .iter()
        .take(CURVE_DUMP_SAMPLES)
        .map(|v| {
            if v.is_nan() {
                "null".to_string()
            } else {
                format!("{:.4}", v)
            }
        })
        .collect();

    if samples.len() > CURVE_DUMP_SAMPLES {
        format!(
            "[{}, ... {} more]",
            shown.join(", "),
            samples.len() - CURVE_DUMP_SAMPLES
        )
    } else {
        format!("[{}]", shown.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_points_range() {
        let depth = vec![100.0, 101.0, 102.0];
        let samples = vec![10.0, 20.0, 30.0];
        let points = normalize_points(&depth, &samples);
        assert_eq!(points.len(), 3);
        assert_eq!(points[0], [100.0, 0.0]);
        assert_eq!(points[1], [101.0, 0.5]);
        assert_eq!(points[2], [102.0, 1.0]);
    }

    #[test]
    fn test_normalize_points_drops_nulls() {
        let depth = vec![100.0, 101.0, 102.0, 103.0];
        let samples = vec![10.0, f64::NAN, 30.0, f64::NAN];
        let points = normalize_points(&depth, &samples);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0][0], 100.0);
        assert_eq!(points[1][0], 102.0);
    }

    #[test]
    fn test_normalize_points_flat_curve() {
        let depth = vec![100.0, 101.0];
        let samples = vec![7.0, 7.0];
        let points = normalize_points(&depth, &samples);
        assert_eq!(points[0][1], 0.5);
        assert_eq!(points[1][1], 0.5);
    }

    #[test]
    fn test_sample_dump_truncates() {
        let samples: Vec<f64> = (0..20).map(|i| i as f64).collect();
        let dump = sample_dump(&samples);
        assert!(dump.starts_with("[0.0000, 1.0000"));
        assert!(dump.ends_with("... 8 more]"));

        let short = sample_dump(&[1.5, f64::NAN]);
        assert_eq!(short, "[1.5000, null]");
    }
}
