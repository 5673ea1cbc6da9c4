//! UI rendering modules for the lasview application.
//!
//! This module organizes the various UI components into logical submodules:
//! - `sidebar` - File source panel and open/drop controls
//! - `curves` - Curve multi-select panel
//! - `well_info` - Header and location text panes
//! - `map` - Location map canvas
//! - `chart` - Resume and selective curve plots, curve info blocks
//! - `notice` - Inline notice boxes (info/warning/error)
//! - `toast` - Toast notification system
//! - `icons` - Custom icon drawing utilities

pub mod chart;
pub mod curves;
pub mod icons;
pub mod map;
pub mod notice;
pub mod sidebar;
pub mod toast;
pub mod well_info;

use eframe::egui;

use crate::app::LasViewApp;
use crate::state::{LoadingState, NoticeKind};

impl LasViewApp {
    /// Render the central pipeline top to bottom for this frame:
    /// parse outcome, location stage, resume plot, selective plot.
    pub fn render_pipeline(&mut self, ui: &mut egui::Ui) {
        // ParseFailed is terminal: surface the message and stop
        if let Some(message) = self.parse_error.clone() {
            ui.heading("Well information");
            ui.add_space(6.0);
            notice::inline_notice(
                ui,
                NoticeKind::Error,
                &format!("Error loading LAS file: {}", message),
            );
            return;
        }

        if self.well.is_none() {
            if let LoadingState::Loading(name) = &self.loading_state {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(format!("Loading {}...", name));
                });
            }
            return;
        }

        self.render_well_overview(ui);

        ui.add_space(10.0);
        ui.separator();
        ui.heading("Well location");
        ui.add_space(6.0);
        self.render_location_map(ui);

        ui.add_space(10.0);
        ui.separator();
        ui.heading("Well plot resume");
        ui.add_space(6.0);
        self.render_resume_plot(ui);

        ui.add_space(10.0);
        ui.separator();
        ui.heading("Well plot by tracks");
        ui.add_space(6.0);
        if self.selected_curves.is_empty() {
            notice::inline_notice(
                ui,
                NoticeKind::Warning,
                "Please select at least one curve.",
            );
        } else {
            self.render_track_plot(ui);

            ui.add_space(10.0);
            ui.separator();
            ui.heading("Curve information");
            ui.add_space(6.0);
            self.render_curve_info(ui);
        }
    }
}
