//! Main application state and the per-frame render pipeline.
//!
//! Each frame re-runs the same top-to-bottom pipeline: resolve input,
//! show the parse outcome, then location map, resume plot, and the
//! selective plot. All derived views are recomputed from current state;
//! nothing is cached across interactions beyond the parsed well itself.

use std::fs;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;

use eframe::egui;

use crate::parsers::{Las, Parseable};
use crate::state::{
    LoadResult, LoadedWell, LoadingState, NoticeKind, WellSource, DEFAULT_LAS_PATH,
};

/// Main application state
pub struct LasViewApp {
    /// Currently loaded well, present only when the last parse succeeded
    pub(crate) well: Option<LoadedWell>,
    /// Message from the last failed load; halts the pipeline for the cycle
    pub(crate) parse_error: Option<String>,
    /// Curve mnemonics chosen for the selective plot, in selection order
    pub(crate) selected_curves: Vec<String>,
    /// Toast message for user feedback
    pub(crate) toast_message: Option<(String, std::time::Instant, NoticeKind)>,
    /// Track dropped files to prevent duplicates
    pub(crate) last_drop_time: Option<std::time::Instant>,
    /// Channel for receiving loaded wells from the background thread
    pub(crate) load_receiver: Option<Receiver<LoadResult>>,
    /// Current loading state
    pub(crate) loading_state: LoadingState,
    /// Location map zoom level
    pub(crate) map_zoom: f32,
    /// Location map pan offset in pixels
    pub(crate) map_pan: egui::Vec2,
}

impl Default for LasViewApp {
    fn default() -> Self {
        Self {
            well: None,
            parse_error: None,
            selected_curves: Vec::new(),
            toast_message: None,
            last_drop_time: None,
            load_receiver: None,
            loading_state: LoadingState::Idle,
            map_zoom: 1.0,
            map_pan: egui::Vec2::ZERO,
        }
    }
}

impl LasViewApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = Self::default();
        // No upload yet: fall back to the bundled file right away
        app.start_loading(Self::resolve_source(None));
        app
    }

    /// Input resolver: a user-supplied file wins, otherwise the bundled
    /// default path. Produces exactly one source per load.
    pub fn resolve_source(uploaded: Option<PathBuf>) -> WellSource {
        match uploaded {
            Some(path) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| "Unknown".to_string());
                WellSource::Uploaded { name, path }
            }
            None => WellSource::Default(PathBuf::from(DEFAULT_LAS_PATH)),
        }
    }

    /// Start loading a source in the background
    pub(crate) fn start_loading(&mut self, source: WellSource) {
        self.loading_state = LoadingState::Loading(source.display_name());

        let (sender, receiver): (Sender<LoadResult>, Receiver<LoadResult>) = channel();
        self.load_receiver = Some(receiver);

        // Spawn background thread for loading
        thread::spawn(move || {
            let result = Self::load_well(source);
            let _ = sender.send(result);
        });
    }

    /// Synchronously load and parse a source (runs in background thread).
    ///
    /// Uploaded files are decoded as UTF-8 text from raw bytes; the default
    /// file is read from its bundled path. Both funnel into the same parser
    /// and any failure becomes a recoverable `LoadResult::Error`.
    pub(crate) fn load_well(source: WellSource) -> LoadResult {
        let contents = match &source {
            WellSource::Uploaded { path, .. } => match fs::read(path) {
                Ok(bytes) => match String::from_utf8(bytes) {
                    Ok(text) => text,
                    Err(e) => {
                        return LoadResult::Error {
                            source,
                            message: format!("File is not valid text: {}", e),
                        }
                    }
                },
                Err(e) => {
                    return LoadResult::Error {
                        source,
                        message: format!("Failed to read file: {}", e),
                    }
                }
            },
            WellSource::Default(path) => match fs::read_to_string(path) {
                Ok(text) => text,
                Err(e) => {
                    return LoadResult::Error {
                        source,
                        message: format!("Failed to read default file: {}", e),
                    }
                }
            },
        };

        match Las.parse(&contents) {
            Ok(well) => LoadResult::Success(Box::new(LoadedWell { source, well })),
            Err(e) => LoadResult::Error {
                source,
                message: e.to_string(),
            },
        }
    }

    /// Check for completed background loads
    pub(crate) fn check_loading_complete(&mut self) {
        if let Some(receiver) = &self.load_receiver {
            if let Ok(result) = receiver.try_recv() {
                match result {
                    LoadResult::Success(loaded) => {
                        let (message, kind) = if loaded.source.is_default() {
                            ("Using default LAS file.", NoticeKind::Info)
                        } else {
                            ("LAS file loaded successfully.", NoticeKind::Success)
                        };
                        tracing::info!(source = %loaded.source.display_name(), "well loaded");
                        self.well = Some(*loaded);
                        self.parse_error = None;
                        self.selected_curves.clear();
                        self.reset_map_view();
                        self.show_toast(message, kind);
                    }
                    LoadResult::Error { source, message } => {
                        tracing::warn!(source = %source.display_name(), %message, "load failed");
                        // No well for this cycle; downstream stages skip
                        self.well = None;
                        self.parse_error = Some(message.clone());
                        self.selected_curves.clear();
                        self.show_toast(
                            &format!("Error loading LAS file: {}", message),
                            NoticeKind::Error,
                        );
                    }
                }
                self.load_receiver = None;
                self.loading_state = LoadingState::Idle;
            }
        }
    }

    /// Toggle a curve in or out of the selection, preserving order
    pub(crate) fn toggle_curve(&mut self, mnemonic: &str) {
        if let Some(index) = self.selected_curves.iter().position(|m| m == mnemonic) {
            self.selected_curves.remove(index);
        } else {
            self.selected_curves.push(mnemonic.to_string());
        }
    }

    /// Re-centre the map on its marker at the default zoom
    pub(crate) fn reset_map_view(&mut self) {
        self.map_zoom = 1.0;
        self.map_pan = egui::Vec2::ZERO;
    }

    /// Show a toast message
    pub(crate) fn show_toast(&mut self, message: &str, kind: NoticeKind) {
        self.toast_message = Some((message.to_string(), std::time::Instant::now(), kind));
    }

    /// Open the file dialog and start loading the picked file
    pub(crate) fn open_file_dialog(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("LAS Files", &["las", "LAS"])
            .pick_file()
        {
            self.start_loading(Self::resolve_source(Some(path)));
        }
    }

    /// Handle file drops
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        // Don't accept drops while loading
        if matches!(self.loading_state, LoadingState::Loading(_)) {
            return;
        }

        // Debounce file drops (5 second window)
        if let Some(last_drop) = self.last_drop_time {
            if last_drop.elapsed().as_secs() < 5 {
                return;
            }
        }

        let dropped_files: Vec<PathBuf> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|f| f.path.clone())
                .collect()
        });

        if let Some(path) = dropped_files.into_iter().next() {
            self.last_drop_time = Some(std::time::Instant::now());
            self.start_loading(Self::resolve_source(Some(path)));
        }
    }
}

impl eframe::App for LasViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for completed background loads
        self.check_loading_complete();

        // Handle file drops
        self.handle_dropped_files(ctx);

        // Apply dark theme
        ctx.set_visuals(egui::Visuals::dark());

        // Request repaint while loading (for spinner animation)
        if matches!(self.loading_state, LoadingState::Loading(_)) {
            ctx.request_repaint();
        }

        // Toast notifications
        self.render_toast(ctx);

        // Left sidebar panel: file source and open controls
        egui::SidePanel::left("file_panel")
            .default_width(230.0)
            .resizable(true)
            .show(ctx, |ui| {
                self.render_sidebar(ui);
            });

        // Right panel: curve multi-select
        egui::SidePanel::right("curves_panel")
            .default_width(260.0)
            .min_width(180.0)
            .resizable(true)
            .show(ctx, |ui| {
                self.render_curve_selection(ui);
            });

        // Main content: the render pipeline, top to bottom
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    self.render_pipeline(ui);
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file(name: &str, contents: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents).unwrap();
        path
    }

    #[test]
    fn test_resolver_falls_back_to_default() {
        let source = LasViewApp::resolve_source(None);
        match source {
            WellSource::Default(path) => {
                assert_eq!(path, PathBuf::from("files/1053428977.las"))
            }
            _ => panic!("expected default source"),
        }
        assert!(LasViewApp::resolve_source(None).is_default());
    }

    #[test]
    fn test_resolver_prefers_upload() {
        let source = LasViewApp::resolve_source(Some(PathBuf::from("/tmp/my_well.las")));
        match source {
            WellSource::Uploaded { name, path } => {
                assert_eq!(name, "my_well.las");
                assert_eq!(path, PathBuf::from("/tmp/my_well.las"));
            }
            _ => panic!("expected uploaded source"),
        }
    }

    #[test]
    fn test_default_file_loads() {
        // Scenario A: no upload, bundled file parses
        let result = LasViewApp::load_well(LasViewApp::resolve_source(None));
        match result {
            LoadResult::Success(loaded) => {
                assert!(loaded.source.is_default());
                assert!(!loaded.well.curves.is_empty());
                assert!(!loaded.well.header.name.is_empty());
            }
            LoadResult::Error { message, .. } => panic!("default file failed: {}", message),
        }
    }

    #[test]
    fn test_garbage_upload_fails() {
        // Scenario B: non-LAS bytes produce an error, no well
        let path = temp_file("lasview_garbage.las", b"\x00\xffnot a las file at all");
        let result = LasViewApp::load_well(LasViewApp::resolve_source(Some(path)));
        assert!(matches!(result, LoadResult::Error { .. }));
    }

    #[test]
    fn test_upload_decodes_text() {
        let sample = b"~V\nVERS. 2.0 : V\nWRAP. NO : W\n~W\nWELL. TEST : NAME\n~C\nDEPT.FT : DEPTH\nGR.GAPI : GAMMA\n~A\n100.0 45.0\n101.0 46.5\n";
        let path = temp_file("lasview_upload.las", sample);
        let result = LasViewApp::load_well(LasViewApp::resolve_source(Some(path)));
        match result {
            LoadResult::Success(loaded) => {
                assert!(!loaded.source.is_default());
                assert_eq!(loaded.well.curve_names(), vec!["DEPT", "GR"]);
            }
            LoadResult::Error { message, .. } => panic!("upload failed: {}", message),
        }
    }

    #[test]
    fn test_toggle_curve_preserves_order() {
        let mut app = LasViewApp::default();
        app.toggle_curve("RHOB");
        app.toggle_curve("GR");
        app.toggle_curve("NPHI");
        assert_eq!(app.selected_curves, vec!["RHOB", "GR", "NPHI"]);

        app.toggle_curve("GR");
        assert_eq!(app.selected_curves, vec!["RHOB", "NPHI"]);
    }
}
