//! Core application state types and constants.
//!
//! This module contains the fundamental data structures used throughout
//! the application: the resolved input source, the loaded well, curve
//! selection, and notice types.

use std::path::PathBuf;

use crate::parsers::Well;

// ============================================================================
// Constants
// ============================================================================

/// Bundled fallback file used when the user has not opened anything
pub const DEFAULT_LAS_PATH: &str = "files/1053428977.las";

/// Leading samples shown in each curve info block
pub const CURVE_DUMP_SAMPLES: usize = 12;

/// Visible lat/lon span of the location map at zoom 1.0 (roughly a
/// town-scale view, matching a zoom-12 web map)
pub const MAP_SPAN_DEG: f64 = 0.08;

/// Color palette for plot lines
pub const CHART_COLORS: &[[u8; 3]] = &[
    [113, 120, 78],  // Olive green (primary)
    [191, 78, 48],   // Rust orange (accent)
    [71, 108, 155],  // Blue (info)
    [159, 166, 119], // Sage green (success)
    [253, 193, 73],  // Amber (warning)
    [135, 30, 28],   // Dark red (error)
    [246, 247, 235], // Cream
    [100, 149, 237], // Cornflower blue
    [255, 127, 80],  // Coral
    [144, 238, 144], // Light green
];

// ============================================================================
// Core Types
// ============================================================================

/// Where the raw LAS bytes for one load came from.
///
/// Exactly one source is active per load: a user-supplied file wins,
/// otherwise the bundled default path is used.
#[derive(Clone, Debug)]
pub enum WellSource {
    /// User-opened or dropped file, read as raw bytes
    Uploaded { name: String, path: PathBuf },
    /// Bundled fallback file
    Default(PathBuf),
}

impl WellSource {
    pub fn display_name(&self) -> String {
        match self {
            WellSource::Uploaded { name, .. } => name.clone(),
            WellSource::Default(path) => path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string()),
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, WellSource::Default(_))
    }
}

/// A successfully parsed well together with its source
#[derive(Clone)]
pub struct LoadedWell {
    /// Input that produced this well
    pub source: WellSource,
    /// Parsed well data
    pub well: Well,
}

/// Result from background file loading operation
pub enum LoadResult {
    Success(Box<LoadedWell>),
    Error { source: WellSource, message: String },
}

/// Current state of file loading
pub enum LoadingState {
    /// No loading in progress
    Idle,
    /// Loading a file (contains filename being loaded)
    Loading(String),
}

/// Notice severity, used for toasts and inline notice boxes
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NoticeKind {
    Info,
    Success,
    Warning,
    Error,
}

impl NoticeKind {
    /// Background color for this notice kind
    pub fn color(&self) -> [u8; 3] {
        match self {
            NoticeKind::Info => [71, 108, 155],
            NoticeKind::Success => [113, 120, 78],
            NoticeKind::Warning => [253, 193, 73],
            NoticeKind::Error => [135, 30, 28],
        }
    }

    /// Text color that stays readable on `color()`
    pub fn text_color(&self) -> [u8; 3] {
        match self {
            NoticeKind::Warning => [40, 35, 10],
            _ => [246, 247, 235],
        }
    }
}
