use serde::Serialize;
use thiserror::Error;

/// Errors produced while parsing a LAS file.
///
/// Parsing is all-or-nothing: any of these aborts the load and no well
/// is produced for that cycle.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("file is empty")]
    Empty,
    #[error("wrapped-mode LAS files are not supported")]
    WrappedMode,
    #[error("missing required section: {0}")]
    MissingSection(&'static str),
    #[error("no curves defined in the ~Curve section")]
    NoCurves,
    #[error("data row {row}: expected {expected} values, found {found}")]
    ColumnMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("data row {row}: unreadable value {value:?}")]
    BadValue { row: usize, value: String },
}

/// Descriptive well metadata from the ~Well section.
#[derive(Clone, Debug, Default, Serialize)]
pub struct WellHeader {
    /// Well name (WELL mnemonic)
    pub name: String,
    pub company: Option<String>,
    pub field: Option<String>,
    /// Free-text location line (LOC), distinct from structured coordinates
    pub location: Option<String>,
    pub uwi: Option<String>,
    pub api: Option<String>,
    pub service_company: Option<String>,
    pub log_date: Option<String>,
}

impl WellHeader {
    /// Display name, never empty
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "(unnamed well)"
        } else {
            &self.name
        }
    }
}

/// Geographic surface position in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

/// Structured location data from the ~Well section.
///
/// All three fields are optional; absence is a normal skip branch for the
/// map stage, not an error.
#[derive(Clone, Debug, Default, Serialize)]
pub struct WellLocation {
    pub county: Option<String>,
    pub state: Option<String>,
    pub position: Option<Position>,
}

/// A single depth-indexed measurement curve.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Curve {
    /// Curve mnemonic, unique within a file (e.g. "GR")
    pub mnemonic: String,
    /// Unit string as written in the file (e.g. "GAPI")
    pub unit: String,
    /// Description column from the ~Curve section
    pub description: String,
    /// Classified kind derived from the mnemonic
    pub kind: super::las::CurveKind,
    /// Samples in file order; NULL sentinel values are stored as NaN
    pub samples: Vec<f64>,
}

impl Curve {
    /// Number of non-NULL samples
    pub fn valid_count(&self) -> usize {
        self.samples.iter().filter(|v| !v.is_nan()).count()
    }

    /// Min/max over non-NULL samples
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let mut range: Option<(f64, f64)> = None;
        for &v in &self.samples {
            if v.is_nan() {
                continue;
            }
            range = Some(match range {
                Some((lo, hi)) => (lo.min(v), hi.max(v)),
                None => (v, v),
            });
        }
        range
    }

    /// "GR [GAPI]" or just "GR" when the unit is blank
    pub fn display_label(&self) -> String {
        if self.unit.is_empty() {
            self.mnemonic.clone()
        } else {
            format!("{} [{}]", self.mnemonic, self.unit)
        }
    }
}

/// Parsed LAS file: header, location, and curve data.
///
/// Exists only when parsing succeeded; downstream stages never see a
/// partially parsed well.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Well {
    pub header: WellHeader,
    pub location: WellLocation,
    /// Curves in file order; the first is the depth index
    pub curves: Vec<Curve>,
}

impl Well {
    /// Curve mnemonics in file order; this is the source set for the
    /// selection control.
    pub fn curve_names(&self) -> Vec<String> {
        self.curves.iter().map(|c| c.mnemonic.clone()).collect()
    }

    /// Find a curve by mnemonic
    pub fn curve(&self, mnemonic: &str) -> Option<&Curve> {
        self.curves.iter().find(|c| c.mnemonic == mnemonic)
    }

    /// The depth index curve (first column of the ~ASCII section)
    pub fn depth_curve(&self) -> Option<&Curve> {
        self.curves.first()
    }

    /// First/last depth values, when any data rows exist
    pub fn depth_range(&self) -> Option<(f64, f64)> {
        let depth = self.depth_curve()?;
        match (depth.samples.first(), depth.samples.last()) {
            (Some(&start), Some(&stop)) => Some((start, stop)),
            _ => None,
        }
    }

    /// Number of data rows
    pub fn sample_count(&self) -> usize {
        self.depth_curve().map(|c| c.samples.len()).unwrap_or(0)
    }
}

/// Trait for log file parsers
pub trait Parseable {
    fn parse(&self, data: &str) -> Result<Well, ParseError>;
}
