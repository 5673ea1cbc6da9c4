use std::str::FromStr;

use regex::Regex;
use serde::Serialize;
use strum::EnumString;

use super::types::{Curve, ParseError, Parseable, Position, Well, WellHeader, WellLocation};

/// Default NULL sentinel when the ~Well section does not declare one
const DEFAULT_NULL: f64 = -999.25;

/// Curve kinds classified from common LAS mnemonics.
///
/// Mnemonics vary by logging contractor; this list covers the ones seen in
/// typical KGS/public LAS files. Anything unrecognized is `Other`.
#[derive(Clone, Copy, Debug, Default, EnumString, Eq, PartialEq, Serialize)]
pub enum CurveKind {
    #[strum(serialize = "DEPT", serialize = "DEPTH")]
    Depth,
    #[strum(serialize = "GR", serialize = "GRC", serialize = "SGR", serialize = "CGR")]
    GammaRay,
    #[strum(serialize = "RHOB", serialize = "DEN", serialize = "ZDEN")]
    BulkDensity,
    #[strum(serialize = "DRHO", serialize = "DCOR")]
    DensityCorrection,
    #[strum(serialize = "NPHI", serialize = "PHIN", serialize = "CNPOR")]
    NeutronPorosity,
    #[strum(serialize = "DPHI", serialize = "PHID")]
    DensityPorosity,
    #[strum(serialize = "DT", serialize = "DTC", serialize = "AC")]
    Sonic,
    #[strum(serialize = "CALI", serialize = "CAL")]
    Caliper,
    #[strum(serialize = "SP")]
    SpontaneousPotential,
    #[strum(serialize = "PEF", serialize = "PE", serialize = "PDPE")]
    PhotoelectricFactor,
    #[strum(serialize = "ILD", serialize = "RILD", serialize = "RT")]
    DeepResistivity,
    #[strum(serialize = "ILM", serialize = "RILM")]
    MediumResistivity,
    #[strum(serialize = "SFLU", serialize = "SFLA", serialize = "LL8", serialize = "RXO")]
    ShallowResistivity,
    #[strum(serialize = "TEMP", serialize = "MRT")]
    Temperature,
    #[default]
    Other,
}

impl CurveKind {
    /// Classify a raw mnemonic; unrecognized or suffixed forms become `Other`
    pub fn from_mnemonic(mnemonic: &str) -> Self {
        Self::from_str(mnemonic.trim().to_ascii_uppercase().as_str()).unwrap_or(Self::Other)
    }

    /// Human-readable name for curve info blocks
    pub fn describe(&self) -> &'static str {
        match self {
            CurveKind::Depth => "Depth",
            CurveKind::GammaRay => "Gamma Ray",
            CurveKind::BulkDensity => "Bulk Density",
            CurveKind::DensityCorrection => "Density Correction",
            CurveKind::NeutronPorosity => "Neutron Porosity",
            CurveKind::DensityPorosity => "Density Porosity",
            CurveKind::Sonic => "Sonic",
            CurveKind::Caliper => "Caliper",
            CurveKind::SpontaneousPotential => "Spontaneous Potential",
            CurveKind::PhotoelectricFactor => "Photoelectric Factor",
            CurveKind::DeepResistivity => "Deep Resistivity",
            CurveKind::MediumResistivity => "Medium Resistivity",
            CurveKind::ShallowResistivity => "Shallow Resistivity",
            CurveKind::Temperature => "Temperature",
            CurveKind::Other => "Measurement",
        }
    }
}

/// LAS section markers (`~V`, `~W`, `~C`, `~P`, `~A`, `~O`)
#[derive(Clone, Copy, Debug, PartialEq)]
enum Section {
    Version,
    Well,
    Curve,
    Parameter,
    Ascii,
    Other,
}

impl Section {
    /// A section header is `~` followed by a word whose first letter picks
    /// the section ("~Well information" and "~W" are equivalent).
    fn from_header(line: &str) -> Option<Self> {
        let rest = line.strip_prefix('~')?;
        let first = rest.trim_start().chars().next()?;
        Some(match first.to_ascii_uppercase() {
            'V' => Section::Version,
            'W' => Section::Well,
            'C' => Section::Curve,
            'P' => Section::Parameter,
            'A' => Section::Ascii,
            _ => Section::Other,
        })
    }
}

/// LAS 2.0 file parser (unwrapped mode only)
pub struct Las;

impl Las {
    /// Parse a decimal-degree coordinate value, tolerating a trailing
    /// hemisphere letter ("38.539 N"). DMS strings are not supported and
    /// yield `None`, which downgrades to the no-map branch.
    fn parse_coordinate(value: &str) -> Option<f64> {
        let trimmed = value.trim();
        if let Ok(v) = trimmed.parse::<f64>() {
            return Some(v);
        }
        let mut chars = trimmed.chars();
        let hemi = chars.next_back()?;
        let sign = match hemi.to_ascii_uppercase() {
            'N' | 'E' => 1.0,
            'S' | 'W' => -1.0,
            _ => return None,
        };
        chars.as_str().trim().parse::<f64>().ok().map(|v| sign * v)
    }

    /// Value cells are optional in practice; blank strings become `None`
    fn non_empty(value: &str) -> Option<String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

impl Parseable for Las {
    fn parse(&self, file_contents: &str) -> Result<Well, ParseError> {
        if file_contents.trim().is_empty() {
            return Err(ParseError::Empty);
        }

        // Non-data lines look like "MNEM.UNIT  VALUE : DESCRIPTION".
        // The description starts at the LAST colon; values may contain
        // colons of their own (dates, times).
        let field_regex = Regex::new(r"^(?<mnem>[^.\s]+)\s*\.(?<unit>[^\s:]*)(?<rest>.*)$")
            .expect("Failed to compile regex");

        let mut header = WellHeader::default();
        let mut location = WellLocation::default();
        let mut curves: Vec<Curve> = vec![];

        let mut null_value = DEFAULT_NULL;
        let mut latitude: Option<f64> = None;
        let mut longitude: Option<f64> = None;

        let mut section: Option<Section> = None;
        let mut saw_curve_section = false;
        let mut saw_data_section = false;
        let mut data_row = 0usize;

        for raw_line in file_contents.lines() {
            let line = raw_line.trim();

            // Skip blanks and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if line.starts_with('~') {
                section = Section::from_header(line);
                match section {
                    Some(Section::Curve) => saw_curve_section = true,
                    Some(Section::Ascii) => saw_data_section = true,
                    _ => {}
                }
                continue;
            }

            match section {
                Some(Section::Ascii) => {
                    data_row += 1;
                    let cells: Vec<&str> = line.split_whitespace().collect();
                    if cells.len() != curves.len() {
                        return Err(ParseError::ColumnMismatch {
                            row: data_row,
                            expected: curves.len(),
                            found: cells.len(),
                        });
                    }
                    for (curve, cell) in curves.iter_mut().zip(&cells) {
                        let value: f64 = cell.parse().map_err(|_| ParseError::BadValue {
                            row: data_row,
                            value: cell.to_string(),
                        })?;
                        // NULL sentinel becomes NaN so plots skip it
                        if (value - null_value).abs() < 1e-6 {
                            curve.samples.push(f64::NAN);
                        } else {
                            curve.samples.push(value);
                        }
                    }
                }
                Some(Section::Version) | Some(Section::Well) | Some(Section::Curve) => {
                    let Some(captures) = field_regex.captures(line) else {
                        // Stray text in a header section; welly-style parsers
                        // tolerate it, so do we
                        continue;
                    };

                    let mnemonic = captures["mnem"].trim().to_string();
                    let unit = captures["unit"].trim().to_string();
                    let rest = &captures["rest"];
                    let (value, description) = match rest.rfind(':') {
                        Some(idx) => (rest[..idx].trim(), rest[idx + 1..].trim()),
                        None => (rest.trim(), ""),
                    };

                    match section {
                        Some(Section::Version) => {
                            if mnemonic.eq_ignore_ascii_case("WRAP")
                                && value.to_ascii_uppercase().starts_with("YES")
                            {
                                return Err(ParseError::WrappedMode);
                            }
                        }
                        Some(Section::Well) => match mnemonic.to_ascii_uppercase().as_str() {
                            "WELL" => header.name = value.to_string(),
                            "COMP" => header.company = Las::non_empty(value),
                            "FLD" => header.field = Las::non_empty(value),
                            "LOC" => header.location = Las::non_empty(value),
                            "UWI" => header.uwi = Las::non_empty(value),
                            "API" => header.api = Las::non_empty(value),
                            "SRVC" => header.service_company = Las::non_empty(value),
                            "DATE" => header.log_date = Las::non_empty(value),
                            "CNTY" => location.county = Las::non_empty(value),
                            "STAT" | "PROV" => location.state = Las::non_empty(value),
                            "LATI" | "LAT" => latitude = Las::parse_coordinate(value),
                            "LONG" | "LON" => longitude = Las::parse_coordinate(value),
                            "NULL" => {
                                if let Ok(v) = value.parse::<f64>() {
                                    null_value = v;
                                }
                            }
                            // STRT/STOP/STEP are recomputed from the data
                            _ => {}
                        },
                        Some(Section::Curve) => {
                            curves.push(Curve {
                                kind: CurveKind::from_mnemonic(&mnemonic),
                                mnemonic,
                                unit,
                                description: description.to_string(),
                                samples: vec![],
                            });
                        }
                        _ => unreachable!(),
                    }
                }
                // ~Parameter and ~Other carry nothing we present
                Some(Section::Parameter) | Some(Section::Other) | None => {}
            }
        }

        if !saw_curve_section {
            return Err(ParseError::MissingSection("~Curve"));
        }
        if curves.is_empty() {
            return Err(ParseError::NoCurves);
        }
        if !saw_data_section {
            return Err(ParseError::MissingSection("~ASCII"));
        }

        // Position only exists when both halves parsed
        if let (Some(lat), Some(lon)) = (latitude, longitude) {
            location.position = Some(Position {
                latitude: lat,
                longitude: lon,
            });
        }

        Ok(Well {
            header,
            location,
            curves,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"~Version ---------------------------------------------------
VERS.   2.0 : CWLS LOG ASCII STANDARD - VERSION 2.0
WRAP.   NO  : ONE LINE PER DEPTH STEP
~Well ------------------------------------------------------
STRT.FT   1700.0000 : START DEPTH
STOP.FT   1701.0000 : STOP DEPTH
STEP.FT      0.5000 : STEP
NULL.     -999.25   : NULL VALUE
WELL.     SMITH 1-12 : WELL NAME
COMP.     ACME ENERGY : COMPANY
FLD .     WILDCAT     : FIELD
CNTY.     BARTON      : COUNTY
STAT.     KANSAS      : STATE
LATI.     38.53915    : LATITUDE
LONG.     -98.70543   : LONGITUDE
DATE.     13-DEC-2011 : LOG DATE
~Curve -----------------------------------------------------
DEPT.FT              : DEPTH
GR  .GAPI            : GAMMA RAY
RHOB.G/C3            : BULK DENSITY
NPHI.DEC             : NEUTRON POROSITY
~Params ----------------------------------------------------
MUD .     GEL CHEM   : MUD TYPE
~ASCII -----------------------------------------------------
1700.0000   45.1230    2.4500    0.2100
1700.5000   48.6700    2.4700    0.2080
1701.0000 -999.2500    2.5100    0.2050
"#;

    #[test]
    fn test_parse_sample_las() {
        let well = Las.parse(SAMPLE).unwrap();

        assert_eq!(well.header.name, "SMITH 1-12");
        assert_eq!(well.header.company.as_deref(), Some("ACME ENERGY"));
        assert_eq!(well.header.log_date.as_deref(), Some("13-DEC-2011"));

        assert_eq!(well.location.county.as_deref(), Some("BARTON"));
        assert_eq!(well.location.state.as_deref(), Some("KANSAS"));
        let position = well.location.position.unwrap();
        assert!((position.latitude - 38.53915).abs() < 1e-9);
        assert!((position.longitude - -98.70543).abs() < 1e-9);

        assert_eq!(well.curve_names(), vec!["DEPT", "GR", "RHOB", "NPHI"]);
        assert_eq!(well.sample_count(), 3);
        assert_eq!(well.depth_range(), Some((1700.0, 1701.0)));

        // NULL sentinel replaced with NaN
        let gr = well.curve("GR").unwrap();
        assert!((gr.samples[0] - 45.123).abs() < 1e-9);
        assert!(gr.samples[2].is_nan());
        assert_eq!(gr.valid_count(), 2);
        assert_eq!(gr.unit, "GAPI");
        assert_eq!(gr.kind, CurveKind::GammaRay);
    }

    #[test]
    fn test_garbage_input_fails() {
        let result = Las.parse("this is definitely not a LAS file\x00\x01\x02");
        assert!(matches!(result, Err(ParseError::MissingSection("~Curve"))));
    }

    #[test]
    fn test_empty_input_fails() {
        assert!(matches!(Las.parse("   \n  "), Err(ParseError::Empty)));
    }

    #[test]
    fn test_wrapped_mode_rejected() {
        let wrapped = "~V\nVERS. 1.2 : VERSION\nWRAP. YES : WRAPPED\n~C\nDEPT.FT : DEPTH\n~A\n100.0\n";
        assert!(matches!(Las.parse(wrapped), Err(ParseError::WrappedMode)));
    }

    #[test]
    fn test_missing_position_is_none() {
        // LATI present without LONG must not produce a position
        let sample = SAMPLE.replace("LONG.     -98.70543   : LONGITUDE\n", "");
        let well = Las.parse(&sample).unwrap();
        assert!(well.location.position.is_none());
        assert_eq!(well.location.county.as_deref(), Some("BARTON"));
    }

    #[test]
    fn test_column_mismatch_fails() {
        let sample = SAMPLE.replace(
            "1700.5000   48.6700    2.4700    0.2080",
            "1700.5000   48.6700",
        );
        assert!(matches!(
            Las.parse(&sample),
            Err(ParseError::ColumnMismatch {
                row: 2,
                expected: 4,
                found: 2,
            })
        ));
    }

    #[test]
    fn test_unreadable_value_fails() {
        let sample = SAMPLE.replace("48.6700", "forty-eight");
        assert!(matches!(
            Las.parse(&sample),
            Err(ParseError::BadValue { row: 2, .. })
        ));
    }

    #[test]
    fn test_description_after_last_colon() {
        let sample = SAMPLE.replace(
            "DATE.     13-DEC-2011 : LOG DATE",
            "DATE.     13-DEC-2011 14:30 : LOG DATE",
        );
        let well = Las.parse(&sample).unwrap();
        assert_eq!(well.header.log_date.as_deref(), Some("13-DEC-2011 14:30"));
    }

    #[test]
    fn test_parse_coordinate() {
        assert_eq!(Las::parse_coordinate("38.53915"), Some(38.53915));
        assert_eq!(Las::parse_coordinate("-98.70543"), Some(-98.70543));
        assert_eq!(Las::parse_coordinate("38.539 N"), Some(38.539));
        assert_eq!(Las::parse_coordinate("98.705 W"), Some(-98.705));
        assert_eq!(Las::parse_coordinate("37 53' 29\""), None);
        assert_eq!(Las::parse_coordinate(""), None);
    }

    #[test]
    fn test_curve_kind_classification() {
        assert_eq!(CurveKind::from_mnemonic("GR"), CurveKind::GammaRay);
        assert_eq!(CurveKind::from_mnemonic("gr"), CurveKind::GammaRay);
        assert_eq!(CurveKind::from_mnemonic("RHOB"), CurveKind::BulkDensity);
        assert_eq!(CurveKind::from_mnemonic("NPHI"), CurveKind::NeutronPorosity);
        assert_eq!(CurveKind::from_mnemonic("DEPTH"), CurveKind::Depth);
        assert_eq!(CurveKind::from_mnemonic("XYZZY"), CurveKind::Other);
    }

    #[test]
    fn test_custom_null_value() {
        let sample = SAMPLE
            .replace("NULL.     -999.25   : NULL VALUE", "NULL.  -9999.0 : NULL")
            .replace("-999.2500", "-9999.0000");
        let well = Las.parse(&sample).unwrap();
        assert!(well.curve("GR").unwrap().samples[2].is_nan());
    }
}
