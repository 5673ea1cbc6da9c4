pub mod las;
pub mod types;

pub use las::{CurveKind, Las};
pub use types::{Curve, ParseError, Parseable, Position, Well, WellHeader, WellLocation};
