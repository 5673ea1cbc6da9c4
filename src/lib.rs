//! lasview - A desktop LAS well log viewer written in Rust
//!
//! This library provides parsing for LAS well log files and a graphical
//! user interface for exploring the parsed well: header metadata, the
//! surface location on a map, and plotted curves.
//!
//! ## Module Structure
//!
//! - [`app`] - Main application state and eframe::App implementation
//! - [`parsers`] - LAS file parser and well data types
//! - [`state`] - Core data types and constants
//! - [`geo`] - Geographic feature construction and map projection
//! - [`ui`] - User interface components
//!   - `sidebar` - File source panel and open/drop controls
//!   - `curves` - Curve multi-select panel
//!   - `well_info` - Header and location text panes
//!   - `map` - Location map canvas
//!   - `chart` - Resume and selective curve plots
//!   - `notice` - Inline notice boxes
//!   - `toast` - Toast notification system

pub mod app;
pub mod geo;
pub mod parsers;
pub mod state;
pub mod ui;
