//! # Economics Observatory Chart Styles
//!
//! `ecostyles` provides the house themes, palettes and colouring rules used for
//! Economics Observatory charts. Themes are typed Vega-Lite configurations;
//! colouring works on in-memory tables keyed by country identifiers.
//!
//! ## Features
//!
//! - Named themes (`cotd`, `article`, `newsletter`) with a dark variant for `cotd`
//! - Light, dark and transparent palettes plus brand and national colour tables
//! - Per-row bar/line colour assignment with country-name normalization
//! - An explicit rendering context carrying the active theme
//! - Chart helpers for source lines, axis titles, shaded periods and file export
//!
//! ## Example
//!
//! ```no_run
//! use ecostyles::colors::assign_colors;
//! use ecostyles::context::RenderingContext;
//! use ecostyles::themes::ThemeOptions;
//! use ecostyles::types::Table;
//! use serde_json::json;
//!
//! let mut context = RenderingContext::new();
//! context.register_and_enable("cotd", ThemeOptions { dark_mode: true }).unwrap();
//!
//! let table = Table::from_json(json!([
//!     { "country": "United Kingdom", "value": 1.2 },
//!     { "country": "France", "value": 0.9 },
//! ])).unwrap();
//! let coloured = assign_colors(table, "country", None).unwrap();
//! println!("{} rows fell back to default colours", coloured.fallback_count());
//! ```

pub mod colors;
pub mod context;
pub mod error;
pub mod export;
pub mod palette;
pub mod settings;
pub mod themes;
pub mod types;

// Re-export main types for convenience
pub use colors::{assign_colors, ColorResolver};
pub use context::RenderingContext;
pub use error::{StyleError, StyleResult};
pub use themes::{get_theme, ThemeConfig, ThemeName, ThemeOptions};
pub use types::{Color, Table};
