//! # Chart Export
//!
//! Chart-document edits (dimensions, titles, source lines), file export
//! through a pluggable [`Rasterizer`], and font staging.

mod chart;
mod files;
mod fonts;

#[cfg(test)]
mod tests;

pub use chart::{shaded_area, source_text, ChartSpec};
pub use files::{save_chart, Rasterizer, SaveOptions, SavedFiles};
pub use fonts::{font_files, setup_fonts, stage_fonts};
