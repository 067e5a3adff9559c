use std::fs;
use std::path::{Path, PathBuf};

use super::chart::ChartSpec;
use crate::context::RenderingContext;
use crate::error::StyleResult;

/// Renders chart specifications to images.
///
/// The crate never rasterizes by itself; callers plug in a renderer for the
/// chart library they use.
pub trait Rasterizer {
    /// Render `spec` (a JSON document) to PNG bytes at `scale`× resolution.
    fn to_png(&self, spec: &str, scale: f32) -> StyleResult<Vec<u8>>;

    /// Render `spec` to an SVG document.
    fn to_svg(&self, spec: &str) -> StyleResult<String>;

    /// Make the fonts in `dir` available to subsequent renders.
    fn register_font_directory(&self, _dir: &Path) -> StyleResult<()> {
        Ok(())
    }
}

/// How [`save_chart`] sizes and renders a chart.
#[derive(Clone, Debug, PartialEq)]
pub struct SaveOptions {
    /// Width in pixels; `None` keeps the chart's own (e.g. for faceted charts).
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// Also write an SVG.
    pub svg: bool,
    /// Source line for an extra `<name>_source.png`.
    pub source: Option<String>,
    pub png_scale: f32,
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self {
            width: Some(350),
            height: Some(280),
            svg: false,
            source: None,
            png_scale: 4.0,
        }
    }
}

/// Paths written by [`save_chart`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SavedFiles {
    pub json: PathBuf,
    pub png: PathBuf,
    pub svg: Option<PathBuf>,
    pub source_png: Option<PathBuf>,
}

/// Write a chart as `<name>.json` and `<name>.png` under `dir`, plus an SVG
/// and a sourced PNG when asked.
///
/// The directory is created if needed. The active theme of `context` is
/// folded into every output.
pub fn save_chart(
    chart: &ChartSpec,
    context: &RenderingContext,
    dir: impl AsRef<Path>,
    name: &str,
    options: &SaveOptions,
    rasterizer: &dyn Rasterizer,
) -> StyleResult<SavedFiles> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let sized = context
        .apply(chart)?
        .with_dimensions(options.width, options.height);
    let spec = sized.to_json_pretty()?;

    let json = dir.join(format!("{}.json", name));
    fs::write(&json, sized.to_json_minified()?)?;

    let png = dir.join(format!("{}.png", name));
    fs::write(&png, rasterizer.to_png(&spec, options.png_scale)?)?;

    let svg = if options.svg {
        let path = dir.join(format!("{}.svg", name));
        fs::write(&path, rasterizer.to_svg(&spec)?)?;
        Some(path)
    } else {
        None
    };

    let source_png = match &options.source {
        Some(source) => {
            let sourced = context
                .apply(&chart.clone().with_source(source))?
                .with_dimensions(options.width, options.height);
            let path = dir.join(format!("{}_source.png", name));
            fs::write(
                &path,
                rasterizer.to_png(&sourced.to_json_pretty()?, options.png_scale)?,
            )?;
            Some(path)
        }
        None => None,
    };

    log::debug!("Saved chart '{}' to {:?}", name, dir);
    Ok(SavedFiles {
        json,
        png,
        svg,
        source_png,
    })
}
