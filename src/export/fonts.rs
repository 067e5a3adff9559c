use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

use super::files::Rasterizer;
use crate::error::{StyleError, StyleResult};

const FONT_EXTENSIONS: &[&str] = &["ttf", "otf"];

fn is_font(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| FONT_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Every `.ttf`/`.otf` file under `dir`, searched recursively.
///
/// Symlinked directories are not followed.
pub fn font_files(dir: &Path) -> StyleResult<Vec<PathBuf>> {
    let mut found = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = entry?;
        if entry.file_type().is_file() && is_font(entry.path()) {
            found.push(entry.into_path());
        }
    }
    found.sort();
    Ok(found)
}

/// Copy the fonts under `source` into a fresh temporary directory.
///
/// Nested folders are flattened. The directory is removed when the returned
/// handle is dropped.
pub fn stage_fonts(source: impl AsRef<Path>) -> StyleResult<TempDir> {
    let source = source.as_ref();
    if !source.is_dir() {
        return Err(StyleError::FontDirectoryNotFound {
            path: source.to_path_buf(),
        });
    }

    let staged = tempfile::Builder::new()
        .prefix("ecostyles_fonts_")
        .tempdir()?;
    for font in font_files(source)? {
        if let Some(file_name) = font.file_name() {
            fs::copy(&font, staged.path().join(file_name))?;
        }
    }
    Ok(staged)
}

/// Stage the fonts under `source` and register them with `rasterizer`.
///
/// Keep the returned directory alive for as long as the rasterizer renders.
pub fn setup_fonts(source: impl AsRef<Path>, rasterizer: &dyn Rasterizer) -> StyleResult<TempDir> {
    let staged = stage_fonts(source)?;
    rasterizer.register_font_directory(staged.path())?;
    Ok(staged)
}
