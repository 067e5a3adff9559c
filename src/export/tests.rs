#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::context::RenderingContext;
    use crate::error::{StyleError, StyleResult};
    use crate::themes::ThemeOptions;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use std::cell::RefCell;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    /// Records every spec it is asked to render.
    #[derive(Default)]
    struct RecordingRasterizer {
        pngs: RefCell<Vec<(Value, f32)>>,
        svgs: RefCell<usize>,
        fonts: RefCell<Vec<PathBuf>>,
    }

    impl Rasterizer for RecordingRasterizer {
        fn to_png(&self, spec: &str, scale: f32) -> StyleResult<Vec<u8>> {
            self.pngs
                .borrow_mut()
                .push((serde_json::from_str(spec)?, scale));
            Ok(vec![0x89, b'P', b'N', b'G'])
        }

        fn to_svg(&self, _spec: &str) -> StyleResult<String> {
            *self.svgs.borrow_mut() += 1;
            Ok("<svg/>".to_string())
        }

        fn register_font_directory(&self, dir: &Path) -> StyleResult<()> {
            self.fonts.borrow_mut().push(dir.to_path_buf());
            Ok(())
        }
    }

    struct FailingRasterizer;

    impl Rasterizer for FailingRasterizer {
        fn to_png(&self, _spec: &str, _scale: f32) -> StyleResult<Vec<u8>> {
            Err(StyleError::render("no renderer"))
        }

        fn to_svg(&self, _spec: &str) -> StyleResult<String> {
            Err(StyleError::render("no renderer"))
        }
    }

    fn bar_chart() -> ChartSpec {
        ChartSpec::new(json!({
            "mark": "bar",
            "encoding": {
                "x": { "field": "country", "type": "nominal" },
                "y": { "field": "value", "type": "quantitative" }
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_save_chart_writes_json_and_png() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("charts");
        let rasterizer = RecordingRasterizer::default();
        let context = RenderingContext::with_theme("article", ThemeOptions::default()).unwrap();

        let saved = save_chart(
            &bar_chart(),
            &context,
            &out,
            "chart1",
            &SaveOptions::default(),
            &rasterizer,
        )
        .unwrap();

        assert_eq!(saved.json, out.join("chart1.json"));
        assert!(saved.svg.is_none());
        assert!(saved.source_png.is_none());
        assert!(fs::metadata(&saved.png).unwrap().len() > 0);

        let written = fs::read_to_string(&saved.json).unwrap();
        assert!(!written.contains('\n'));
        let written: Value = serde_json::from_str(&written).unwrap();
        assert_eq!(written["width"], 350);
        assert_eq!(written["height"], 280);
        assert_eq!(written["config"]["font"], "Circular Std");

        let pngs = rasterizer.pngs.borrow();
        assert_eq!(pngs.len(), 1);
        assert_eq!(pngs[0].1, 4.0);
        assert_eq!(pngs[0].0, written);
    }

    #[test]
    fn test_save_chart_with_svg_and_source() {
        let temp_dir = TempDir::new().unwrap();
        let rasterizer = RecordingRasterizer::default();
        let options = SaveOptions {
            width: None,
            height: None,
            svg: true,
            source: Some("ONS".to_string()),
            ..Default::default()
        };

        let saved = save_chart(
            &bar_chart(),
            &RenderingContext::new(),
            temp_dir.path(),
            "gdp",
            &options,
            &rasterizer,
        )
        .unwrap();

        assert_eq!(saved.svg, Some(temp_dir.path().join("gdp.svg")));
        assert_eq!(saved.source_png, Some(temp_dir.path().join("gdp_source.png")));
        assert_eq!(fs::read_to_string(temp_dir.path().join("gdp.svg")).unwrap(), "<svg/>");
        assert_eq!(*rasterizer.svgs.borrow(), 1);

        let pngs = rasterizer.pngs.borrow();
        assert_eq!(pngs.len(), 2);
        assert!(pngs[0].0.get("width").is_none());
        assert!(pngs[0].0.get("title").is_none());
        assert_eq!(pngs[1].0["title"]["text"], "Source: ONS");
    }

    #[test]
    fn test_save_chart_propagates_render_errors() {
        let temp_dir = TempDir::new().unwrap();
        let result = save_chart(
            &bar_chart(),
            &RenderingContext::new(),
            temp_dir.path(),
            "broken",
            &SaveOptions::default(),
            &FailingRasterizer,
        );
        assert!(matches!(result, Err(StyleError::Render { .. })));
    }

    #[test]
    fn test_stage_fonts_copies_font_files_only() {
        let source = TempDir::new().unwrap();
        let nested = source.path().join("circular-std").join("bold");
        fs::create_dir_all(&nested).unwrap();
        fs::write(source.path().join("circular-std").join("Book.ttf"), b"ttf").unwrap();
        fs::write(nested.join("Bold.OTF"), b"otf").unwrap();
        fs::write(nested.join("LICENSE.txt"), b"text").unwrap();

        let rasterizer = RecordingRasterizer::default();
        let staged = setup_fonts(source.path(), &rasterizer).unwrap();

        let mut names: Vec<String> = fs::read_dir(staged.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        assert_eq!(names, vec!["Bold.OTF", "Book.ttf"]);
        assert_eq!(*rasterizer.fonts.borrow(), vec![staged.path().to_path_buf()]);
        assert_eq!(font_files(source.path()).unwrap().len(), 2);
    }

    #[cfg(unix)]
    #[test]
    fn test_stage_fonts_skips_symlinked_directories() {
        let source = TempDir::new().unwrap();
        let family = source.path().join("circular-std");
        fs::create_dir_all(&family).unwrap();
        fs::write(family.join("Book.ttf"), b"ttf").unwrap();
        std::os::unix::fs::symlink(source.path(), family.join("loop")).unwrap();

        let fonts = font_files(source.path()).unwrap();
        assert_eq!(fonts, vec![family.join("Book.ttf")]);

        let staged = stage_fonts(source.path()).unwrap();
        assert!(staged.path().join("Book.ttf").is_file());
    }

    #[test]
    fn test_stage_fonts_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = stage_fonts(temp_dir.path().join("missing"));
        assert!(matches!(result, Err(StyleError::FontDirectoryNotFound { .. })));
    }
}
