//! Newsletter theme: the article look, resized for email layouts.

use super::article;
use super::config::{TextConfig, ThemeConfig, ViewConfig};
use crate::palette::{roles, Palette};

/// Build the newsletter theme.
///
/// Narrower view with larger type, on an opaque white background since mail
/// clients do not honour transparency consistently.
pub fn get_theme() -> ThemeConfig {
    let mut config = article::get_theme();
    config.background = Palette::light().get(roles::BACKGROUND).cloned();
    config.view = ViewConfig::frameless(320, 240);
    config.text = TextConfig::annotation(config.text.color.clone(), 13);
    config.axis.label_font_size = 13;
    config.axis_y_quantitative.tick_count = Some(5);
    config.title.font_size = 17;
    config.title.subtitle_font_size = 14;
    config.legend.label_font_size = Some(13);
    config
}
