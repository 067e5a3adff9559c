//! Chart of the Day theme.

use super::config::{
    AxisConfig, AxisSet, LegendConfig, MarkConfig, RangeConfig, TextConfig, ThemeConfig,
    TitleConfig, ViewConfig,
};
use super::ThemeOptions;
use crate::palette::{eco_colours, roles, Palette, PaletteMode, DOMAIN_GREY, FONT};
use crate::types::Color;

/// Build the Chart of the Day theme.
///
/// Dark mode swaps foreground and background only; sizes, dashes and tick
/// counts are identical in both modes.
pub fn get_theme(options: ThemeOptions) -> ThemeConfig {
    let mode = if options.dark_mode {
        PaletteMode::Dark
    } else {
        PaletteMode::Light
    };
    let palette = Palette::for_mode(mode);
    let foreground = palette
        .get(roles::TEXT)
        .cloned()
        .unwrap_or_else(|| Color::from("#122b39"));
    let background = palette.get(roles::BACKGROUND).cloned();

    let domain = Color::from(DOMAIN_GREY);
    let subtitle_colour = domain.with_alpha_hex("E6");
    let brand = eco_colours();
    let axes = AxisSet::standard(domain.clone(), 8);

    ThemeConfig {
        font: FONT.to_string(),
        background,
        text: TextConfig::annotation(domain.clone(), 11),
        view: ViewConfig::frameless(400, 300),
        range: RangeConfig::eco(),
        bar: MarkConfig {
            color: brand.get("blue-light").cloned(),
            ..Default::default()
        },
        line: MarkConfig {
            color: brand.get("red").cloned(),
            ..Default::default()
        },
        rule: MarkConfig::colored(domain.clone()),
        area: None,
        point: MarkConfig::point(foreground.clone()),
        geoshape: MarkConfig::geoshape(),
        rect: MarkConfig::shading(),
        axis: AxisConfig::muted(domain.clone(), 11),
        axis_x_discrete: axes.x_discrete,
        axis_y_discrete: axes.y_discrete,
        axis_x_temporal: axes.x_temporal,
        axis_x_quantitative: axes.x_quantitative,
        axis_y_quantitative: axes.y_quantitative,
        title: TitleConfig {
            color: domain,
            subtitle_color: subtitle_colour,
            font: FONT.to_string(),
            subtitle_font: FONT.to_string(),
            font_style: Some("book".to_string()),
            anchor: "start".to_string(),
            dx: Some(24),
            font_size: 14,
            subtitle_font_size: 12,
            subtitle_padding: 4,
            offset: 0,
            frame: None,
        },
        legend: LegendConfig {
            title_color: foreground.clone(),
            title: None,
            label_color: foreground,
            label_font_size: None,
        },
    }
}
