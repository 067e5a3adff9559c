//! Article theme: charts embedded in long-form pieces.

use super::config::{
    AxisConfig, AxisSet, LegendConfig, MarkConfig, RangeConfig, TextConfig, ThemeConfig,
    TitleConfig, ViewConfig,
};
use crate::palette::{eco_colours, roles, Palette, DOMAIN_GREY, FONT};
use crate::types::Color;

/// Build the article theme. Always light.
pub fn get_theme() -> ThemeConfig {
    let text = Palette::light()
        .get(roles::TEXT)
        .cloned()
        .unwrap_or_else(|| Color::from("#122b39"));
    let domain = Color::from(DOMAIN_GREY);
    let brand = eco_colours();
    let axes = AxisSet::standard(domain.clone(), 8);

    ThemeConfig {
        font: FONT.to_string(),
        background: None,
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
        area: Some(MarkConfig {
            opacity: Some(0.3),
            ..Default::default()
        }),
        point: MarkConfig::point(brand.get("red").cloned().unwrap_or_else(|| Color::from("#e6224b"))),
        geoshape: MarkConfig::geoshape(),
        rect: MarkConfig::shading(),
        axis: AxisConfig::muted(domain.clone(), 11),
        axis_x_discrete: axes.x_discrete,
        axis_y_discrete: axes.y_discrete,
        axis_x_temporal: axes.x_temporal,
        axis_x_quantitative: axes.x_quantitative,
        axis_y_quantitative: axes.y_quantitative,
        title: TitleConfig {
            color: domain.with_alpha_hex("E6"),
            subtitle_color: domain,
            font: FONT.to_string(),
            subtitle_font: FONT.to_string(),
            font_style: None,
            anchor: "start".to_string(),
            dx: None,
            font_size: 14,
            subtitle_font_size: 12,
            subtitle_padding: 4,
            offset: 0,
            frame: Some("group".to_string()),
        },
        legend: LegendConfig {
            title_color: text.clone(),
            title: Some(None),
            label_color: text,
            label_font_size: Some(11),
        },
    }
}
