use super::*;
use crate::error::StyleError;
use crate::palette::{roles, Palette, PaletteMode};
use crate::types::{Color, Table};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn code_table() -> Table {
    Table::from_json(json!([
        { "country": "GBR", "value": 1 },
        { "country": "FRA", "value": 2 },
        { "country": "OECD", "value": 3 },
    ]))
    .unwrap()
}

fn overrides() -> ColorOverride {
    [("GBR", "red"), ("GBR-bar", "red"), ("FRA", "blue"), ("OECD", "grey")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), Color::from(v)))
        .collect()
}

fn light(role: &str) -> Value {
    json!(Palette::light().get(role).unwrap().as_str())
}

#[test]
fn test_adds_colour_columns() {
    let assigned = assign_colors(code_table(), "country", Some(&overrides())).unwrap();
    let table = &assigned.table;

    assert_eq!(table.columns(), vec!["country", "value", BAR_COLUMN, LINE_COLUMN]);
    assert!(!assigned.normalized);
    assert_eq!(table.rows()[0][BAR_COLUMN], "red");
    assert_eq!(table.rows()[0][LINE_COLUMN], "red");
    assert_eq!(table.rows()[1][BAR_COLUMN], light(roles::NON_UK));
    assert_eq!(table.rows()[1][LINE_COLUMN], "blue");
    assert_eq!(table.rows()[2][BAR_COLUMN], light(roles::COUNTRY_GROUP));
    assert_eq!(table.rows()[2][LINE_COLUMN], "grey");
    assert_eq!(assigned.fallback_count(), 0);
}

#[test]
fn test_group_without_override_uses_group_colour() {
    let table = Table::from_json(json!([{ "country": "OECD" }])).unwrap();
    let assigned = assign_colors(table, "country", None).unwrap();
    assert_eq!(assigned.rows[0].bar, ColorResolution::Resolved(Color::from("#eb5c2e")));
    assert_eq!(
        assigned.rows[0].line,
        ColorResolution::Fallback {
            color: Some(Color::from("#122b39")),
            reason: FallbackReason::NotInPalette,
        }
    );
}

#[test]
fn test_home_country_without_override_has_no_bar_colour() {
    let table = Table::from_json(json!([{ "country": "GBR" }])).unwrap();
    let assigned = assign_colors(table, "country", None).unwrap();
    assert_eq!(assigned.table.rows()[0][BAR_COLUMN], Value::Null);
    assert_eq!(
        assigned.rows[0].bar,
        ColorResolution::Fallback {
            color: None,
            reason: FallbackReason::MissingOverride,
        }
    );
    assert_eq!(assigned.fallback_count(), 1);
}

#[test]
fn test_names_are_converted_to_codes() {
    let table = Table::from_json(json!([{ "country": "France", "value": 1 }])).unwrap();
    let assigned = assign_colors(table, "country", None).unwrap();

    assert!(assigned.normalized);
    let row = &assigned.table.rows()[0];
    assert_eq!(row[ISO3_COLUMN], "FRA");
    assert_eq!(row["country"], "France");
    assert_eq!(row[BAR_COLUMN], light(roles::NON_UK));
    assert_eq!(assigned.rows[0].bar, ColorResolution::Resolved(Color::from("#a8c0de")));
}

#[test]
fn test_unresolved_name_falls_back() {
    let table = Table::from_json(json!([
        { "country": "United Kingdom" },
        { "country": "Atlantis" },
    ]))
    .unwrap();
    let mut overrides = ColorOverride::new();
    overrides.insert(bar_override_key("GBR"), Color::from("#C8102E"));

    let assigned = assign_colors(table, "country", Some(&overrides)).unwrap();
    assert_eq!(assigned.table.rows()[0][BAR_COLUMN], "#C8102E");
    assert_eq!(assigned.table.rows()[1][ISO3_COLUMN], NOT_FOUND);
    assert_eq!(assigned.table.rows()[1][BAR_COLUMN], light(roles::NON_UK));
    assert_eq!(
        assigned.rows[1].bar,
        ColorResolution::Fallback {
            color: Some(Color::from("#a8c0de")),
            reason: FallbackReason::UnresolvedIdentifier,
        }
    );
}

#[test]
fn test_first_row_decides_format() {
    // "FRA" is three characters, so "Germany" is treated as a code too.
    let table = Table::from_json(json!([
        { "country": "FRA" },
        { "country": "Germany" },
    ]))
    .unwrap();
    let assigned = assign_colors(table, "country", None).unwrap();
    assert!(!assigned.normalized);
    assert!(!assigned.table.columns().contains(&ISO3_COLUMN.to_string()));
    assert_eq!(assigned.rows[1].code, "Germany");
}

#[test]
fn test_reassigning_from_iso3_is_idempotent() {
    let table = Table::from_json(json!([
        { "country": "United Kingdom" },
        { "country": "France" },
        { "country": "Japan" },
    ]))
    .unwrap();
    let first = assign_colors(table, "country", Some(&overrides())).unwrap();
    let second = assign_colors(first.table.clone(), ISO3_COLUMN, Some(&overrides())).unwrap();

    assert_eq!(first.table.column(BAR_COLUMN), second.table.column(BAR_COLUMN));
    assert_eq!(first.table.column(LINE_COLUMN), second.table.column(LINE_COLUMN));
    assert_eq!(first.rows, second.rows);
}

#[test]
fn test_empty_table_is_rejected() {
    let result = assign_colors(Table::default(), "country", None);
    assert!(matches!(result, Err(StyleError::EmptyInput)));
}

#[test]
fn test_missing_identifier_is_rejected() {
    let table = Table::from_json(json!([
        { "country": "GBR" },
        { "value": 2 },
    ]))
    .unwrap();
    let result = assign_colors(table, "country", None);
    assert!(matches!(
        result,
        Err(StyleError::MissingColumn { ref column, row: 1 }) if column == "country"
    ));
}

#[test]
fn test_dark_palette_resolver() {
    let resolver = ColorResolver::from_settings(&crate::settings::Settings {
        palette: PaletteMode::Dark,
        ..Default::default()
    });
    let line = resolver.line_color("FRA", None);
    assert_eq!(line.color(), Some(&Color::from("#b4c8d8")));
}

struct UpperCaseResolver;

impl CountryNameResolver for UpperCaseResolver {
    fn convert(&self, names: &[&str]) -> Vec<String> {
        names
            .iter()
            .map(|n| n.chars().take(3).collect::<String>().to_uppercase())
            .collect()
    }
}

#[test]
fn test_custom_name_resolver() {
    let resolver = ColorResolver::with_resolver(Palette::light(), UpperCaseResolver);
    let table = Table::from_json(json!([{ "country": "oecd-wide" }])).unwrap();
    let assigned = resolver.assign_colors(table, "country", None).unwrap();
    assert_eq!(assigned.table.rows()[0][ISO3_COLUMN], "OEC");
    assert_eq!(assigned.table.rows()[0][BAR_COLUMN], light(roles::NON_UK));
}

struct ShortResolver;

impl CountryNameResolver for ShortResolver {
    fn convert(&self, _names: &[&str]) -> Vec<String> {
        vec!["FRA".to_string()]
    }
}

#[test]
fn test_short_resolver_output_is_padded() {
    let resolver = ColorResolver::with_resolver(Palette::light(), ShortResolver);
    let table = Table::from_json(json!([
        { "country": "France" },
        { "country": "Germany" },
    ]))
    .unwrap();
    let assigned = resolver.assign_colors(table, "country", None).unwrap();

    assert_eq!(assigned.rows.len(), assigned.table.len());
    let row = &assigned.table.rows()[1];
    assert_eq!(row[ISO3_COLUMN], NOT_FOUND);
    assert_eq!(row[BAR_COLUMN], light(roles::NON_UK));
    assert!(row.contains_key(LINE_COLUMN));
    assert!(assigned.rows[1].bar.is_fallback());
}
