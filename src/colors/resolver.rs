use indexmap::IndexMap;
use serde_json::Value;

use super::country::{CountryNameResolver, StaticCountryResolver, NOT_FOUND};
use crate::error::{StyleError, StyleResult};
use crate::palette::{is_country_group, roles, Palette};
use crate::settings::Settings;
use crate::types::{Color, Table};

pub const BAR_COLUMN: &str = "color-bar";
pub const LINE_COLUMN: &str = "color-line";
pub const ISO3_COLUMN: &str = "ISO3";

/// The country whose bars are coloured by override rather than by palette.
pub const HOME_COUNTRY: &str = "GBR";

/// Caller-supplied colours keyed by identifier, or by `<CODE>-bar` for bar colours.
pub type ColorOverride = IndexMap<String, Color>;

/// Override key for a country's bar colour.
pub fn bar_override_key(code: &str) -> String {
    format!("{}-bar", code)
}

/// Why a row got a default colour instead of one chosen for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FallbackReason {
    /// The home country has no `-bar` override.
    MissingOverride,
    /// The identifier could not be converted to a country code.
    UnresolvedIdentifier,
    /// Neither the override nor the palette has an entry for the identifier.
    NotInPalette,
}

/// Outcome of colouring one row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorResolution {
    Resolved(Color),
    Fallback {
        color: Option<Color>,
        reason: FallbackReason,
    },
}

impl ColorResolution {
    pub fn color(&self) -> Option<&Color> {
        match self {
            ColorResolution::Resolved(color) => Some(color),
            ColorResolution::Fallback { color, .. } => color.as_ref(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, ColorResolution::Fallback { .. })
    }

    fn to_value(&self) -> Value {
        self.color()
            .map(|c| Value::String(c.as_str().to_string()))
            .unwrap_or(Value::Null)
    }
}

/// Colours chosen for one row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowColors {
    /// The normalized identifier the colours were derived from.
    pub code: String,
    pub bar: ColorResolution,
    pub line: ColorResolution,
}

/// A coloured table plus the per-row resolutions behind it.
#[derive(Clone, Debug, PartialEq)]
pub struct Assigned {
    pub table: Table,
    pub rows: Vec<RowColors>,
    /// Whether identifiers were treated as names and an `ISO3` column added.
    pub normalized: bool,
}

impl Assigned {
    /// Rows where either colour fell back to a default.
    pub fn fallback_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| row.bar.is_fallback() || row.line.is_fallback())
            .count()
    }

    pub fn into_table(self) -> Table {
        self.table
    }
}

/// Assigns bar and line colours to rows tagged with country identifiers.
#[derive(Clone, Debug)]
pub struct ColorResolver<R = StaticCountryResolver> {
    palette: Palette,
    names: R,
}

impl ColorResolver<StaticCountryResolver> {
    /// Light palette, built-in name lookup.
    pub fn new() -> Self {
        Self::with_resolver(Palette::light(), StaticCountryResolver::new())
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::with_resolver(
            Palette::for_mode(settings.palette),
            StaticCountryResolver::new(),
        )
    }
}

impl Default for ColorResolver<StaticCountryResolver> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CountryNameResolver> ColorResolver<R> {
    pub fn with_resolver(palette: Palette, names: R) -> Self {
        Self { palette, names }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Add `color-bar` and `color-line` columns to `table`.
    ///
    /// Whether `column` holds codes or names is decided from the first row
    /// alone: anything other than three characters means names, and the whole
    /// column is converted into a new `ISO3` column. Tables mixing codes and
    /// names are not supported.
    pub fn assign_colors(
        &self,
        mut table: Table,
        column: &str,
        overrides: Option<&ColorOverride>,
    ) -> StyleResult<Assigned> {
        if table.is_empty() {
            return Err(StyleError::EmptyInput);
        }

        let identifiers = (0..table.len())
            .map(|row| {
                table
                    .get_str(row, column)
                    .map(str::to_string)
                    .ok_or_else(|| StyleError::missing_column(column, row))
            })
            .collect::<StyleResult<Vec<String>>>()?;

        let normalized = identifiers[0].chars().count() != 3;
        let codes = if normalized {
            let names: Vec<&str> = identifiers.iter().map(String::as_str).collect();
            let mut codes = self.names.convert(&names);
            if codes.len() != names.len() {
                log::warn!(
                    "Country resolver returned {} codes for {} rows; unmatched rows become '{}'",
                    codes.len(),
                    names.len(),
                    NOT_FOUND
                );
                codes.resize(names.len(), NOT_FOUND.to_string());
            }
            log::debug!(
                "Column '{}' holds names; converted {} rows to {}",
                column,
                codes.len(),
                ISO3_COLUMN
            );
            table.set_column(
                ISO3_COLUMN,
                codes.iter().cloned().map(Value::String).collect(),
            );
            codes
        } else {
            identifiers
        };

        let rows: Vec<RowColors> = codes
            .into_iter()
            .map(|code| RowColors {
                bar: self.bar_color(&code, overrides),
                line: self.line_color(&code, overrides),
                code,
            })
            .collect();

        table.set_column(BAR_COLUMN, rows.iter().map(|r| r.bar.to_value()).collect());
        table.set_column(LINE_COLUMN, rows.iter().map(|r| r.line.to_value()).collect());

        let assigned = Assigned {
            table,
            rows,
            normalized,
        };
        let fallbacks = assigned.fallback_count();
        if fallbacks > 0 {
            log::warn!("{} of {} rows used a fallback colour", fallbacks, assigned.rows.len());
        }
        Ok(assigned)
    }

    /// Bar colour: the home country takes its override, groups and other
    /// countries take their palette roles.
    pub fn bar_color(&self, code: &str, overrides: Option<&ColorOverride>) -> ColorResolution {
        if code == HOME_COUNTRY {
            return match overrides.and_then(|o| o.get(&bar_override_key(code))) {
                Some(color) => ColorResolution::Resolved(color.clone()),
                None => ColorResolution::Fallback {
                    color: None,
                    reason: FallbackReason::MissingOverride,
                },
            };
        }

        if is_country_group(code) {
            return self.role(roles::COUNTRY_GROUP, None);
        }

        let unresolved = (code == NOT_FOUND).then_some(FallbackReason::UnresolvedIdentifier);
        self.role(roles::NON_UK, unresolved)
    }

    /// Line colour: the identifier's own entry, override first, else the
    /// palette's domain colour.
    pub fn line_color(&self, code: &str, overrides: Option<&ColorOverride>) -> ColorResolution {
        let own = overrides
            .and_then(|o| o.get(code))
            .or_else(|| self.palette.get(code));
        if let Some(color) = own {
            return ColorResolution::Resolved(color.clone());
        }

        let reason = if code == NOT_FOUND {
            FallbackReason::UnresolvedIdentifier
        } else {
            FallbackReason::NotInPalette
        };
        ColorResolution::Fallback {
            color: self.palette.get(roles::DOMAIN).cloned(),
            reason,
        }
    }

    fn role(&self, role: &str, fallback: Option<FallbackReason>) -> ColorResolution {
        let color = self.palette.get(role).cloned();
        match (color, fallback) {
            (Some(color), None) => ColorResolution::Resolved(color),
            (color, reason) => ColorResolution::Fallback {
                color,
                reason: reason.unwrap_or(FallbackReason::NotInPalette),
            },
        }
    }
}

/// Colour `table` with the light palette and the built-in name lookup.
pub fn assign_colors(
    table: Table,
    column: &str,
    overrides: Option<&ColorOverride>,
) -> StyleResult<Assigned> {
    ColorResolver::new().assign_colors(table, column, overrides)
}
