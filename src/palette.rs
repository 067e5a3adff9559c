//! # Palettes and Colour Tables
//!
//! Brand colours, the mode-keyed semantic palettes and the country-group table
//! used by the colour resolver.

use indexmap::IndexMap;
use std::fmt;
use std::str::FromStr;

use crate::error::StyleError;
use crate::types::Color;

/// Semantic role names shared by every palette.
pub mod roles {
    pub const OTHER_3: &str = "Other_3";
    pub const DEEMPHASISE: &str = "deemphasise_color";
    pub const DARK_GREY: &str = "dark_grey";
    pub const DEEMPHASISE_DISCRETE: &str = "Deemphasise_Discrete";
    pub const DEEMPHASISE_CONTINUOUS: &str = "Deemphasise_Continuous";
    pub const ACCENT: &str = "accent";
    pub const TEXT: &str = "text";
    pub const DOMAIN: &str = "domain";
    pub const NON_UK: &str = "non-uk";
    pub const COUNTRY_GROUP: &str = "country-group";
    pub const BACKGROUND: &str = "background";
}

/// Typeface used by every theme.
pub const FONT: &str = "Circular Std";

/// Muted slate used for axes, rules and titles.
pub const DOMAIN_GREY: &str = "#676A86";

const LIGHT: &[(&str, Option<&str>)] = &[
    (roles::OTHER_3, Some("#d6d4d4")),
    (roles::DEEMPHASISE, Some("#B4B4B4")),
    (roles::DARK_GREY, Some("#596870")),
    (roles::DEEMPHASISE_DISCRETE, Some("#182a38")),
    (roles::DEEMPHASISE_CONTINUOUS, Some("#182a3833")),
    (roles::ACCENT, Some("#179fdb")),
    (roles::TEXT, Some("#122b39")),
    (roles::DOMAIN, Some("#122b39")),
    (roles::NON_UK, Some("#a8c0de")),
    (roles::COUNTRY_GROUP, Some("#eb5c2e")),
    (roles::BACKGROUND, Some("#fff")),
];

const DARK: &[(&str, Option<&str>)] = &[
    (roles::OTHER_3, Some("#d6d4d4")),
    (roles::DEEMPHASISE, Some("#B4B4B4")),
    (roles::DARK_GREY, Some("#596870")),
    (roles::DEEMPHASISE_DISCRETE, Some("#182a38")),
    (roles::DEEMPHASISE_CONTINUOUS, Some("#182a3833")),
    (roles::ACCENT, Some("#179fdb")),
    (roles::TEXT, Some("#b4c8d8")),
    (roles::DOMAIN, Some("#b4c8d8")),
    (roles::NON_UK, Some("#a8c0de")),
    (roles::COUNTRY_GROUP, Some("#eb5c2e")),
    (roles::BACKGROUND, Some("#122b39")),
];

// Transparent variants only carry what differs from their base.
const LIGHT_TRANSPARENT: &[(&str, Option<&str>)] = &[(roles::BACKGROUND, None)];

const DARK_TRANSPARENT: &[(&str, Option<&str>)] =
    &[(roles::TEXT, Some("#fff")), (roles::BACKGROUND, None)];

const ECO_COLOURS: &[(&str, &str)] = &[
    ("red", "#e6224b"),
    ("blue-light", "#179fdb"),
    ("blue-dark", "#122b39"),
    ("yellow", "#f4c245"),
    ("orange", "#eb5c2e"),
    ("turquoise", "#36b7b4"),
];

const ORGANISATION_COLOURS: &[(&str, &str)] = &[
    ("OBR", "rgb(69,101,133)"),
    ("NIESR", "rgb(104,27,20)"),
];

const NATIONAL_COLOURS: &[(&str, &str)] = &[
    ("GB-SCT", "#005EB8"),
    ("GB-WLS", "#C8102E"),
    ("GB-NIR", "#FEDD00"),
    ("UK-red", "#C8102E"),
    ("UK-blue", "#012169"),
];

const COUNTRY_GROUPS: &[(&str, &str)] = &[
    ("OECD", "OECD"),
    ("OECDE", "OECD-Europe"),
    ("EU27", "EU27"),
    ("EU27_2020", "EU27 (2020)"),
    ("EA19", "EA19"),
    ("G-7", "G7"),
    ("G7", "G7"),
];

fn table(entries: &[(&str, &str)]) -> IndexMap<String, Color> {
    entries
        .iter()
        .map(|(name, value)| (name.to_string(), Color::from(*value)))
        .collect()
}

/// Economics Observatory brand colours.
pub fn eco_colours() -> IndexMap<String, Color> {
    table(ECO_COLOURS)
}

/// Look up a single brand colour by name (`"red"`, `"blue-light"`, ...).
pub fn eco_colour(name: &str) -> Option<Color> {
    ECO_COLOURS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, value)| Color::from(*value))
}

/// House colours of forecasting organisations.
pub fn organisation_colours() -> IndexMap<String, Color> {
    table(ORGANISATION_COLOURS)
}

/// Colours for the UK and its nations.
pub fn national_colours() -> IndexMap<String, Color> {
    table(NATIONAL_COLOURS)
}

/// Colour for a single nation code such as `GB-SCT`.
pub fn national_colour(code: &str) -> Option<Color> {
    NATIONAL_COLOURS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, value)| Color::from(*value))
}

/// Country-group codes mapped to their display labels.
pub fn country_groups() -> IndexMap<&'static str, &'static str> {
    COUNTRY_GROUPS.iter().copied().collect()
}

/// Country-group codes only.
pub fn country_group_codes() -> Vec<&'static str> {
    COUNTRY_GROUPS.iter().map(|(code, _)| *code).collect()
}

/// Whether an identifier names a group of countries rather than one country.
pub fn is_country_group(code: &str) -> bool {
    COUNTRY_GROUPS.iter().any(|(c, _)| *c == code)
}

/// Palette variants, keyed the way the chart layer names them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PaletteMode {
    #[default]
    Light,
    Dark,
    LightTransparent,
    DarkTransparent,
}

impl PaletteMode {
    pub const ALL: [PaletteMode; 4] = [
        PaletteMode::Light,
        PaletteMode::Dark,
        PaletteMode::LightTransparent,
        PaletteMode::DarkTransparent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaletteMode::Light => "light",
            PaletteMode::Dark => "dark",
            PaletteMode::LightTransparent => "light-transparent",
            PaletteMode::DarkTransparent => "dark-transparent",
        }
    }

    /// The full palette a partial variant inherits from.
    pub fn base(&self) -> PaletteMode {
        match self {
            PaletteMode::Light | PaletteMode::LightTransparent => PaletteMode::Light,
            PaletteMode::Dark | PaletteMode::DarkTransparent => PaletteMode::Dark,
        }
    }

    fn entries(&self) -> &'static [(&'static str, Option<&'static str>)] {
        match self {
            PaletteMode::Light => LIGHT,
            PaletteMode::Dark => DARK,
            PaletteMode::LightTransparent => LIGHT_TRANSPARENT,
            PaletteMode::DarkTransparent => DARK_TRANSPARENT,
        }
    }
}

impl fmt::Display for PaletteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaletteMode {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaletteMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| StyleError::UnknownPaletteMode(s.to_string()))
    }
}

/// A semantic role → colour mapping.
///
/// A role mapped to `None` is present but has no fill (transparent background).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    mode: PaletteMode,
    roles: IndexMap<String, Option<Color>>,
}

impl Palette {
    /// Fully resolved palette for a mode; partial variants are layered over their base.
    pub fn for_mode(mode: PaletteMode) -> Self {
        let mut roles: IndexMap<String, Option<Color>> = IndexMap::new();
        for layer in [mode.base(), mode] {
            for (role, value) in layer.entries() {
                roles.insert(role.to_string(), value.map(Color::from));
            }
        }
        Self { mode, roles }
    }

    /// Only the roles a mode defines itself, without inheritance.
    pub fn overrides_for(mode: PaletteMode) -> IndexMap<String, Option<Color>> {
        mode.entries()
            .iter()
            .map(|(role, value)| (role.to_string(), value.map(Color::from)))
            .collect()
    }

    pub fn light() -> Self {
        Self::for_mode(PaletteMode::Light)
    }

    pub fn dark() -> Self {
        Self::for_mode(PaletteMode::Dark)
    }

    pub fn mode(&self) -> PaletteMode {
        self.mode
    }

    /// Colour for a role; `None` for unknown roles and no-fill roles alike.
    pub fn get(&self, role: &str) -> Option<&Color> {
        self.roles.get(role).and_then(Option::as_ref)
    }

    /// Whether the palette defines `role` at all, filled or not.
    pub fn contains(&self, role: &str) -> bool {
        self.roles.contains_key(role)
    }

    pub fn roles(&self) -> impl Iterator<Item = (&str, Option<&Color>)> {
        self.roles.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }

    /// Role set as plain strings, `None` for no-fill.
    pub fn to_map(&self) -> IndexMap<String, Option<String>> {
        self.roles
            .iter()
            .map(|(k, v)| (k.clone(), v.as_ref().map(|c| c.as_str().to_string())))
            .collect()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_every_mode_exposes_the_same_roles() {
        let light: Vec<String> = Palette::light().roles().map(|(r, _)| r.to_string()).collect();
        for mode in PaletteMode::ALL {
            let roles: Vec<String> = Palette::for_mode(mode)
                .roles()
                .map(|(r, _)| r.to_string())
                .collect();
            assert_eq!(roles, light, "mode {mode}");
        }
    }

    #[test]
    fn test_transparent_variants_inherit_base() {
        let palette = Palette::for_mode(PaletteMode::DarkTransparent);
        assert_eq!(palette.get(roles::TEXT), Some(&Color::from("#fff")));
        assert_eq!(palette.get(roles::DOMAIN), Some(&Color::from("#b4c8d8")));
        assert!(palette.contains(roles::BACKGROUND));
        assert_eq!(palette.get(roles::BACKGROUND), None);

        let light = Palette::for_mode(PaletteMode::LightTransparent);
        assert_eq!(light.get(roles::TEXT), Some(&Color::from("#122b39")));
        assert_eq!(light.get(roles::BACKGROUND), None);
    }

    #[test]
    fn test_partial_overrides() {
        let overrides = Palette::overrides_for(PaletteMode::LightTransparent);
        assert_eq!(overrides.len(), 1);
        assert_eq!(overrides.get(roles::BACKGROUND), Some(&None));
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("dark-transparent".parse::<PaletteMode>().unwrap(), PaletteMode::DarkTransparent);
        assert!(matches!(
            "sepia".parse::<PaletteMode>(),
            Err(StyleError::UnknownPaletteMode(_))
        ));
    }

    #[test]
    fn test_colour_tables() {
        assert_eq!(eco_colour("red"), Some(Color::from("#e6224b")));
        assert_eq!(eco_colours().len(), 6);
        assert_eq!(national_colour("GB-WLS"), Some(Color::from("#C8102E")));
        assert_eq!(national_colour("FRA"), None);
        assert_eq!(organisation_colours()["OBR"], Color::from("rgb(69,101,133)"));
    }

    #[test]
    fn test_country_groups() {
        assert!(is_country_group("OECD"));
        assert!(is_country_group("G-7"));
        assert!(!is_country_group("GBR"));
        assert_eq!(country_groups()["EU27_2020"], "EU27 (2020)");
        assert_eq!(country_group_codes().len(), 7);
    }
}
