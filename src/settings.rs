//! # Settings
//!
//! Environment-driven defaults for the rendering context and colour resolver.
//!
//! - `ECOSTYLES_THEME`: theme to enable on start-up (`cotd`, `article`, `newsletter`)
//! - `ECOSTYLES_DARK_MODE`: `true`/`false` (also `1`/`0`, `yes`/`no`, `on`/`off`)
//! - `ECOSTYLES_PALETTE`: base palette for colour assignment (`light`, `dark`, ...)

use std::env;

use crate::error::{StyleError, StyleResult};
use crate::palette::PaletteMode;
use crate::themes::{ThemeName, ThemeOptions};

pub const THEME_VAR: &str = "ECOSTYLES_THEME";
pub const DARK_MODE_VAR: &str = "ECOSTYLES_DARK_MODE";
pub const PALETTE_VAR: &str = "ECOSTYLES_PALETTE";

/// Start-up configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    /// Theme to enable, if any.
    pub theme: Option<ThemeName>,
    pub dark_mode: bool,
    /// Palette the colour resolver draws its defaults from.
    pub palette: PaletteMode,
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> StyleResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like [`Settings::from_env`], but falls back to defaults on bad values.
    pub fn from_env_or_default() -> Self {
        Self::from_env().unwrap_or_else(|err| {
            log::warn!("Ignoring environment settings: {}", err);
            Self::default()
        })
    }

    /// Read settings through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> StyleResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(theme) = lookup(THEME_VAR) {
            let theme = theme.trim();
            if !theme.is_empty() {
                settings.theme = Some(theme.parse()?);
            }
        }

        if let Some(flag) = lookup(DARK_MODE_VAR) {
            settings.dark_mode = parse_flag(DARK_MODE_VAR, &flag)?;
        }

        if let Some(palette) = lookup(PALETTE_VAR) {
            settings.palette = palette
                .trim()
                .parse()
                .map_err(|_| StyleError::invalid_setting(PALETTE_VAR, palette.clone()))?;
        }

        Ok(settings)
    }

    pub fn theme_options(&self) -> ThemeOptions {
        ThemeOptions {
            dark_mode: self.dark_mode,
        }
    }
}

fn parse_flag(key: &str, raw: &str) -> StyleResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(StyleError::invalid_setting(key, raw)),
    }
}
