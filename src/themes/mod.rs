//! # Theme Registry
//!
//! The fixed set of named chart themes. A theme name is validated before any
//! theme-specific code runs; unknown names are rejected, never defaulted.

pub mod article;
pub mod config;
pub mod cotd;
pub mod newsletter;


use std::fmt;
use std::str::FromStr;

use crate::error::{StyleError, StyleResult};

pub use config::ThemeConfig;

/// The registered themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeName {
    /// Chart of the Day, the only theme with a dark variant.
    Cotd,
    #[default]
    Article,
    Newsletter,
}

impl ThemeName {
    pub const ALL: [ThemeName; 3] = [ThemeName::Cotd, ThemeName::Article, ThemeName::Newsletter];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeName::Cotd => "cotd",
            ThemeName::Article => "article",
            ThemeName::Newsletter => "newsletter",
        }
    }

    /// Build this theme's configuration. Themes other than `cotd` ignore `options`.
    pub fn config(&self, options: ThemeOptions) -> ThemeConfig {
        match self {
            ThemeName::Cotd => cotd::get_theme(options),
            ThemeName::Article => article::get_theme(),
            ThemeName::Newsletter => newsletter::get_theme(),
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeName {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| StyleError::invalid_theme(s))
    }
}

/// Per-call theme options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ThemeOptions {
    pub dark_mode: bool,
}

impl ThemeOptions {
    pub fn dark() -> Self {
        Self { dark_mode: true }
    }
}

/// Look up a theme by name.
pub fn get_theme(name: &str, options: ThemeOptions) -> StyleResult<ThemeConfig> {
    let name: ThemeName = name.parse()?;
    Ok(name.config(options))
}
