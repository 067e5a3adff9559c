//! # Rendering Context
//!
//! Holds the theme that charts are rendered with. Pass a [`RenderingContext`]
//! to export calls explicitly; the process-wide default context exists for
//! notebook-style sessions that produce one chart at a time.

use once_cell::sync::Lazy;
use serde_json::Value;
use std::sync::{PoisonError, RwLock};

use crate::error::StyleResult;
use crate::export::ChartSpec;
use crate::settings::Settings;
use crate::themes::{ThemeConfig, ThemeName, ThemeOptions};

/// The currently enabled theme.
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveTheme {
    pub name: ThemeName,
    pub options: ThemeOptions,
    pub config: ThemeConfig,
}

/// Theme state consulted when charts are exported.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderingContext {
    active: Option<ActiveTheme>,
}

impl RenderingContext {
    /// A context with no theme enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// A context with `name` already enabled.
    pub fn with_theme(name: &str, options: ThemeOptions) -> StyleResult<Self> {
        let mut context = Self::new();
        context.register_and_enable(name, options)?;
        Ok(context)
    }

    /// A context configured from [`Settings`].
    pub fn from_settings(settings: &Settings) -> Self {
        let mut context = Self::new();
        if let Some(name) = settings.theme {
            context.enable(name, settings.theme_options());
        }
        context
    }

    /// Validate `name`, then make it the active theme.
    ///
    /// An invalid name leaves the current theme untouched. Enabling replaces
    /// whatever was active before; themes do not stack.
    pub fn register_and_enable(
        &mut self,
        name: &str,
        options: ThemeOptions,
    ) -> StyleResult<&ActiveTheme> {
        let name: ThemeName = name.parse()?;
        Ok(self.enable(name, options))
    }

    pub fn enable(&mut self, name: ThemeName, options: ThemeOptions) -> &ActiveTheme {
        log::debug!("Enabling theme '{}' (dark mode: {})", name, options.dark_mode);
        let config = name.config(options);
        self.active.insert(ActiveTheme {
            name,
            options,
            config,
        })
    }

    pub fn active_theme(&self) -> Option<&ActiveTheme> {
        self.active.as_ref()
    }

    pub fn clear(&mut self) {
        self.active = None;
    }

    /// Fold the active theme into a chart's `config`.
    ///
    /// Settings the chart already carries win over the theme's.
    pub fn apply(&self, chart: &ChartSpec) -> StyleResult<ChartSpec> {
        let mut chart = chart.clone();
        let Some(active) = &self.active else {
            return Ok(chart);
        };

        let theme = active.config.config_value()?;
        let config = chart
            .as_map_mut()
            .entry("config")
            .or_insert_with(|| Value::Object(Default::default()));
        merge_defaults(config, &theme);
        Ok(chart)
    }
}

/// Copy entries from `defaults` into `target` where `target` has none.
fn merge_defaults(target: &mut Value, defaults: &Value) {
    if let (Value::Object(target), Value::Object(defaults)) = (target, defaults) {
        for (key, value) in defaults {
            match target.get_mut(key) {
                Some(existing) => merge_defaults(existing, value),
                None => {
                    target.insert(key.clone(), value.clone());
                }
            }
        }
    }
}

static GLOBAL_CONTEXT: Lazy<RwLock<RenderingContext>> =
    Lazy::new(|| RwLock::new(RenderingContext::new()));

/// Enable a theme on the process-wide context.
///
/// Not meant for concurrent theme switching; the last writer wins.
pub fn register_and_enable(name: &str, options: ThemeOptions) -> StyleResult<ThemeConfig> {
    let name: ThemeName = name.parse()?;
    let mut context = GLOBAL_CONTEXT.write().unwrap_or_else(PoisonError::into_inner);
    Ok(context.enable(name, options).config.clone())
}

/// The theme enabled on the process-wide context.
pub fn active_theme() -> Option<ActiveTheme> {
    global_context().active
}

/// Snapshot of the process-wide context, for passing to export calls.
pub fn global_context() -> RenderingContext {
    GLOBAL_CONTEXT
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}
