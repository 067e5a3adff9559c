//! Economics Observatory chart styles
//!
//! Prints theme configurations and palettes as JSON, for use outside Rust.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;

use ecostyles::palette::{Palette, PaletteMode};
use ecostyles::settings::Settings;
use ecostyles::themes::{get_theme, ThemeOptions};

/// Economics Observatory chart themes and palettes
#[derive(Parser)]
#[command(name = "ecostyles", version, about)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a theme's Vega-Lite configuration
    Theme {
        /// Theme name (cotd, article, newsletter); defaults to ECOSTYLES_THEME
        name: Option<String>,
        /// Use dark mode colours (cotd only)
        #[arg(long)]
        dark: bool,
    },
    /// Print a palette's colour roles
    Palette {
        /// Palette mode (light, dark, light-transparent, dark-transparent)
        #[arg(default_value = "light")]
        mode: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG applies unless --debug is given.
    let mut logger = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    if cli.debug {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let settings = Settings::from_env().context("reading ECOSTYLES_* settings")?;

    let output = match cli.command {
        Command::Theme { name, dark } => {
            let name = name
                .or_else(|| settings.theme.map(|t| t.to_string()))
                .unwrap_or_else(|| "article".to_string());
            let options = ThemeOptions {
                dark_mode: dark || settings.dark_mode,
            };
            get_theme(&name, options)?.to_value()?
        }
        Command::Palette { mode } => {
            let mode: PaletteMode = mode.parse()?;
            serde_json::to_value(Palette::for_mode(mode).to_map())?
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
