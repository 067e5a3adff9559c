//! # Colour Resolver
//!
//! Derives per-row bar and line colours for tables keyed by country or
//! country-group identifiers. Unresolvable rows are coloured with defaults and
//! reported through [`ColorResolution::Fallback`]; they never fail the call.

pub mod country;
mod resolver;

#[cfg(test)]
mod tests;

pub use country::{CountryNameResolver, StaticCountryResolver, NOT_FOUND};
pub use resolver::{
    assign_colors, bar_override_key, Assigned, ColorOverride, ColorResolution, ColorResolver,
    FallbackReason, RowColors, BAR_COLUMN, HOME_COUNTRY, ISO3_COLUMN, LINE_COLUMN,
};
