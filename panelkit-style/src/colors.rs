//! Named color catalog.
//!
//! Every color has a `series` shade (fills, lines) and a darker `label` shade
//! for text drawn on or next to the series.

use css_color_parser::Color;
use serde::Serialize;

use crate::error::PanelkitStyleError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ColorSpec {
    pub name: &'static str,
    pub series: &'static str,
    pub label: &'static str,
}

impl ColorSpec {
    pub const fn new(name: &'static str, series: &'static str, label: &'static str) -> Self {
        Self {
            name,
            series,
            label,
        }
    }

    pub fn series_rgba(&self) -> Result<[f32; 4], PanelkitStyleError> {
        parse_hex_color(self.series)
    }

    pub fn label_rgba(&self) -> Result<[f32; 4], PanelkitStyleError> {
        parse_hex_color(self.label)
    }
}

pub const TEAL: ColorSpec = ColorSpec::new("teal", "#a2dadb", "#567a78");
pub const ORANGE: ColorSpec = ColorSpec::new("orange", "#ffae5f", "#b24d28");
pub const PURPLE: ColorSpec = ColorSpec::new("purple", "#8782ba", "#4f465e");
pub const YELLOW: ColorSpec = ColorSpec::new("yellow", "#ffe18b", "#8a732b");

pub const DARK_GRAY: ColorSpec = ColorSpec::new("dark_gray", "#333333", "#333333");
pub const GREEN: ColorSpec = ColorSpec::new("green", "#bbd976", "#6b7f2b");
pub const RED: ColorSpec = ColorSpec::new("red", "#c84933", "#80171a");

pub const MAIN_COLORS: [ColorSpec; 4] = [TEAL, ORANGE, PURPLE, YELLOW];
pub const SPECIALTY_COLORS: [ColorSpec; 3] = [DARK_GRAY, GREEN, RED];

// Semantic names for the specialty colors
const ALIASES: [(&str, &str); 3] = [
    ("aggregate", "dark_gray"),
    ("positive_growth", "green"),
    ("negative_growth", "red"),
];

/// Flat table of the main and specialty colors, in that order
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct ColorCatalog {
    colors: Vec<ColorSpec>,
}

impl ColorCatalog {
    pub fn new() -> Self {
        let colors = MAIN_COLORS
            .iter()
            .chain(SPECIALTY_COLORS.iter())
            .copied()
            .collect();
        Self { colors }
    }

    /// Look up a color by name or alias. Names are case-sensitive.
    pub fn get(&self, name: &str) -> Result<&ColorSpec, PanelkitStyleError> {
        let canonical = ALIASES
            .iter()
            .find(|(alias, _)| *alias == name)
            .map(|(_, target)| *target)
            .unwrap_or(name);

        self.colors
            .iter()
            .find(|color| color.name == canonical)
            .ok_or_else(|| PanelkitStyleError::UnknownColor(name.to_string()))
    }

    pub fn main(&self) -> &[ColorSpec] {
        &self.colors[..MAIN_COLORS.len()]
    }

    pub fn specialty(&self) -> &[ColorSpec] {
        &self.colors[MAIN_COLORS.len()..]
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColorSpec> {
        self.colors.iter()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.colors.iter().map(|color| color.name).collect()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for ColorCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a `#rrggbb` (or `#rgb`) string into normalized rgba components
pub fn parse_hex_color(value: &str) -> Result<[f32; 4], PanelkitStyleError> {
    if !value.starts_with('#') {
        return Err(PanelkitStyleError::InvalidColor(value.to_string()));
    }
    let color = value
        .parse::<Color>()
        .map_err(|_| PanelkitStyleError::InvalidColor(value.to_string()))?;
    Ok([
        color.r as f32 / 255.0,
        color.g as f32 / 255.0,
        color.b as f32 / 255.0,
        color.a,
    ])
}
