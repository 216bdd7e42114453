use serde::Serialize;
use strum::IntoEnumIterator;

use crate::colors::parse_hex_color;
use crate::error::PanelkitStyleError;
use crate::medium::{ElementName, FontWeight, Medium};

pub const DARK_GRAY: &str = "#333333";
pub const LIGHT_GRAY: &str = "#565656";

/// Font size, weight and color of a single text element
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextElementSpec {
    name: ElementName,
    size: f32,
    weight: FontWeight,
    color: String,
}

impl TextElementSpec {
    pub fn new(name: ElementName, size: f32, weight: FontWeight, color: impl Into<String>) -> Self {
        Self {
            name,
            size,
            weight,
            color: color.into(),
        }
    }

    pub fn name(&self) -> ElementName {
        self.name
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn rgba(&self) -> Result<[f32; 4], PanelkitStyleError> {
        parse_hex_color(&self.color)
    }
}

/// Font size of each element, in points
pub fn font_size(medium: Medium, name: ElementName) -> f32 {
    use ElementName::*;
    match medium {
        Medium::Web => match name {
            Title => 22.0,
            Subtitle => 18.0,
            AxisLabel => 16.0,
            TickLabel => 14.0,
            DataLabel => 16.0,
            Callout => 14.0,
            LegendLabel => 14.0,
            FigureNote => 12.0,
            SourceNote => 10.0,
        },
        Medium::Pdf => match name {
            Title => 8.0,
            Subtitle => 7.0,
            AxisLabel => 7.0,
            TickLabel => 7.0,
            DataLabel => 10.0,
            Callout => 7.0,
            LegendLabel => 7.0,
            FigureNote => 7.0,
            SourceNote => 5.0,
        },
    }
}

/// Subtitles and source notes are light gray, everything else dark gray
pub fn font_color(name: ElementName) -> &'static str {
    match name {
        ElementName::Subtitle | ElementName::SourceNote => LIGHT_GRAY,
        _ => DARK_GRAY,
    }
}

/// Text element specs for one medium
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleProfile {
    medium: Medium,
    pub title: TextElementSpec,
    pub subtitle: TextElementSpec,
    pub axis_label: TextElementSpec,
    pub tick_label: TextElementSpec,
    pub data_label: TextElementSpec,
    pub callout: TextElementSpec,
    pub legend_label: TextElementSpec,
    pub figure_note: TextElementSpec,
    pub source_note: TextElementSpec,
}

impl StyleProfile {
    pub fn new(medium: Medium) -> Self {
        let spec = |name: ElementName| {
            TextElementSpec::new(
                name,
                font_size(medium, name),
                name.weight(),
                font_color(name),
            )
        };

        Self {
            medium,
            title: spec(ElementName::Title),
            subtitle: spec(ElementName::Subtitle),
            axis_label: spec(ElementName::AxisLabel),
            tick_label: spec(ElementName::TickLabel),
            data_label: spec(ElementName::DataLabel),
            callout: spec(ElementName::Callout),
            legend_label: spec(ElementName::LegendLabel),
            figure_note: spec(ElementName::FigureNote),
            source_note: spec(ElementName::SourceNote),
        }
    }

    pub fn medium(&self) -> Medium {
        self.medium
    }

    pub fn get(&self, name: ElementName) -> &TextElementSpec {
        match name {
            ElementName::Title => &self.title,
            ElementName::Subtitle => &self.subtitle,
            ElementName::AxisLabel => &self.axis_label,
            ElementName::TickLabel => &self.tick_label,
            ElementName::DataLabel => &self.data_label,
            ElementName::Callout => &self.callout,
            ElementName::LegendLabel => &self.legend_label,
            ElementName::FigureNote => &self.figure_note,
            ElementName::SourceNote => &self.source_note,
        }
    }

    /// Iterate over all nine specs in canonical element order
    pub fn iter(&self) -> impl Iterator<Item = &TextElementSpec> {
        ElementName::iter().map(move |name| self.get(name))
    }
}

/// Build the style profile for a medium given by name.
///
/// Only `"web"` and `"pdf"` are accepted; anything else fails with
/// `PanelkitStyleError::InvalidMedium`.
pub fn resolve(medium: &str) -> Result<StyleProfile, PanelkitStyleError> {
    let medium = medium.parse::<Medium>()?;
    tracing::debug!(%medium, "resolving style profile");
    Ok(StyleProfile::new(medium))
}
