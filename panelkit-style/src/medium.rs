use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator, IntoStaticStr, VariantNames};

use crate::error::PanelkitStyleError;

/// Target output context, which determines the font-size scale
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize, VariantNames)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Medium {
    #[default]
    Web,
    Pdf,
}

impl Medium {
    pub fn as_str(&self) -> &'static str {
        match self {
            Medium::Web => "web",
            Medium::Pdf => "pdf",
        }
    }
}

impl FromStr for Medium {
    type Err = PanelkitStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "web" => Ok(Medium::Web),
            "pdf" => Ok(Medium::Pdf),
            _ => Err(PanelkitStyleError::InvalidMedium(s.to_string())),
        }
    }
}

impl fmt::Display for Medium {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The fixed set of text elements every style profile defines.
///
/// Iteration order (`ElementName::iter()`) is the canonical order used by
/// `StyleProfile::iter`.
#[derive(
    Debug,
    Clone,
    Copy,
    Hash,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    VariantNames,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ElementName {
    Title,
    Subtitle,
    AxisLabel,
    TickLabel,
    DataLabel,
    Callout,
    LegendLabel,
    FigureNote,
    SourceNote,
}

impl ElementName {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// Title, axis labels and tick labels are bold, everything else is normal
    pub fn weight(&self) -> FontWeight {
        match self {
            ElementName::Title | ElementName::AxisLabel | ElementName::TickLabel => {
                FontWeight::Bold
            }
            _ => FontWeight::Normal,
        }
    }
}

impl FromStr for ElementName {
    type Err = PanelkitStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ElementName::iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| PanelkitStyleError::UnknownElement(s.to_string()))
    }
}

impl fmt::Display for ElementName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize, VariantNames)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "snake_case")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
        }
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_medium() {
        assert_eq!("web".parse::<Medium>().unwrap(), Medium::Web);
        assert_eq!("pdf".parse::<Medium>().unwrap(), Medium::Pdf);
    }

    #[test]
    fn test_parse_medium_is_case_sensitive() {
        assert!(matches!(
            "PDF".parse::<Medium>(),
            Err(PanelkitStyleError::InvalidMedium(m)) if m == "PDF"
        ));
    }

    #[test]
    fn test_medium_variant_names() {
        assert_eq!(Medium::VARIANTS, &["web", "pdf"]);
    }

    #[test]
    fn test_element_names_round_trip_through_str() {
        for name in ElementName::iter() {
            assert_eq!(name.as_str().parse::<ElementName>().unwrap(), name);
        }
        assert_eq!(ElementName::VARIANTS.len(), 9);
        assert_eq!(ElementName::LegendLabel.as_str(), "legend_label");
    }

    #[test]
    fn test_unknown_element() {
        assert!(matches!(
            "headline".parse::<ElementName>(),
            Err(PanelkitStyleError::UnknownElement(_))
        ));
    }

    #[test]
    fn test_bold_partition() {
        let bold: Vec<_> = ElementName::iter()
            .filter(|name| name.weight() == FontWeight::Bold)
            .collect();
        assert_eq!(
            bold,
            vec![
                ElementName::Title,
                ElementName::AxisLabel,
                ElementName::TickLabel
            ]
        );
    }
}
