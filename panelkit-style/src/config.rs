//! Flattened configuration for a plotting backend's global settings.
//!
//! Keys follow the dotted `group.property` naming most plotting backends use
//! for their global defaults (`axes.labelsize`, `xtick.labelcolor`, ...).

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::medium::FontWeight;
use crate::profile::StyleProfile;

pub const DEFAULT_FONT_NAME: &str = "Times";
pub const GRID_COLOR: &str = "#d4d2d2";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Number(f32),
    Text(String),
}

impl ConfigValue {
    pub fn as_number(&self) -> Option<f32> {
        match self {
            ConfigValue::Number(n) => Some(*n),
            ConfigValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ConfigValue::Text(s) => Some(s),
            ConfigValue::Number(_) => None,
        }
    }
}

impl From<f32> for ConfigValue {
    fn from(value: f32) -> Self {
        ConfigValue::Number(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::Text(value.to_string())
    }
}

impl From<FontWeight> for ConfigValue {
    fn from(value: FontWeight) -> Self {
        ConfigValue::Text(value.as_str().to_string())
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Number(n) => write!(f, "{n}"),
            ConfigValue::Text(s) => f.write_str(s),
        }
    }
}

/// Insertion-ordered mapping from configuration key to value
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct GlobalConfig {
    entries: IndexMap<String, ConfigValue>,
}

impl GlobalConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ConfigValue>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.entries.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Flatten a profile into global configuration using the default font family
pub fn to_global_config(profile: &StyleProfile) -> GlobalConfig {
    global_config_with_font(profile, DEFAULT_FONT_NAME)
}

pub(crate) fn global_config_with_font(profile: &StyleProfile, font_name: &str) -> GlobalConfig {
    let title = &profile.title;
    let axis_label = &profile.axis_label;
    let tick_label = &profile.tick_label;
    let legend_label = &profile.legend_label;

    let mut config = GlobalConfig::new();
    config.insert("font.sans-serif", font_name);
    config.insert("grid.color", GRID_COLOR);

    // Figure-level titles don't pick up a color from this key space
    config.insert("figure.titlesize", title.size());
    config.insert("figure.titleweight", title.weight());
    config.insert("axes.titlesize", title.size());
    config.insert("axes.titleweight", title.weight());
    config.insert("axes.titlecolor", title.color());

    config.insert("axes.labelsize", axis_label.size());
    config.insert("axes.labelweight", axis_label.weight());
    config.insert("axes.labelcolor", axis_label.color());
    config.insert("xtick.labelsize", tick_label.size());
    config.insert("xtick.labelcolor", tick_label.color());
    config.insert("ytick.labelsize", tick_label.size());
    config.insert("ytick.labelcolor", tick_label.color());

    config.insert("legend.fontsize", legend_label.size());
    config.insert("legend.labelcolor", legend_label.color());
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::medium::Medium;

    #[test]
    fn test_global_config_keys_in_order() {
        let config = to_global_config(&StyleProfile::new(Medium::Web));
        let keys: Vec<_> = config.keys().collect();
        assert_eq!(
            keys,
            vec![
                "font.sans-serif",
                "grid.color",
                "figure.titlesize",
                "figure.titleweight",
                "axes.titlesize",
                "axes.titleweight",
                "axes.titlecolor",
                "axes.labelsize",
                "axes.labelweight",
                "axes.labelcolor",
                "xtick.labelsize",
                "xtick.labelcolor",
                "ytick.labelsize",
                "ytick.labelcolor",
                "legend.fontsize",
                "legend.labelcolor",
            ]
        );
    }

    #[test]
    fn test_global_config_values() {
        let config = to_global_config(&StyleProfile::new(Medium::Pdf));
        assert_eq!(config.get("font.sans-serif").and_then(|v| v.as_text()), Some("Times"));
        assert_eq!(config.get("grid.color").and_then(|v| v.as_text()), Some(GRID_COLOR));
        assert_eq!(config.get("axes.titlesize").and_then(|v| v.as_number()), Some(8.0));
        assert_eq!(config.get("axes.labelweight").and_then(|v| v.as_text()), Some("bold"));
        assert_eq!(config.get("legend.fontsize").and_then(|v| v.as_number()), Some(7.0));
        assert_eq!(
            config.get("ytick.labelcolor").and_then(|v| v.as_text()),
            Some("#333333")
        );
        assert!(config.get("figure.titlecolor").is_none());
    }

    #[test]
    fn test_global_config_serializes_flat() {
        let config = to_global_config(&StyleProfile::new(Medium::Web));
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["axes.titlesize"], serde_json::json!(22.0));
        assert_eq!(value["figure.titleweight"], serde_json::json!("bold"));
    }
}
