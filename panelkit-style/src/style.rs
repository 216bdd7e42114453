use serde::{Deserialize, Serialize};

use crate::config::{global_config_with_font, GlobalConfig, DEFAULT_FONT_NAME};
use crate::error::PanelkitStyleError;
use crate::medium::Medium;
use crate::profile::StyleProfile;

pub const DEFAULT_FIG_WIDTH_PIXELS: u32 = 2140;
pub const DEFAULT_DPI: f32 = 100.0;

/// User-facing style configuration. Every field is optional in the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleOptions {
    pub medium: Medium,
    pub font_name: String,
    pub fig_width_pixels: u32,
    pub dpi: f32,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            medium: Medium::default(),
            font_name: DEFAULT_FONT_NAME.to_string(),
            fig_width_pixels: DEFAULT_FIG_WIDTH_PIXELS,
            dpi: DEFAULT_DPI,
        }
    }
}

impl StyleOptions {
    pub fn from_json(json: &str) -> Result<Self, PanelkitStyleError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A style profile together with figure sizing defaults
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Style {
    profile: StyleProfile,
    font_name: String,
    fig_width_pixels: u32,
    dpi: f32,
}

impl Style {
    pub fn new(medium: &str) -> Result<Self, PanelkitStyleError> {
        let medium = medium.parse::<Medium>()?;
        Ok(Self::from_options(StyleOptions {
            medium,
            ..Default::default()
        }))
    }

    pub fn from_options(options: StyleOptions) -> Self {
        tracing::debug!(
            medium = %options.medium,
            font_name = %options.font_name,
            fig_width_pixels = options.fig_width_pixels,
            dpi = options.dpi,
            "building style"
        );
        Self {
            profile: StyleProfile::new(options.medium),
            font_name: options.font_name,
            fig_width_pixels: options.fig_width_pixels,
            dpi: options.dpi,
        }
    }

    pub fn profile(&self) -> &StyleProfile {
        &self.profile
    }

    pub fn medium(&self) -> Medium {
        self.profile.medium()
    }

    pub fn font_name(&self) -> &str {
        &self.font_name
    }

    pub fn fig_width_pixels(&self) -> u32 {
        self.fig_width_pixels
    }

    pub fn dpi(&self) -> f32 {
        self.dpi
    }

    pub fn fig_width_inches(&self) -> f32 {
        self.fig_width_pixels as f32 / self.dpi
    }

    pub fn global_config(&self) -> GlobalConfig {
        global_config_with_font(&self.profile, &self.font_name)
    }
}
