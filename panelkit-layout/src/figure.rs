//! Retained figure model: a figure of a given physical size holding panels
//! placed at explicit figure-fraction coordinates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::VariantNames;

use crate::error::PanelkitLayoutError;

/// Bounding box of a panel in figure-fraction units (0 to 1)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelGeometry {
    pub left: f32,
    pub bottom: f32,
    pub width: f32,
    pub height: f32,
}

impl PanelGeometry {
    pub fn new(left: f32, bottom: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            bottom,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn top(&self) -> f32 {
        self.bottom + self.height
    }
}

/// Index of a panel within its figure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PanelId(usize);

impl PanelId {
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, VariantNames)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Spine {
    Top,
    Bottom,
    Left,
    Right,
}

impl Spine {
    pub const ALL: [Spine; 4] = [Spine::Top, Spine::Bottom, Spine::Left, Spine::Right];

    pub fn as_str(&self) -> &'static str {
        match self {
            Spine::Top => "top",
            Spine::Bottom => "bottom",
            Spine::Left => "left",
            Spine::Right => "right",
        }
    }
}

impl FromStr for Spine {
    type Err = PanelkitLayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Spine::ALL
            .into_iter()
            .find(|spine| spine.as_str() == s)
            .ok_or_else(|| PanelkitLayoutError::InvalidSpine(s.to_string()))
    }
}

impl fmt::Display for Spine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, VariantNames)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
        }
    }
}

impl FromStr for Axis {
    type Err = PanelkitLayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            _ => Err(PanelkitLayoutError::InvalidAxis(s.to_string())),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visibility of the four border lines of a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spines {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl Spines {
    pub fn is_visible(&self, spine: Spine) -> bool {
        match spine {
            Spine::Top => self.top,
            Spine::Bottom => self.bottom,
            Spine::Left => self.left,
            Spine::Right => self.right,
        }
    }

    pub fn set_visible(&mut self, spine: Spine, visible: bool) {
        match spine {
            Spine::Top => self.top = visible,
            Spine::Bottom => self.bottom = visible,
            Spine::Left => self.left = visible,
            Spine::Right => self.right = visible,
        }
    }
}

impl Default for Spines {
    fn default() -> Self {
        Self {
            top: true,
            bottom: true,
            left: true,
            right: true,
        }
    }
}

pub const DEFAULT_MAJOR_TICK_LENGTH: f32 = 3.5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisState {
    pub visible: bool,
    pub grid: bool,
    pub major_tick_length: f32,
}

impl Default for AxisState {
    fn default() -> Self {
        Self {
            visible: true,
            grid: false,
            major_tick_length: DEFAULT_MAJOR_TICK_LENGTH,
        }
    }
}

/// A single plotting region within a figure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub geometry: PanelGeometry,
    pub spines: Spines,
    pub x_axis: AxisState,
    pub y_axis: AxisState,
}

impl Panel {
    pub fn new(geometry: PanelGeometry) -> Self {
        Self {
            geometry,
            spines: Default::default(),
            x_axis: Default::default(),
            y_axis: Default::default(),
        }
    }

    pub fn axis(&self, axis: Axis) -> &AxisState {
        match axis {
            Axis::X => &self.x_axis,
            Axis::Y => &self.y_axis,
        }
    }

    pub fn axis_mut(&mut self, axis: Axis) -> &mut AxisState {
        match axis {
            Axis::X => &mut self.x_axis,
            Axis::Y => &mut self.y_axis,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    width_inches: f32,
    height_inches: f32,
    dpi: f32,
    panels: Vec<Panel>,
}

impl Figure {
    pub fn new(width_inches: f32, height_inches: f32, dpi: f32) -> Self {
        Self {
            width_inches,
            height_inches,
            dpi,
            panels: vec![],
        }
    }

    /// Add a panel at the given figure-fraction bounds and return its id
    pub fn add_panel(&mut self, geometry: PanelGeometry) -> PanelId {
        let id = PanelId(self.panels.len());
        tracing::trace!(index = id.0, ?geometry, "adding panel");
        self.panels.push(Panel::new(geometry));
        id
    }

    pub fn panel(&self, id: PanelId) -> Option<&Panel> {
        self.panels.get(id.0)
    }

    pub fn panel_mut(&mut self, id: PanelId) -> Option<&mut Panel> {
        self.panels.get_mut(id.0)
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn dpi(&self) -> f32 {
        self.dpi
    }

    pub fn size_inches(&self) -> (f32, f32) {
        (self.width_inches, self.height_inches)
    }

    pub fn size_pixels(&self) -> (f32, f32) {
        (self.width_inches * self.dpi, self.height_inches * self.dpi)
    }
}
