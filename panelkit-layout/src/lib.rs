pub mod error;
pub mod figure;
pub mod format;
pub mod grid;

pub use crate::error::PanelkitLayoutError;
pub use crate::figure::{Axis, AxisState, Figure, Panel, PanelGeometry, PanelId, Spine, Spines};
pub use crate::format::{format_axis, format_grid, hide_spines_except};
pub use crate::grid::{layout, GridLayout, LayoutGrid, Margins};
