//! Per-panel formatting helpers.

use crate::figure::{Axis, Figure, Panel, Spine};
use crate::grid::LayoutGrid;

/// Hide every spine except `keep`, which is left untouched
pub fn hide_spines_except(panel: &mut Panel, keep: Spine) {
    for spine in Spine::ALL {
        if spine != keep {
            panel.spines.set_visible(spine, false);
        }
    }
}

/// Format one axis of a panel.
///
/// With `hide` the axis is removed entirely. Otherwise gridlines are drawn
/// along it and its major tick marks are collapsed to zero length.
pub fn format_axis(panel: &mut Panel, axis: Axis, hide: bool) {
    let state = panel.axis_mut(axis);
    if hide {
        state.visible = false;
    } else {
        state.grid = true;
        state.major_tick_length = 0.0;
    }
}

/// Apply the house formatting to every panel of a grid: bottom spine only,
/// y gridlines without tick marks
pub fn format_grid(figure: &mut Figure, grid: &LayoutGrid) {
    for id in grid.iter() {
        let Some(panel) = figure.panel_mut(id) else {
            tracing::warn!(index = id.index(), "panel not found in figure");
            continue;
        };
        hide_spines_except(panel, Spine::Bottom);
        format_axis(panel, Axis::Y, false);
    }
}
