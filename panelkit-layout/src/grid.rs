use panelkit_style::Style;
use serde::{Deserialize, Serialize};

use crate::figure::{Figure, PanelGeometry, PanelId};

pub const DEFAULT_DPI: f32 = 100.0;

/// Figure margins in figure-fraction units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Margins {
    pub fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    pub fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            left: 0.04,
            right: 0.01,
            top: 0.07,
            bottom: 0.20,
        }
    }
}

/// Row-major matrix of panel ids. Row 0 is the topmost row of the figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutGrid {
    rows: Vec<Vec<PanelId>>,
}

impl LayoutGrid {
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    pub fn cols(&self) -> usize {
        self.rows.first().map(|row| row.len()).unwrap_or(0)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<PanelId> {
        self.rows.get(row)?.get(col).copied()
    }

    pub fn row(&self, row: usize) -> Option<&[PanelId]> {
        self.rows.get(row).map(|r| r.as_slice())
    }

    /// Iterate over all panel ids, top row first, left to right
    pub fn iter(&self) -> impl Iterator<Item = PanelId> + '_ {
        self.rows.iter().flat_map(|row| row.iter().copied())
    }

    pub fn as_rows(&self) -> &[Vec<PanelId>] {
        &self.rows
    }
}

/// Grid of equally sized panels separated by fixed gaps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
    pub margins: Margins,
    pub rows: usize,
    pub cols: usize,
    pub gap_x: f32,
    pub gap_y: f32,
    /// Ratio of figure height to figure width
    pub aspect: f32,
    pub base_width_inches: f32,
    pub dpi: f32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            margins: Margins::default(),
            rows: 2,
            cols: 2,
            gap_x: 0.05,
            gap_y: 0.15,
            aspect: 1.0,
            base_width_inches: 2140.0 / DEFAULT_DPI,
            dpi: DEFAULT_DPI,
        }
    }
}

impl GridLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take figure width and dpi from a style
    pub fn from_style(style: &Style) -> Self {
        Self {
            base_width_inches: style.fig_width_inches(),
            dpi: style.dpi(),
            ..Default::default()
        }
    }

    pub fn margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    pub fn shape(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    pub fn gaps(mut self, gap_x: f32, gap_y: f32) -> Self {
        self.gap_x = gap_x;
        self.gap_y = gap_y;
        self
    }

    pub fn aspect(mut self, aspect: f32) -> Self {
        self.aspect = aspect;
        self
    }

    pub fn base_width_inches(mut self, width: f32) -> Self {
        self.base_width_inches = width;
        self
    }

    /// Width and height shared by every panel
    pub fn panel_size(&self) -> (f32, f32) {
        let total_width = 1.0 - self.margins.left - self.margins.right;
        let total_height = 1.0 - self.margins.top - self.margins.bottom;

        let gap_space_x = self.cols.saturating_sub(1) as f32 * self.gap_x;
        let gap_space_y = self.rows.saturating_sub(1) as f32 * self.gap_y;

        (
            (total_width - gap_space_x) / self.cols as f32,
            (total_height - gap_space_y) / self.rows as f32,
        )
    }

    /// Panel bounds, top row first
    pub fn geometries(&self) -> Vec<Vec<PanelGeometry>> {
        let (width, height) = self.panel_size();
        let mut rows = Vec::with_capacity(self.rows);

        // Generated bottom-up; each new row goes to the front
        let mut bottom = self.margins.bottom;
        for _ in 0..self.rows {
            let mut row = Vec::with_capacity(self.cols);
            let mut left = self.margins.left;
            for _ in 0..self.cols {
                row.push(PanelGeometry::new(left, bottom, width, height));
                left += width + self.gap_x;
            }
            rows.insert(0, row);
            bottom += height + self.gap_y;
        }
        rows
    }

    /// Create the figure and one panel per grid cell
    pub fn build(&self) -> (Figure, LayoutGrid) {
        let (width, height) = self.panel_size();
        tracing::debug!(
            rows = self.rows,
            cols = self.cols,
            panel_width = width,
            panel_height = height,
            "computing grid layout"
        );
        if !(width > 0.0 && height > 0.0) {
            tracing::warn!(
                panel_width = width,
                panel_height = height,
                "margins and gaps leave no room for panels"
            );
        }

        let mut figure = Figure::new(
            self.base_width_inches,
            self.base_width_inches * self.aspect,
            self.dpi,
        );

        // Panels are added to the figure in generation order (bottom row first)
        let mut rows: Vec<Vec<PanelId>> = Vec::with_capacity(self.rows);
        for geometry_row in self.geometries().into_iter().rev() {
            let row = geometry_row
                .into_iter()
                .map(|geometry| figure.add_panel(geometry))
                .collect();
            rows.insert(0, row);
        }

        (figure, LayoutGrid { rows })
    }
}

/// Lay out a `rows` x `cols` grid of panels.
///
/// No validation is performed: margins and gaps that add up to more than the
/// figure produce zero or negative sized panels.
pub fn layout(
    margins: Margins,
    rows: usize,
    cols: usize,
    gap_x: f32,
    gap_y: f32,
    aspect: f32,
    base_width_inches: f32,
) -> (Figure, LayoutGrid) {
    GridLayout {
        margins,
        rows,
        cols,
        gap_x,
        gap_y,
        aspect,
        base_width_inches,
        dpi: DEFAULT_DPI,
    }
    .build()
}
