use float_cmp::assert_approx_eq;
use panelkit_layout::{
    format_grid, layout, Axis, Figure, GridLayout, LayoutGrid, Margins, PanelkitLayoutError,
    Spine,
};
use panelkit_style::Style;

fn geometry_rows(figure: &Figure, grid: &LayoutGrid) -> Vec<Vec<(f32, f32)>> {
    grid.as_rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|id| {
                    let g = figure.panel(*id).unwrap().geometry;
                    (g.left, g.bottom)
                })
                .collect()
        })
        .collect()
}

#[test]
fn test_two_by_two_from_style() -> Result<(), PanelkitLayoutError> {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let style = Style::new("web")?;
    let (mut figure, grid) = GridLayout::from_style(&style).shape(2, 2).build();

    let (width, height) = figure.size_inches();
    assert_approx_eq!(f32, width, 21.4);
    assert_approx_eq!(f32, height, 21.4);
    assert_eq!(figure.panels().len(), 4);

    let rows = geometry_rows(&figure, &grid);
    // rows share a bottom, columns share a left
    assert_eq!(rows[0][0].1, rows[0][1].1);
    assert_eq!(rows[0][0].0, rows[1][0].0);
    assert!(rows[0][0].1 > rows[1][0].1);
    assert!(rows[0][1].0 > rows[0][0].0);

    format_grid(&mut figure, &grid);
    for panel in figure.panels() {
        assert!(panel.spines.is_visible(Spine::Bottom));
        assert!(!panel.spines.is_visible(Spine::Left));
        assert!(panel.axis(Axis::Y).grid);
        assert_eq!(panel.axis(Axis::Y).major_tick_length, 0.0);
    }
    Ok(())
}

#[test]
fn test_panels_tile_without_overlap() {
    let margins = Margins::new(0.1, 0.05, 0.05, 0.1);
    let (figure, grid) = layout(margins, 3, 2, 0.02, 0.04, 0.75, 8.0);
    assert_eq!(grid.rows(), 3);
    assert_eq!(grid.cols(), 2);

    let top_right = figure.panel(grid.get(0, 1).unwrap()).unwrap().geometry;
    let bottom_left = figure.panel(grid.get(2, 0).unwrap()).unwrap().geometry;
    assert_approx_eq!(f32, top_right.right(), 1.0 - 0.05, epsilon = 1e-5);
    assert_approx_eq!(f32, top_right.top(), 1.0 - 0.05, epsilon = 1e-5);
    assert_approx_eq!(f32, bottom_left.left, 0.1);
    assert_approx_eq!(f32, bottom_left.bottom, 0.1);
    assert_eq!(figure.size_inches(), (8.0, 6.0));
}

#[test]
fn test_figure_serializes_for_renderer() {
    let (figure, grid) = layout(Margins::uniform(0.0), 1, 1, 0.0, 0.0, 1.0, 5.0);
    let value = serde_json::to_value(&figure).unwrap();
    assert_eq!(value["width_inches"], 5.0);
    assert_eq!(value["panels"][0]["spines"]["top"], true);
    assert_eq!(value["panels"][0]["geometry"]["width"], 1.0);
    assert_eq!(grid.iter().count(), 1);
}

#[test]
fn test_spine_and_axis_names() {
    assert_eq!("bottom".parse::<Spine>().unwrap(), Spine::Bottom);
    assert!(matches!(
        "Bottom".parse::<Spine>(),
        Err(PanelkitLayoutError::InvalidSpine(_))
    ));
    assert_eq!("x".parse::<Axis>().unwrap(), Axis::X);
}

#[test]
fn test_invalid_medium_surfaces_as_layout_error() {
    let err: PanelkitLayoutError = Style::new("ppt").unwrap_err().into();
    assert!(matches!(err, PanelkitLayoutError::StyleError(_)));
}
