use panelkit_style::colors::parse_hex_color;
use panelkit_style::{
    resolve, to_global_config, ColorCatalog, ElementName, FontWeight, PanelkitStyleError, Style,
};
use rstest::rstest;

#[rstest]
#[case("web")]
#[case("pdf")]
fn test_resolve_produces_nine_valid_specs(#[case] medium: &str) {
    let profile = resolve(medium).unwrap();
    let specs: Vec<_> = profile.iter().collect();
    assert_eq!(specs.len(), 9);

    for spec in specs {
        assert!(spec.size() > 0.0, "{} has size {}", spec.name(), spec.size());
        assert!(matches!(spec.weight(), FontWeight::Normal | FontWeight::Bold));
        assert!(parse_hex_color(spec.color()).is_ok(), "{}", spec.color());
    }
}

#[rstest]
#[case("ppt")]
#[case("Web")]
#[case("")]
fn test_resolve_rejects_other_media(#[case] medium: &str) {
    assert!(matches!(
        resolve(medium),
        Err(PanelkitStyleError::InvalidMedium(m)) if m == medium
    ));
}

#[rstest]
#[case("web", 22.0, 14.0)]
#[case("pdf", 8.0, 7.0)]
fn test_global_config_tracks_profile(
    #[case] medium: &str,
    #[case] title_size: f32,
    #[case] legend_size: f32,
) {
    let config = to_global_config(&resolve(medium).unwrap());
    assert_eq!(config.len(), 16);
    assert_eq!(
        config.get("figure.titlesize").and_then(|v| v.as_number()),
        Some(title_size)
    );
    assert_eq!(
        config.get("legend.fontsize").and_then(|v| v.as_number()),
        Some(legend_size)
    );
}

#[test]
fn test_profile_serializes_element_names() {
    let profile = resolve("web").unwrap();
    let value = serde_json::to_value(&profile).unwrap();
    assert_eq!(value["axis_label"]["name"], "axis_label");
    assert_eq!(value["axis_label"]["weight"], "bold");
    assert_eq!(value["source_note"]["color"], "#565656");
    assert_eq!(value["medium"], "web");
}

#[test]
fn test_element_lookup_by_name() {
    let profile = resolve("pdf").unwrap();
    let name: ElementName = "figure_note".parse().unwrap();
    assert_eq!(profile.get(name).size(), 7.0);
}

#[test]
fn test_style_and_catalog_together() {
    let style = Style::new("pdf").unwrap();
    let catalog = ColorCatalog::default();
    assert_eq!(style.global_config(), to_global_config(style.profile()));
    assert_eq!(catalog.get("teal").unwrap().series, "#a2dadb");
    assert_eq!(catalog.get("green").unwrap().label, "#6b7f2b");
    for name in catalog.names() {
        assert!(catalog.get(name).is_ok());
        assert!(catalog.get(&name.to_uppercase()).is_err());
    }
}
