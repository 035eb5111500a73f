use gantt_rs::api::TimelineConfig;
use gantt_rs::core::{
    ColorPalette, DateLabelStyle, format_date_label, format_optional_date, parse_date_only,
};
use gantt_rs::render::BarLayoutConfig;

#[test]
fn empty_json_yields_defaults() {
    let config = TimelineConfig::from_json_str("{}").expect("config");
    assert_eq!(config, TimelineConfig::default());
    assert_eq!(config.palette.len(), 6);
    assert!(!config.auto_lanes);
    assert_eq!(config.date_label_style, DateLabelStyle::Long);
    assert_eq!(config.missing_date_label, "No date");
}

#[test]
fn config_round_trips_through_json() {
    let config = TimelineConfig::default()
        .with_palette(ColorPalette::from_names(["leave", "shift"]).expect("palette"))
        .with_auto_lanes(true)
        .with_date_label_style(DateLabelStyle::MonthYear)
        .with_bar_layout(BarLayoutConfig {
            lane_height_px: 32.0,
            lane_gap_px: 2.0,
            bar_inset_px: 4.0,
        });
    let json = config.to_json_pretty().expect("serialize");
    assert!(json.contains("\"month_year\""));
    let back = TimelineConfig::from_json_str(&json).expect("deserialize");
    assert_eq!(back, config);
}

#[test]
fn invalid_config_is_rejected() {
    assert!(TimelineConfig::from_json_str(r#"{"palette": []}"#).is_err());
    assert!(
        TimelineConfig::from_json_str(
            r#"{"bar_layout": {"lane_height_px": 4.0, "lane_gap_px": 1.0, "bar_inset_px": 3.0}}"#
        )
        .is_err()
    );
    assert!(TimelineConfig::from_json_str("[1, 2]").is_err());
}

#[test]
fn date_labels_follow_style() {
    let date = parse_date_only("2025-03-05");
    assert_eq!(format_date_label(date, DateLabelStyle::Iso), "2025-03-05");
    assert_eq!(format_date_label(date, DateLabelStyle::Short), "Mar 5");
    assert_eq!(format_date_label(date, DateLabelStyle::Long), "Mar 5, 2025");
    assert_eq!(format_date_label(date, DateLabelStyle::MonthYear), "Mar 2025");
    assert_eq!(
        format_optional_date(None, DateLabelStyle::Long, "No date"),
        "No date"
    );
    assert_eq!(
        format_optional_date(Some(date), DateLabelStyle::Iso, "No date"),
        "2025-03-05"
    );
}
