use approx::assert_relative_eq;
use gantt_rs::core::{Lane, PositionedBar};
use gantt_rs::render::{BarLayoutConfig, project_bar_geometry, row_height_px};

#[test]
fn year_bar_geometry_uses_column_percentages() {
    let bar = PositionedBar {
        start_column: 2,
        end_column: 7,
    };
    let geometry =
        project_bar_geometry(bar, 12, Lane::FIRST, BarLayoutConfig::default()).expect("geometry");

    assert_relative_eq!(geometry.left_pct, 2.0 / 12.0 * 100.0);
    assert_relative_eq!(geometry.width_pct, 50.0);
    assert_relative_eq!(geometry.top_px, 3.0);
    assert_relative_eq!(geometry.height_px, 22.0);
}

#[test]
fn lanes_stack_vertically() {
    let config = BarLayoutConfig {
        lane_height_px: 20.0,
        lane_gap_px: 5.0,
        bar_inset_px: 2.0,
    };
    let bar = PositionedBar {
        start_column: 0,
        end_column: 0,
    };
    let geometry = project_bar_geometry(bar, 10, Lane(2), config).expect("geometry");
    assert_relative_eq!(geometry.top_px, 52.0);
    assert_relative_eq!(geometry.width_pct, 10.0);
    assert_relative_eq!(row_height_px(3, config).expect("height"), 70.0);
    assert_relative_eq!(row_height_px(0, config).expect("height"), 0.0);
}

#[test]
fn bars_outside_column_count_are_rejected() {
    let bar = PositionedBar {
        start_column: 3,
        end_column: 12,
    };
    assert!(project_bar_geometry(bar, 12, Lane::FIRST, BarLayoutConfig::default()).is_err());
    assert!(
        project_bar_geometry(
            PositionedBar {
                start_column: 0,
                end_column: 0
            },
            0,
            Lane::FIRST,
            BarLayoutConfig::default()
        )
        .is_err()
    );
}

#[test]
fn invalid_layout_config_is_rejected() {
    let bar = PositionedBar {
        start_column: 0,
        end_column: 1,
    };
    let negative = BarLayoutConfig {
        lane_gap_px: -1.0,
        ..BarLayoutConfig::default()
    };
    assert!(project_bar_geometry(bar, 4, Lane::FIRST, negative).is_err());

    let too_much_inset = BarLayoutConfig {
        lane_height_px: 6.0,
        bar_inset_px: 3.0,
        ..BarLayoutConfig::default()
    };
    assert!(project_bar_geometry(bar, 4, Lane::FIRST, too_much_inset).is_err());

    let non_finite = BarLayoutConfig {
        lane_height_px: f64::NAN,
        ..BarLayoutConfig::default()
    };
    assert!(non_finite.validate().is_err());
}
