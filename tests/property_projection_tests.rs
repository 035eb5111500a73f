use gantt_rs::core::{
    CalendarDate, DateRange, VisibleWindow, clamp_range_to_window, color_for_key, date_to_column,
    parse_date_only, project_range,
};
use proptest::prelude::*;

fn calendar_date() -> impl Strategy<Value = CalendarDate> {
    (1900i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| CalendarDate::new(y, m, d).expect("valid generated date"))
}

fn date_range() -> impl Strategy<Value = DateRange> {
    (calendar_date(), 0i64..400).prop_map(|(start, len)| {
        DateRange::new(start, start.add_days(len).expect("in calendar range"))
    })
}

fn visible_window() -> impl Strategy<Value = VisibleWindow> {
    prop_oneof![
        (1950i32..2050).prop_map(VisibleWindow::year),
        (calendar_date(), 1u32..120)
            .prop_map(|(start, days)| VisibleWindow::days(start, days).expect("valid window")),
    ]
}

proptest! {
    #[test]
    fn date_only_round_trip_is_identity(date in calendar_date()) {
        let text = date.to_string();
        prop_assert_eq!(parse_date_only(&text), date);
        prop_assert_eq!(parse_date_only(&text).to_string(), text);
    }

    #[test]
    fn column_is_always_in_range(date in calendar_date(), window in visible_window()) {
        let column = date_to_column(date, window);
        prop_assert!(column < window.column_count());
    }

    #[test]
    fn clamping_matches_window_relation(range in date_range(), window in visible_window()) {
        let clamped = clamp_range_to_window(range, window);
        if range.end() < window.start() || range.start() > window.end() {
            prop_assert_eq!(clamped, None);
        } else {
            let clamped = clamped.expect("overlapping range");
            prop_assert!(clamped.start() >= window.start());
            prop_assert!(clamped.end() <= window.end());
            prop_assert!(clamped.start() <= clamped.end());
            prop_assert_eq!(clamp_range_to_window(clamped, window), Some(clamped));
            if window.contains(range.start()) && window.contains(range.end()) {
                prop_assert_eq!(clamped, range);
            }
        }
    }

    #[test]
    fn projected_bar_is_ordered_and_bounded(range in date_range(), window in visible_window()) {
        if let Some(bar) = project_range(range, window) {
            prop_assert!(bar.start_column <= bar.end_column);
            prop_assert!(bar.end_column < window.column_count());
        }
    }

    #[test]
    fn color_index_is_stable_and_bounded(key in ".{0,40}", size in 1usize..64) {
        let first = color_for_key(&key, size).expect("index");
        prop_assert!(first < size);
        prop_assert_eq!(color_for_key(&key, size).expect("index"), first);
    }
}
