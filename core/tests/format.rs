use chessclock_core::{engine::ClockEngine, format::format_clock};

#[test]
fn non_positive_and_sub_second_render_blank() {
    assert_eq!(format_clock(0.0), "00:00");
    assert_eq!(format_clock(-5.0), "00:00");
    assert_eq!(format_clock(0.999), "00:00");
}

#[test]
fn minutes_and_seconds_are_zero_padded() {
    assert_eq!(format_clock(125.0), "02:05");
    assert_eq!(format_clock(300.0), "05:00");
    assert_eq!(format_clock(1800.0), "30:00");
    assert_eq!(format_clock(9.5), "00:09");
}

#[test]
fn long_games_widen_the_minutes() {
    assert_eq!(format_clock(6000.0), "100:00");
}

#[test]
fn engine_format_matches_free_function() {
    for s in [-1.0, 0.0, 61.7, 3599.99] {
        assert_eq!(ClockEngine::format(s), format_clock(s));
    }
}

#[test]
fn floors_rather_than_rounds() {
    assert_eq!(format_clock(59.999), "00:59");
    assert_eq!(format_clock(60.0), "01:00");
}

#[test]
fn non_finite_input_renders_blank() {
    assert_eq!(format_clock(f64::NAN), "00:00");
    assert_eq!(format_clock(f64::NEG_INFINITY), "00:00");
}
