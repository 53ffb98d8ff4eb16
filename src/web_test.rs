use super::*;

#[test]
fn parse_level_known_names() {
    assert_eq!(parse_level(Some("debug")), log::Level::Debug);
    assert_eq!(parse_level(Some("WARN")), log::Level::Warn);
    assert_eq!(parse_level(Some("trace")), log::Level::Trace);
}

#[test]
fn parse_level_falls_back_to_info() {
    assert_eq!(parse_level(None), log::Level::Info);
    assert_eq!(parse_level(Some("chatty")), log::Level::Info);
}

#[test]
fn buffer_px_floors_css_extent() {
    assert_eq!(buffer_px(640.0), 640);
    assert_eq!(buffer_px(640.7), 640);
}

#[test]
fn buffer_px_clamps_out_of_range() {
    assert_eq!(buffer_px(0.0), 0);
    assert_eq!(buffer_px(-12.0), 0);
    assert_eq!(buffer_px(f64::NAN), 0);
    assert_eq!(buffer_px(1e12), u32::MAX);
}
