use super::*;

#[test]
fn recording_renderer_starts_empty() {
    let r = RecordingRenderer::new();
    assert!(r.commands().is_empty());
    assert_eq!(r.circle_count(), 0);
}

#[test]
fn recording_renderer_records_clear() {
    let mut r = RecordingRenderer::new();
    r.clear(Size::new(640.0, 480.0)).expect("never fails");
    assert_eq!(r.commands(), &[DrawCommand::Clear { width: 640.0, height: 480.0 }]);
    assert_eq!(r.circle_count(), 0);
}

#[test]
fn recording_renderer_records_circles_in_order() {
    let mut r = RecordingRenderer::new();
    r.fill_circle(Point::new(1.0, 2.0), 1.5, "red").expect("never fails");
    r.fill_circle(Point::new(3.0, 4.0), 2.5, "blue").expect("never fails");
    assert_eq!(r.circle_count(), 2);
    assert_eq!(
        r.commands()[1],
        DrawCommand::Circle { x: 3.0, y: 4.0, radius: 2.5, fill: "blue".to_owned() }
    );
}

#[test]
fn recording_renderer_reset() {
    let mut r = RecordingRenderer::new();
    r.clear(Size::new(1.0, 1.0)).expect("never fails");
    r.reset();
    assert!(r.commands().is_empty());
}
