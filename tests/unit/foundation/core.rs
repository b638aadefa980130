use super::*;

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(60, 0).is_err());
}

#[test]
fn fps_frame_duration_is_reciprocal() {
    let fps = Fps::new(60, 1).unwrap();
    assert_eq!(fps.as_f64(), 60.0);
    assert!((fps.frame_duration_s() - 1.0 / 60.0).abs() < 1e-12);
}

#[test]
fn document_point_adds_scroll_exactly() {
    let p = document_point(Point::new(12.5, 40.0), Vec2::new(3.0, 812.25));
    assert_eq!(p, Point::new(15.5, 852.25));
}
