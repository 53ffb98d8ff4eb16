#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn point_relative_to_subtracts_origin() {
    let p = Point::new(120.0, 45.0).relative_to(Point::new(20.0, 5.0));
    assert_eq!(p, Point::new(100.0, 40.0));
}

#[test]
fn point_relative_to_can_go_negative() {
    let p = Point::new(10.0, 10.0).relative_to(Point::new(30.0, 50.0));
    assert_eq!(p, Point::new(-20.0, -40.0));
}

#[test]
fn size_area() {
    assert_eq!(Size::new(300.0, 30.0).area(), 9000.0);
}

#[test]
fn size_zero_side_is_empty() {
    assert!(Size::new(0.0, 400.0).is_empty());
    assert!(Size::new(400.0, 0.0).is_empty());
    assert_eq!(Size::new(0.0, 400.0).area(), 0.0);
}

#[test]
fn size_negative_side_is_empty() {
    let s = Size::new(-10.0, 400.0);
    assert!(s.is_empty());
    assert_eq!(s.area(), 0.0);
}

#[test]
fn size_nan_is_empty() {
    assert!(Size::new(f64::NAN, 10.0).is_empty());
}

#[test]
fn size_default_is_empty() {
    assert!(Size::default().is_empty());
}
