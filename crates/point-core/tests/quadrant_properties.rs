//! Property tests for the quadrant classification rule.
//!
//! Each property covers one region of the plane for every `i32` pair the
//! strategy can produce, plus the equality/hash contract of [`Point`].

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use point_core::{Point, Quadrant};
use proptest::prelude::*;

fn hash_of(point: &Point) -> u64 {
    let mut hasher = DefaultHasher::new();
    point.hash(&mut hasher);
    hasher.finish()
}

fn positive() -> impl Strategy<Value = i32> {
    1..=i32::MAX
}

fn negative() -> impl Strategy<Value = i32> {
    i32::MIN..=-1
}

proptest! {
    #[test]
    fn prop_point_on_x_axis_has_no_quadrant(x in any::<i32>()) {
        prop_assert_eq!(Point::new(x, 0).quadrant(), Quadrant::None);
        prop_assert_eq!(Point::new(x, 0).quadrant().number(), 0);
    }

    #[test]
    fn prop_point_on_y_axis_has_no_quadrant(y in any::<i32>()) {
        prop_assert_eq!(Point::new(0, y).quadrant(), Quadrant::None);
    }

    #[test]
    fn prop_positive_positive_is_quadrant_one(x in positive(), y in positive()) {
        prop_assert_eq!(Point::new(x, y).quadrant().number(), 1);
    }

    #[test]
    fn prop_negative_positive_is_quadrant_two(x in negative(), y in positive()) {
        prop_assert_eq!(Point::new(x, y).quadrant().number(), 2);
    }

    #[test]
    fn prop_negative_negative_is_quadrant_three(x in negative(), y in negative()) {
        prop_assert_eq!(Point::new(x, y).quadrant().number(), 3);
    }

    #[test]
    fn prop_positive_negative_is_quadrant_four(x in positive(), y in negative()) {
        prop_assert_eq!(Point::new(x, y).quadrant().number(), 4);
    }

    #[test]
    fn prop_same_coordinates_are_equal_and_hash_equal(x in any::<i32>(), y in any::<i32>()) {
        let a = Point::new(x, y);
        let b = Point::new(x, y);
        prop_assert_eq!(a, b);
        prop_assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn prop_different_coordinates_are_not_equal(
        a in (any::<i32>(), any::<i32>()),
        b in (any::<i32>(), any::<i32>()),
    ) {
        prop_assume!(a != b);
        prop_assert_ne!(Point::from(a), Point::from(b));
    }

    #[test]
    fn prop_accessors_return_constructor_arguments(x in any::<i32>(), y in any::<i32>()) {
        let p = Point::new(x, y);
        let _ = p.quadrant();
        let _ = p.to_string();
        prop_assert_eq!(p.x(), x);
        prop_assert_eq!(p.y(), y);
    }

    #[test]
    fn prop_display_parses_back_to_same_point(x in any::<i32>(), y in any::<i32>()) {
        let p = Point::new(x, y);
        prop_assert_eq!(p.to_string().parse::<Point>(), Ok(p));
    }
}

#[test]
fn test_scenario_point_two_minus_one_is_in_quadrant_four() {
    let p = Point::new(2, -1);
    assert_eq!(p.quadrant().number(), 4);
    assert_eq!(
        format!("{p} is in quadrant: {}", p.quadrant()),
        "Point[x=2,y=-1] is in quadrant: 4"
    );
}

#[test]
fn test_scenario_origin_is_in_no_quadrant() {
    assert_eq!(Point::new(0, 0).quadrant().number(), 0);
}
