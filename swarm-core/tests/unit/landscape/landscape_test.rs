use super::*;
use crate::utils::DefaultRandom;

#[test]
fn can_calculate_distance_between_positions() {
    let a = Position::new(0., 0.);
    let b = Position::new(3., 4.);

    assert_eq!(a.distance_to(&b), 5.);
    assert_eq!(b.distance_to(&a), 5.);
    assert_eq!(a.distance_to(&a), 0.);
}

#[test]
fn can_clamp_position_into_bounds() {
    let bounds = Bounds::new(100., 50.);

    let clamped = Position::new(-10., 75.).clamped(&bounds);

    assert_eq!(clamped, Position::new(0., 50.));
    assert!(bounds.contains(&clamped));
}

#[test]
fn can_sample_position_within_bounds() {
    let bounds = Bounds::new(600., 600.);
    let random = DefaultRandom::new(42);

    (0..100).for_each(|_| {
        assert!(bounds.contains(&bounds.sample(&random)));
    });
}

#[test]
fn can_calculate_closed_tour_distance() {
    let cities =
        vec![Position::new(0., 0.), Position::new(100., 0.), Position::new(100., 100.), Position::new(0., 100.)];

    assert_eq!(tour_distance(&cities, &[0, 1, 2, 3]), 400.);
    assert_eq!(tour_distance(&cities, &[0]), 0.);
    assert_eq!(tour_distance(&cities, &[]), 0.);
}

#[test]
fn can_evaluate_peak_function_with_maximum_at_center() {
    let center = Position::new(300., 300.);
    let landscape = create_peaks_function(vec![Peak::new(center, 100., 80.)]);

    assert_eq!(landscape(&center), 100.);
    assert!(landscape(&Position::new(310., 300.)) < 100.);
    assert!(landscape(&Position::new(310., 300.)) > landscape(&Position::new(400., 300.)));
    assert!(landscape(&Position::new(0., 0.)) >= 0.);
}

#[test]
fn can_get_landscape_by_name() {
    let landscape = get_landscape_by_name("single-peak");

    assert!(landscape(&Position::new(300., 300.)) > landscape(&Position::new(0., 0.)));
}

#[test]
#[should_panic]
fn can_panic_on_unknown_landscape_name() {
    get_landscape_by_name("unknown");
}
