use super::*;
use crate::helpers::FakeRandom;

#[test]
fn can_consume_queued_values_through_shared_reference() {
    let random = FakeRandom::new(vec![3, 1], vec![0.5, 0.25]);
    let random: &dyn Random = &random;

    assert_eq!(random.uniform_int(0, 10), 3);
    assert_eq!(random.uniform_int(0, 10), 1);
    assert_eq!(random.uniform_real(0., 1.), 0.5);
    assert_eq!(random.uniform_real(0., 1.), 0.25);
}

#[test]
fn can_replay_sequence_with_same_seed() {
    let first = DefaultRandom::new(42);
    let second = DefaultRandom::new(42);

    let first_values = (0..100).map(|_| first.uniform_real(0., 1.)).collect::<Vec<_>>();
    let second_values = (0..100).map(|_| second.uniform_real(0., 1.)).collect::<Vec<_>>();

    assert_eq!(first_values, second_values);
}

#[test]
fn can_produce_different_sequences_with_different_seeds() {
    let first = DefaultRandom::new(1);
    let second = DefaultRandom::new(2);

    let first_values = (0..10).map(|_| first.uniform_real(0., 1.)).collect::<Vec<_>>();
    let second_values = (0..10).map(|_| second.uniform_real(0., 1.)).collect::<Vec<_>>();

    assert_ne!(first_values, second_values);
}

#[test]
fn can_keep_uniform_int_within_closed_interval() {
    let random = DefaultRandom::new(7);

    (0..1000).for_each(|_| {
        let value = random.uniform_int(-5, 5);
        assert!((-5..=5).contains(&value));
    });
}

#[test]
fn can_keep_uniform_real_within_interval() {
    let random = DefaultRandom::new(7);

    (0..1000).for_each(|_| {
        let value = random.uniform_real(10., 20.);
        assert!((10. ..20.).contains(&value));
    });
}

#[test]
fn can_return_min_on_degenerate_interval() {
    let random = DefaultRandom::new(7);

    assert_eq!(random.uniform_int(3, 3), 3);
    assert_eq!(random.uniform_real(1., 1.), 1.);
}
