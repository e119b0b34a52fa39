use super::*;

#[test]
fn can_create_matrix_with_initial_level() {
    let matrix = PheromoneMatrix::new(4, 1.);

    assert_eq!(matrix.len(), 4);
    (0..4).for_each(|i| (0..4).for_each(|j| assert_eq!(matrix.get(i, j), 1.)));
}

#[test]
fn can_keep_matrix_symmetric_after_deposit() {
    let mut matrix = PheromoneMatrix::new(3, 1.);

    matrix.deposit(0, 2, 5.);

    assert_eq!(matrix.get(0, 2), 6.);
    assert_eq!(matrix.get(2, 0), 6.);
    assert_eq!(matrix.get(0, 1), 1.);
}

#[test]
fn can_evaporate_keeping_entries_positive() {
    let mut matrix = PheromoneMatrix::new(3, 1.);

    (0..100).for_each(|_| matrix.evaporate(0.1));

    (0..3).for_each(|i| {
        (0..3).for_each(|j| {
            assert!(matrix.get(i, j) > 0.);
            assert!(matrix.get(i, j) < 1.);
        })
    });
}

#[test]
fn can_dump_matrix_rows() {
    let mut matrix = PheromoneMatrix::new(2, 1.);
    matrix.deposit(0, 1, 1.);

    assert_eq!(matrix.dump(), vec![vec![1., 2.], vec![2., 1.]]);
}
