use super::*;
use crate::helpers::*;
use crate::landscape::Float;

fn create_engine(population_size: usize, seed: u64) -> AcoEngine {
    AcoEngine::new(create_test_cities(), create_test_config(population_size), create_test_environment(seed)).unwrap()
}

fn assert_permutation(tour: &[usize], size: usize) {
    let mut seen = vec![false; size];
    tour.iter().for_each(|&city| {
        assert!(city < size);
        assert!(!seen[city], "city {city} is visited twice");
        seen[city] = true;
    });
    assert_eq!(tour.len(), size);
}

#[test]
fn can_reject_too_few_cities() {
    let result = AcoEngine::new(vec![Position::new(0., 0.)], create_test_config(10), create_test_environment(0));

    assert!(result.is_err());
}

#[test]
fn can_reject_invalid_configuration() {
    assert!(AcoEngine::new(create_test_cities(), EngineConfig::new(0, 50), create_test_environment(0)).is_err());
    assert!(AcoEngine::new(create_test_cities(), EngineConfig::new(10, 101), create_test_environment(0)).is_err());

    let mut engine = create_engine(10, 0);
    assert!(engine.initialize(EngineConfig::new(0, 50)).is_err());
}

#[test]
fn can_improve_best_tour_over_ticks() {
    let mut engine = create_engine(10, 42);

    let mut previous_best = Float::INFINITY;
    (0..50).for_each(|tick| {
        let stats = engine.tick();

        assert_eq!(stats.iteration, tick + 1);
        assert_eq!(stats.population_size, 10);
        assert!(stats.best_score <= previous_best);
        previous_best = stats.best_score;
    });

    // the infinity sentinel is replaced on the very first completed tick
    assert!(previous_best.is_finite());
    assert_permutation(engine.best_tour(), engine.cities().len());
}

#[test]
fn can_keep_pheromone_symmetric_and_positive() {
    let mut engine = create_engine(5, 13);

    (0..20).for_each(|_| {
        engine.tick();

        let pheromone = engine.snapshot().pheromone;
        let size = pheromone.len();

        (0..size).for_each(|i| {
            (0..size).for_each(|j| {
                assert_eq!(pheromone[i][j], pheromone[j][i]);
                assert!(pheromone[i][j] > 0.);
            })
        });
    });
}

#[test]
fn can_keep_paused_tick_a_noop() {
    let mut engine =
        AcoEngine::new(create_test_cities(), EngineConfig { population_size: 10, speed: 50, is_running: false }, create_test_environment(0))
            .unwrap();

    let before = engine.snapshot();
    let stats = engine.tick();

    assert_eq!(stats.iteration, 0);
    assert_eq!(stats.best_score, Float::INFINITY);
    assert_eq!(engine.snapshot().pheromone, before.pheromone);
    assert!(engine.best_tour().is_empty());
}

#[test]
fn can_reset_to_initial_state() {
    let mut engine = create_engine(10, 7);
    (0..10).for_each(|_| {
        engine.tick();
    });

    engine.reset();
    let snapshot = engine.snapshot();

    assert!(snapshot.best_tour.is_empty());
    assert_eq!(snapshot.best_distance, Float::INFINITY);
    snapshot.pheromone.iter().flatten().for_each(|&level| assert_eq!(level, 1.));
}

#[test]
fn can_fallback_to_last_candidate_on_degenerate_weights() {
    let random = FakeRandom::new(vec![], vec![]);
    let candidates = [(3, 0.), (1, 0.), (7, 0.)];

    assert_eq!(select_roulette(&candidates, &random), 7);

    let candidates = [(3, Float::INFINITY), (1, 1.)];
    assert_eq!(select_roulette(&candidates, &random), 1);
}

#[test]
fn can_select_candidate_proportionally_to_weight() {
    // threshold 5.0 lands into the second candidate's [2, 6) slice
    let random = FakeRandom::new(vec![], vec![5.]);
    let candidates = [(0, 2.), (1, 4.), (2, 4.)];

    assert_eq!(select_roulette(&candidates, &random), 1);
}
