use super::*;
use crate::helpers::*;

fn create_engine(population_size: usize, speed: u32, seed: u64) -> GwoEngine {
    GwoEngine::new(Bounds::default(), EngineConfig::new(population_size, speed), create_test_environment(seed)).unwrap()
}

fn rank_count(snapshot: &GwoSnapshot, rank: WolfRank) -> usize {
    snapshot.wolves.iter().filter(|wolf| wolf.rank == rank).count()
}

#[test]
fn can_cycle_phases_in_fixed_order() {
    let phases = [GwoPhase::MovePrey, GwoPhase::Evaluate, GwoPhase::Rank, GwoPhase::Calculate, GwoPhase::MoveWolves];

    phases.windows(2).for_each(|pair| assert_eq!(pair[0].next(), pair[1]));
    assert_eq!(GwoPhase::MoveWolves.next(), GwoPhase::MovePrey);
}

#[test]
fn can_reject_population_below_hierarchy_size() {
    let result = GwoEngine::new(Bounds::default(), EngineConfig::new(2, 50), create_test_environment(0));

    assert!(result.is_err());
}

#[test]
fn can_complete_expected_amount_of_cycles() {
    // at full speed a phase consumes exactly two ticks, so a cycle consumes ten
    let mut engine = create_engine(5, 100, 42);

    let mut stats = engine.tick();
    (0..49).for_each(|_| {
        stats = engine.tick();
    });

    assert_eq!(stats.iteration, 5);
    assert_eq!(engine.phase(), GwoPhase::MovePrey);
}

#[test]
fn can_rank_wolves_ascending_by_score() {
    let mut engine = create_engine(7, 100, 13);

    // four full-speed ticks pass evaluation and land on the ranking transition
    (0..4).for_each(|_| {
        engine.tick();
    });
    assert_eq!(engine.phase(), GwoPhase::Rank);

    let snapshot = engine.snapshot();
    assert_eq!(rank_count(&snapshot, WolfRank::Alpha), 1);
    assert_eq!(rank_count(&snapshot, WolfRank::Beta), 1);
    assert_eq!(rank_count(&snapshot, WolfRank::Delta), 1);
    assert_eq!(rank_count(&snapshot, WolfRank::Omega), 4);

    let score_of = |rank: WolfRank| snapshot.wolves.iter().find(|wolf| wolf.rank == rank).unwrap().score;

    assert!(score_of(WolfRank::Alpha) <= score_of(WolfRank::Beta));
    assert!(score_of(WolfRank::Beta) <= score_of(WolfRank::Delta));
    snapshot
        .wolves
        .iter()
        .filter(|wolf| wolf.rank == WolfRank::Omega)
        .for_each(|omega| assert!(score_of(WolfRank::Delta) <= omega.score));
}

#[test]
fn can_report_zero_sentinel_before_first_ranking() {
    let mut engine = create_engine(5, 100, 0);

    let stats = engine.tick();

    assert_eq!(stats.best_score, 0.);
    assert_eq!(stats.iteration, 0);
}

#[test]
fn can_keep_population_size_across_reinitialization() {
    let mut engine = create_engine(5, 50, 1);
    assert_eq!(engine.snapshot().wolves.len(), 5);

    engine.initialize(EngineConfig::new(9, 50)).unwrap();

    assert_eq!(engine.snapshot().wolves.len(), 9);
    assert_eq!(engine.tick().population_size, 9);
}

#[test]
fn can_keep_paused_tick_a_noop() {
    let mut engine = GwoEngine::new(
        Bounds::default(),
        EngineConfig { population_size: 5, speed: 100, is_running: false },
        create_test_environment(3),
    )
    .unwrap();

    let before = engine.snapshot();
    let stats = engine.tick();

    assert_eq!(stats.iteration, 0);
    assert_eq!(engine.phase(), GwoPhase::MovePrey);
    engine
        .snapshot()
        .wolves
        .iter()
        .zip(before.wolves.iter())
        .for_each(|(current, previous)| assert_eq!(current.position, previous.position));
}

#[test]
fn can_keep_wolves_within_bounds() {
    let bounds = Bounds::default();
    let mut engine = create_engine(10, 100, 11);

    (0..200).for_each(|_| {
        engine.tick();
    });

    engine.snapshot().wolves.iter().for_each(|wolf| assert!(bounds.contains(&wolf.position)));
}

#[test]
fn can_serialize_snapshot_for_rendering() {
    let engine = create_engine(3, 50, 0);

    let json = serde_json::to_value(engine.snapshot()).unwrap();

    assert_eq!(json["wolves"].as_array().unwrap().len(), 3);
    assert!(json["prey"]["x"].is_number());
    assert_eq!(json["phase"], "MovePrey");
}

#[test]
fn can_reset_hierarchy_and_counters() {
    let mut engine = create_engine(5, 100, 21);
    (0..50).for_each(|_| {
        engine.tick();
    });

    engine.reset();

    let stats = engine.tick();
    assert_eq!(stats.iteration, 0);
    assert_eq!(stats.best_score, 0.);
    assert_eq!(rank_count(&engine.snapshot(), WolfRank::Omega), 5);
}
