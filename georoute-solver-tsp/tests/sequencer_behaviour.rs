//! Behavioural tests for `TourSequencer` using rstest-bdd.

use std::cell::RefCell;
use std::collections::HashSet;
use std::time::{Duration, Instant};

use georoute_core::test_support::point;
use georoute_core::{OptimizeRequest, OptimizedRoute, RouteMode, RouteSequencer, SequenceError};
use georoute_solver_tsp::TourSequencer;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[derive(Debug, Default)]
struct SequencerWorld {
    request: RefCell<OptimizeRequest>,
    outcome: RefCell<Option<Result<OptimizedRoute, SequenceError>>>,
    elapsed: RefCell<Duration>,
}

impl SequencerWorld {
    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn expect_outcome(&self) -> Result<OptimizedRoute, SequenceError> {
        self.outcome
            .borrow()
            .clone()
            .expect("outcome should be recorded before assertions")
    }

    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn expect_sequence(&self) -> Vec<String> {
        self.expect_outcome().expect("expected sequencing success").sequence
    }
}

#[fixture]
fn world() -> SequencerWorld {
    SequencerWorld::default()
}

#[given("a start location at the origin")]
fn given_start(world: &SequencerWorld) {
    world.request.borrow_mut().start_location = Some(point("start", 0.0, 0.0));
}

#[given("point B ten degrees east and point A one degree east, in that order")]
fn given_two_points(world: &SequencerWorld) {
    world.request.borrow_mut().points = vec![point("B", 0.0, 10.0), point("A", 0.0, 1.0)];
}

#[given("ten points scattered around a city")]
fn given_ten_points(world: &SequencerWorld) {
    let offsets = [
        (0.012, -0.031),
        (-0.024, 0.005),
        (0.031, 0.027),
        (-0.008, -0.019),
        (0.019, 0.014),
        (-0.033, -0.027),
        (0.004, 0.036),
        (0.027, -0.011),
        (-0.015, 0.022),
        (0.038, -0.004),
    ];
    world.request.borrow_mut().points = offsets
        .iter()
        .enumerate()
        .map(|(idx, &(lat, lng))| point(&format!("poi-{idx}"), lat, lng))
        .collect();
}

#[given("a one-way route")]
fn given_one_way(world: &SequencerWorld) {
    world.request.borrow_mut().route_mode = RouteMode::OneWay;
}

#[given("a loop route")]
fn given_loop(world: &SequencerWorld) {
    world.request.borrow_mut().route_mode = RouteMode::Loop;
}

#[given("a manual order of B then A")]
fn given_manual_order(world: &SequencerWorld) {
    let mut request = world.request.borrow_mut();
    request.optimize_sequence = false;
    request.manual_sequence = Some(vec!["B".into(), "A".into()]);
}

#[given("a manual order naming an unknown point")]
fn given_unknown_manual_order(world: &SequencerWorld) {
    let mut request = world.request.borrow_mut();
    request.optimize_sequence = false;
    request.manual_sequence = Some(vec!["A".into(), "Z".into()]);
}

#[when("the sequencer runs")]
fn when_sequencer_runs(world: &SequencerWorld) {
    let request = world.request.borrow().clone();
    let started = Instant::now();
    let outcome = TourSequencer::new().optimize(&request);
    world.elapsed.replace(started.elapsed());
    world.outcome.replace(Some(outcome));
}

#[then("the sequence is A then B")]
fn then_a_then_b(world: &SequencerWorld) {
    assert_eq!(world.expect_sequence(), vec!["A", "B"]);
}

#[then("the sequence is B then A")]
fn then_b_then_a(world: &SequencerWorld) {
    assert_eq!(world.expect_sequence(), vec!["B", "A"]);
}

#[then("the request is rejected for naming an unknown point")]
fn then_unknown_point(world: &SequencerWorld) {
    assert_eq!(
        world.expect_outcome(),
        Err(SequenceError::UnknownPointId { id: "Z".into() })
    );
}

#[then("the request is rejected for having no points")]
fn then_no_points(world: &SequencerWorld) {
    assert_eq!(world.expect_outcome(), Err(SequenceError::EmptyPoints));
}

#[then("every point appears exactly once")]
fn then_permutation(world: &SequencerWorld) {
    let sequence = world.expect_sequence();
    let unique: HashSet<&str> = sequence.iter().map(String::as_str).collect();
    assert_eq!(sequence.len(), 10);
    assert_eq!(unique.len(), 10);
}

#[then("sequencing took less than one second")]
fn then_fast(world: &SequencerWorld) {
    let elapsed = *world.elapsed.borrow();
    assert!(elapsed < Duration::from_secs(1), "took {elapsed:?}");
}

#[scenario(path = "tests/features/sequencer.feature", index = 0)]
fn proximity_ordering(world: SequencerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/sequencer.feature", index = 1)]
fn manual_order(world: SequencerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/sequencer.feature", index = 2)]
fn manual_order_unknown_point(world: SequencerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/sequencer.feature", index = 3)]
fn no_points(world: SequencerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/sequencer.feature", index = 4)]
fn ten_points_quickly(world: SequencerWorld) {
    let _ = world;
}
