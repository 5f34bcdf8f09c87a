use std::time::Duration;

use toroidal_core::{Event, LevelDefinition, MoveSource};
use toroidal_system_animation::MoveAnimator;
use toroidal_system_replay::ReplaySequencer;
use toroidal_world::{self as world, query, World};

fn level() -> LevelDefinition {
    LevelDefinition {
        rows: 3,
        cols: 3,
        initial: vec![vec![0, 1, 2], vec![3, 4, 5], vec![6, 7, 8]],
        goal: vec![vec![1, 2, 0], vec![3, 4, 5], vec![6, 7, 8]],
        ntiles: 9,
        rating: None,
    }
}

fn grid_values(world: &World) -> Vec<Vec<u16>> {
    let (rows, cols) = query::dimensions(world);
    (0..rows)
        .map(|row| {
            (0..cols)
                .map(|col| query::grid(world).value_at(row, col).expect("in range").get())
                .collect()
        })
        .collect()
}

/// Runs a replay to completion under auto-play with a fixed tick, returning
/// the final grid and the committed-move event log.
fn run_replay(actions: &str) -> (Vec<Vec<u16>>, Vec<Event>) {
    let mut world = World::from_level(&level()).expect("valid level");
    let mut animator = MoveAnimator::new();
    let mut sequencer = ReplaySequencer::parse(actions).expect("valid tokens");
    let mut log = Vec::new();

    sequencer.play(&mut animator);
    let tick = Duration::from_millis(20);
    // Generous upper bound so a regression cannot hang the test.
    for _ in 0..1_000 {
        let mut commands = Vec::new();
        let _ = animator.advance(tick, &mut commands);
        for command in commands {
            world::apply(&mut world, command, &mut log).expect("in range");
        }
        sequencer.poll(tick, &mut animator);
        if !sequencer.is_playing() && !animator.is_animating() {
            break;
        }
    }

    assert!(!sequencer.has_next(), "replay did not run to completion");
    (grid_values(&world), log)
}

#[test]
fn two_steps_apply_the_recorded_rotations_in_order() {
    let mut world = World::from_level(&level()).expect("valid level");
    let mut animator = MoveAnimator::new();
    let mut sequencer = ReplaySequencer::parse("R0 U1").expect("valid tokens");
    let mut events = Vec::new();

    for _ in 0..2 {
        assert!(sequencer.step(&mut animator));
        let mut commands = Vec::new();
        let _ = animator.advance(Duration::from_secs(1), &mut commands);
        for command in commands {
            world::apply(&mut world, command, &mut events).expect("in range");
        }
    }
    assert!(!sequencer.has_next());

    // R0 rotated row 0 forward, then U1 rotated column 1 backward.
    assert_eq!(
        grid_values(&world),
        vec![vec![1, 7, 0], vec![3, 2, 5], vec![6, 4, 8]]
    );

    let committed: Vec<MoveSource> = events
        .iter()
        .filter_map(|event| match event {
            Event::MoveCommitted { source, .. } => Some(*source),
            _ => None,
        })
        .collect();
    assert_eq!(committed, vec![MoveSource::Replay, MoveSource::Replay]);
}

#[test]
fn replay_runs_are_deterministic() {
    let first = run_replay("R0 U2 L1 D0 R2");
    let second = run_replay("R0 U2 L1 D0 R2");
    assert_eq!(first, second);
}

#[test]
fn replay_that_solves_the_level_reports_the_goal() {
    let (grid, log) = run_replay("R0");
    assert_eq!(grid[0], vec![1, 2, 0]);
    assert!(log.contains(&Event::GoalReached));
}
