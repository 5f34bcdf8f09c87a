#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter for the toroidal tile puzzle.
//!
//! Runs the engine headlessly under a fixed simulated clock: inspect a level
//! file, play a recorded replay to completion, or apply a token list as
//! player moves with optional undos.

mod session;

use std::path::{Path, PathBuf};

use anyhow::bail;
use clap::{Parser, Subcommand};
use glam::Vec2;
use toroidal_core::{Axis, Event, MoveIntent, MoveSource, Rotation};
use toroidal_rendering::{slide_update, BoardPresentation, ScenePresenter, SceneUpdate};
use toroidal_system_animation::{MoveAnimator, SlideFrame};
use toroidal_system_progress::{Medal, ProgressMonitor};
use toroidal_system_replay::{parse_actions, ReplaySequencer};
use toroidal_system_undo::UndoStack;
use toroidal_world::{self as world, query, World};

/// Headless driver for toroidal puzzle levels and replays.
#[derive(Parser)]
#[command(name = "toroidal", version, about)]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand)]
enum CliCommand {
    /// Validates a level file and prints its starting grid.
    Show {
        /// Path to the level JSON file.
        level: PathBuf,
    },
    /// Plays a recorded replay to completion under auto-play.
    Replay {
        /// Path to the replay JSON file.
        replay: PathBuf,
        /// Playback speed factor; the base slide duration is divided by it.
        #[arg(long, default_value_t = 10.0)]
        speed: f32,
        /// Prints the per-tick strip offsets of every slide.
        #[arg(long)]
        trace: bool,
    },
    /// Applies a token list as player moves, then optionally undoes some.
    Apply {
        /// Path to the level JSON file.
        level: PathBuf,
        /// Space-separated move tokens, e.g. "R0 U2 L1".
        #[arg(long)]
        moves: String,
        /// Number of moves to undo after the list is applied.
        #[arg(long, default_value_t = 0)]
        undo: u32,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        CliCommand::Show { level } => show(&level),
        CliCommand::Replay {
            replay,
            speed,
            trace,
        } => run_replay(&replay, speed, trace),
        CliCommand::Apply { level, moves, undo } => apply_moves(&level, &moves, undo),
    }
}

fn show(path: &Path) -> anyhow::Result<()> {
    let level = session::load_level(path)?;
    let world = World::from_level(&level)?;
    let (rows, cols) = query::dimensions(&world);
    println!(
        "{rows}x{cols} puzzle, {} tile images",
        query::tile_count(&world)
    );
    print!("{}", session::format_grid(&world)?);
    println!("solved: {}", query::solved(&world));
    Ok(())
}

fn run_replay(path: &Path, speed: f32, trace: bool) -> anyhow::Result<()> {
    let replay = session::load_replay(path)?;
    let mut world = World::from_level(&replay.level)?;
    let mut animator = MoveAnimator::new();
    animator.set_speed(speed);
    let mut sequencer = ReplaySequencer::parse(&replay.actions)?;
    let mut monitor = ProgressMonitor::with_rating(replay.level.rating.unwrap_or_default());

    let (rows, cols) = query::dimensions(&world);
    let board = BoardPresentation::new(rows, cols, Vec2::new(64.0, 64.0), 5.0);

    println!("replaying {} recorded actions", sequencer.len());
    sequencer.play(&mut animator);
    let mut presenter = TextPresenter;
    let mut events = Vec::new();
    while sequencer.is_playing() || animator.is_animating() {
        let mut commands = Vec::new();
        let frame = animator.advance(session::TICK, &mut commands);
        if trace {
            if let SlideFrame::Sliding { intent, progress } = frame {
                presenter.present(&slide_update(intent, progress, &board))?;
            }
        }
        for command in commands {
            world::apply(&mut world, command, &mut events)?;
        }
        monitor.observe(&events);
        for event in events.drain(..) {
            match event {
                Event::MoveCommitted { intent, .. } => {
                    println!("step {}: {}", monitor.steps(), token_name(intent));
                    if trace {
                        presenter.present(&SceneUpdate::FullRedraw)?;
                    }
                }
                Event::GoalReached => println!("goal reached"),
                Event::PuzzleReset => {}
            }
        }
        sequencer.poll(session::TICK, &mut animator);
    }

    if sequencer.has_next() {
        bail!("replay stalled before consuming every action");
    }
    print!("{}", session::format_grid(&world)?);
    println!("steps: {}", monitor.steps());
    println!("solved: {}", monitor.solved());
    Ok(())
}

fn apply_moves(path: &Path, moves: &str, undo_count: u32) -> anyhow::Result<()> {
    let level = session::load_level(path)?;
    let mut world = World::from_level(&level)?;
    let mut animator = MoveAnimator::new();
    let mut undo = UndoStack::new();
    let mut monitor = ProgressMonitor::with_rating(level.rating.unwrap_or_default());

    let mut events = Vec::new();
    for intent in parse_actions(moves)? {
        session::drive_move(&mut world, &mut animator, intent, MoveSource::Player, &mut events)?;
        undo.observe(&events);
        monitor.observe(&events);
        events.clear();
    }

    for _ in 0..undo_count {
        if !undo.undo(&mut animator) {
            bail!("undo stack is empty");
        }
        session::finish_animation(&mut world, &mut animator, &mut events)?;
        undo.observe(&events);
        monitor.observe(&events);
        events.clear();
    }

    print!("{}", session::format_grid(&world)?);
    println!("moves: {}", monitor.moves());
    println!("solved: {}", monitor.solved());
    if monitor.solved() {
        println!("medal: {}", medal_name(monitor.medal()));
    }
    Ok(())
}

/// Presents scene updates as indented trace lines on stdout.
struct TextPresenter;

impl ScenePresenter for TextPresenter {
    fn present(&mut self, update: &SceneUpdate) -> anyhow::Result<()> {
        match update {
            SceneUpdate::StripOffset { axis, index, offset } => {
                println!("  {axis:?} {index} offset ({:.1}, {:.1})", offset.x, offset.y);
            }
            SceneUpdate::FullRedraw => println!("  full redraw"),
        }
        Ok(())
    }
}

fn token_name(intent: MoveIntent) -> String {
    let letter = match (intent.axis(), intent.rotation()) {
        (Axis::Row, Rotation::Forward) => 'R',
        (Axis::Row, Rotation::Backward) => 'L',
        (Axis::Column, Rotation::Forward) => 'D',
        (Axis::Column, Rotation::Backward) => 'U',
    };
    format!("{letter}{}", intent.index())
}

fn medal_name(medal: Medal) -> &'static str {
    match medal {
        Medal::Gold => "gold",
        Medal::Silver => "silver",
        Medal::Bronze => "bronze",
        Medal::None => "none",
    }
}
