//! File loading and simulated-clock drivers shared by the subcommands.

use std::{fs, path::Path, time::Duration};

use anyhow::{bail, Context};
use toroidal_core::{Event, LevelDefinition, MoveIntent, MoveSource, ReplayDefinition};
use toroidal_system_animation::{MoveAnimator, SlideFrame};
use toroidal_world::{self as world, query, World};

/// Fixed simulated frame time used when driving animations headlessly.
pub(crate) const TICK: Duration = Duration::from_millis(20);

/// Loads and validates a level definition from a JSON file.
pub(crate) fn load_level(path: &Path) -> anyhow::Result<LevelDefinition> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading level file {}", path.display()))?;
    let level: LevelDefinition = serde_json::from_str(&text)
        .with_context(|| format!("parsing level file {}", path.display()))?;
    level
        .validate()
        .with_context(|| format!("validating level file {}", path.display()))?;
    Ok(level)
}

/// Loads and validates a replay definition from a JSON file.
pub(crate) fn load_replay(path: &Path) -> anyhow::Result<ReplayDefinition> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading replay file {}", path.display()))?;
    let replay: ReplayDefinition = serde_json::from_str(&text)
        .with_context(|| format!("parsing replay file {}", path.display()))?;
    replay
        .level
        .validate()
        .with_context(|| format!("validating replay file {}", path.display()))?;
    Ok(replay)
}

/// Starts one move on the animator and runs it to its commit.
pub(crate) fn drive_move(
    world: &mut World,
    animator: &mut MoveAnimator,
    intent: MoveIntent,
    source: MoveSource,
    events: &mut Vec<Event>,
) -> anyhow::Result<()> {
    if !animator.begin(intent, source) {
        bail!("animator is already sliding; moves must run one at a time");
    }
    finish_animation(world, animator, events)
}

/// Ticks the animator until the active slide commits, applying every
/// resulting command to the world.
pub(crate) fn finish_animation(
    world: &mut World,
    animator: &mut MoveAnimator,
    events: &mut Vec<Event>,
) -> anyhow::Result<()> {
    while animator.is_animating() {
        let mut commands = Vec::new();
        let frame = animator.advance(TICK, &mut commands);
        debug_assert!(!matches!(frame, SlideFrame::Idle));
        for command in commands {
            world::apply(world, command, events)?;
        }
    }
    Ok(())
}

/// Formats the current logical grid as aligned rows of tile numbers.
pub(crate) fn format_grid(world: &World) -> anyhow::Result<String> {
    let (rows, cols) = query::dimensions(world);
    let width = query::tile_count(world).saturating_sub(1).to_string().len();

    let mut out = String::new();
    for row in 0..rows {
        for col in 0..cols {
            let tile = query::grid(world).value_at(row, col)?;
            if col > 0 {
                out.push(' ');
            }
            out.push_str(&format!("{:>width$}", tile.get()));
        }
        out.push('\n');
    }
    Ok(out)
}
