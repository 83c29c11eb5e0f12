//! Idle/demo mode - a simple bot that plays the game
//!
//! Produces the same `TickInput` a human would, so the simulation cannot tell
//! the difference.

use glam::Vec2;

use super::state::{GameState, MovementMode};
use super::tick::{HeldKeys, TickInput};

/// Fire on every Nth tick while there is something to shoot at
pub const AUTOPILOT_FIRE_PERIOD: u64 = 12;
/// Retreat from enemies closer than this (pixels)
pub const AUTOPILOT_PANIC_DISTANCE: f32 = 150.0;

/// Build the input for the next tick
pub fn autopilot(state: &GameState) -> TickInput {
    let player_pos = state.player.pos;

    // Most dangerous enemy: the closest one
    let nearest = state
        .live_enemies()
        .map(|e| e.center())
        .min_by(|a, b| {
            a.distance_squared(player_pos)
                .partial_cmp(&b.distance_squared(player_pos))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    let next_tick = state.time_ticks + 1;
    let fire = nearest.is_some() && next_tick % AUTOPILOT_FIRE_PERIOD == 0;
    let target = nearest.unwrap_or_else(|| state.arena.center());

    let threat = nearest.filter(|e| e.distance(player_pos) < AUTOPILOT_PANIC_DISTANCE);
    let held = match (state.mode, threat) {
        (MovementMode::Absolute, Some(enemy)) => steer(player_pos - enemy),
        // Drift home so we don't get pinned against a wall
        (MovementMode::Absolute, None) => {
            let home = state.arena.center() - player_pos;
            let slack = state.arena.width.min(state.arena.height) / 4.0;
            if home.length() > slack {
                steer(home)
            } else {
                HeldKeys::default()
            }
        }
        // Aim is locked on the enemy: back off while circling it
        (MovementMode::Relative, Some(_)) => HeldKeys {
            backward: true,
            right: true,
            ..Default::default()
        },
        (MovementMode::Relative, None) => HeldKeys::default(),
    };

    TickInput {
        held,
        target: Some(target),
        fire,
        toggle_mode: false,
    }
}

/// Absolute-mode keys that accelerate along `dir`
fn steer(dir: Vec2) -> HeldKeys {
    HeldKeys {
        forward: dir.y < 0.0,
        backward: dir.y > 0.0,
        left: dir.x < 0.0,
        right: dir.x > 0.0,
    }
}
