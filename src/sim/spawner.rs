//! Fixed-rate enemy spawner
//!
//! Enemies appear just outside a random arena edge. The rate never changes
//! over a session.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{Arena, RngState};
use crate::tuning::Tuning;

/// Seeded spawner state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spawner {
    /// Ticks between spawns (0 = disabled)
    pub interval_ticks: u32,
    pub max_enemies: usize,
    pub rng_state: RngState,
}

impl Spawner {
    pub fn new(seed: u64, tuning: &Tuning) -> Self {
        Self {
            interval_ticks: tuning.spawn_interval_ticks,
            max_enemies: tuning.max_enemies,
            rng_state: RngState::new(seed),
        }
    }

    /// Top-left corner for a new enemy, if one is due on `tick`
    pub fn poll(&mut self, tick: u64, alive: usize, arena: &Arena, enemy_size: f32) -> Option<Vec2> {
        if self.interval_ticks == 0 || tick % u64::from(self.interval_ticks) != 0 {
            return None;
        }
        if alive >= self.max_enemies {
            return None;
        }

        let mut rng = self.rng_state.to_rng();
        self.rng_state.advance();

        let along: f32 = rng.random();
        let span_x = (arena.width - enemy_size).max(0.0) * along;
        let span_y = (arena.height - enemy_size).max(0.0) * along;
        let pos = match rng.random_range(0..4u8) {
            0 => Vec2::new(span_x, -enemy_size),
            1 => Vec2::new(arena.width, span_y),
            2 => Vec2::new(span_x, arena.height),
            _ => Vec2::new(-enemy_size, span_y),
        };
        Some(pos)
    }
}
