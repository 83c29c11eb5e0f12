//! Enemies that chase the player

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::tuning::Tuning;
use crate::{angle_to, from_polar};

/// A chasing enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    /// Top-left corner (collision and drawing share this anchor)
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    pub health: i32,
    /// Tombstone: removed when the controller compacts enemies
    pub dead: bool,
}

impl Enemy {
    pub fn new(id: u32, top_left: Vec2, tuning: &Tuning) -> Self {
        Self {
            id,
            pos: top_left,
            size: Vec2::splat(tuning.enemy_size),
            speed: tuning.enemy_speed,
            health: tuning.enemy_health,
            dead: false,
        }
    }

    /// Step toward the player's current position (pure pursuit)
    pub fn advance(&mut self, player_pos: Vec2) {
        let center = self.center();
        if center == player_pos {
            return;
        }
        self.pos += from_polar(self.speed, angle_to(center, player_pos));
    }

    /// Apply one point of damage; tombstones at zero health
    pub fn take_hit(&mut self) {
        self.health -= 1;
        if self.health <= 0 {
            self.dead = true;
        }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_top_left(self.pos, self.size)
    }
}
